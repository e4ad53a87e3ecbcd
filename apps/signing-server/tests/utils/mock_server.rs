use serde_json::{Value, json};
use wiremock::http::Method;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use super::context::REST_PKI_ACCESS_TOKEN;

/// Base64 of `%PDF-1.4 signed document`
pub const SIGNED_PDF_BASE64: &str = "JVBERi0xLjQgc2lnbmVkIGRvY3VtZW50";
pub const NONCE_BASE64: &str = "AAECAwQFBgcICQoLDA0ODw==";

/// Stands in for the REST PKI signing service
pub struct MockServer {
    mock: wiremock::MockServer,
}

impl MockServer {
    pub async fn new() -> Self {
        let mock = wiremock::MockServer::start().await;
        Self { mock }
    }

    pub fn uri(&self) -> String {
        self.mock.uri()
    }

    pub async fn new_page_preset(&self) {
        Mock::given(method(Method::GET))
            .and(path("/Api/PadesVisualPositioningPresets/NewPage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "pageNumber": -1,
                "measurementUnits": "Centimeters",
                "auto": {
                    "container": { "left": 1.0, "top": 1.0, "right": 1.0, "bottom": 1.0 },
                    "signatureRectangleSize": { "width": 7.0, "height": 3.0 },
                    "rowSpacing": 0.0
                }
            })))
            .mount(&self.mock)
            .await;
    }

    pub async fn start_pades_signature(&self, token: &str) {
        self.new_page_preset().await;

        Mock::given(method(Method::POST))
            .and(path("/Api/PadesSignatures"))
            .and(header(
                "Authorization",
                format!("Bearer {REST_PKI_ACCESS_TOKEN}").as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
            .mount(&self.mock)
            .await;
    }

    pub async fn start_pades_signature_failure(&self) {
        self.new_page_preset().await;

        Mock::given(method(Method::POST))
            .and(path("/Api/PadesSignatures"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "code": "InternalError",
                "message": "Something went wrong"
            })))
            .mount(&self.mock)
            .await;
    }

    /// Finalizes once, any further attempt is rejected as already used
    pub async fn finish_pades_signature(&self, token: &str) {
        let finalize_path = format!("/Api/PadesSignatures/{token}/Finalize");

        Mock::given(method(Method::POST))
            .and(path(finalize_path.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "signedPdf": SIGNED_PDF_BASE64,
                "certificate": certificate_json(),
            })))
            .up_to_n_times(1)
            .expect(1)
            .mount(&self.mock)
            .await;

        Mock::given(method(Method::POST))
            .and(path(finalize_path.as_str()))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "code": "TokenAlreadyUsed",
                "message": "The token was already used"
            })))
            .mount(&self.mock)
            .await;
    }

    pub async fn finish_unknown_token(&self, token: &str) {
        Mock::given(method(Method::POST))
            .and(path(format!("/Api/PadesSignatures/{token}/Finalize").as_str()))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "TokenNotFound",
                "message": "Token not found"
            })))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn start_authentication(&self) {
        Mock::given(method(Method::POST))
            .and(path("/Api/Authentications/Nonces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "nonce": NONCE_BASE64 })))
            .mount(&self.mock)
            .await;
    }

    pub async fn complete_authentication(&self) {
        Mock::given(method(Method::POST))
            .and(path("/Api/Authentications/Nonces/Complete"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "certificate": certificate_json(),
                "validationResults": {
                    "passedChecks": [
                        { "type": "CertificateNotExpired", "message": "Certificate is within its validity period" }
                    ]
                }
            })))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn complete_authentication_invalid_signature(&self) {
        Mock::given(method(Method::POST))
            .and(path("/Api/Authentications/Nonces/Complete"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "code": "ValidationError",
                "message": "Validation failed",
                "validationResults": {
                    "errors": [
                        { "type": "SignatureVerification", "message": "The signature is not valid" }
                    ]
                }
            })))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn complete_authentication_nonce_used(&self) {
        Mock::given(method(Method::POST))
            .and(path("/Api/Authentications/Nonces/Complete"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "code": "NonceAlreadyUsed",
                "message": "Nonce was already used"
            })))
            .mount(&self.mock)
            .await;
    }

    pub async fn received_request_count(&self) -> usize {
        self.mock
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

fn certificate_json() -> Value {
    json!({
        "subjectName": { "commonName": "Alan Mathison Turing" },
        "issuerName": { "commonName": "Lacuna CA Test v1" },
        "emailAddress": "alan.turing@example.com",
        "serialNumber": "0a1b2c",
        "validityStart": "2024-01-01T00:00:00Z",
        "validityEnd": "2027-01-01T00:00:00Z",
        "pkiBrazil": { "cpf": "56072386105" },
        "issuer": {
            "subjectName": { "commonName": "Lacuna CA Test v1" },
            "issuerName": { "commonName": "Lacuna Root Test v1" },
            "serialNumber": "01",
            "validityStart": "2020-01-01T00:00:00Z",
            "validityEnd": "2030-01-01T00:00:00Z"
        }
    })
}

use secrecy::SecretString;
use time::macros::datetime;
use url::Url;
use uuid::Uuid;

use crate::config::core_config::{
    AuthenticationConfig, CoreConfig, RestPkiConfig, SignatureConfig, StorageConfig,
};
use crate::model::certificate::CertificateInfo;

pub const POLICY_ID: Uuid = Uuid::from_u128(0x80aac1b7_5ee8_4f59_a4e1_4a8c3a6f2d1b);
pub const SIGNATURE_SECURITY_CONTEXT_ID: Uuid =
    Uuid::from_u128(0x803517ad_3bbc_4169_b085_60053a8f6dbf);
pub const AUTHENTICATION_SECURITY_CONTEXT_ID: Uuid =
    Uuid::from_u128(0x1b3f4e6c_9a1d_4c0e_8f6a_2b7d5e9c0a11);

pub fn dummy_core_config() -> CoreConfig {
    CoreConfig {
        rest_pki: RestPkiConfig {
            endpoint: Url::parse("https://pki.rest/").unwrap(),
            access_token: SecretString::from("access-token"),
        },
        signature: SignatureConfig {
            policy_id: POLICY_ID,
            security_context_id: SIGNATURE_SECURITY_CONTEXT_ID,
        },
        authentication: AuthenticationConfig {
            security_context_id: AUTHENTICATION_SECURITY_CONTEXT_ID,
        },
        storage: StorageConfig {
            temp_folder: None,
            max_upload_size: 1024,
        },
    }
}

pub fn dummy_certificate(subject: &str, issuer: &str) -> CertificateInfo {
    CertificateInfo {
        subject_name: subject.to_string(),
        issuer_name: issuer.to_string(),
        email_address: None,
        serial_number: "0a1b2c".to_string(),
        validity_start: datetime!(2024-01-01 0:00 UTC),
        validity_end: datetime!(2027-01-01 0:00 UTC),
        national_id: None,
        issuer: None,
    }
}

pub fn dummy_pdf() -> Vec<u8> {
    b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n1 0 obj\n<<>>\nendobj\n%%EOF\n".to_vec()
}

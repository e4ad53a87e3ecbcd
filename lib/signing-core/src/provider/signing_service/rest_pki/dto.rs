use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::model::certificate::CertificateInfo;
use crate::model::token::{Nonce, SignatureToken};
use crate::model::validation::ValidationResults;
use crate::model::visual::{
    AutoPositioning, MeasurementUnits, Placement, VisualImage, VisualPositioning,
    VisualRectangle, VisualRepresentation, VisualText,
};
use crate::provider::signing_service::dto::{
    AuthenticationCompleteRequest, PadesSignatureStartRequest,
};
use crate::provider::signing_service::error::SigningServiceError;
use crate::util::base64;

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PadesSignaturePostRequestRestDTO {
    #[serde(with = "base64")]
    pub pdf_to_sign: Vec<u8>,
    pub signature_policy_id: Uuid,
    pub security_context_id: Uuid,
    pub visual_representation: Option<VisualRepresentationRestDTO>,
}

impl From<PadesSignatureStartRequest> for PadesSignaturePostRequestRestDTO {
    fn from(value: PadesSignatureStartRequest) -> Self {
        Self {
            pdf_to_sign: value.pdf_to_sign,
            signature_policy_id: value.signature_policy_id,
            security_context_id: value.security_context_id,
            visual_representation: value.visual_representation.map(Into::into),
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub(super) struct VisualRepresentationRestDTO {
    pub text: VisualText,
    pub image: Option<VisualImageRestDTO>,
    pub position: VisualPositioningRestDTO,
}

impl From<VisualRepresentation> for VisualRepresentationRestDTO {
    fn from(value: VisualRepresentation) -> Self {
        Self {
            text: value.text,
            image: value.image.map(Into::into),
            position: value.position.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub(super) struct VisualImageRestDTO {
    pub resource: ResourceContentRestDTO,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ResourceContentRestDTO {
    #[serde(with = "base64")]
    pub content: Vec<u8>,
    pub mime_type: String,
}

impl From<VisualImage> for VisualImageRestDTO {
    fn from(value: VisualImage) -> Self {
        Self {
            resource: ResourceContentRestDTO {
                content: value.content,
                mime_type: value.mime_type,
            },
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VisualPositioningRestDTO {
    pub page_number: i32,
    #[serde(default)]
    pub measurement_units: MeasurementUnits,
    pub manual: Option<VisualRectangle>,
    pub auto: Option<AutoPositioning>,
}

impl From<VisualPositioning> for VisualPositioningRestDTO {
    fn from(value: VisualPositioning) -> Self {
        let (manual, auto) = match value.placement {
            Placement::Manual(rectangle) => (Some(rectangle), None),
            Placement::Auto(auto) => (None, Some(auto)),
        };
        Self {
            page_number: value.page_number,
            measurement_units: value.measurement_units,
            manual,
            auto,
        }
    }
}

impl TryFrom<VisualPositioningRestDTO> for VisualPositioning {
    type Error = SigningServiceError;

    fn try_from(value: VisualPositioningRestDTO) -> Result<Self, Self::Error> {
        let placement = match (value.manual, value.auto) {
            (Some(rectangle), None) => Placement::Manual(rectangle),
            (None, Some(auto)) => Placement::Auto(auto),
            _ => {
                return Err(SigningServiceError::MappingError(
                    "positioning must define exactly one of manual or auto placement".to_string(),
                ));
            }
        };

        Ok(Self {
            page_number: value.page_number,
            measurement_units: value.measurement_units,
            placement,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct TokenResponseRestDTO {
    pub token: SignatureToken,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PadesSignatureFinalizeResponseRestDTO {
    #[serde(with = "base64")]
    pub signed_pdf: Vec<u8>,
    pub certificate: CertificateRestDTO,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct NonceResponseRestDTO {
    pub nonce: Nonce,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AuthenticationCompleteRequestRestDTO {
    pub nonce: Nonce,
    #[serde(with = "base64")]
    pub certificate: Vec<u8>,
    #[serde(with = "base64")]
    pub signature: Vec<u8>,
    pub security_context_id: Uuid,
}

impl From<AuthenticationCompleteRequest> for AuthenticationCompleteRequestRestDTO {
    fn from(value: AuthenticationCompleteRequest) -> Self {
        Self {
            nonce: value.nonce,
            certificate: value.certificate,
            signature: value.signature,
            security_context_id: value.security_context_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AuthenticationCompleteResponseRestDTO {
    pub certificate: Option<CertificateRestDTO>,
    #[serde(default)]
    pub validation_results: ValidationResults,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CertificateRestDTO {
    pub subject_name: NameRestDTO,
    pub issuer_name: NameRestDTO,
    pub email_address: Option<String>,
    pub serial_number: String,
    #[serde(with = "time::serde::rfc3339")]
    pub validity_start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub validity_end: OffsetDateTime,
    pub pki_brazil: Option<PkiBrazilRestDTO>,
    pub issuer: Option<Box<CertificateRestDTO>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NameRestDTO {
    pub common_name: Option<String>,
    pub organization: Option<String>,
}

impl NameRestDTO {
    fn display_name(self) -> String {
        self.common_name
            .or(self.organization)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PkiBrazilRestDTO {
    pub cpf: Option<String>,
}

impl From<CertificateRestDTO> for CertificateInfo {
    fn from(value: CertificateRestDTO) -> Self {
        Self {
            subject_name: value.subject_name.display_name(),
            issuer_name: value.issuer_name.display_name(),
            email_address: value.email_address,
            serial_number: value.serial_number,
            validity_start: value.validity_start,
            validity_end: value.validity_end,
            national_id: value.pki_brazil.and_then(|pki_brazil| pki_brazil.cpf),
            issuer: value.issuer.map(|issuer| Box::new((*issuer).into())),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ErrorRestDTO {
    pub code: Option<String>,
    pub message: Option<String>,
    pub detail: Option<String>,
    pub validation_results: Option<ValidationResults>,
}

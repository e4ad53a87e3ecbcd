use serde::Serialize;
use serde_with::skip_serializing_none;
use signing_core::model::certificate::CertificateInfo;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Signer certificate as reported by the signing service
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CertificateInfoRestDTO {
    pub subject_name: String,
    pub issuer_name: String,
    pub email_address: Option<String>,
    pub serial_number: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2027-01-01T00:00:00Z")]
    pub validity_start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2027-01-01T00:00:00Z")]
    pub validity_end: OffsetDateTime,
    /// CPF of ICP-Brasil certificate holders
    pub national_id: Option<String>,
    #[schema(no_recursion)]
    pub issuer: Option<Box<CertificateInfoRestDTO>>,
}

impl From<CertificateInfo> for CertificateInfoRestDTO {
    fn from(value: CertificateInfo) -> Self {
        Self {
            subject_name: value.subject_name,
            issuer_name: value.issuer_name,
            email_address: value.email_address,
            serial_number: value.serial_number,
            validity_start: value.validity_start,
            validity_end: value.validity_end,
            national_id: value.national_id,
            issuer: value.issuer.map(|issuer| Box::new((*issuer).into())),
        }
    }
}

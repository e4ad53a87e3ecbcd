use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Certificate metadata reported by the signing service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateInfo {
    pub subject_name: String,
    pub issuer_name: String,
    pub email_address: Option<String>,
    pub serial_number: String,
    #[serde(with = "time::serde::rfc3339")]
    pub validity_start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub validity_end: OffsetDateTime,
    /// CPF of the holder, present on ICP-Brasil certificates
    pub national_id: Option<String>,
    pub issuer: Option<Box<CertificateInfo>>,
}

impl CertificateInfo {
    /// Subject names from the signer up to the root
    pub fn chain(&self) -> Vec<&str> {
        let mut chain = vec![self.subject_name.as_str()];
        let mut current = self.issuer.as_deref();
        while let Some(certificate) = current {
            chain.push(certificate.subject_name.as_str());
            current = certificate.issuer.as_deref();
        }
        chain
    }
}

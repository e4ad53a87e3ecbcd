use crate::model::certificate::CertificateInfo;
use crate::model::token::Nonce;
use crate::model::validation::ValidationResults;

#[derive(Clone, Debug)]
pub struct CompleteAuthenticationRequestDTO {
    /// DER encoded signer certificate
    pub certificate: Vec<u8>,
    pub nonce: Nonce,
    pub signature: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticationOutcomeDTO {
    pub success: bool,
    pub message: String,
    pub certificate: Option<CertificateInfo>,
    pub validation_results: Option<ValidationResults>,
}

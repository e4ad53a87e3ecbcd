use uuid::Uuid;

use crate::model::certificate::CertificateInfo;
use crate::model::token::Nonce;
use crate::model::validation::ValidationResults;
use crate::model::visual::VisualRepresentation;

#[derive(Clone, Debug, PartialEq)]
pub struct PadesSignatureStartRequest {
    pub pdf_to_sign: Vec<u8>,
    pub signature_policy_id: Uuid,
    pub security_context_id: Uuid,
    pub visual_representation: Option<VisualRepresentation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PadesSignatureResult {
    pub signed_pdf: Vec<u8>,
    pub certificate: CertificateInfo,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticationCompleteRequest {
    pub nonce: Nonce,
    pub certificate: Vec<u8>,
    pub signature: Vec<u8>,
    pub security_context_id: Uuid,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticationResult {
    pub certificate: Option<CertificateInfo>,
    pub validation_results: ValidationResults,
}

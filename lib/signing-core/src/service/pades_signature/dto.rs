use crate::model::artifact::ArtifactId;
use crate::model::certificate::CertificateInfo;
use crate::model::visual::{PositioningRequest, VisualImage, VisualText};

#[derive(Clone, Debug)]
pub enum DocumentSource {
    /// Document supplied by the caller, e.g. the bundled sample
    Content(Vec<u8>),
    /// Previously uploaded document
    Artifact(ArtifactId),
}

#[derive(Clone, Debug)]
pub struct VisualRepresentationRequestDTO {
    pub text: VisualText,
    pub image: Option<VisualImage>,
    pub positioning: PositioningRequest,
}

#[derive(Clone, Debug)]
pub struct StartPadesSignatureRequestDTO {
    pub document: DocumentSource,
    pub visual_representation: Option<VisualRepresentationRequestDTO>,
}

#[derive(Clone, Debug)]
pub struct FinishPadesSignatureResponseDTO {
    pub artifact_id: ArtifactId,
    pub signer: CertificateInfo,
}

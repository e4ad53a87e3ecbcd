use signing_core::model::artifact::ArtifactId;
use signing_core::model::token::SignatureToken;
use signing_core::model::visual::{VisualImage, VisualText};
use signing_core::service::error::{ServiceError, ValidationError};
use signing_core::service::pades_signature::dto::{
    DocumentSource, FinishPadesSignatureResponseDTO, StartPadesSignatureRequestDTO,
    VisualRepresentationRequestDTO,
};

use super::dto::{FinishSignatureResponseRestDTO, SignatureTokenResponseRestDTO};
use crate::router::InternalAppState;

const STAMP_MIME_TYPE: &str = "image/png";

/// Builds the signature request for an uploaded document or the sample document
pub(crate) fn start_signature_request(
    state: &InternalAppState,
    userfile: Option<&str>,
) -> Result<StartPadesSignatureRequestDTO, ServiceError> {
    let document = match userfile {
        Some(userfile) => DocumentSource::Artifact(
            userfile
                .parse::<ArtifactId>()
                .map_err(ValidationError::from)?,
        ),
        None => DocumentSource::Content(state.resources.sample_document.clone()),
    };

    let visual = &state.config.visual_representation;

    Ok(StartPadesSignatureRequestDTO {
        document,
        visual_representation: Some(VisualRepresentationRequestDTO {
            text: VisualText {
                text: visual.text.clone(),
                include_signing_time: visual.include_signing_time,
                horizontal_align: visual.horizontal_align,
            },
            image: Some(VisualImage {
                content: state.resources.stamp_image.clone(),
                mime_type: STAMP_MIME_TYPE.to_string(),
            }),
            positioning: visual.positioning.clone(),
        }),
    })
}

/// Empty `userfile` values come from the plain signature link
pub(crate) fn non_empty(userfile: Option<String>) -> Option<String> {
    userfile.filter(|userfile| !userfile.is_empty())
}

impl From<SignatureToken> for SignatureTokenResponseRestDTO {
    fn from(value: SignatureToken) -> Self {
        Self {
            token: value.to_string(),
        }
    }
}

impl From<FinishPadesSignatureResponseDTO> for FinishSignatureResponseRestDTO {
    fn from(value: FinishPadesSignatureResponseDTO) -> Self {
        Self {
            filename: value.artifact_id.to_string(),
            signer: value.signer.into(),
        }
    }
}

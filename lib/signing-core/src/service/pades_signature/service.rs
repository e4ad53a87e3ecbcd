use super::PadesSignatureService;
use super::dto::{
    DocumentSource, FinishPadesSignatureResponseDTO, StartPadesSignatureRequestDTO,
    VisualRepresentationRequestDTO,
};
use crate::model::token::SignatureToken;
use crate::model::visual::VisualRepresentation;
use crate::provider::signing_service::dto::PadesSignatureStartRequest;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

const SIGNED_DOCUMENT_EXTENSION: &str = "pdf";

impl PadesSignatureService {
    /// Registers the document with the signing service.
    ///
    /// The returned token is handed to the certificate component, which
    /// computes the signature and then lets [`Self::finish`] collect the result.
    pub async fn start(
        &self,
        request: StartPadesSignatureRequestDTO,
    ) -> Result<SignatureToken, ServiceError> {
        let pdf_to_sign = match request.document {
            DocumentSource::Content(content) => content,
            DocumentSource::Artifact(id) => self
                .artifact_storage
                .load(&id)
                .await?
                .ok_or(EntityNotFoundError::Artifact(id))?,
        };

        if pdf_to_sign.is_empty() {
            return Err(ValidationError::EmptyDocument.into());
        }

        let visual_representation = match request.visual_representation {
            Some(visual) => Some(self.resolve_visual_representation(visual).await?),
            None => None,
        };

        let token = self
            .signing_service
            .start_pades_signature(PadesSignatureStartRequest {
                pdf_to_sign,
                signature_policy_id: self.config.signature.policy_id,
                security_context_id: self.config.signature.security_context_id,
                visual_representation,
            })
            .await?;

        tracing::info!(?token, "PAdES signature started");
        Ok(token)
    }

    /// Collects the signed document for `token` and stores it as a new artifact
    pub async fn finish(&self, token: &str) -> Result<FinishPadesSignatureResponseDTO, ServiceError> {
        let token: SignatureToken = token.parse().map_err(|error| {
            tracing::warn!(%error, "Rejecting malformed signature token");
            ServiceError::InvalidToken
        })?;

        let result = self.signing_service.finish_pades_signature(&token).await?;

        let artifact_id = self
            .artifact_storage
            .store(result.signed_pdf, SIGNED_DOCUMENT_EXTENSION)
            .await?;

        tracing::info!(
            %artifact_id,
            signer = %result.certificate.subject_name,
            "PAdES signature completed"
        );

        Ok(FinishPadesSignatureResponseDTO {
            artifact_id,
            signer: result.certificate,
        })
    }

    async fn resolve_visual_representation(
        &self,
        visual: VisualRepresentationRequestDTO,
    ) -> Result<VisualRepresentation, ServiceError> {
        let preset = match visual.positioning.preset() {
            Some(preset) => Some(self.signing_service.get_positioning_preset(preset).await?),
            None => None,
        };

        let position = visual
            .positioning
            .resolve(preset)
            .map_err(ValidationError::from)?;

        Ok(VisualRepresentation {
            text: visual.text,
            image: visual.image,
            position,
        })
    }
}

use super::DocumentService;
use super::dto::DocumentDTO;
use crate::model::artifact::ArtifactId;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

const PDF_EXTENSION: &str = "pdf";
const PDF_MAGIC: &[u8] = b"%PDF-";

impl DocumentService {
    pub async fn upload(&self, content: Vec<u8>) -> Result<ArtifactId, ServiceError> {
        if content.is_empty() {
            return Err(ValidationError::EmptyDocument.into());
        }

        let max = self.config.storage.max_upload_size;
        if content.len() > max {
            return Err(ValidationError::DocumentTooLarge {
                size: content.len(),
                max,
            }
            .into());
        }

        if !content.starts_with(PDF_MAGIC) {
            return Err(ValidationError::UnsupportedDocumentType.into());
        }

        let id = self.artifact_storage.store(content, PDF_EXTENSION).await?;
        tracing::info!(artifact_id = %id, "Document uploaded");
        Ok(id)
    }

    pub async fn download(&self, id: &str) -> Result<DocumentDTO, ServiceError> {
        let id: ArtifactId = id.parse().map_err(ValidationError::InvalidArtifactId)?;

        let content = self
            .artifact_storage
            .load(&id)
            .await?
            .ok_or_else(|| EntityNotFoundError::Artifact(id.clone()))?;

        Ok(DocumentDTO {
            content_type: content_type(id.extension()),
            id,
            content,
        })
    }
}

fn content_type(extension: &str) -> &'static str {
    match extension {
        "pdf" => "application/pdf",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}

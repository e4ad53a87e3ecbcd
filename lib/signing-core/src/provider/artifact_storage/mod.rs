use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::TempDir;
use thiserror::Error;

use crate::model::artifact::{ArtifactId, ArtifactIdError};


#[derive(Debug, Error)]
pub enum ArtifactStorageError {
    #[error("Artifact storage IO error: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Invalid artifact id: `{0}`")]
    InvalidId(#[from] ArtifactIdError),
}

/// Flat storage of uploaded documents and signed artifacts
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ArtifactStorage: Send + Sync {
    /// Stores `content` under a freshly generated `<uuid>.<extension>` name
    async fn store(
        &self,
        content: Vec<u8>,
        extension: &str,
    ) -> Result<ArtifactId, ArtifactStorageError>;

    async fn load(&self, id: &ArtifactId) -> Result<Option<Vec<u8>>, ArtifactStorageError>;
}

/// Keeps artifacts as files in a single folder. Without a configured folder a
/// temporary directory is created and removed together with the storage.
pub struct TempFolderStorage {
    root: PathBuf,
    _temp_dir: Option<TempDir>,
}

impl TempFolderStorage {
    pub fn new(folder: Option<&Path>) -> Result<Self, ArtifactStorageError> {
        match folder {
            Some(folder) => {
                std::fs::create_dir_all(folder)?;
                Ok(Self {
                    root: folder.to_path_buf(),
                    _temp_dir: None,
                })
            }
            None => {
                let temp_dir = tempfile::Builder::new()
                    .prefix("signing-artifacts-")
                    .tempdir()?;
                Ok(Self {
                    root: temp_dir.path().to_path_buf(),
                    _temp_dir: Some(temp_dir),
                })
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, id: &ArtifactId) -> PathBuf {
        self.root.join(id.file_name())
    }
}

#[async_trait]
impl ArtifactStorage for TempFolderStorage {
    async fn store(
        &self,
        content: Vec<u8>,
        extension: &str,
    ) -> Result<ArtifactId, ArtifactStorageError> {
        let id = ArtifactId::generate(extension)?;
        let path = self.path_of(&id);
        let partial = self.root.join(format!("{}.part", id.file_name()));

        if let Err(error) = tokio::fs::write(&partial, &content).await {
            discard_partial(&partial).await;
            return Err(error.into());
        }
        move_into_place(&partial, &path).await?;

        tracing::debug!(artifact = %id, size = content.len(), "Artifact stored");
        Ok(id)
    }

    async fn load(&self, id: &ArtifactId) -> Result<Option<Vec<u8>>, ArtifactStorageError> {
        match tokio::fs::read(self.path_of(id)).await {
            Ok(content) => Ok(Some(content)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }
}

async fn move_into_place(partial: &Path, path: &Path) -> Result<(), ArtifactStorageError> {
    if let Err(error) = tokio::fs::rename(partial, path).await {
        discard_partial(partial).await;
        return Err(error.into());
    }

    Ok(())
}

async fn discard_partial(partial: &Path) {
    match tokio::fs::remove_file(partial).await {
        Err(error) if error.kind() != ErrorKind::NotFound => {
            tracing::warn!(path = %partial.display(), %error, "Failed to remove partial artifact");
        }
        _ => {}
    }
}

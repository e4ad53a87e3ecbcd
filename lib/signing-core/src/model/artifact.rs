use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

const MAX_EXTENSION_LENGTH: usize = 8;

/// Name of a file kept in the artifact storage: `<uuid>.<extension>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId {
    id: Uuid,
    extension: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactIdError {
    #[error("Missing file extension")]
    MissingExtension,
    #[error("Invalid file extension `{0}`")]
    InvalidExtension(String),
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

impl ArtifactId {
    pub fn generate(extension: &str) -> Result<Self, ArtifactIdError> {
        Ok(Self {
            id: Uuid::new_v4(),
            extension: validate_extension(extension)?,
        })
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn file_name(&self) -> String {
        self.to_string()
    }
}

fn validate_extension(extension: &str) -> Result<String, ArtifactIdError> {
    if extension.is_empty() {
        return Err(ArtifactIdError::MissingExtension);
    }

    if extension.len() > MAX_EXTENSION_LENGTH
        || !extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ArtifactIdError::InvalidExtension(extension.to_owned()));
    }

    Ok(extension.to_ascii_lowercase())
}

impl FromStr for ArtifactId {
    type Err = ArtifactIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (id, extension) = value
            .split_once('.')
            .ok_or(ArtifactIdError::MissingExtension)?;

        let id = Uuid::try_parse(id).map_err(|e| ArtifactIdError::InvalidId(e.to_string()))?;

        Ok(Self {
            id,
            extension: validate_extension(extension)?,
        })
    }
}

impl Display for ArtifactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.id, self.extension)
    }
}

impl Serialize for ArtifactId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ArtifactId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

use thiserror::Error;

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parsing error: `{0}`")]
    Parsing(#[from] ConfigParsingError),
    #[error("Config validation error: `{0}`")]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("Unsupported REST PKI endpoint scheme `{0}`")]
    UnsupportedEndpointScheme(String),
    #[error("REST PKI access token is empty")]
    MissingAccessToken,
    #[error("Maximum upload size must be greater than zero")]
    InvalidMaxUploadSize,
}

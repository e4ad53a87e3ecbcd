use std::path::{Path, PathBuf};

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

use super::{ConfigError, ConfigParsingError, ConfigValidationError};

const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct NoCustomConfig;

/// Layout of the merged configuration document
#[derive(Debug, Deserialize)]
struct AppConfigSerdeDTO<Custom> {
    core: CoreConfig,
    #[serde(default)]
    app: Custom,
}

#[derive(Debug, Clone)]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    pub app: Custom,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    pub rest_pki: RestPkiConfig,
    pub signature: SignatureConfig,
    pub authentication: AuthenticationConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestPkiConfig {
    pub endpoint: Url,
    pub access_token: SecretString,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureConfig {
    pub policy_id: Uuid,
    pub security_context_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationConfig {
    pub security_context_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    /// Folder for uploads and signed documents, a temporary one is used when unset
    pub temp_folder: Option<PathBuf>,
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            temp_folder: None,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }
}

fn default_max_upload_size() -> usize {
    DEFAULT_MAX_UPLOAD_SIZE
}

impl CoreConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let scheme = self.rest_pki.endpoint.scheme();
        if scheme != "https" && scheme != "http" {
            return Err(ConfigValidationError::UnsupportedEndpointScheme(
                scheme.to_owned(),
            ));
        }

        if self.rest_pki.access_token.expose_secret().trim().is_empty() {
            return Err(ConfigValidationError::MissingAccessToken);
        }

        if self.storage.max_upload_size == 0 {
            return Err(ConfigValidationError::InvalidMaxUploadSize);
        }

        Ok(())
    }
}

/// One layer of the configuration, later layers override earlier ones
pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(content: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(content.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(content: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(content.as_ref()))
    }

    /// Picks the format from the file extension
    pub fn file(path: &Path) -> Result<InputFormat, ConfigParsingError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default();

        match extension {
            #[cfg(feature = "config_yaml")]
            "yml" | "yaml" => Ok(InputFormat::Yaml(Yaml::file(path))),
            #[cfg(feature = "config_json")]
            "json" => Ok(InputFormat::Json(Json::file(path))),
            _ => Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported config file `{}`",
                path.display()
            ))),
        }
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigError> {
        let inputs = files
            .iter()
            .map(|path| InputFormat::file(path.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigError> {
        AppConfig::parse(configs.into_iter().map(InputFormat::yaml_str))
    }

    /// Merges the inputs in order, environment variables prefixed `SIGNING_`
    /// (nested keys separated by `__`) take precedence
    pub fn parse(inputs: impl IntoIterator<Item = InputFormat>) -> Result<Self, ConfigError> {
        let figment = inputs
            .into_iter()
            .fold(Figment::new(), |figment, input| match input {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            });

        #[cfg(feature = "config_env")]
        let figment = figment.merge(Env::prefixed("SIGNING_").split("__").lowercase(false));

        let AppConfigSerdeDTO { core, app } = figment
            .extract::<AppConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        core.validate()?;

        Ok(Self { core, app })
    }
}

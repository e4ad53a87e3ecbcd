use std::fmt::{Debug, Display};
use std::str::FromStr;

use ct_codecs::{Base64, Decoder, Encoder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use zeroize::Zeroizing;

/// Single-use identifier of one signature attempt, issued by the signing service
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SignatureToken(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenFormatError {
    #[error("Token is empty")]
    Empty,
    #[error("Token contains a character outside of the URL-safe alphabet")]
    InvalidCharacter,
    #[error("Nonce is not valid Base64")]
    InvalidNonceEncoding,
}

impl SignatureToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SignatureToken {
    type Err = TokenFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(TokenFormatError::Empty);
        }

        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TokenFormatError::InvalidCharacter);
        }

        Ok(Self(value.to_owned()))
    }
}

impl Display for SignatureToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// tokens end up in logs, only the prefix is printed
impl Debug for SignatureToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.chars().take(6).collect();
        write!(f, "SignatureToken({prefix}...)")
    }
}

impl Serialize for SignatureToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SignatureToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Single-use authentication challenge, zeroed on drop
#[derive(Clone, PartialEq, Eq)]
pub struct Nonce(Zeroizing<Vec<u8>>);

impl Nonce {
    pub fn new(value: Vec<u8>) -> Self {
        Self(Zeroizing::new(value))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        // encoding into a sufficiently large buffer cannot fail
        Base64::encode_to_string(self.0.as_slice()).unwrap_or_default()
    }

    pub fn from_base64(value: &str) -> Result<Self, TokenFormatError> {
        let decoded = Base64::decode_to_vec(value, None)
            .map_err(|_| TokenFormatError::InvalidNonceEncoding)?;
        if decoded.is_empty() {
            return Err(TokenFormatError::Empty);
        }
        Ok(Self::new(decoded))
    }
}

impl Debug for Nonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nonce(<{} bytes>)", self.0.len())
    }
}

impl Serialize for Nonce {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Nonce {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Zeroizing::new(String::deserialize(deserializer)?);
        Nonce::from_base64(&value).map_err(serde::de::Error::custom)
    }
}

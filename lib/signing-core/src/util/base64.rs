//! Base64 helpers for byte arrays exchanged as JSON strings

use ct_codecs::{Base64, Decoder, Encoder};
use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid Base64 value")]
pub struct Base64Error;

pub fn encode(value: impl AsRef<[u8]>) -> String {
    Base64::encode_to_string(value).unwrap_or_default()
}

pub fn decode(value: impl AsRef<[u8]>) -> Result<Vec<u8>, Base64Error> {
    Base64::decode_to_vec(value, None).map_err(|_| Base64Error)
}

pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode(value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let value = String::deserialize(deserializer)?;
    decode(value).map_err(serde::de::Error::custom)
}

pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|value| super::decode(value).map_err(serde::de::Error::custom))
            .transpose()
    }
}

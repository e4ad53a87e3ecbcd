use one_dto_mapper::convert_inner;
use signing_core::model::token::Nonce;
use signing_core::service::authentication::dto::{
    AuthenticationOutcomeDTO, CompleteAuthenticationRequestDTO,
};
use signing_core::util::base64;

use super::dto::{
    AuthenticationOutcomeRestDTO, CompleteAuthenticationRequestRestDTO, NonceResponseRestDTO,
};
use crate::dto::error::{Cause, ErrorCode, ErrorResponseRestDTO};

impl From<Nonce> for NonceResponseRestDTO {
    fn from(value: Nonce) -> Self {
        Self {
            nonce: value.to_base64(),
        }
    }
}

impl TryFrom<CompleteAuthenticationRequestRestDTO> for CompleteAuthenticationRequestDTO {
    type Error = ErrorResponseRestDTO;

    fn try_from(value: CompleteAuthenticationRequestRestDTO) -> Result<Self, Self::Error> {
        Ok(Self {
            certificate: decode_field("certificate", &value.certificate)?,
            nonce: Nonce::from_base64(&value.nonce)
                .map_err(|error| invalid_field("nonce", &error))?,
            signature: decode_field("signature", &value.signature)?,
        })
    }
}

fn decode_field(name: &str, value: &str) -> Result<Vec<u8>, ErrorResponseRestDTO> {
    base64::decode(value).map_err(|error| invalid_field(name, &error))
}

fn invalid_field(name: &str, error: &impl std::error::Error) -> ErrorResponseRestDTO {
    ErrorResponseRestDTO {
        code: ErrorCode::BR_0084,
        message: "General input validation error".to_string(),
        cause: Some(Cause {
            message: format!("Invalid `{name}`: {error}"),
        }),
    }
}

impl From<AuthenticationOutcomeDTO> for AuthenticationOutcomeRestDTO {
    fn from(value: AuthenticationOutcomeDTO) -> Self {
        Self {
            success: value.success,
            message: value.message,
            certificate: convert_inner(value.certificate),
            validation_results: value
                .validation_results
                .map(|validation_results| validation_results.to_string()),
        }
    }
}

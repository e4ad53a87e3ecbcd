use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use one_dto_mapper::From;
use serde::Serialize;
use strum::Display;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, From, ToSchema, Display)]
#[schema(example = "BR_XXXX")]
#[from("signing_core::service::error::ErrorCode")]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
    BR_0008,
    BR_0009,
    BR_0010,
    BR_0011,
    BR_0012,
    BR_0013,
    BR_0084,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

impl ErrorResponseRestDTO {
    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.cause = None;
        }

        self
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Cause {
    pub message: String,
}

impl Cause {
    pub fn with_message_from_error(error: &impl std::error::Error) -> Cause {
        Cause {
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl ErrorResponseRestDTO {
    /// Request could not be extracted, the rejection text becomes the cause
    fn input_validation(rejection_text: String) -> Self {
        Self {
            code: ErrorCode::BR_0084,
            message: "General input validation error".to_string(),
            cause: Some(Cause {
                message: rejection_text,
            }),
        }
    }
}

macro_rules! impl_from_rejections {
    ($($rejection:ty),+ $(,)?) => {
        $(
            impl From<$rejection> for ErrorResponseRestDTO {
                fn from(rejection: $rejection) -> Self {
                    Self::input_validation(rejection.body_text())
                }
            }
        )+
    };
}

impl_from_rejections!(
    FormRejection,
    JsonRejection,
    MultipartRejection,
    PathRejection,
    QueryRejection,
);

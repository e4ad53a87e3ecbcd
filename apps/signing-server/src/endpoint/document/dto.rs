use utoipa::ToSchema;

/// Multipart form of the upload page, documented only
#[derive(ToSchema)]
#[allow(dead_code)]
pub(crate) struct UploadDocumentRequestRestDTO {
    /// PDF document to sign
    #[schema(value_type = String, format = Binary)]
    pub userfile: Vec<u8>,
}

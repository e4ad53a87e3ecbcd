use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::CertificateInfoRestDTO;

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct StartSignatureQueryParams {
    /// Identifier of a previously uploaded document, the sample document is signed when omitted
    pub userfile: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct SignatureTokenResponseRestDTO {
    /// Single-use token handed to the certificate component
    pub token: String,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub(crate) struct FinishSignatureRequestRestDTO {
    pub token: String,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct FinishSignatureResponseRestDTO {
    /// Identifier of the signed document, downloadable from `/download/{filename}`
    pub filename: String,
    pub signer: CertificateInfoRestDTO,
}

//! Server rendered pages of the sample application.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use indoc::formatdoc;
use signing_core::model::artifact::ArtifactId;
use signing_core::model::certificate::CertificateInfo;
use signing_core::model::token::SignatureToken;
use signing_core::service::error::ServiceError;

use crate::dto::response::ErrorResponse;
use crate::router::AppState;


pub(crate) enum PageResponse {
    Page(Html<String>),
    Error(ErrorResponse),
}

impl PageResponse {
    #[track_caller]
    pub(crate) fn from_result<T>(
        result: Result<T, ServiceError>,
        state: &State<AppState>,
        action_description: &str,
        render: impl FnOnce(T) -> Html<String>,
    ) -> Self {
        match result {
            Ok(value) => Self::Page(render(value)),
            Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                error,
                state,
                action_description,
            )),
        }
    }
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Page(page) => page.into_response(),
            Self::Error(error) => {
                let (status, error) = error.into_parts();
                let cause = error.cause.map(|cause| cause.message);
                (
                    status,
                    error_page(&error.code.to_string(), &error.message, cause.as_deref()),
                )
                    .into_response()
            }
        }
    }
}

pub(crate) fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(formatdoc! {r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="utf-8">
            <title>{title}</title>
        </head>
        <body>
            <nav><a href="/">Home</a></nav>
            <main>
        {body}
            </main>
        </body>
        </html>
        "#,
        title = escape(title),
    })
}

pub(crate) fn index_page() -> Html<String> {
    layout(
        "PAdES signature sample",
        &formatdoc! {r#"
            <h1>PAdES signature sample</h1>
            <ul>
                <li><a href="/pades-signature">Sign the sample document</a></li>
                <li><a href="/upload">Sign a PDF of your own</a></li>
            </ul>
        "#},
    )
}

pub(crate) fn upload_page() -> Html<String> {
    layout(
        "Upload a document",
        &formatdoc! {r#"
            <h1>Upload a document</h1>
            <form method="POST" action="/upload" enctype="multipart/form-data">
                <input type="file" name="userfile" accept="application/pdf">
                <button type="submit">Upload</button>
            </form>
        "#},
    )
}

/// Page handing the token to the certificate component. Submitting the form
/// finishes the signature.
pub(crate) fn signature_page(token: &SignatureToken, userfile: Option<&str>) -> Html<String> {
    let document = match userfile {
        Some(userfile) => format!("uploaded file <code>{}</code>", escape(userfile)),
        None => "sample document".to_string(),
    };

    layout(
        "PAdES signature",
        &formatdoc! {r#"
            <h1>PAdES signature</h1>
            <p>You are signing the {document}.</p>
            <form id="signForm" method="POST" action="/pades-signature">
                <input type="hidden" id="tokenField" name="token" value="{token}">
                <label for="certificateSelect">Choose a certificate</label>
                <select id="certificateSelect"></select>
                <button type="button" id="signButton">Sign File</button>
                <button type="button" id="refreshButton">Refresh Certificates</button>
            </form>
        "#,
            token = escape(token.as_str()),
        },
    )
}

pub(crate) fn signature_info_page(filename: &ArtifactId, signer: &CertificateInfo) -> Html<String> {
    let mut details = vec![format!(
        "<li>Subject: {}</li>",
        escape(&signer.subject_name)
    )];
    if let Some(email_address) = &signer.email_address {
        details.push(format!("<li>Email: {}</li>", escape(email_address)));
    }
    if let Some(national_id) = &signer.national_id {
        details.push(format!("<li>CPF: {}</li>", escape(national_id)));
    }
    details.push(format!(
        "<li>Serial number: {}</li>",
        escape(&signer.serial_number)
    ));
    details.push(format!(
        "<li>Valid: {} to {}</li>",
        signer.validity_start.date(),
        signer.validity_end.date()
    ));
    details.push(format!(
        "<li>Certificate chain: {}</li>",
        signer
            .chain()
            .into_iter()
            .map(escape)
            .collect::<Vec<_>>()
            .join(" &rarr; ")
    ));

    layout(
        "PAdES signature completed",
        &formatdoc! {r#"
            <h1>PAdES signature completed</h1>
            <p>File signed successfully.</p>
            <h2>Signer information</h2>
            <ul>
            {details}
            </ul>
            <p><a href="/download/{filename}">Download the signed file</a></p>
        "#,
            details = details.join("\n"),
            filename = escape(&filename.to_string()),
        },
    )
}

fn error_page(code: &str, message: &str, cause: Option<&str>) -> Html<String> {
    let cause = cause
        .map(|cause| format!("<pre>{}</pre>", escape(cause)))
        .unwrap_or_default();

    layout(
        "An error has occurred",
        &formatdoc! {r#"
            <h1>An error has occurred</h1>
            <p><strong>{code}</strong>: {message}</p>
            {cause}
        "#,
            code = escape(code),
            message = escape(message),
        },
    )
}

use uuid::Uuid;

use crate::utils::context::TestContext;

const PDF: &[u8] = b"%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\n%%EOF\n";
const TOKEN: &str = "uploaded-document-token";

#[tokio::test]
async fn test_upload_redirects_to_signature_page() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.documents.upload(PDF.to_vec()).await;

    // THEN
    assert_eq!(resp.status(), 303);
    let location = resp.header("location").unwrap();
    let userfile = location
        .strip_prefix("/pades-signature?userfile=")
        .unwrap()
        .to_owned();
    assert!(userfile.ends_with(".pdf"));

    let resp = context.api.documents.download(&userfile).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.header("content-disposition").unwrap(),
        format!("attachment; filename=\"{userfile}\"")
    );
    assert_eq!(resp.bytes().await, PDF);
}

#[tokio::test]
async fn test_sign_uploaded_document() {
    // GIVEN
    let context = TestContext::new(None).await;
    context.rest_pki.start_pades_signature(TOKEN).await;
    let resp = context.api.documents.upload(PDF.to_vec()).await;
    let location = resp.header("location").unwrap();
    let userfile = location.strip_prefix("/pades-signature?userfile=").unwrap();

    // WHEN
    let resp = context.api.pades_signatures.start(Some(userfile)).await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["token"], TOKEN);
}

#[tokio::test]
async fn test_upload_rejects_non_pdf() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .documents
        .upload(b"GIF89a not a document".to_vec())
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert!(resp.text().await.contains("BR_0011"));
    assert_eq!(std::fs::read_dir(context.temp_folder.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_upload_rejects_empty_file() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.documents.upload(vec![]).await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert!(resp.text().await.contains("BR_0007"));
}

#[tokio::test]
async fn test_upload_rejects_oversized_file() {
    // GIVEN
    let config = indoc::indoc! {"
        core:
          storage:
            maxUploadSize: 16
    "}
    .to_string();
    let context = TestContext::new(Some(config)).await;

    // WHEN
    let resp = context.api.documents.upload(PDF.to_vec()).await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert!(resp.text().await.contains("BR_0008"));
}

#[tokio::test]
async fn test_upload_rejects_file_over_body_limit() {
    // GIVEN
    let config = indoc::indoc! {"
        core:
          storage:
            maxUploadSize: 16
    "}
    .to_string();
    let context = TestContext::new(Some(config)).await;
    let mut content = PDF.to_vec();
    content.resize(200 * 1024, b' ');

    // WHEN
    let resp = context.api.documents.upload(content).await;

    // THEN
    assert_eq!(resp.status(), 400);
    let body = resp.text().await;
    assert!(body.contains("BR_0008"));
    assert!(!body.contains("BR_0000"));
    assert_eq!(std::fs::read_dir(context.temp_folder.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_upload_without_file_field() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.documents.upload_without_file().await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert!(resp.text().await.contains("BR_0013"));
}

#[tokio::test]
async fn test_download_not_found() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .documents
        .download(&format!("{}.pdf", Uuid::new_v4()))
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0001");
}

#[tokio::test]
async fn test_download_rejects_path_traversal() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .documents
        .download("..%2F..%2Fconfig%2Fconfig.yml")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0010");
}

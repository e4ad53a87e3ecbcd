use uuid::Uuid;

use crate::utils::context::TestContext;

const TOKEN: &str = "e3b0c442_98fc-1c14";

#[tokio::test]
async fn test_start_and_finish_signature() {
    // GIVEN
    let context = TestContext::new(None).await;
    context.rest_pki.start_pades_signature(TOKEN).await;
    context.rest_pki.finish_pades_signature(TOKEN).await;

    // WHEN
    let resp = context.api.pades_signatures.start(None).await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert!(resp.header("cache-control").unwrap().contains("no-store"));
    let token = resp.json_value().await;
    assert_eq!(token["token"], TOKEN);

    // WHEN
    let resp = context.api.pades_signatures.finish(TOKEN).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let filename = resp["filename"].as_str().unwrap().to_owned();
    assert!(filename.ends_with(".pdf"));
    assert_eq!(resp["signer"]["subjectName"], "Alan Mathison Turing");
    assert_eq!(resp["signer"]["nationalId"], "56072386105");
    assert_eq!(resp["signer"]["validityStart"], "2024-01-01T00:00:00Z");
    assert_eq!(resp["signer"]["issuer"]["subjectName"], "Lacuna CA Test v1");

    let resp = context.api.documents.download(&filename).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("content-type").unwrap(), "application/pdf");
    assert_eq!(resp.bytes().await, b"%PDF-1.4 signed document");
}

#[tokio::test]
async fn test_finish_signature_token_is_single_use() {
    // GIVEN
    let context = TestContext::new(None).await;
    context.rest_pki.finish_pades_signature(TOKEN).await;
    let resp = context.api.pades_signatures.finish(TOKEN).await;
    assert_eq!(resp.status(), 200);

    // WHEN
    let resp = context.api.pades_signatures.finish(TOKEN).await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0002");
}

#[tokio::test]
async fn test_finish_signature_unknown_token() {
    // GIVEN
    let context = TestContext::new(None).await;
    context.rest_pki.finish_unknown_token("never-issued").await;

    // WHEN
    let resp = context.api.pades_signatures.finish("never-issued").await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0002");
}

#[tokio::test]
async fn test_finish_signature_malformed_token_not_forwarded() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.pades_signatures.finish("../../Api/Admin").await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0002");
    assert_eq!(context.rest_pki.received_request_count().await, 0);
}

#[tokio::test]
async fn test_finish_signature_missing_token() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .pades_signatures
        .finish_raw(serde_json::json!({}))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0084");
}

#[tokio::test]
async fn test_start_signature_signing_service_failure() {
    // GIVEN
    let context = TestContext::new(None).await;
    context.rest_pki.start_pades_signature_failure().await;

    // WHEN
    let resp = context.api.pades_signatures.start(None).await;

    // THEN
    assert_eq!(resp.status(), 502);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0004");
    assert!(resp["cause"]["message"].is_string());
}

#[tokio::test]
async fn test_start_signature_hides_cause_when_configured() {
    // GIVEN
    let config = indoc::indoc! {"
        app:
          hideErrorResponseCause: true
    "}
    .to_string();
    let context = TestContext::new(Some(config)).await;
    context.rest_pki.start_pades_signature_failure().await;

    // WHEN
    let resp = context.api.pades_signatures.start(None).await;

    // THEN
    assert_eq!(resp.status(), 502);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0004");
    assert!(resp.get("cause").is_none());
}

#[tokio::test]
async fn test_start_signature_unknown_userfile() {
    // GIVEN
    let context = TestContext::new(None).await;
    let userfile = format!("{}.pdf", Uuid::new_v4());

    // WHEN
    let resp = context.api.pades_signatures.start(Some(&userfile)).await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0001");
    assert_eq!(context.rest_pki.received_request_count().await, 0);
}

#[tokio::test]
async fn test_start_signature_rejects_path_traversal() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .pades_signatures
        .start(Some("..%2F..%2Fconfig%2Fconfig.yml"))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0010");
}

#[tokio::test]
async fn test_signature_page_flow() {
    // GIVEN
    let context = TestContext::new(None).await;
    context.rest_pki.start_pades_signature(TOKEN).await;
    context.rest_pki.finish_pades_signature(TOKEN).await;

    // WHEN
    let resp = context.api.pades_signatures.signature_page().await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("pragma").unwrap(), "no-cache");
    assert_eq!(resp.header("expires").unwrap(), "0");
    let page = resp.text().await;
    assert!(page.contains(&format!(r#"name="token" value="{TOKEN}""#)));

    // WHEN
    let resp = context.api.pades_signatures.submit_signature_page(TOKEN).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let page = resp.text().await;
    assert!(page.contains("Alan Mathison Turing"));
    assert!(page.contains("<li>CPF: 56072386105</li>"));
    assert!(page.contains(r#"href="/download/"#));

    // WHEN
    let resp = context.api.pades_signatures.submit_signature_page(TOKEN).await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert!(resp.text().await.contains("BR_0002"));
}

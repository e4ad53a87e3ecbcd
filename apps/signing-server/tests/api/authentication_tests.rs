use crate::utils::context::TestContext;
use crate::utils::mock_server::NONCE_BASE64;

const CERTIFICATE: &str = "Y2VydGlmaWNhdGU=";
const SIGNATURE: &str = "c2lnbmF0dXJl";

#[tokio::test]
async fn test_start_authentication() {
    // GIVEN
    let context = TestContext::new(None).await;
    context.rest_pki.start_authentication().await;

    // WHEN
    let resp = context.api.authentications.start().await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert!(resp.header("cache-control").unwrap().contains("no-cache"));
    assert_eq!(resp.json_value().await["nonce"], NONCE_BASE64);
}

#[tokio::test]
async fn test_complete_authentication_success() {
    // GIVEN
    let context = TestContext::new(None).await;
    context.rest_pki.complete_authentication().await;

    // WHEN
    let resp = context
        .api
        .authentications
        .complete(CERTIFICATE, NONCE_BASE64, SIGNATURE)
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["success"], true);
    assert!(
        resp["message"]
            .as_str()
            .unwrap()
            .contains("Alan Mathison Turing")
    );
    assert_eq!(resp["certificate"]["emailAddress"], "alan.turing@example.com");
    assert!(resp.get("validationResults").is_none());
}

#[tokio::test]
async fn test_complete_authentication_invalid_signature() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .rest_pki
        .complete_authentication_invalid_signature()
        .await;

    // WHEN
    let resp = context
        .api
        .authentications
        .complete(CERTIFICATE, NONCE_BASE64, SIGNATURE)
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["success"], false);
    assert!(resp.get("certificate").is_none());
    assert_eq!(
        resp["message"],
        "Authentication failed: The signature is not valid"
    );
    let report = resp["validationResults"].as_str().unwrap();
    assert!(!report.is_empty());
    assert!(report.contains("Validation results: 1 errors"));
    assert!(report.contains("- The signature is not valid"));
}

#[tokio::test]
async fn test_complete_authentication_nonce_already_used() {
    // GIVEN
    let context = TestContext::new(None).await;
    context.rest_pki.complete_authentication_nonce_used().await;

    // WHEN
    let resp = context
        .api
        .authentications
        .complete(CERTIFICATE, NONCE_BASE64, SIGNATURE)
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0002");
}

#[tokio::test]
async fn test_complete_authentication_fresh_nonce_after_failure() {
    // GIVEN
    let context = TestContext::new(None).await;
    context.rest_pki.start_authentication().await;
    context
        .rest_pki
        .complete_authentication_invalid_signature()
        .await;

    let resp = context
        .api
        .authentications
        .complete(CERTIFICATE, NONCE_BASE64, SIGNATURE)
        .await;
    assert_eq!(resp.json_value().await["success"], false);

    // WHEN
    let resp = context.api.authentications.start().await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["nonce"], NONCE_BASE64);
}

#[tokio::test]
async fn test_complete_authentication_invalid_encoding() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .authentications
        .complete("not base64!", NONCE_BASE64, SIGNATURE)
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0084");
    assert!(
        resp["cause"]["message"]
            .as_str()
            .unwrap()
            .contains("certificate")
    );
    assert_eq!(context.rest_pki.received_request_count().await, 0);
}

#[tokio::test]
async fn test_complete_authentication_empty_signature() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .authentications
        .complete(CERTIFICATE, NONCE_BASE64, "")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0013");
}

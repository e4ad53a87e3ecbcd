use crate::utils::context::TestContext;

#[tokio::test]
async fn test_index_page() {
    let context = TestContext::new(None).await;

    let resp = context.api.other.index().await;
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.contains(r#"href="/upload""#));
}

#[tokio::test]
async fn test_build_info() {
    let context = TestContext::new(None).await;

    let resp = context.api.other.build_info().await;
    assert_eq!(resp.status(), 200);
    assert!(resp.json_value().await["version"].is_string());
}

#[tokio::test]
async fn test_health() {
    let context = TestContext::new(None).await;

    let resp = context.api.other.health().await;
    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_metrics() {
    let context = TestContext::new(None).await;

    let resp = context.api.other.metrics().await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_openapi_json() {
    let context = TestContext::new(None).await;

    let resp = context.api.other.openapi_json().await;
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert!(resp["paths"]["/api/pades-signature/v1"].is_object());
    assert!(resp["paths"]["/api/authentication/v1"].is_object());
}

use axum::http::StatusCode;
use axum_test::TestServer;
use design_button::button::ButtonVariant;
use design_button::config::{AppConfig, GalleryConfig, ServerConfig};
use design_button::server::{build_state, router};
use serde_json::Value;
use std::sync::Arc;

fn test_server() -> TestServer {
    let config = AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        gallery: GalleryConfig {
            title: "Button".to_string(),
            stylesheet: "/static/app.css".to_string(),
            htmx_src: "/static/vendor/htmx.min.js".to_string(),
            static_dir: "static".to_string(),
        },
    };

    TestServer::new(router(build_state(Arc::new(config)))).expect("Failed to start test server")
}

#[tokio::test]
async fn test_gallery_lists_every_variant() {
    let server = test_server();

    let response = server.get("/").await;
    response.assert_status_ok();

    let page = response.text();
    assert!(page.starts_with("<!DOCTYPE html>"));
    for variant in ButtonVariant::ALL {
        assert!(page.contains(&format!(r#"data-variant="{variant}""#)));
    }
}

#[tokio::test]
async fn test_resolve_defaults() {
    let server = test_server();

    let response = server.get("/api/resolve").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let class = body["class"].as_str().unwrap();
    assert!(class.contains("bg-brand-600"));
    assert!(class.contains("rounded-lg"));
    assert_eq!(body["interactive"], true);
    assert_eq!(body["aria"]["disabled"], false);
    assert_eq!(body["aria"]["busy"], false);
    assert_eq!(body["aria"]["label"], Value::Null);
}

#[tokio::test]
async fn test_resolve_link_loading() {
    let server = test_server();

    let response = server
        .get("/api/resolve")
        .add_query_param("variant", "link")
        .add_query_param("size", "sm")
        .add_query_param("destructive", "true")
        .add_query_param("loading", "true")
        .add_query_param("class", "ml-auto")
        .add_query_param("aria_label", "Delete row")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let class = body["class"].as_str().unwrap();
    assert!(class.contains("text-error-700"));
    assert!(class.contains("h-5"));
    assert!(!class.contains("rounded"));
    assert!(class.ends_with("ml-auto"));
    assert_eq!(body["interactive"], false);
    assert_eq!(body["aria"]["disabled"], true);
    assert_eq!(body["aria"]["busy"], true);
    assert_eq!(body["aria"]["label"], "Delete row");
}

#[tokio::test]
async fn test_unknown_variant_is_bad_request() {
    let server = test_server();

    let response = server
        .get("/api/resolve")
        .add_query_param("variant", "danger")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "unknown button variant: \"danger\"");
}

#[tokio::test]
async fn test_render_loading_replaces_right_icon() {
    let server = test_server();

    let response = server
        .get("/api/render")
        .add_query_param("variant", "secondary")
        .add_query_param("loading", "true")
        .add_query_param("right_icon", "arrow-right")
        .add_query_param("label", "Next")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<button"));
    assert!(html.contains(r#"aria-busy="true""#));
    assert!(html.contains(r#"aria-disabled="true""#));
    assert!(html.contains(" disabled>"));
    assert!(html.contains("animate-spin"));
    assert!(!html.contains("<polyline points=\"12 5 19 12 12 19\"/>"));
}

#[tokio::test]
async fn test_render_escapes_label_and_ignores_empty_fields() {
    let server = test_server();

    let response = server
        .get("/api/render")
        .add_query_param("variant", "")
        .add_query_param("left_icon", "")
        .add_query_param("label", "<b>Hi</b>")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("&lt;b&gt;Hi&lt;/b&gt;"));
    assert!(!html.contains("<svg"));
}

#[tokio::test]
async fn test_render_unknown_icon_is_bad_request() {
    let server = test_server();

    let response = server
        .get("/api/render")
        .add_query_param("right_icon", "star")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_flag_is_json_bad_request() {
    let server = test_server();

    for path in ["/api/resolve", "/api/render"] {
        let response = server
            .get(path)
            .add_query_param("disabled", "on")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Failed to deserialize query string"), "{error}");
    }
}

#[tokio::test]
async fn test_catalog() {
    let server = test_server();

    let body: Value = server.get("/api/catalog").await.json();
    assert_eq!(body["variants"].as_array().unwrap().len(), 6);
    assert_eq!(body["variants"][5], "linkSecondary");
    assert_eq!(body["sizes"], serde_json::json!(["sm", "md"]));
    assert!(body["icons"].as_array().unwrap().contains(&Value::from("arrow-right")));
}

#[tokio::test]
async fn test_healthz() {
    let server = test_server();

    let response = server.get("/healthz").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

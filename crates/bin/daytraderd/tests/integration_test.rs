//! End-to-end smoke tests for the daytraderd stack.
//!
//! Each test builds the real router over a bundle written to a temporary
//! directory and exercises it via `tower::ServiceExt::oneshot`. No TCP port
//! is bound.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use daytrader_adapter_http_axum::{AssetConfig, router};
use http_body_util::BodyExt;
use tower::ServiceExt;

const INDEX: &str = r#"<!DOCTYPE html><html><head><link data-trunk rel="rust"/></head><body></body></html>"#;

/// Lay out a bundle shaped like `trunk build` output.
fn bundle(name: &str) -> AssetConfig {
    let dir: PathBuf = std::env::temp_dir().join(format!(
        "daytraderd-it-{}-{name}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be writable");
    std::fs::write(dir.join("index.html"), INDEX).unwrap();
    std::fs::write(dir.join("daytrader-dashboard_bg.wasm"), [0x00, 0x61, 0x73, 0x6d]).unwrap();
    std::fs::write(dir.join("styles.css"), "body { margin: 0; }").unwrap();
    AssetConfig {
        dir,
        index: "index.html".to_string(),
    }
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = get(router::build(&bundle("health")), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_login_page_entry_document() {
    let resp = get(router::build(&bundle("login")), "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, INDEX);
}

#[tokio::test]
async fn should_serve_actions_page_entry_document() {
    let resp = get(router::build(&bundle("actions")), "/actions").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, INDEX);
}

// ---------------------------------------------------------------------------
// Static assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_wasm_with_wasm_content_type() {
    let resp = get(router::build(&bundle("wasm")), "/daytrader-dashboard_bg.wasm").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/wasm"
    );
}

#[tokio::test]
async fn should_serve_stylesheet_verbatim() {
    let resp = get(router::build(&bundle("css")), "/styles.css").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "body { margin: 0; }");
}

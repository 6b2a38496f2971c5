//! Integration tests for the show and fetch subcommands.

use content_fetch::{DisplayPlan, PayloadKind};
use content_fetch_cli::cli::{fetch_cmd, show_cmd};
use content_fetch_cli::config::resolve_base_url_from;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ─────────────────────── helpers ───────────────────────

/// A few bytes with a JPEG signature; not decodable, which is fine for a page.
const FAKE_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];

async fn serve(server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn serve_images(server: &MockServer) {
    for route in ["/images/tea.jpg", "/images/coffee.jpg"] {
        serve(
            server,
            route,
            ResponseTemplate::new(200).set_body_raw(FAKE_JPEG.to_vec(), "image/jpeg"),
        )
        .await;
    }
}

fn base_for(server: &MockServer) -> url::Url {
    resolve_base_url_from(Some(server.uri().as_str()), None).unwrap()
}

// ═══════════════════════════════════════════════════════
// SHOW
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn test_show_writes_page() {
    let server = MockServer::start().await;
    serve_images(&server).await;
    serve(
        &server,
        "/test.txt",
        ResponseTemplate::new(200).set_body_string("Hello World"),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("page.html");
    let rendered = show_cmd::run(
        base_for(&server),
        &DisplayPlan::default(),
        "Demo",
        Some(out.as_path()),
    )
    .await
    .unwrap();

    assert!(rendered);
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>Demo</title>"));
    assert_eq!(html.matches("<img src=\"data:image/jpeg;base64,").count(), 2);
    assert!(html.contains("<p>Hello World</p>"));
}

#[tokio::test]
async fn test_show_failure_writes_nothing() {
    let server = MockServer::start().await;
    serve_images(&server).await;
    serve(&server, "/test.txt", ResponseTemplate::new(500)).await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("page.html");
    let rendered = show_cmd::run(
        base_for(&server),
        &DisplayPlan::default(),
        show_cmd::DEFAULT_TITLE,
        Some(out.as_path()),
    )
    .await
    .unwrap();

    assert!(!rendered);
    assert!(!out.exists());
}

#[tokio::test]
async fn test_show_custom_locators() {
    let server = MockServer::start().await;
    for route in ["/a.png", "/b.png"] {
        serve(
            &server,
            route,
            ResponseTemplate::new(200).set_body_raw(vec![1, 2, 3], "image/png"),
        )
        .await;
    }
    serve(
        &server,
        "/notes.txt",
        ResponseTemplate::new(200).set_body_string("notes"),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("page.html");
    let plan = DisplayPlan::new("a.png", "b.png", "notes.txt");
    let rendered = show_cmd::run(base_for(&server), &plan, "Custom", Some(out.as_path()))
        .await
        .unwrap();

    assert!(rendered);
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("data:application/octet-stream;base64,AQID"));
    assert!(html.contains("<p>notes</p>"));
}

// ═══════════════════════════════════════════════════════
// FETCH
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn test_fetch_writes_raw_body() {
    let server = MockServer::start().await;
    serve_images(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tea.jpg");
    let written = fetch_cmd::run(
        base_for(&server),
        "./images/tea.jpg",
        PayloadKind::Binary,
        Some(out.as_path()),
    )
    .await
    .unwrap();

    assert_eq!(written, FAKE_JPEG.len());
    assert_eq!(std::fs::read(&out).unwrap(), FAKE_JPEG);
}

#[tokio::test]
async fn test_fetch_http_error_is_reported() {
    let server = MockServer::start().await;
    serve(&server, "/test.txt", ResponseTemplate::new(404)).await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("test.txt");
    let err = fetch_cmd::run(base_for(&server), "test.txt", PayloadKind::Text, Some(out.as_path()))
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("HTTP error! status: 404"));
    assert!(!out.exists());
}

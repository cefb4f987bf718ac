use super::*;

use std::io::Write;

use axum::{http::StatusCode, routing::get, Json, Router};
use chrono::TimeZone;
use tokio::net::TcpListener;

fn complete_document_json() -> String {
    serde_json::json!({
        "metadata": {
            "generated": "2024-03-01T12:00:00.000Z",
            "scenarios": ["before", "after"],
            "description": "exported aggregates"
        },
        "t1": { "treemap": { "rows": 7 } },
        "t2": {}, "t3": {}, "t4": {}, "t5": {}
    })
    .to_string()
}

async fn spawn_document_server() -> anyhow::Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route(
            "/aggregates.json",
            get(|| async {
                let document: Value =
                    serde_json::from_str(&complete_document_json()).unwrap_or_default();
                Json(document)
            }),
        )
        .route("/missing.json", get(|| async { StatusCode::NOT_FOUND }));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

#[test]
fn mock_document_has_every_namespace_and_sections() {
    let generated = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
    let document = mock_document(generated);

    assert!(document.is_complete());
    assert_eq!(document.metadata.generated, "2024-05-06T07:08:09.000Z");
    assert_eq!(document.metadata.scenarios, vec![Scenario::Before, Scenario::After]);
    assert_eq!(document.metadata.description.as_deref(), Some(MOCK_DESCRIPTION));
    let t3 = document.namespace(Namespace::T3).expect("t3");
    assert!(t3.get("compliance").is_some());
    assert!(t3.get("heatmap").is_some());
}

#[test]
fn parse_rejects_incomplete_document() {
    let raw = r#"{ "metadata": { "generated": "x" }, "t1": {}, "t2": {} }"#;
    let err = parse_document(raw).expect_err("incomplete");
    assert!(matches!(
        err,
        DataSourceError::Incomplete(ref missing)
            if missing == &vec![Namespace::T3, Namespace::T4, Namespace::T5]
    ));
}

#[tokio::test]
async fn missing_source_yields_mock() {
    let loaded = load_document(None).await;
    assert!(loaded.is_mock());
    assert!(loaded.document.is_complete());
}

#[tokio::test]
async fn file_source_loads_complete_document() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(complete_document_json().as_bytes())
        .expect("write document");
    let source = FileSource::new(file.path());

    let loaded = load_document(Some(&source as &dyn DocumentSource)).await;

    assert!(!loaded.is_mock());
    assert_eq!(loaded.document.metadata.generated, "2024-03-01T12:00:00.000Z");
    assert_eq!(
        loaded.document.namespace(Namespace::T1).expect("t1")["treemap"]["rows"],
        7
    );
}

#[tokio::test]
async fn unreadable_file_falls_back_to_mock() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = FileSource::new(dir.path().join("absent.json"));

    let loaded = load_document(Some(&source as &dyn DocumentSource)).await;

    assert!(matches!(loaded.origin, DocumentOrigin::Mock { ref reason } if reason.contains("absent.json")));
}

#[tokio::test]
async fn http_source_loads_document() {
    let base = spawn_document_server().await.expect("spawn server");
    let url = Url::parse(&format!("{base}/aggregates.json")).expect("url");
    let source = HttpSource::new(url, Duration::from_secs(5)).expect("source");

    let loaded = load_document(Some(&source as &dyn DocumentSource)).await;

    assert_eq!(loaded.origin, DocumentOrigin::Source(source.describe()));
    assert_eq!(
        loaded.document.metadata.description.as_deref(),
        Some("exported aggregates")
    );
}

#[tokio::test]
async fn non_success_status_falls_back_to_mock() {
    let base = spawn_document_server().await.expect("spawn server");
    let url = Url::parse(&format!("{base}/missing.json")).expect("url");
    let source = HttpSource::new(url, Duration::from_secs(5)).expect("source");

    let loaded = load_document(Some(&source as &dyn DocumentSource)).await;

    assert!(matches!(loaded.origin, DocumentOrigin::Mock { ref reason } if reason.contains("404")));
}

#[test]
fn resolve_source_prefers_url_and_validates_scheme() {
    let timeout = Duration::from_secs(1);
    let source = resolve_source(
        Some("http://localhost:8080/aggregates.json"),
        Some(Path::new("ignored.json")),
        timeout,
    )
    .expect("resolve")
    .expect("source");
    assert_eq!(source.describe(), "http://localhost:8080/aggregates.json");

    let source = resolve_source(Some("  "), Some(Path::new("data/aggregates.json")), timeout)
        .expect("resolve")
        .expect("file source");
    assert_eq!(source.describe(), "data/aggregates.json");

    assert!(resolve_source(Some("ftp://example.com/a.json"), None, timeout).is_err());
    assert!(resolve_source(Some("not a url"), None, timeout).is_err());
    assert!(resolve_source(None, None, timeout).expect("resolve").is_none());
}

//! End-to-end export tests against mock HTTP services
//!
//! These tests verify that:
//! - Every configured port ends with exactly one outcome, in order
//! - A failing service does not affect the others
//! - Intermediate documents never remain in the output directory
//! - Re-running an export produces byte-identical pages

use docsmith::adapters::swagger::HttpDescriptionSource;
use docsmith::core::convert::{ConvertOptions, HtmlConverter, SafeMode};
use docsmith::core::enumerate::enumerate_targets;
use docsmith::core::export::{BatchRunner, ExportPipeline};
use docsmith::domain::{ExportConfig, ExportErrorKind, ExportTarget, PortId};
use std::io::Write;
use std::net::TcpListener;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const INVENTORY_API: &str = r##"{
    "swagger": "2.0",
    "info": {
        "title": "Inventory API",
        "version": "2.1.0",
        "description": "Stock levels <b>per warehouse</b>"
    },
    "host": "inventory.internal",
    "basePath": "/api",
    "tags": [
        {"name": "items", "description": "Stock items"},
        {"name": "warehouses"}
    ],
    "paths": {
        "/items/{id}": {
            "get": {
                "tags": ["items"],
                "summary": "Get item",
                "operationId": "getItem",
                "parameters": [
                    {"name": "id", "in": "path", "required": true, "type": "integer", "format": "int64"}
                ],
                "responses": {
                    "200": {"description": "Found", "schema": {"$ref": "#/definitions/Item"}},
                    "404": {"description": "Unknown item"}
                }
            }
        },
        "/warehouses": {
            "get": {
                "tags": ["warehouses"],
                "summary": "List warehouses",
                "responses": {
                    "200": {"description": "OK", "schema": {"type": "array", "items": {"type": "string"}}}
                }
            }
        }
    },
    "definitions": {
        "Item": {
            "type": "object",
            "required": ["sku"],
            "properties": {
                "sku": {"type": "string"},
                "quantity": {"type": "integer", "format": "int32"}
            }
        }
    }
}"##;

fn http_source() -> HttpDescriptionSource {
    HttpDescriptionSource::new(Duration::from_secs(5), Duration::from_secs(2)).unwrap()
}

fn pipeline() -> Arc<ExportPipeline> {
    Arc::new(ExportPipeline::new(
        Arc::new(http_source()),
        HtmlConverter::new(ConvertOptions::default()).unwrap(),
        ExportConfig::default(),
    ))
}

/// A port on the loopback interface with nothing listening
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn target(port: u16, dir: &Path) -> ExportTarget {
    ExportTarget::new("127.0.0.1", PortId::from(port), dir)
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

async fn serve_docs(server: &mut mockito::ServerGuard, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/v2/api-docs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_export_single_service_to_html() {
    let mut server = mockito::Server::new_async().await;
    let mock = serve_docs(&mut server, INVENTORY_API).await;
    let port = server.socket_address().port();
    let dir = TempDir::new().unwrap();

    let output = pipeline().run(&target(port, dir.path())).await.unwrap();

    mock.assert_async().await;
    assert_eq!(output, dir.path().join(format!("{port}.html")));
    assert_eq!(file_names(dir.path()), vec![format!("{port}.html")]);

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Inventory API</title>"));
    assert!(html.contains("class=\"article toc2 toc-left\""));
    assert!(html.contains("<div id=\"toctitle\">Table of Contents</div>"));
    // Tag sections and their operations appear in the table of contents
    assert!(html.contains("<a href=\"#items\">items</a>"));
    assert!(html.contains("<a href=\"#get-item\">Get item</a>"));
    assert!(html.contains("<a href=\"#list-warehouses\">List warehouses</a>"));
    // Markup from the remote description is shown as text
    assert!(html.contains("&lt;b&gt;per warehouse&lt;/b&gt;"));
    assert!(!html.contains("<b>per warehouse</b>"));
}

#[tokio::test]
async fn test_script_links_in_descriptions_are_not_rendered() {
    let description = r#"{
        "swagger": "2.0",
        "info": {"title": "Billing", "description": "[click](javascript:alert(document.cookie))"},
        "paths": {
            "/invoices": {
                "get": {
                    "summary": "List invoices",
                    "description": "![x](javascript:alert(1)) see [guide](https://example.com/guide)",
                    "responses": {"200": {"description": "OK"}}
                }
            }
        }
    }"#;
    let mut server = mockito::Server::new_async().await;
    serve_docs(&mut server, description).await;
    let port = server.socket_address().port();
    let dir = TempDir::new().unwrap();

    let output = pipeline().run(&target(port, dir.path())).await.unwrap();
    let html = std::fs::read_to_string(output).unwrap();

    assert!(!html.contains("href=\"javascript:"));
    assert!(!html.contains("src=\"javascript:"));
    assert!(html.contains("<a href=\"https://example.com/guide\">guide</a>"));
}

#[tokio::test]
async fn test_output_directory_is_created() {
    let mut server = mockito::Server::new_async().await;
    serve_docs(&mut server, INVENTORY_API).await;
    let port = server.socket_address().port();
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("site").join("api");

    let output = pipeline().run(&target(port, &nested)).await.unwrap();

    assert!(output.is_file());
    assert_eq!(file_names(&nested), vec![format!("{port}.html")]);
}

#[tokio::test]
async fn test_http_error_is_fetch_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/api-docs")
        .with_status(404)
        .create_async()
        .await;
    let port = server.socket_address().port();
    let dir = TempDir::new().unwrap();

    let err = pipeline().run(&target(port, dir.path())).await.unwrap_err();

    assert_eq!(err.kind(), ExportErrorKind::Fetch);
    assert!(err.to_string().contains("404"));
    assert!(file_names(dir.path()).is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_slow_service_is_fetch_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/api-docs")
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_secs(2));
            w.write_all(INVENTORY_API.as_bytes())
        })
        .create_async()
        .await;
    let port = server.socket_address().port();
    let dir = TempDir::new().unwrap();

    let source =
        HttpDescriptionSource::new(Duration::from_secs(1), Duration::from_secs(1)).unwrap();
    let pipeline = ExportPipeline::new(
        Arc::new(source),
        HtmlConverter::new(ConvertOptions::default()).unwrap(),
        ExportConfig::default(),
    );

    let err = pipeline.run(&target(port, dir.path())).await.unwrap_err();

    assert_eq!(err.kind(), ExportErrorKind::Fetch);
    assert!(err.to_string().contains("timeout"), "{err}");
    assert!(file_names(dir.path()).is_empty());
}

#[tokio::test]
async fn test_invalid_description_is_render_failure() {
    let mut server = mockito::Server::new_async().await;
    serve_docs(&mut server, "<html>not json</html>").await;
    let port = server.socket_address().port();
    let dir = TempDir::new().unwrap();

    let err = pipeline().run(&target(port, dir.path())).await.unwrap_err();

    assert_eq!(err.kind(), ExportErrorKind::Render);
    assert!(file_names(dir.path()).is_empty());
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let mut server = mockito::Server::new_async().await;
    serve_docs(&mut server, INVENTORY_API).await;
    let port = server.socket_address().port();
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline();

    let first = std::fs::read(pipeline.run(&target(port, dir.path())).await.unwrap()).unwrap();
    let second = std::fs::read(pipeline.run(&target(port, dir.path())).await.unwrap()).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_batch_isolates_unreachable_service() {
    let mut server = mockito::Server::new_async().await;
    serve_docs(&mut server, INVENTORY_API).await;
    let good = server.socket_address().port();
    let bad = closed_port();
    let dir = TempDir::new().unwrap();

    let ports = format!("{bad};{good}");
    let targets = enumerate_targets("127.0.0.1", &ports, dir.path()).unwrap();
    let summary = BatchRunner::new(pipeline(), 1).run(targets).await;

    assert_eq!(summary.total(), 2);
    assert_eq!(summary.successful(), 1);
    assert_eq!(summary.failed(), 1);

    let first = &summary.outcomes[0];
    assert_eq!(first.port().as_str(), bad.to_string());
    assert!(!first.success);
    assert_eq!(first.error.as_ref().unwrap().kind, ExportErrorKind::Fetch);

    let second = &summary.outcomes[1];
    assert_eq!(second.port().as_str(), good.to_string());
    assert!(second.success);

    assert_eq!(file_names(dir.path()), vec![format!("{good}.html")]);
}

#[tokio::test]
async fn test_batch_with_malformed_port_continues() {
    let mut server = mockito::Server::new_async().await;
    serve_docs(&mut server, INVENTORY_API).await;
    let good = server.socket_address().port();
    let dir = TempDir::new().unwrap();

    let ports = format!("99999;{good};http");
    let targets = enumerate_targets("127.0.0.1", &ports, dir.path()).unwrap();
    let summary = BatchRunner::new(pipeline(), 2).run(targets).await;

    let kinds: Vec<Option<ExportErrorKind>> = summary
        .outcomes
        .iter()
        .map(|o| o.error.as_ref().map(|e| e.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(ExportErrorKind::MalformedTarget),
            None,
            Some(ExportErrorKind::MalformedTarget),
        ]
    );
    assert_eq!(file_names(dir.path()), vec![format!("{good}.html")]);
}

#[tokio::test]
async fn test_batch_outcomes_follow_configuration_order() {
    let mut first = mockito::Server::new_async().await;
    let mut second = mockito::Server::new_async().await;
    let mut third = mockito::Server::new_async().await;
    serve_docs(&mut first, INVENTORY_API).await;
    serve_docs(&mut second, INVENTORY_API).await;
    serve_docs(&mut third, INVENTORY_API).await;

    let ports: Vec<u16> = [&first, &second, &third]
        .iter()
        .map(|s| s.socket_address().port())
        .collect();
    let dir = TempDir::new().unwrap();
    let list = ports
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(";");

    let targets = enumerate_targets("127.0.0.1", &list, dir.path()).unwrap();
    let summary = BatchRunner::new(pipeline(), 3).run(targets).await;

    let reported: Vec<String> = summary
        .outcomes
        .iter()
        .map(|o| o.port().to_string())
        .collect();
    let expected: Vec<String> = ports.iter().map(|p| p.to_string()).collect();
    assert_eq!(reported, expected);
    assert!(summary.is_successful());
    assert!(file_names(dir.path()).iter().all(|n| n.ends_with(".html")));
}

#[tokio::test]
async fn test_empty_port_list_exports_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("docs");

    let targets = enumerate_targets("127.0.0.1", "", &output).unwrap();
    let summary = BatchRunner::new(pipeline(), 1).run(targets).await;

    assert_eq!(summary.total(), 0);
    assert!(summary.is_successful());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_report_lists_every_outcome() {
    let mut server = mockito::Server::new_async().await;
    serve_docs(&mut server, INVENTORY_API).await;
    let good = server.socket_address().port();
    let bad = closed_port();
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("report.json");

    let targets = enumerate_targets(
        "127.0.0.1",
        &format!("{good};{bad}"),
        dir.path().join("docs"),
    )
    .unwrap();
    let summary = BatchRunner::new(pipeline(), 1).run(targets).await;
    summary.write_report(&report).await.unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    let outcomes = json["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["success"], true);
    assert_eq!(outcomes[1]["success"], false);
    assert_eq!(outcomes[1]["error"]["kind"], "fetch");
}

#[test]
fn test_safe_mode_rejects_custom_stylesheet() {
    let dir = TempDir::new().unwrap();
    let css = dir.path().join("theme.css");
    std::fs::write(&css, "body { color: black; }").unwrap();

    let result = HtmlConverter::new(ConvertOptions {
        safe_mode: SafeMode::Safe,
        stylesheet: Some(css),
        ..Default::default()
    });

    assert!(result.is_err());
}

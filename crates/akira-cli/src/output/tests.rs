// Tests for the output formatting of documents, navigation and samples

use super::*;
use akira_core::parse;
use std::cell::RefCell;
use std::rc::Rc;

const SPEC: &str = r#"{
    "openapi": "3.0.0",
    "info": {"title": "Planets API", "version": "1.0.0"},
    "servers": [{"url": "https://planets.example.com/v2"}],
    "paths": {
        "/planets": {
            "get": {"summary": "List planets"},
            "post": {"summary": "Create a planet"}
        },
        "/planets/{planetId}": {
            "get": {}
        }
    },
    "components": {
        "schemas": {"Planet": {"type": "object"}},
        "securitySchemes": {"ApiKeyAuth": {"type": "apiKey", "in": "header", "name": "X-API-Key"}}
    }
}"#;

/// Writer whose contents stay readable after being boxed
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, quiet, 0, Box::new(buffer.clone()));
    (writer, buffer)
}

#[test]
fn test_summary_human() {
    let document = parse(SPEC).unwrap();
    let summary = DocumentSummary::of(&document);

    assert_eq!(summary.endpoints, 3);
    assert_eq!(summary.paths, 2);
    assert_eq!(summary.security_schemes, vec!["ApiKeyAuth".to_string()]);

    let formatted = OutputFormat::Human.format_summary(&summary).unwrap();
    assert!(formatted.contains("Planets API (version 1.0.0)"));
    assert!(formatted.contains("Servers: https://planets.example.com/v2"));
    assert!(formatted.contains("Endpoints: 3 across 2 path(s)"));
    assert!(formatted.contains("Security schemes: ApiKeyAuth"));
}

#[test]
fn test_summary_json() {
    let document = parse(SPEC).unwrap();
    let summary = DocumentSummary::of(&document);

    let formatted = OutputFormat::Json.format_summary(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();
    assert_eq!(value["valid"], true);
    assert_eq!(value["endpoints"], 3);
    assert_eq!(value["openapi"], "3.0.0");
}

#[test]
fn test_navigation_table() {
    let document = parse(SPEC).unwrap();
    let index = NavigationIndex::build(&document);

    let formatted = OutputFormat::Human.format_navigation(&index, false).unwrap();
    let lines: Vec<&str> = formatted.lines().collect();

    assert!(lines[0].starts_with("ID"));
    assert!(lines[2].contains("get-/planets"));
    assert!(lines[2].contains("GET /planets"));
    assert!(lines[2].contains("List planets"));
    assert!(lines[3].contains("post-/planets"));
    assert!(lines[4].contains("get-/planets/{planetId}"));
}

#[test]
fn test_navigation_grouped() {
    let document = parse(SPEC).unwrap();
    let index = NavigationIndex::build(&document);

    let formatted = OutputFormat::Human.format_navigation(&index, true).unwrap();
    let lines: Vec<&str> = formatted.lines().collect();
    assert_eq!(lines[0], "/planets");
    assert!(lines[1].trim_start().starts_with("GET"));
    assert!(lines[2].trim_start().starts_with("POST"));
    assert_eq!(lines[3], "/planets/{planetId}");

    let json = OutputFormat::Json.format_navigation(&index, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["path"], "/planets");
    assert_eq!(value[0]["entries"].as_array().unwrap().len(), 2);
}

#[test]
fn test_navigation_empty() {
    let document = parse(r#"{"info": {"title": "Empty", "version": "1"}, "paths": {}}"#).unwrap();
    let index = NavigationIndex::build(&document);

    let formatted = OutputFormat::Human.format_navigation(&index, false).unwrap();
    assert_eq!(formatted, "No endpoints declared\n");

    let json = OutputFormat::Json.format_navigation(&index, false).unwrap();
    assert_eq!(json, "[]");
}

#[test]
fn test_samples_human() {
    let samples = vec![
        SampleView {
            endpoint: "get-/planets".to_string(),
            dialect: Dialect::Curl,
            code: "curl -X GET 'https://planets.example.com/v2/planets'".to_string(),
        },
        SampleView {
            endpoint: "get-/planets".to_string(),
            dialect: Dialect::Python,
            code: "import requests".to_string(),
        },
    ];

    let formatted = OutputFormat::Human.format_samples(&samples).unwrap();
    assert!(formatted.contains("── get-/planets · cURL ──"));
    assert!(formatted.contains("── get-/planets · Python ──"));
    assert!(formatted.contains("import requests"));

    let yaml = OutputFormat::Yaml.format_samples(&samples).unwrap();
    assert!(yaml.contains("dialect: curl"));
}

#[test]
fn test_apply_report_human() {
    let report = ApplyReport {
        committed: true,
        revision: 2,
        endpoints: 4,
        added: vec!["delete-/planets/{planetId}".to_string()],
        removed: vec![],
        error: None,
    };
    let formatted = OutputFormat::Human.format_apply_report(&report).unwrap();
    assert!(formatted.contains("Edit committed (revision 2, 4 endpoint(s))"));
    assert!(formatted.contains("  + delete-/planets/{planetId}"));

    let rejected = ApplyReport {
        committed: false,
        revision: 1,
        endpoints: 3,
        added: vec![],
        removed: vec![],
        error: Some("invalid syntax".to_string()),
    };
    let formatted = OutputFormat::Human.format_apply_report(&rejected).unwrap();
    assert!(formatted.contains("Edit rejected; keeping revision 1"));
    assert!(formatted.contains("invalid syntax"));
}

#[test]
fn test_writer_messages_respect_quiet() {
    let (mut output, buffer) = writer(OutputFormat::Human, true);
    output.info("hidden").unwrap();
    output.success("hidden").unwrap();
    output.warning("shown").unwrap();
    assert_eq!(buffer.contents(), "WARNING: shown\n");
}

#[test]
fn test_writer_messages_suppressed_for_machine_formats() {
    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.info("hidden").unwrap();
    output.section("hidden").unwrap();
    output.data(&serde_json::json!({"ok": true})).unwrap();
    assert_eq!(buffer.contents(), "{\"ok\":true}\n");
}

#[test]
fn test_writer_plain_prefixes() {
    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.info("loading").unwrap();
    output.error("failed").unwrap();
    output.section("Samples").unwrap();
    assert_eq!(
        buffer.contents(),
        "INFO: loading\nERROR: failed\n\n=== Samples ===\n"
    );
}

#[test]
fn test_table_alignment() {
    let rendered = render_table(
        &["ID", "NAME"],
        &[
            vec!["get-/a".to_string(), "x".to_string()],
            vec!["g".to_string(), "longer".to_string()],
        ],
    );
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "ID     │ NAME");
    assert_eq!(lines[1], "───────┼───────");
    assert_eq!(lines[2], "get-/a │ x");
    assert_eq!(lines[3], "g      │ longer");
}

#[test]
fn test_no_spinner_with_custom_writer() {
    let (output, _) = writer(OutputFormat::Human, false);
    assert!(output.spinner("working").is_none());
}

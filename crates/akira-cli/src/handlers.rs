//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod apply;
mod completions;
mod config;
mod nav;
mod raw;
mod render;
mod sample;
mod utils;
mod validate;

pub use apply::handle_apply;
pub use completions::handle_completions;
pub use config::handle_config;
pub use nav::handle_nav;
pub use raw::handle_raw;
pub use render::handle_render;
pub use sample::handle_sample;
pub use validate::handle_validate;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ApplyArgs, OutputFormat, RenderArgs, SampleArgs, SpecInput};
    use crate::config::Config;
    use crate::error::Error;
    use crate::output::OutputWriter;
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::path::Path;
    use std::rc::Rc;
    use tempfile::TempDir;

    const SPEC: &str = r#"{
        "info": {"title": "Planets API", "version": "1.0.0"},
        "servers": [{"url": "https://planets.example.com/v2"}],
        "paths": {
            "/planets": {
                "get": {"summary": "List planets"}
            }
        }
    }"#;

    const EDITED: &str = r#"
info:
  title: Planets API
  version: 1.1.0
servers:
  - url: https://planets.example.com/v2
paths:
  /moons:
    get:
      summary: List moons
"#;

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

    fn writer(format: OutputFormat) -> (OutputWriter, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let writer = OutputWriter::with_writer(format, false, false, 0, Box::new(buffer.clone()));
        (writer, buffer)
    }

    fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn input(spec: String) -> SpecInput {
        SpecInput {
            spec,
            input_format: None,
        }
    }

    #[tokio::test]
    async fn test_render_to_file() {
        let dir = TempDir::new().unwrap();
        let spec = write_file(&dir, "api.json", SPEC);
        let target = dir.path().join("out").join("api.md");

        let (mut output, buffer) = writer(OutputFormat::Human);
        let args = RenderArgs {
            input: input(spec),
            samples: true,
            raw: false,
            save_to: Some(target.clone()),
        };
        handle_render(args, &Config::default(), &mut output).await.unwrap();

        let markdown = std::fs::read_to_string(&target).unwrap();
        assert!(markdown.starts_with("# Planets API Documentation"));
        assert!(markdown.contains("```bash"));
        assert!(buffer.contents().contains("Documentation written to"));
    }

    #[tokio::test]
    async fn test_sample_unknown_endpoint() {
        let dir = TempDir::new().unwrap();
        let spec = write_file(&dir, "api.json", SPEC);

        let (mut output, _) = writer(OutputFormat::Human);
        let args = SampleArgs {
            input: input(spec),
            endpoint: Some("get-/moons".to_string()),
            dialect: vec!["curl".to_string()],
        };
        let err = handle_sample(args, &Config::default(), &mut output).await.unwrap_err();
        assert!(matches!(err, Error::EndpointNotFound { ref id } if id == "get-/moons"));
    }

    #[tokio::test]
    async fn test_sample_single_endpoint() {
        let dir = TempDir::new().unwrap();
        let spec = write_file(&dir, "api.json", SPEC);

        let (mut output, buffer) = writer(OutputFormat::Human);
        let args = SampleArgs {
            input: input(spec),
            endpoint: Some("get-/planets".to_string()),
            dialect: vec!["curl".to_string()],
        };
        handle_sample(args, &Config::default(), &mut output).await.unwrap();
        assert!(buffer
            .contents()
            .contains("curl -X GET 'https://planets.example.com/v2/planets'"));
    }

    #[tokio::test]
    async fn test_apply_commits_and_saves() {
        let dir = TempDir::new().unwrap();
        let spec = write_file(&dir, "api.json", SPEC);
        let edited = write_file(&dir, "edited.yaml", EDITED);
        let target = dir.path().join("canonical.json");

        let (mut output, buffer) = writer(OutputFormat::Human);
        let args = ApplyArgs {
            input: input(spec),
            edited,
            save_to: Some(target.clone()),
        };
        handle_apply(args, &Config::default(), &mut output).await.unwrap();

        let out = buffer.contents();
        assert!(out.contains("Edit committed (revision 1, 1 endpoint(s))"));
        assert!(out.contains("  + get-/moons"));
        assert!(out.contains("  - get-/planets"));

        let canonical: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(Path::new(&target)).unwrap()).unwrap();
        assert_eq!(canonical["info"]["version"], "1.1.0");
    }

    #[tokio::test]
    async fn test_apply_rejects_invalid_edit() {
        let dir = TempDir::new().unwrap();
        let spec = write_file(&dir, "api.json", SPEC);
        let edited = write_file(&dir, "edited.json", r#"{"info": {"title": "Broken""#);

        let (mut output, buffer) = writer(OutputFormat::Human);
        let args = ApplyArgs {
            input: input(spec),
            edited,
            save_to: None,
        };
        let err = handle_apply(args, &Config::default(), &mut output).await.unwrap_err();

        assert_eq!(err.exit_code(), 8);
        assert!(buffer.contents().contains("Edit rejected; keeping revision 0 (1 endpoint(s))"));
    }
}

//! Render command handler

use super::utils::{open_document, save_text};
use crate::cli::{OutputFormat, RenderArgs};
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use akira_core::DocRenderer;
use serde_json::json;
use tracing::{info, instrument};

/// Handle the render command
#[instrument(skip(args, config, output), fields(spec = %args.input.spec))]
pub async fn handle_render(args: RenderArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("render", &args.input.spec);

    let (_, document) = open_document(&args.input).await?;

    let mut options = config.render_options();
    options.include_samples |= args.samples;
    options.include_raw |= args.raw;

    let spinner = output.spinner("Rendering documentation...");
    let renderer = DocRenderer::with_options(options).with_generator(config.sample_generator());
    let markdown = renderer.render(&document);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let markdown = markdown?;

    info!(
        endpoints = document.endpoint_count(),
        bytes = markdown.len(),
        "Rendered documentation"
    );

    match &args.save_to {
        Some(path) => {
            save_text(path, &markdown)?;
            output.success(&format!("✓ Documentation written to {}", path.display()))
        }
        None if output.format() == OutputFormat::Human => output.write(&markdown),
        None => output.data(&json!({
            "title": document.info.title,
            "markdown": markdown,
        })),
    }
}

//! Validate command handler

use super::utils::{load_text, parser_for};
use crate::cli::{OutputFormat, ValidateArgs};
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{DocumentSummary, OutputWriter};
use akira_core::NavigationIndex;
use serde_json::json;
use tracing::{info, instrument, warn};

/// Handle the validate command
#[instrument(skip(args, _config, output), fields(spec = %args.input.spec))]
pub async fn handle_validate(
    args: ValidateArgs,
    _config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::with_details("validate", &args.input.spec);

    output.info(&format!("Validating specification: {}", args.input.locator()))?;

    let raw_text = load_text(args.input.locator()).await?;

    let document = match parser_for(&args.input).parse(&raw_text) {
        Ok(document) => document,
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "Specification failed to parse");

            if output.format() == OutputFormat::Human {
                output.error("✗ Specification is invalid")?;
            } else {
                output.data(&json!({
                    "valid": false,
                    "kind": e.kind(),
                    "endpoint": e.endpoint(),
                    "error": e.to_string(),
                }))?;
            }
            return Err(e.into());
        }
    };

    info!(endpoints = document.endpoint_count(), "Specification is valid");
    output.success("✓ Specification is valid")?;
    output.summary(&DocumentSummary::of(&document))?;

    if (args.detailed || output.is_verbose()) && output.format() == OutputFormat::Human {
        output.section("Endpoints")?;
        let index = NavigationIndex::build(&document);
        output.navigation(&index, false)?;
    }

    Ok(())
}

//! Code sample command handler

use super::utils::open_document;
use crate::cli::SampleArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{OutputWriter, SampleView};
use akira_core::{Dialect, NavigationIndex};
use tracing::{debug, instrument};

/// Handle the sample command
///
/// Without `--endpoint` every endpoint gets a sample, in navigation order.
#[instrument(skip(args, config, output), fields(spec = %args.input.spec, endpoint = ?args.endpoint))]
pub async fn handle_sample(args: SampleArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("sample", &args.input.spec);

    // Reject bad dialect names before touching the specification
    let dialects = resolve_dialects(&args.dialect, config)?;

    let (_, document) = open_document(&args.input).await?;
    let generator = config.sample_generator();

    let endpoints = match &args.endpoint {
        Some(id) => vec![id.clone()],
        None => NavigationIndex::build(&document)
            .ids()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    let mut samples = Vec::with_capacity(endpoints.len() * dialects.len());
    for endpoint in &endpoints {
        for &dialect in &dialects {
            let code = generator
                .generate_for(&document, endpoint, dialect)
                .ok_or_else(|| Error::EndpointNotFound { id: endpoint.clone() })?;
            samples.push(SampleView {
                endpoint: endpoint.clone(),
                dialect,
                code,
            });
        }
    }

    debug!(count = samples.len(), "Generated samples");
    output.samples(&samples)
}

/// Dialects from the command line, else the configured ones
fn resolve_dialects(names: &[String], config: &Config) -> Result<Vec<Dialect>> {
    if names.is_empty() {
        return Ok(config.samples.dialects.clone());
    }

    let mut dialects = Vec::with_capacity(names.len());
    for name in names {
        let dialect: Dialect = name.parse()?;
        if !dialects.contains(&dialect) {
            dialects.push(dialect);
        }
    }
    Ok(dialects)
}

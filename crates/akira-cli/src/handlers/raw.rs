//! Raw command handler

use super::utils::open_document;
use crate::cli::RawArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use tracing::instrument;

/// Handle the raw command
///
/// Human output is the canonical pretty JSON text; structured formats
/// serialize the same wire value.
#[instrument(skip(args, _config, output), fields(spec = %args.input.spec))]
pub async fn handle_raw(args: RawArgs, _config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("raw", &args.input.spec);

    let (_, document) = open_document(&args.input).await?;
    output.data(&document.to_value())
}

//! Navigation command handler

use super::utils::open_document;
use crate::cli::NavArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use akira_core::NavigationIndex;
use tracing::{debug, instrument};

/// Handle the nav command
#[instrument(skip(args, _config, output), fields(spec = %args.input.spec))]
pub async fn handle_nav(args: NavArgs, _config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("nav", &args.input.spec);

    let (_, document) = open_document(&args.input).await?;
    let index = NavigationIndex::build(&document);
    debug!(entries = index.len(), grouped = args.grouped, "Built navigation index");

    output.section(&document.info.title)?;
    output.navigation(&index, args.grouped)
}

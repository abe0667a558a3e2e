//! Apply command handler
//!
//! Runs one edit cycle: open the committed specification, compose the edited
//! text as a draft and commit it. A rejected edit leaves the committed
//! document untouched and is reported before the error is returned.

use super::utils::{load_text, parser_for, save_text};
use crate::cli::ApplyArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{ApplyReport, OutputWriter};
use akira_core::{EditSync, Locator};
use std::collections::HashSet;
use tracing::{info, instrument};

/// Handle the apply command
#[instrument(skip(args, config, output), fields(spec = %args.input.spec, edited = %args.edited))]
pub async fn handle_apply(args: ApplyArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("apply", &args.input.spec);

    let committed = args.input.locator();
    let edited = Locator::from_arg(&args.edited);
    if committed.is_stdin() && edited.is_stdin() {
        return Err(Error::invalid_args(
            "only one of SPEC and EDITED can be read from stdin",
        ));
    }

    let raw_text = load_text(committed).await?;
    let edited_text = load_text(edited).await?;

    let mut sync = EditSync::with_parser(parser_for(&args.input), raw_text)?
        .with_generator(config.sample_generator());
    let before: Vec<String> = sync.navigation().ids().into_iter().map(str::to_string).collect();

    sync.begin_edit();
    sync.update_draft(edited_text);
    let outcome = sync.commit_draft();

    let after: Vec<String> = sync.navigation().ids().into_iter().map(str::to_string).collect();
    let (added, removed) = diff_ids(&before, &after);

    let report = ApplyReport {
        committed: outcome.is_ok(),
        revision: sync.revision(),
        endpoints: after.len(),
        added,
        removed,
        error: sync.last_error().map(ToString::to_string),
    };
    output.apply_report(&report)?;

    if let Err(source) = outcome {
        return Err(Error::EditRejected { source });
    }

    info!(revision = sync.revision(), "Applied edit");

    if let Some(path) = &args.save_to {
        save_text(path, &sync.canonical_text()?)?;
        output.success(&format!("✓ Canonical specification written to {}", path.display()))?;
    }

    Ok(())
}

/// Ids only in `after`, then ids only in `before`, each in its own order
fn diff_ids(before: &[String], after: &[String]) -> (Vec<String>, Vec<String>) {
    let old: HashSet<&str> = before.iter().map(String::as_str).collect();
    let new: HashSet<&str> = after.iter().map(String::as_str).collect();

    let added = after.iter().filter(|id| !old.contains(id.as_str())).cloned().collect();
    let removed = before.iter().filter(|id| !new.contains(id.as_str())).cloned().collect();
    (added, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_diff_ids() {
        let before = ids(&["get-/planets", "post-/planets"]);
        let after = ids(&["get-/planets", "get-/moons", "delete-/planets"]);

        let (added, removed) = diff_ids(&before, &after);
        assert_eq!(added, ids(&["get-/moons", "delete-/planets"]));
        assert_eq!(removed, ids(&["post-/planets"]));
    }

    #[test]
    fn test_diff_ids_unchanged() {
        let same = ids(&["get-/planets"]);
        let (added, removed) = diff_ids(&same, &same);
        assert!(added.is_empty());
        assert!(removed.is_empty());
    }
}

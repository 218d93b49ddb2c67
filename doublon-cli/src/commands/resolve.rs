//! Resolve Command
//!
//! Merges or dismisses a duplicate group from the active session.

use anyhow::{bail, Result};
use dialoguer::Select;
use doublon_core::DedupSession;

use crate::config::CliConfig;
use crate::display;
use crate::store::{JsonFileStore, SessionFile};

/// Opens the persisted session, bailing when no scan has been run.
fn open_session(config: &CliConfig) -> Result<DedupSession<JsonFileStore>> {
    let Some(session_file) = SessionFile::load(&config.session_path())? else {
        bail!("No scan session found. Run 'doublon scan' first.");
    };

    let store = JsonFileStore::new(config.records_path.clone());
    Ok(DedupSession::restore(
        store,
        config.match_config()?,
        session_file.groups,
    ))
}

/// Persists the session's remaining groups.
fn save_session(config: &CliConfig, session: &DedupSession<JsonFileStore>) -> Result<()> {
    SessionFile {
        groups: session.groups().unwrap_or_default().to_vec(),
    }
    .save(&config.session_path())
}

/// Merges a group into its primary record.
pub fn merge(
    config: &CliConfig,
    group_ref: &str,
    primary: Option<&str>,
    interactive: bool,
) -> Result<()> {
    let mut session = open_session(config)?;

    let Some(group) = session.find_group(group_ref) else {
        bail!("Group '{}' not found in the active session", group_ref);
    };
    let group_id = group.id().to_string();
    let member_count = group.records().len();

    if let Some(primary_id) = primary {
        session.select_primary(&group_id, primary_id)?;
    } else if interactive {
        let group = session.find_group(&group_id).expect("group just resolved");
        let items: Vec<String> = group
            .records()
            .iter()
            .map(|r| {
                format!(
                    "{}  [{}]{}",
                    r.full_name(),
                    r.id(),
                    r.email().map(|e| format!("  {}", e)).unwrap_or_default()
                )
            })
            .collect();

        let selection = Select::new()
            .with_prompt("Select the primary record to keep")
            .items(&items)
            .default(0)
            .interact()?;
        let record_id = group.records()[selection].id().to_string();
        session.select_primary(&group_id, &record_id)?;
    }

    let primary_name = session
        .find_group(&group_id)
        .expect("group just resolved")
        .primary()
        .full_name();

    match session.merge(&group_id) {
        Ok(()) => {
            save_session(config, &session)?;
            display::success(&format!(
                "Merged {} records into {}",
                member_count, primary_name
            ));
            Ok(())
        }
        Err(e) => {
            // Group stays in the session for a manual retry
            display::error(&format!("Merge failed: {}", e));
            Err(e.into())
        }
    }
}

/// Dismisses a group without merging.
pub fn dismiss(config: &CliConfig, group_ref: &str) -> Result<()> {
    let mut session = open_session(config)?;

    let Some(group) = session.find_group(group_ref) else {
        bail!("Group '{}' not found in the active session", group_ref);
    };
    let group_id = group.id().to_string();

    session.dismiss(&group_id)?;
    save_session(config, &session)?;

    display::success("Group dismissed");
    display::info("Dismissals are session-local: the next scan may surface this group again.");

    Ok(())
}

//! Scan Command
//!
//! Runs a grouping pass over the records file and persists the resulting
//! session.

use anyhow::Result;
use doublon_core::{DedupSession, GroupingStrategy};

use crate::config::CliConfig;
use crate::display;
use crate::store::{JsonFileStore, SessionFile};

/// Scans the record set for duplicate groups.
pub fn run(config: &CliConfig, json: bool, threshold: Option<f64>, greedy: bool) -> Result<()> {
    let mut match_config = config.match_config()?;
    if let Some(threshold) = threshold {
        match_config = match_config.with_threshold(threshold);
    }
    if greedy {
        match_config = match_config.with_strategy(GroupingStrategy::Greedy);
    }

    let store = JsonFileStore::new(config.records_path.clone());
    let mut session = DedupSession::new(store, match_config);
    session.refresh()?;

    let groups = session.groups().unwrap_or_default().to_vec();
    SessionFile {
        groups: groups.clone(),
    }
    .save(&config.session_path())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        display::success("No duplicates found");
        return Ok(());
    }

    println!();
    println!("Found {} duplicate group(s):", groups.len());
    println!();
    display::display_groups_table(&groups);
    println!();
    display::info("Resolve with: doublon resolve merge <id> or doublon resolve dismiss <id>");

    Ok(())
}

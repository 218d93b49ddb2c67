//! Groups Command
//!
//! Lists the active session's duplicate groups.

use anyhow::Result;

use crate::config::CliConfig;
use crate::display;
use crate::store::SessionFile;

/// Shows the active duplicate groups.
pub fn run(config: &CliConfig, json: bool) -> Result<()> {
    let Some(session) = SessionFile::load(&config.session_path())? else {
        display::info("No scan session found. Run 'doublon scan' first.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&session.groups)?);
        return Ok(());
    }

    if session.groups.is_empty() {
        display::success("No duplicate groups pending");
        return Ok(());
    }

    println!();
    println!("Duplicate groups ({}):", session.groups.len());
    println!();
    display::display_groups_table(&session.groups);

    for group in &session.groups {
        display::display_group_details(group);
    }

    Ok(())
}

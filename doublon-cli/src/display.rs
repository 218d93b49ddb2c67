//! Display Helpers
//!
//! Terminal output formatting and styling.

use console::style;
use doublon_core::DuplicateGroup;
use tabled::{Table, Tabled};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Reason")]
    reason: String,
    #[tabled(rename = "Members")]
    members: String,
}

/// Displays the duplicate groups as a table.
pub fn display_groups_table(groups: &[DuplicateGroup]) {
    let rows: Vec<GroupRow> = groups
        .iter()
        .map(|group| GroupRow {
            id: group.id().chars().take(8).collect(),
            score: format!("{}%", (group.match_score() * 100.0).round() as u32),
            reason: group.match_reason().to_string(),
            members: group
                .records()
                .iter()
                .map(|r| r.full_name())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    println!("{}", Table::new(rows));
}

/// Displays one group with full member details.
pub fn display_group_details(group: &DuplicateGroup) {
    println!();
    println!(
        "  Group {}  {} ({}% similar)",
        style(&group.id()[..8]).bold().cyan(),
        group.match_reason(),
        (group.match_score() * 100.0).round() as u32
    );
    println!();

    for record in group.records() {
        let marker = if record.id() == group.primary().id() {
            style("● primary").green().to_string()
        } else {
            style("○").dim().to_string()
        };
        println!("  {} {}  [{}]", marker, style(record.full_name()).bold(), record.id());

        if let Some(email) = record.email() {
            println!("      mail   {}", email);
        }
        if let Some(phone) = record.phone() {
            println!("      phone  {}", phone);
        }
        if let Some(company) = record.company() {
            println!("      org    {}", company);
        }
        if let Some(role) = record.role() {
            println!("      role   {}", style(role).dim());
        }
    }

    println!();
}

//! CLI Integration Tests
//!
//! Each test runs the binary against an isolated data directory and a
//! records fixture file.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper to run CLI commands in an isolated data directory
struct CliTestContext {
    data_dir: TempDir,
}

impl CliTestContext {
    fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn records_path(&self) -> PathBuf {
        self.data_dir.path().join("records.json")
    }

    /// Writes the records fixture file.
    fn write_records(&self, json: &str) {
        fs::write(self.records_path(), json).expect("Failed to write records");
    }

    fn read_records(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.records_path()).unwrap();
        serde_json::from_str(&contents).unwrap()
    }

    /// Run a CLI command and return the output
    fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_doublon"));
        cmd.arg("--data-dir")
            .arg(self.data_dir.path())
            .arg("--records")
            .arg(self.records_path());

        for arg in args {
            cmd.arg(arg);
        }

        cmd.output().expect("Failed to execute command")
    }

    /// Run a command and assert success
    fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert!(
            output.status.success(),
            "Command {:?} failed.\nStdout: {}\nStderr: {}",
            args,
            stdout,
            stderr
        );
        stdout
    }

    /// Run a command and assert failure
    fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert!(
            !output.status.success(),
            "Command {:?} should have failed but succeeded",
            args
        );
        stderr
    }

    /// Scans and returns the parsed JSON group list.
    fn scan_json(&self) -> serde_json::Value {
        let stdout = self.run_success(&["scan", "--json"]);
        serde_json::from_str(&stdout).expect("scan --json should emit valid JSON")
    }
}

/// Two duplicates (same email, same name) plus one unrelated record.
const FIXTURE: &str = r#"[
  {"id": "1", "first_name": "Jane", "last_name": "Doe", "email": "J.Doe@x.com"},
  {"id": "2", "first_name": "Jane", "last_name": "Doe", "email": "j.doe@X.com", "phone": "01 23 45 67 89"},
  {"id": "3", "first_name": "Wolfgang", "last_name": "Schneider", "email": "wolf@y.com"}
]"#;

// ===========================================================================
// Scan
// ===========================================================================

#[test]
fn test_scan_finds_duplicate_group() {
    let ctx = CliTestContext::new();
    ctx.write_records(FIXTURE);

    let stdout = ctx.run_success(&["scan"]);
    assert!(stdout.contains("1 duplicate group"));
    assert!(stdout.contains("identical email"));
}

#[test]
fn test_scan_json_output_shape() {
    let ctx = CliTestContext::new();
    ctx.write_records(FIXTURE);

    let groups = ctx.scan_json();
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 1);

    let group = &groups[0];
    assert!(group["id"].is_string());
    assert!(group["match_score"].as_f64().unwrap() >= 0.5);
    assert_eq!(group["match_reason"], "identical_email");

    let members = group["records"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["id"], "1");
    assert_eq!(members[1]["id"], "2");
}

#[test]
fn test_scan_no_duplicates() {
    let ctx = CliTestContext::new();
    ctx.write_records(
        r#"[
          {"id": "1", "first_name": "Jane", "last_name": "Doe", "email": "jane@x.com"},
          {"id": "2", "first_name": "Wolfgang", "last_name": "Schneider"}
        ]"#,
    );

    let stdout = ctx.run_success(&["scan"]);
    assert!(stdout.contains("No duplicates found"));
}

#[test]
fn test_scan_missing_records_file_fails() {
    let ctx = CliTestContext::new();
    ctx.run_failure(&["scan"]);
}

#[test]
fn test_scan_threshold_override() {
    let ctx = CliTestContext::new();
    // Name-only pair: score 0.3, below the default threshold
    ctx.write_records(
        r#"[
          {"id": "1", "first_name": "Jean", "last_name": "Dupont"},
          {"id": "2", "first_name": "Jean", "last_name": "Dupond"}
        ]"#,
    );

    let stdout = ctx.run_success(&["scan"]);
    assert!(stdout.contains("No duplicates found"));

    let stdout = ctx.run_success(&["scan", "--threshold", "0.25"]);
    assert!(stdout.contains("1 duplicate group"));
}

// ===========================================================================
// Groups
// ===========================================================================

#[test]
fn test_groups_without_scan() {
    let ctx = CliTestContext::new();
    ctx.write_records(FIXTURE);

    let stdout = ctx.run_success(&["groups"]);
    assert!(stdout.contains("No scan session found"));
}

#[test]
fn test_groups_lists_scanned_session() {
    let ctx = CliTestContext::new();
    ctx.write_records(FIXTURE);
    ctx.run_success(&["scan"]);

    let stdout = ctx.run_success(&["groups"]);
    assert!(stdout.contains("Duplicate groups (1)"));
    assert!(stdout.contains("Jane Doe"));
}

// ===========================================================================
// Resolve: merge
// ===========================================================================

#[test]
fn test_merge_with_default_primary() {
    let ctx = CliTestContext::new();
    ctx.write_records(FIXTURE);

    let groups = ctx.scan_json();
    let group_id = groups[0]["id"].as_str().unwrap().to_string();

    let stdout = ctx.run_success(&["resolve", "merge", &group_id]);
    assert!(stdout.contains("Merged 2 records into Jane Doe"));

    // Duplicate dropped, primary backfilled with the duplicate's phone
    let records = ctx.read_records();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], "1");
    assert_eq!(records[0]["phone"], "01 23 45 67 89");

    // Session no longer lists the group
    let stdout = ctx.run_success(&["groups"]);
    assert!(stdout.contains("No duplicate groups pending"));
}

#[test]
fn test_merge_with_explicit_primary() {
    let ctx = CliTestContext::new();
    ctx.write_records(FIXTURE);

    let groups = ctx.scan_json();
    let group_id = groups[0]["id"].as_str().unwrap().to_string();

    ctx.run_success(&["resolve", "merge", &group_id, "--primary", "2"]);

    let records = ctx.read_records();
    let ids: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["2", "3"]);
}

#[test]
fn test_merge_by_id_prefix() {
    let ctx = CliTestContext::new();
    ctx.write_records(FIXTURE);

    let groups = ctx.scan_json();
    let group_id = groups[0]["id"].as_str().unwrap();

    ctx.run_success(&["resolve", "merge", &group_id[..8]]);
    assert_eq!(ctx.read_records().as_array().unwrap().len(), 2);
}

#[test]
fn test_merge_unknown_group_fails() {
    let ctx = CliTestContext::new();
    ctx.write_records(FIXTURE);
    ctx.run_success(&["scan"]);

    let stderr = ctx.run_failure(&["resolve", "merge", "ffffffff"]);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_merge_non_member_primary_fails() {
    let ctx = CliTestContext::new();
    ctx.write_records(FIXTURE);

    let groups = ctx.scan_json();
    let group_id = groups[0]["id"].as_str().unwrap().to_string();

    ctx.run_failure(&["resolve", "merge", &group_id, "--primary", "3"]);

    // Store untouched
    assert_eq!(ctx.read_records().as_array().unwrap().len(), 3);
}

// ===========================================================================
// Resolve: dismiss
// ===========================================================================

#[test]
fn test_dismiss_is_session_local() {
    let ctx = CliTestContext::new();
    ctx.write_records(FIXTURE);

    let groups = ctx.scan_json();
    let group_id = groups[0]["id"].as_str().unwrap().to_string();

    let stdout = ctx.run_success(&["resolve", "dismiss", &group_id]);
    assert!(stdout.contains("dismissed"));

    // Gone from the session, store untouched
    let stdout = ctx.run_success(&["groups"]);
    assert!(stdout.contains("No duplicate groups pending"));
    assert_eq!(ctx.read_records().as_array().unwrap().len(), 3);

    // A fresh scan over the same data re-surfaces the group
    let groups = ctx.scan_json();
    assert_eq!(groups.as_array().unwrap().len(), 1);
}

// ===========================================================================
// Match configuration
// ===========================================================================

#[test]
fn test_match_config_file_respected() {
    let ctx = CliTestContext::new();
    // German-format phones: only equal under a +49 prefix
    ctx.write_records(
        r#"[
          {"id": "1", "first_name": "Hans", "last_name": "Maier", "phone": "0171 555 0100"},
          {"id": "2", "first_name": "Hans", "last_name": "Maier", "phone": "+491715550100"}
        ]"#,
    );
    fs::write(
        ctx.data_dir.path().join("match.json"),
        r#"{"phone_country_prefix": "+49"}"#,
    )
    .unwrap();

    let groups = ctx.scan_json();
    assert_eq!(groups.as_array().unwrap().len(), 1);
}

#[test]
fn test_completions_generate() {
    let ctx = CliTestContext::new();
    let stdout = ctx.run_success(&["completions", "bash"]);
    assert!(stdout.contains("doublon"));
}

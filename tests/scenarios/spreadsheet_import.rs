//! Scenario: Bulk Import From a Spreadsheet
//!
//! Journey: An architect already has one application registered and loads
//! a spreadsheet exported from another tool.
//!
//! Steps:
//! 1. Register APP-1 (HIGH value, health 80) by hand
//! 2. Dry-run the spreadsheet and read the per-row report
//! 3. Import for real
//! 4. Check the new record's disposition
//!
//! Success Criteria:
//! - Invalid rows are reported and never saved
//! - The dry run leaves the portfolio untouched
//! - Imported records are classified like hand-entered ones

use crate::common::*;
use crate::{assert_output_contains, assert_success};

#[test]
fn scenario_import_keeps_valid_rows_and_rejects_the_rest() {
    // Step 1: One application registered by hand
    let env = TestEnv::initialized();
    assert_success!(env.run(&[
        "add", "--name", "First", "--code", "APP-1", "--value", "HIGH", "--health", "80", "--owner",
        "alice",
    ]));

    env.write_file("apps.csv", MIXED_CSV);

    // Step 2: Dry run reports both rows and saves nothing
    let result = env.run(&["import", "apps.csv", "--dry-run"]);
    assert_success!(result);
    assert_output_contains!(result, "line 2: WARNING APP-2");
    assert_output_contains!(result, "Missing Data Steward (Owner)");
    assert_output_contains!(result, "line 3: ERROR");
    assert_output_contains!(result, "Missing Name");
    assert_output_contains!(result, "Dry run: nothing saved");
    assert_eq!(env.codes(), vec!["APP-1"]);

    // Step 3: Real import commits the one valid row
    let result = env.run(&["import", "apps.csv"]);
    assert_success!(result);
    assert_output_contains!(result, "0 ok, 1 with warnings, 1 rejected, 0 skipped");
    assert_output_contains!(result, "Imported 1 applications");
    assert_eq!(env.codes(), vec!["APP-1", "APP-2"]);

    // Step 4: STANDARD value with health 40 is ELIMINATE
    let show = env.run(&["--json", "show", "APP-2"]).data();
    assert_eq!(show["application"]["disposition"]["label"], "ELIMINATE");
    assert_eq!(show["application"]["health"], 40);
    assert_eq!(show["application"]["owner"], "Unassigned");

    let first = env.run(&["--json", "show", "APP-1"]).data();
    assert_eq!(first["application"]["disposition"]["label"], "INVEST");
}

#[test]
fn scenario_import_json_stream_reports_each_row() {
    let env = TestEnv::initialized();
    env.write_file("apps.csv", MIXED_CSV);

    let events = env.run_json(&["import", "apps.csv"]);

    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["rows"], 2);
    let rows: Vec<_> = events.iter().filter(|e| e["event"] == "row").collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["status"], "WARNING");
    assert_eq!(rows[1]["status"], "ERROR");
    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["status"], "partial");
    assert_eq!(complete["committed"], 1);
    assert_eq!(complete["rejected"], 1);
}

#[test]
fn scenario_reviewer_skips_a_suspicious_row() {
    let env = TestEnv::initialized();
    env.write_file("apps.csv", FULL_CSV);

    // Line 3 is the Web Shop row
    let result = env.run(&["import", "apps.csv", "--skip", "3"]);
    assert_success!(result);
    assert_output_contains!(result, "SKIPPED");
    assert_eq!(env.codes(), vec!["APP-10"]);
}

#[test]
fn scenario_reimporting_the_same_file_duplicates_with_warnings() {
    let env = TestEnv::initialized();
    env.write_file("apps.csv", FULL_CSV);
    assert_success!(env.run(&["import", "apps.csv"]));

    let result = env.run(&["import", "apps.csv"]);
    assert_success!(result);
    assert_output_contains!(result, "Duplicate Code (will duplicate)");
    assert_eq!(env.codes(), vec!["APP-10", "APP-11", "APP-10", "APP-11"]);
}

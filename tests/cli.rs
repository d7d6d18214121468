//! End-to-end tests for the `payroll` binary.
//!
//! Each test runs the built binary inside its own scratch directory holding a
//! copy of the bundled `data/staff.txt` roster.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

// =============================================================================
// Test Helpers
// =============================================================================

/// A scratch directory seeded with a copy of the sample roster.
struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "payroll-cli-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::copy(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("data/staff.txt"),
            dir.join("staff.txt"),
        )
        .unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }

    fn write(&self, name: &str, contents: &str) {
        fs::write(self.path(name), contents).unwrap();
    }

    /// Runs the binary with `args`, using this directory as the working directory.
    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_payroll"))
            .args(args)
            .current_dir(&self.dir)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run payroll binary")
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Expected success, got {:?}\nstderr: {}",
        output.status,
        stderr(output)
    );
}

// =============================================================================
// Reporting
// =============================================================================

#[test]
fn test_list_prints_every_employee() {
    let ws = Workspace::new("list");
    let output = ws.run(&["--file", "staff.txt", "list"]);

    assert_success(&output);
    let text = stdout(&output);
    assert!(text.starts_with("All Employees:\n"));
    assert!(text.contains("Employee: E1001, Jane Doe, Engineer, full-time\n"));
    assert!(text.contains("Employee: E1006, Rita Silva, Receptionist, part-time\n"));
}

#[test]
fn test_list_json_is_an_array_of_employees() {
    let ws = Workspace::new("list-json");
    let output = ws.run(&["--file", "staff.txt", "list", "--json"]);

    assert_success(&output);
    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let staff = json.as_array().unwrap();
    assert_eq!(staff.len(), 6);
    assert_eq!(staff[0]["employee_number"], "E1001");
    assert_eq!(staff[0]["category"], "full-time");
    assert_eq!(staff[1]["category"], "part-time");
    assert_eq!(staff[1]["hourly_wage"], 15.0);
}

#[test]
fn test_stub_for_one_employee() {
    let ws = Workspace::new("stub");
    let output = ws.run(&["--file", "staff.txt", "stub", "E1001"]);

    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Yearly Salary: $60000.00\n"));
    assert!(text.contains("Current Month pay: $5000.00\n"));
    assert!(text.contains("Sick days left: 20.0\n"));
}

#[test]
fn test_stub_json_for_one_employee() {
    let ws = Workspace::new("stub-json");
    let output = ws.run(&["--file", "staff.txt", "stub", "E1002", "--json"]);

    assert_success(&output);
    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["employee_number"], "E1002");
    assert_eq!(json["monthly_pay"], 1200.0);
    assert_eq!(json["employment_type"], "part-time");
}

#[test]
fn test_stub_without_id_prints_all() {
    let ws = Workspace::new("stub-all");
    let output = ws.run(&["--file", "staff.txt", "stub"]);

    assert_success(&output);
    let text = stdout(&output);
    assert!(text.starts_with("All Employee Pay Stubs:\n\n"));
    assert_eq!(text.matches("PAY STUB").count(), 6);
}

#[test]
fn test_stub_for_unknown_employee_fails() {
    let ws = Workspace::new("stub-missing");
    let output = ws.run(&["--file", "staff.txt", "stub", "E999"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Employee not found: E999"));
}

// =============================================================================
// Mutating commands
// =============================================================================

#[test]
fn test_sick_day_rewrites_roster_file() {
    let ws = Workspace::new("sick-day");
    let output = ws.run(&["--file", "staff.txt", "sick-day", "E1001", "3"]);

    assert_success(&output);
    assert!(stdout(&output).contains("New sick days for E1001: 17.0\n"));

    let saved = ws.read("staff.txt");
    assert!(saved.starts_with("E1001,Doe,Jane,Engineer,full-time,60000.0,17.0\n"));
    assert_eq!(saved.lines().count(), 6);
}

#[test]
fn test_sick_day_for_unknown_employee_leaves_file_alone() {
    let ws = Workspace::new("sick-day-missing");
    let original = ws.read("staff.txt");

    let output = ws.run(&["--file", "staff.txt", "sick-day", "E999", "1"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Employee not found: E999"));
    assert_eq!(ws.read("staff.txt"), original);
}

#[test]
fn test_reset_monthly_with_output_leaves_source_unchanged() {
    let ws = Workspace::new("reset-output");
    let original = ws.read("staff.txt");

    let output = ws.run(&[
        "--file",
        "staff.txt",
        "reset",
        "monthly",
        "--output",
        "reset.txt",
    ]);

    assert_success(&output);
    assert!(stdout(&output).contains("Reset sick days for 3 employees"));
    assert_eq!(ws.read("staff.txt"), original);

    let reset = ws.read("reset.txt");
    assert!(reset.contains("E1004,Ng,Bo,Line Cook,part-time,64.0,21.5,0.0\n"));
    assert!(reset.contains("E1006,Silva,Rita,Receptionist,part-time,96.0,18.25,0.0\n"));
    assert!(reset.contains("E1003,Lee,Ana,Payroll Manager,full-time,84000.0,11.5\n"));
}

#[test]
fn test_reset_yearly_saves_in_place() {
    let ws = Workspace::new("reset-yearly");
    let output = ws.run(&["--file", "staff.txt", "reset", "yearly"]);

    assert_success(&output);
    let saved = ws.read("staff.txt");
    assert!(saved.contains("E1003,Lee,Ana,Payroll Manager,full-time,84000.0,20.0\n"));
    assert!(saved.contains("E1004,Ng,Bo,Line Cook,part-time,64.0,21.5,1.0\n"));
}

#[test]
fn test_save_copies_roster() {
    let ws = Workspace::new("save");
    let output = ws.run(&["--file", "staff.txt", "save", "copy.txt"]);

    assert_success(&output);
    assert!(stdout(&output).contains("Saved 6 employees to copy.txt"));
    assert_eq!(ws.read("copy.txt").lines().count(), 6);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_roster_path_comes_from_config_file() {
    let ws = Workspace::new("config-path");
    fs::rename(ws.path("staff.txt"), ws.path("team.txt")).unwrap();
    ws.write("payroll.yaml", "roster_path: team.txt\n");

    let output = ws.run(&["list"]);

    assert_success(&output);
    assert!(stdout(&output).contains("Employee: E1001"));
}

#[test]
fn test_strict_categories_flag_overrides_lenient_config() {
    let ws = Workspace::new("strict-flag");
    ws.write("temps.txt", "E9,Poe,Al,Temp,contractor,10,20,1\n");
    ws.write("payroll.yaml", "strict_categories: false\n");

    let lenient = ws.run(&["--file", "temps.txt", "list"]);
    assert_success(&lenient);
    assert!(stdout(&lenient).contains("Employee: E9, Al Poe, Temp, part-time"));

    let strict = ws.run(&["--file", "temps.txt", "--strict-categories", "list"]);
    assert!(!strict.status.success());
    assert!(stderr(&strict).contains("unknown employment category 'contractor'"));
}

#[test]
fn test_strict_config_applies_without_flag() {
    let ws = Workspace::new("strict-config");
    ws.write("temps.txt", "E9,Poe,Al,Temp,contractor,10,20,1\n");
    ws.write("payroll.yaml", "strict_categories: true\n");

    let output = ws.run(&["--file", "temps.txt", "list"]);
    assert!(!output.status.success());
}

#[test]
fn test_missing_roster_file_fails() {
    let ws = Workspace::new("missing-roster");
    let output = ws.run(&["--file", "absent.txt", "list"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to load roster from absent.txt"));
}

//! Integration tests for the evalgen binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const COURSE: [&str; 14] = [
    "--first", "John", "--last", "Smith", "--subject", "cst", "--course", "123", "--section",
    "wn123", "--semester", "fall", "--year", "2014",
];

const SUPPORT: [&str; 6] = [
    "--support-name", "Jane Doe", "--support-ext", "4021", "--mailbox", "B12",
];

const COMMENT_SHEET: &str = "Smith_John CST 123-WN123 Fall 2014.txt";

/// The binary, isolated from the user's config and environment.
fn evalgen(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("evalgen").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("EVALGEN_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn questions(home: &Path) -> std::path::PathBuf {
    let path = home.join("evalQuestions.txt");
    fs::write(&path, "What helped you learn?\nWhat should change?\n").unwrap();
    path
}

// ── validate ──────────────────────────────────────────────────────────────────

#[test]
fn validate_accepts_complete_course() {
    let home = TempDir::new().unwrap();
    evalgen(home.path())
        .arg("validate")
        .args(COURSE)
        .args(["--comment-sheet", "--save-dir", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains(
            "Smith_John CST 123-WN123 Fall 2014.docx",
        ));
}

#[test]
fn validate_reports_only_the_missing_support_name() {
    let home = TempDir::new().unwrap();
    evalgen(home.path())
        .arg("validate")
        .args(COURSE)
        .args(["--oit-sheet", "--support-ext", "4021", "--mailbox", "B12"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("fields have errors (1)"))
        .stderr(predicate::str::contains("Faculty support name field blank"))
        .stderr(predicate::str::contains("Mailbox").not());
}

#[test]
fn validate_reports_every_problem_in_order() {
    let home = TempDir::new().unwrap();
    let output = evalgen(home.path())
        .args([
            "validate", "--semester", "spring", "--subject", "cs1", "--course", "12a", "--year",
            "20x4", "--comment-sheet",
        ])
        .assert()
        .code(2)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).unwrap();

    let expected = [
        "Instructor first name field blank",
        "Instructor last name field blank",
        "Subject field contains numbers",
        "Course number field contains letters",
        "Section field blank",
        "Year field contains letters",
        "Invalid save location",
    ];
    let positions: Vec<usize> = expected
        .iter()
        .map(|msg| stderr.find(msg).unwrap_or_else(|| panic!("missing {msg}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{stderr}");
}

#[test]
fn validate_reports_spreadsheet_collision() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("newclasses.csv"), "").unwrap();

    evalgen(home.path())
        .arg("validate")
        .args(COURSE)
        .args(["--spreadsheet", "new", "--spreadsheet-dir", "."])
        .args(["--spreadsheet-name", "newclasses"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "A file named 'newclasses.csv' already exists",
        ));
}

#[test]
fn validate_rejects_non_spreadsheet_file() {
    let home = TempDir::new().unwrap();
    evalgen(home.path())
        .arg("validate")
        .args(COURSE)
        .args(["--spreadsheet", "existing", "--spreadsheet-file", "notes.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Spreadsheet file must be a spreadsheet file",
        ));
}

#[test]
fn validate_json_lists_problems() {
    let home = TempDir::new().unwrap();
    let assert = evalgen(home.path())
        .args(["--output-format", "json", "validate"])
        .args(COURSE)
        .args(["--oit-sheet", "--support-ext", "4021", "--mailbox", "B12"])
        .assert()
        .code(2);

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["problems"][0]["field"], "faculty_support_name");
    assert_eq!(json["problems"][0]["kind"], "blank");
}

// ── name ──────────────────────────────────────────────────────────────────────

#[test]
fn name_prints_canonical_file_name() {
    let home = TempDir::new().unwrap();
    evalgen(home.path())
        .arg("name")
        .args(COURSE)
        .assert()
        .success()
        .stdout("Smith_John CST 123-WN123 Fall 2014.docx\n");
}

#[test]
fn name_refuses_invalid_course() {
    let home = TempDir::new().unwrap();
    evalgen(home.path())
        .args(["name", "--first", "John", "--semester", "fall"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn generate_comment_sheet() {
    let home = TempDir::new().unwrap();
    let questions = questions(home.path());

    evalgen(home.path())
        .arg("generate")
        .args(COURSE)
        .args(["--comment-sheet", "--save-dir", "evals", "--questions"])
        .arg(&questions)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote comment sheet"));

    let sheet = fs::read_to_string(home.path().join("evals").join(COMMENT_SHEET)).unwrap();
    assert!(sheet.starts_with("Student Feedback to Instructor"));
    assert!(sheet.contains("What should change?"));
    assert!(sheet.contains("CST 123"));
}

#[test]
fn generate_asks_before_overwriting() {
    let home = TempDir::new().unwrap();
    let questions = questions(home.path());
    let run = |extra: &[&str], stdin: &str| {
        evalgen(home.path())
            .arg("generate")
            .args(COURSE)
            .args(["--comment-sheet", "--save-dir", "."])
            .arg("--questions")
            .arg(&questions)
            .args(extra)
            .write_stdin(stdin)
            .assert()
    };

    run(&[], "").success();
    let sheet = home.path().join(COMMENT_SHEET);
    fs::write(&sheet, "hand edited").unwrap();

    run(&[], "n\n")
        .code(2)
        .stdout(predicate::str::contains("Overwrite it?"))
        .stderr(predicate::str::contains("Operation cancelled"));
    assert_eq!(fs::read_to_string(&sheet).unwrap(), "hand edited");

    run(&[], "y\n").success();
    assert_ne!(fs::read_to_string(&sheet).unwrap(), "hand edited");

    fs::write(&sheet, "hand edited").unwrap();
    run(&["--yes"], "").success();
    assert_ne!(fs::read_to_string(&sheet).unwrap(), "hand edited");
}

#[test]
fn quiet_generate_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    let questions = questions(home.path());
    fs::write(home.path().join(COMMENT_SHEET), "existing").unwrap();

    evalgen(home.path())
        .args(["--quiet", "generate"])
        .args(COURSE)
        .args(["--comment-sheet", "--save-dir", "."])
        .arg("--questions")
        .arg(&questions)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn generate_without_questions_is_not_found() {
    let home = TempDir::new().unwrap();
    evalgen(home.path())
        .arg("generate")
        .args(COURSE)
        .args(["--comment-sheet", "--save-dir", ".", "--questions", "missing.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Evaluation questions not found"));
}

#[test]
fn generate_with_nothing_selected_fails() {
    let home = TempDir::new().unwrap();
    evalgen(home.path())
        .arg("generate")
        .args(COURSE)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No documents selected"));
}

#[test]
fn invalid_generate_writes_nothing() {
    let home = TempDir::new().unwrap();
    let questions = questions(home.path());

    evalgen(home.path())
        .args(["generate", "--semester", "fall", "--comment-sheet", "--save-dir", "out"])
        .arg("--questions")
        .arg(&questions)
        .assert()
        .code(2);

    assert!(!home.path().join("out").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let home = TempDir::new().unwrap();
    evalgen(home.path())
        .arg("generate")
        .args(COURSE)
        .args(["--comment-sheet", "--save-dir", "out", "--dry-run"])
        .args(["--spreadsheet", "new", "--spreadsheet-dir", "."])
        .args(["--spreadsheet-name", "fall"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains(COMMENT_SHEET))
        .stdout(predicate::str::contains("fall.csv"));

    assert!(!home.path().join("out").exists());
    assert!(!home.path().join("fall.csv").exists());
}

#[test]
fn spreadsheet_is_created_then_appended() {
    let home = TempDir::new().unwrap();

    evalgen(home.path())
        .arg("generate")
        .args(COURSE)
        .args(SUPPORT)
        .args(["--spreadsheet", "new", "--spreadsheet-dir", "."])
        .args(["--spreadsheet-name", "fall"])
        .assert()
        .success();

    evalgen(home.path())
        .args([
            "generate", "--first", "Mary", "--last", "Jones", "--subject", "mth", "--course",
            "201", "--section", "a1", "--semester", "winter", "--year", "2015",
        ])
        .args(["--spreadsheet", "existing", "--spreadsheet-file", "fall.csv"])
        .assert()
        .success();

    let csv = fs::read_to_string(home.path().join("fall.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Last Name,First Name"));
    assert_eq!(lines[1], "Smith,John,CST,123,WN123,Fall,2014,Jane Doe,4021,B12");
    assert_eq!(lines[2], "Jones,Mary,MTH,201,A1,Winter,2015,,,");
}

#[test]
fn missing_existing_spreadsheet_writes_nothing() {
    let home = TempDir::new().unwrap();
    let questions = questions(home.path());

    evalgen(home.path())
        .arg("generate")
        .args(COURSE)
        .args(["--comment-sheet", "--save-dir", "evals", "--questions"])
        .arg(&questions)
        .args(["--spreadsheet", "existing", "--spreadsheet-file", "missing.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Spreadsheet not found"));

    assert!(!home.path().join("evals").exists());
    assert!(!home.path().join("missing.csv").exists());
}

#[test]
fn oit_sheet_location_comes_from_environment() {
    let home = TempDir::new().unwrap();
    let target = home.path().join("scans").join("OITScanSheet.docx");

    evalgen(home.path())
        .env("EVALGEN_PATHS__OIT_SHEET", &target)
        .arg("generate")
        .args(COURSE)
        .args(SUPPORT)
        .arg("--oit-sheet")
        .assert()
        .success();

    let sheet = fs::read_to_string(target.with_extension("txt")).unwrap();
    assert!(sheet.starts_with("OIT Scan Cover Sheet"));
    assert!(sheet.contains("Jane Doe"));
    assert!(sheet.contains("Date of Request:"));
}

#[test]
fn generate_json_reports_written_files() {
    let home = TempDir::new().unwrap();
    let assert = evalgen(home.path())
        .args(["--output-format", "json", "generate"])
        .args(COURSE)
        .args(["--spreadsheet", "new", "--spreadsheet-dir", "."])
        .args(["--spreadsheet-name", "fall.csv"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["written"][0]["kind"], "new_spreadsheet");
    assert!(json["written"][0]["path"].as_str().unwrap().ends_with("fall.csv"));
}

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn focusflow_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("focusflow").expect("Failed to find focusflow binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Pulls the first plan ID out of command output.
fn plan_id_from(output: &[u8]) -> String {
    let text = String::from_utf8_lossy(output);
    text.split_whitespace()
        .find(|word| word.starts_with("plan-"))
        .map(|word| word.trim_end_matches(['.', '`']).to_string())
        .expect("No plan ID in output")
}

/// Writes a two-block plan of one minute each and imports it.
fn import_short_plan(temp_dir: &TempDir, db_path: &Path) -> String {
    let file = temp_dir.path().join("short.json");
    std::fs::write(
        &file,
        r#"{
            "task": "Flashcards",
            "mode": "study",
            "plan": [
                {"title": "Warm-up", "minutes": 1, "details": "Skim the deck", "difficulty": "easy"},
                {"title": "Drill", "minutes": 1, "details": "Hard cards only", "difficulty": "hard"}
            ]
        }"#,
    )
    .expect("Failed to write plan file");

    let output = focusflow_cmd(db_path)
        .args(["plan", "import"])
        .arg(&file)
        .output()
        .expect("Failed to run import");
    assert!(output.status.success());
    plan_id_from(&output.stdout)
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("focusflow")
        .expect("Failed to find focusflow binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn test_cli_history_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    focusflow_cmd(&db_path)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("# History"))
        .stdout(predicate::str::contains("No past plans yet."));
}

#[test]
fn test_cli_default_command_lists_history() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    focusflow_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No past plans yet."));
}

#[test]
fn test_cli_generate_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    focusflow_cmd(&db_path)
        .args(["plan", "generate", "Essay draft", "--minutes", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Created plan plan-"))
        .stdout(predicate::str::contains("# Essay draft"))
        .stdout(predicate::str::contains("- Budget: 60 min"))
        .stdout(predicate::str::contains("**Warm-up** (5 min"))
        .stdout(predicate::str::contains("(45 min"));
}

#[test]
fn test_cli_generate_chill_coding_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    focusflow_cmd(&db_path)
        .args([
            "plan",
            "new",
            "Refactor parser",
            "-m",
            "60",
            "--mode",
            "coding",
            "--intensity",
            "chill",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Mode: Coding"))
        .stdout(predicate::str::contains("- Intensity: Chill"))
        .stdout(predicate::str::contains("6. "));
}

#[test]
fn test_cli_generate_rejects_zero_minutes() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    focusflow_cmd(&db_path)
        .args(["plan", "generate", "Essay", "--minutes", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("total_minutes"));
}

#[test]
fn test_cli_generate_rejects_unknown_mode() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    focusflow_cmd(&db_path)
        .args(["plan", "generate", "Essay", "--mode", "gaming"])
        .assert()
        .failure();
}

#[test]
fn test_cli_history_lists_generated_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    for task in ["First task", "Second task"] {
        focusflow_cmd(&db_path)
            .args(["plan", "generate", task])
            .assert()
            .success();
    }

    let output = focusflow_cmd(&db_path)
        .args(["history", "--limit", "5"])
        .output()
        .expect("Failed to run history");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("# Recent plans"));
    let first = stdout.find("First task").expect("first plan missing");
    let second = stdout.find("Second task").expect("second plan missing");
    assert!(second < first, "newest plan should be listed first");
}

#[test]
fn test_cli_show_missing_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    focusflow_cmd(&db_path)
        .args(["plan", "show", "plan-missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plan-missing"));
}

#[test]
fn test_cli_import_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let id = import_short_plan(&temp_dir, &db_path);

    focusflow_cmd(&db_path)
        .args(["plan", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Flashcards"))
        .stdout(predicate::str::contains("- Budget: 2 min"))
        .stdout(predicate::str::contains("No reflections yet."));
}

#[test]
fn test_cli_import_rejects_empty_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let file = temp_dir.path().join("empty.json");
    std::fs::write(&file, r#"{"task": "Nothing", "plan": []}"#).unwrap();

    focusflow_cmd(&db_path)
        .args(["plan", "import"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed plan"));
}

#[test]
fn test_cli_run_with_flags() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = import_short_plan(&temp_dir, &db_path);

    focusflow_cmd(&db_path)
        .args([
            "run",
            &id,
            "--tick-millis",
            "1",
            "--mood",
            "great",
            "--notes",
            "Got through the deck",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Block 1 of 2: Warm-up"))
        .stdout(predicate::str::contains("## Block 2 of 2: Drill"))
        .stdout(predicate::str::contains("# Session complete"))
        .stdout(predicate::str::contains("100% complete"))
        .stdout(predicate::str::contains("Success: Reflection saved."));

    focusflow_cmd(&db_path)
        .args(["plan", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Felt **great**"))
        .stdout(predicate::str::contains("Got through the deck"));
}

#[test]
fn test_cli_run_prompts_for_reflection() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = import_short_plan(&temp_dir, &db_path);

    focusflow_cmd(&db_path)
        .args(["run", &id, "--tick-millis", "1"])
        .write_stdin("meh\nok\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please answer great, ok or tired."))
        .stdout(predicate::str::contains("Felt **ok**"));
}

#[test]
fn test_cli_run_skips_reflection_at_end_of_input() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = import_short_plan(&temp_dir, &db_path);

    focusflow_cmd(&db_path)
        .args(["run", &id, "--tick-millis", "1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Skipped: No mood given, reflection not saved.",
        ));
}

#[test]
fn test_cli_run_without_reflection() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = import_short_plan(&temp_dir, &db_path);

    focusflow_cmd(&db_path)
        .args(["run", &id, "--tick-millis", "1", "--no-reflect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Session complete"))
        .stdout(predicate::str::contains("Reflection").not());
}

#[test]
fn test_cli_run_missing_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    focusflow_cmd(&db_path)
        .args(["run", "plan-missing", "--tick-millis", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load plan"));
}

#[test]
fn test_cli_no_reflect_conflicts_with_mood() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    focusflow_cmd(&db_path)
        .args(["run", "plan-1", "--no-reflect", "--mood", "ok"])
        .assert()
        .failure();
}

#[test]
fn test_cli_summary_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    focusflow_cmd(&db_path)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Weekly summary"))
        .stdout(predicate::str::contains("No data yet"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and an isolated
/// config directory
fn ff_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ff").expect("Failed to find ff binary");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.arg("--no-color");
    cmd
}

/// Runs a scripted session with the manual clock
fn run_script(config_home: &TempDir, script: &str) -> assert_cmd::assert::Assert {
    ff_cmd(config_home)
        .args(["run", "--manual-clock"])
        .write_stdin(script)
        .assert()
}

#[test]
fn test_settings_defaults() {
    let temp_dir = create_cli_test_environment();

    ff_cmd(&temp_dir)
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work\": 25"))
        .stdout(predicate::str::contains("\"short_break\": 5"))
        .stdout(predicate::str::contains("\"auto_check_tasks\": false"));
}

#[test]
fn test_settings_file_is_loaded_and_clamped() {
    let temp_dir = create_cli_test_environment();
    let path = temp_dir.path().join("custom.json");
    std::fs::write(&path, r#"{ "durations": { "work": 90 }, "auto_switch_tasks": true }"#)
        .expect("Failed to write settings file");

    ff_cmd(&temp_dir)
        .args(["--settings-file", path.to_str().unwrap(), "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work\": 60"))
        .stdout(predicate::str::contains("\"auto_switch_tasks\": true"));
}

#[test]
fn test_missing_settings_file_fails() {
    let temp_dir = create_cli_test_environment();
    let path = temp_dir.path().join("nope.json");

    ff_cmd(&temp_dir)
        .args(["--settings-file", path.to_str().unwrap(), "settings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn test_settings_write_creates_default_file() {
    let temp_dir = create_cli_test_environment();

    ff_cmd(&temp_dir)
        .args(["settings", "--write"])
        .assert()
        .success();

    let written = temp_dir.path().join("focusflow").join("settings.json");
    let contents = std::fs::read_to_string(written).expect("settings file written");
    assert!(contents.contains("\"long_break\": 15"));
}

#[test]
fn test_run_shows_initial_status() {
    let temp_dir = create_cli_test_environment();

    run_script(&temp_dir, "")
        .success()
        .stdout(predicate::str::contains("Focus 25:00 (paused, session 0/4, 0% done)"))
        .stdout(predicate::str::contains("No active task"));
}

#[test]
fn test_add_and_list_tasks() {
    let temp_dir = create_cli_test_environment();

    run_script(
        &temp_dir,
        "add \"Write report\" -p high -e 2\nadd Groceries\nlist --sort priority --desc\nquit\n",
    )
    .success()
    .stdout(predicate::str::contains("Created task with ID: 1"))
    .stdout(predicate::str::contains("- [ ] **1. Write report** (▲ high, 0/2 pomodoros)"))
    .stdout(predicate::str::contains("- [ ] **2. Groceries** (■ medium, 0/1 pomodoros)"));
}

#[test]
fn test_seeded_tasks() {
    let temp_dir = create_cli_test_environment();

    ff_cmd(&temp_dir)
        .args(["run", "--manual-clock", "--task", "Alpha", "--task", "Beta"])
        .write_stdin("ls\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("**1. Alpha**"))
        .stdout(predicate::str::contains("**2. Beta**"));
}

#[test]
fn test_full_work_phase_with_auto_check() {
    let temp_dir = create_cli_test_environment();
    let script = "\
add T1
active 1
set --work 1 --auto-check true
start
tick 60
list --status completed
stats
quit
";

    run_script(&temp_dir, script)
        .success()
        .stdout(predicate::str::contains("**Focus** finished."))
        .stdout(predicate::str::contains(
            "Credited a pomodoro to task 1 and marked it completed",
        ))
        .stdout(predicate::str::contains("Short Break 05:00 (paused, session 1/4, 0% done)"))
        .stdout(predicate::str::contains("- [x] **1. T1**"))
        .stdout(predicate::str::contains("- Total focus time: 1m"))
        .stdout(predicate::str::contains("- Tasks completed: 1/1 (100.0%)"));
}

#[test]
fn test_pause_freezes_timer() {
    let temp_dir = create_cli_test_environment();

    run_script(&temp_dir, "start\ntick 5\npause\ntick 30\nstatus\n")
        .success()
        .stdout(predicate::str::contains("Focus 24:55 (paused"));
}

#[test]
fn test_mode_switch_and_skip() {
    let temp_dir = create_cli_test_environment();

    run_script(&temp_dir, "mode long\nskip\n")
        .success()
        .stdout(predicate::str::contains("Long Break 15:00 (paused, session 0/4"))
        .stdout(predicate::str::contains("**Long Break** finished."))
        .stdout(predicate::str::contains("Focus 25:00 (paused, session 0/4"));
}

#[test]
fn test_skipped_work_phase_earns_no_pomodoro() {
    let temp_dir = create_cli_test_environment();

    run_script(&temp_dir, "add Essay\nactive 1\nstart\ntick 10\nskip\nlist\n")
        .success()
        .stdout(predicate::str::contains("**Focus** finished."))
        .stdout(predicate::str::contains("Credited a pomodoro").not())
        .stdout(predicate::str::contains("Short Break 05:00 (paused, session 1/4"))
        .stdout(predicate::str::contains("**1. Essay** (■ medium, 0/1 pomodoros) ⏵ *active*"));
}

#[test]
fn test_category_delete_cascades() {
    let temp_dir = create_cli_test_environment();
    let script = "\
category add Work
add Report -c 1
add Groceries
category delete 1
list
";

    run_script(&temp_dir, script)
        .success()
        .stdout(predicate::str::contains("Created category with ID: 1"))
        .stdout(predicate::str::contains("Deleted category 'Work' (ID: 1) and 1 task(s) in it"))
        .stdout(predicate::str::contains("**2. Groceries**"))
        .stdout(predicate::str::contains("**1. Report**").count(1));
}

#[test]
fn test_unknown_ids_are_ignored() {
    let temp_dir = create_cli_test_environment();

    run_script(&temp_dir, "delete 42\nactive 42\nadd \"   \"\n")
        .success()
        .stdout(predicate::str::contains("Nothing changed: no task with ID 42"))
        .stdout(predicate::str::contains(
            "Nothing changed: only existing, incomplete tasks can be active",
        ))
        .stdout(predicate::str::contains("Nothing changed: task title must not be blank"));
}

#[test]
fn test_bad_command_keeps_session_alive() {
    let temp_dir = create_cli_test_environment();

    run_script(&temp_dir, "frobnicate\nadd \"open quote\nlist\n")
        .success()
        .stderr(predicate::str::contains("frobnicate"))
        .stderr(predicate::str::contains("unterminated quote"))
        .stdout(predicate::str::contains("No tasks found."));
}

//! Integration tests for the portfolio CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd. Every
//! test points `--store` at a storage file inside its own temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a portfolio command bound to a temp storage file
fn portfolio(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("portfolio").unwrap();
    cmd.current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join("config"))
        .env_remove("PORTFOLIO_STORE")
        .env_remove("PORTFOLIO_FORMAT")
        .arg("--store")
        .arg(tmp.path().join("storage.json"));
    cmd
}

/// Helper to add a project and return its id
fn add_project(tmp: &TempDir, student: &str, title: &str) -> String {
    let output = portfolio(tmp)
        .args(["-q", "new", "--student", student, "--title", title])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Read the stored collection straight from the storage file
fn stored_projects(tmp: &TempDir) -> Vec<serde_json::Value> {
    let content = fs::read_to_string(tmp.path().join("storage.json")).unwrap();
    let area: serde_json::Value = serde_json::from_str(&content).unwrap();
    let projects = area["projects"].as_str().unwrap();
    serde_json::from_str(projects).unwrap()
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    Command::cargo_bin("portfolio")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("student project"));
}

#[test]
fn test_version_displays() {
    Command::cargo_bin("portfolio")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio"));
}

#[test]
fn test_unknown_command_fails() {
    let tmp = TempDir::new().unwrap();
    portfolio(&tmp)
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_completions_generate() {
    let tmp = TempDir::new().unwrap();
    portfolio(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio"));
}

// ============================================================================
// New / List / Show
// ============================================================================

#[test]
fn test_list_empty_collection() {
    let tmp = TempDir::new().unwrap();
    portfolio(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found"));

    portfolio(&tmp)
        .args(["list", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_new_persists_record() {
    let tmp = TempDir::new().unwrap();

    portfolio(&tmp)
        .args([
            "new",
            "--student",
            "Ana Lee",
            "--title",
            "Weather App",
            "--description",
            "Forecasts",
            "--date",
            "2024-05-01",
            "--link",
            "https://example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project added successfully"));

    let projects = stored_projects(&tmp);
    assert_eq!(projects.len(), 1);
    let record = projects[0].as_object().unwrap();
    assert_eq!(record.len(), 6);
    assert_eq!(record["studentName"], "Ana Lee");
    assert_eq!(record["projectTitle"], "Weather App");
    assert_eq!(record["description"], "Forecasts");
    assert_eq!(record["date"], "2024-05-01");
    assert_eq!(record["link"], "https://example.com");
    assert!(!record["id"].as_str().unwrap().is_empty());
}

#[test]
fn test_new_optional_fields_stored_as_empty() {
    let tmp = TempDir::new().unwrap();
    add_project(&tmp, "Bo", "Bot");

    let projects = stored_projects(&tmp);
    assert_eq!(projects[0]["description"], "");
    assert_eq!(projects[0]["date"], "");
    assert_eq!(projects[0]["link"], "");
}

#[test]
fn test_new_requires_student_and_title() {
    let tmp = TempDir::new().unwrap();

    portfolio(&tmp)
        .args(["new", "--title", "Bot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project not added"));

    portfolio(&tmp)
        .args(["new", "--student", "Bo", "--title", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project title is required"));

    assert!(!tmp.path().join("storage.json").exists());
}

#[test]
fn test_new_rejects_invalid_date() {
    let tmp = TempDir::new().unwrap();
    portfolio(&tmp)
        .args(["new", "--student", "Bo", "--title", "Bot", "--date", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn test_new_assigns_distinct_ids() {
    let tmp = TempDir::new().unwrap();
    let first = add_project(&tmp, "Bo", "Bot");
    let second = add_project(&tmp, "Cy", "Game");

    assert!(!first.is_empty());
    assert_ne!(first, second);
    assert_eq!(stored_projects(&tmp).len(), 2);
}

#[test]
fn test_list_preserves_insertion_order() {
    let tmp = TempDir::new().unwrap();
    let first = add_project(&tmp, "Bo", "Bot");
    let second = add_project(&tmp, "Cy", "Game");

    portfolio(&tmp)
        .args(["list", "-f", "id"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n{}\n", first, second)));

    portfolio(&tmp)
        .args(["list", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));
}

#[test]
fn test_show_by_short_id() {
    let tmp = TempDir::new().unwrap();
    add_project(&tmp, "Bo", "Bot");
    add_project(&tmp, "Cy", "Game");

    portfolio(&tmp).arg("list").assert().success();

    portfolio(&tmp)
        .args(["show", "@2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Game"))
        .stdout(predicate::str::contains("Cy"));
}

#[test]
fn test_show_unknown_reference_fails() {
    let tmp = TempDir::new().unwrap();
    add_project(&tmp, "Bo", "Bot");

    portfolio(&tmp)
        .args(["show", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No project found"));
}

#[test]
fn test_malformed_storage_loads_as_empty() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("storage.json"),
        r#"{"projects": "this is not json"}"#,
    )
    .unwrap();

    portfolio(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found"));
}

#[test]
fn test_legacy_records_are_listed() {
    let tmp = TempDir::new().unwrap();
    let projects = r#"[{"id":"1712345678901","studentName":"Ana Lee","projectTitle":"Weather App","description":"","date":"","link":""}]"#;
    let area = serde_json::json!({ "projects": projects, "darkMode": "false" });
    fs::write(tmp.path().join("storage.json"), area.to_string()).unwrap();

    portfolio(&tmp)
        .args(["show", "1712345678901", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"studentName\": \"Ana Lee\""));
}

// ============================================================================
// Edit / Delete
// ============================================================================

#[test]
fn test_edit_updates_in_place() {
    let tmp = TempDir::new().unwrap();
    let first = add_project(&tmp, "Bo", "Bot");
    let second = add_project(&tmp, "Cy", "Game");

    portfolio(&tmp)
        .args(["edit", &first, "--title", "Better Bot", "--link", "https://bot.dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project updated successfully"));

    let projects = stored_projects(&tmp);
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["id"], first.as_str());
    assert_eq!(projects[0]["projectTitle"], "Better Bot");
    assert_eq!(projects[0]["studentName"], "Bo");
    assert_eq!(projects[0]["link"], "https://bot.dev");
    assert_eq!(projects[1]["id"], second.as_str());
}

#[test]
fn test_edit_rejects_blank_required_field() {
    let tmp = TempDir::new().unwrap();
    let id = add_project(&tmp, "Bo", "Bot");

    portfolio(&tmp)
        .args(["edit", &id, "--student", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project not updated"));

    assert_eq!(stored_projects(&tmp)[0]["studentName"], "Bo");
}

#[test]
fn test_edit_without_changes_fails() {
    let tmp = TempDir::new().unwrap();
    let id = add_project(&tmp, "Bo", "Bot");

    portfolio(&tmp)
        .args(["edit", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_delete_then_reload() {
    let tmp = TempDir::new().unwrap();
    let first = add_project(&tmp, "Bo", "Bot");
    let second = add_project(&tmp, "Cy", "Game");

    portfolio(&tmp)
        .args(["delete", &first, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project deleted successfully"));

    let projects = stored_projects(&tmp);
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["id"], second.as_str());
    assert_eq!(projects[0]["studentName"], "Cy");
}

#[test]
fn test_delete_twice_is_noop() {
    let tmp = TempDir::new().unwrap();
    let id = add_project(&tmp, "Bo", "Bot");
    add_project(&tmp, "Cy", "Game");

    portfolio(&tmp).args(["delete", &id, "--yes"]).assert().success();
    let after_once = fs::read_to_string(tmp.path().join("storage.json")).unwrap();

    portfolio(&tmp)
        .args(["delete", &id, "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing deleted"));
    let after_twice = fs::read_to_string(tmp.path().join("storage.json")).unwrap();

    assert_eq!(after_once, after_twice);
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_case_insensitive() {
    let tmp = TempDir::new().unwrap();
    let ana = add_project(&tmp, "Ana Lee", "Weather App");
    add_project(&tmp, "Bo", "Bot");

    portfolio(&tmp)
        .args(["search", "ana", "-f", "id"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", ana)));

    portfolio(&tmp)
        .args(["search", "WEATHER", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));
}

#[test]
fn test_search_no_match_differs_from_blank_query() {
    let tmp = TempDir::new().unwrap();
    add_project(&tmp, "Ana Lee", "Weather App");

    portfolio(&tmp)
        .args(["search", "xyz-no-match"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching projects found"));

    portfolio(&tmp)
        .args(["search", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Empty search term"));
}

#[test]
fn test_search_results_get_short_ids() {
    let tmp = TempDir::new().unwrap();
    add_project(&tmp, "Bo", "Bot");
    add_project(&tmp, "Cy", "Robot Game");

    portfolio(&tmp)
        .args(["search", "robot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search Results"));

    portfolio(&tmp)
        .args(["show", "@1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Robot Game"));
}

// ============================================================================
// Export / Theme / Config
// ============================================================================

#[test]
fn test_export_to_stdout() {
    let tmp = TempDir::new().unwrap();
    add_project(&tmp, "Bo", "Bot");

    portfolio(&tmp)
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Student Name,Project Title,Description,Date,Link\n\"Bo\",\"Bot\",\"\",\"\",\"\"\n",
        ));
}

#[test]
fn test_export_default_file() {
    let tmp = TempDir::new().unwrap();
    add_project(&tmp, "Bo", "Bot");
    add_project(&tmp, "Cy", "Game");

    portfolio(&tmp)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    let csv = fs::read_to_string(tmp.path().join("student_projects.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Student Name,Project Title,Description,Date,Link");
    assert!(lines[1].starts_with("\"Bo\""));
    assert!(lines[2].starts_with("\"Cy\""));
}

#[test]
fn test_theme_toggle() {
    let tmp = TempDir::new().unwrap();

    portfolio(&tmp)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::diff("light\n"));

    portfolio(&tmp).args(["theme", "toggle"]).assert().success();

    portfolio(&tmp)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::diff("dark\n"));

    let content = fs::read_to_string(tmp.path().join("storage.json")).unwrap();
    let area: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(area["darkMode"], "true");
}

#[test]
fn test_theme_does_not_touch_projects() {
    let tmp = TempDir::new().unwrap();
    add_project(&tmp, "Bo", "Bot");

    portfolio(&tmp).args(["theme", "dark"]).assert().success();

    assert_eq!(stored_projects(&tmp).len(), 1);
}

#[test]
fn test_config_show_reports_store() {
    let tmp = TempDir::new().unwrap();
    portfolio(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage.json"))
        .stdout(predicate::str::contains("student_projects.csv"));
}

#[test]
fn test_store_from_environment() {
    let tmp = TempDir::new().unwrap();
    let store = tmp.path().join("env-store.json");

    Command::cargo_bin("portfolio")
        .unwrap()
        .current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join("config"))
        .env_remove("PORTFOLIO_FORMAT")
        .env("PORTFOLIO_STORE", &store)
        .args(["new", "--student", "Bo", "--title", "Bot"])
        .assert()
        .success();

    assert!(store.exists());
}

#[test]
fn test_user_config_read_from_isolated_config_dir() {
    let tmp = TempDir::new().unwrap();
    let id = add_project(&tmp, "Bo", "Bot");

    portfolio(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 project(s) found"));

    let config_dir = tmp.path().join("config").join("portfolio");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yaml"), "default_format: id\n").unwrap();

    portfolio(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", id)));
}

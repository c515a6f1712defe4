//! End-to-end tests for the `atlas` binary, offline against a JSON fixture

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn fixture() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/countries.json")
}

/// Command isolated from the user's config files and environment
fn atlas(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("atlas").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env_remove("RUST_LOG")
        .env_remove("ATLAS_API_URL")
        .env_remove("ATLAS_TIMEOUT_SECS")
        .env_remove("ATLAS_ENV");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

fn common_names(value: &Value) -> Vec<String> {
    value["countries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"]["common"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// list
// ============================================================================

#[test]
fn test_list_cards() {
    let dir = TempDir::new().unwrap();
    atlas(&dir)
        .args(["list", "--input", fixture()])
        .assert()
        .success()
        .stdout(predicate::str::contains("United States"))
        .stdout(predicate::str::contains("331,002,651"))
        .stdout(predicate::str::contains("Washington, D.C."))
        .stdout(predicate::str::contains("Antarctica"))
        .stdout(predicate::str::contains("N/A"))
        .stdout(predicate::str::contains("Page 1 of 1"));
}

#[test]
fn test_list_default_sort_is_by_name() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(atlas(&dir).args(["list", "--input", fixture(), "--format", "json"]));

    assert_eq!(
        common_names(&value),
        vec![
            "Antarctica",
            "Belgium",
            "Chile",
            "France",
            "Germany",
            "Japan",
            "Luxembourg",
            "Netherlands",
            "South Africa",
            "United States",
        ]
    );
    assert_eq!(value["query"], "");
    assert_eq!(value["pagination"]["totalItems"], 10);
}

#[test]
fn test_list_fuzzy_search() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(atlas(&dir).args([
        "list", "--input", fixture(), "--search", "jermny", "--format", "json",
    ]));

    assert_eq!(common_names(&value), vec!["Germany"]);
    assert_eq!(value["query"], "search=jermny");
}

#[test]
fn test_list_region_population_desc() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(atlas(&dir).args([
        "list",
        "--input",
        fixture(),
        "--region",
        "Europe",
        "--sort-by",
        "population",
        "--order",
        "desc",
        "--format",
        "json",
    ]));

    assert_eq!(
        common_names(&value),
        vec!["Germany", "France", "Netherlands", "Belgium", "Luxembourg"]
    );
    assert_eq!(value["query"], "region=Europe&sortBy=population&sortOrder=desc");
}

#[test]
fn test_list_pagination() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(atlas(&dir).args([
        "list", "--input", fixture(), "--per-page", "3", "--page", "2", "--format", "json",
    ]));

    assert_eq!(common_names(&value), vec!["France", "Germany", "Japan"]);
    assert_eq!(value["pagination"]["currentPage"], 2);
    assert_eq!(value["pagination"]["totalPages"], 4);
    assert_eq!(value["query"], "page=2");
}

#[test]
fn test_list_page_past_end_is_empty() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(atlas(&dir).args([
        "list", "--input", fixture(), "--page", "9", "--format", "json",
    ]));

    assert!(common_names(&value).is_empty());
    assert_eq!(value["pagination"]["totalPages"], 1);
}

#[test]
fn test_list_sanitizes_shared_query() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(atlas(&dir).args([
        "list",
        "--input",
        fixture(),
        "--query",
        "?sortBy=bogus&page=-5",
        "--format",
        "json",
    ]));

    assert_eq!(value["pagination"]["currentPage"], 1);
    assert_eq!(value["query"], "");
    assert_eq!(common_names(&value)[0], "Antarctica");
}

#[test]
fn test_list_no_matches() {
    let dir = TempDir::new().unwrap();
    atlas(&dir)
        .args(["list", "--input", fixture(), "--search", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No countries match"));
}

#[test]
fn test_list_rejects_unknown_sort_field() {
    let dir = TempDir::new().unwrap();
    atlas(&dir)
        .args(["list", "--input", fixture(), "--sort-by", "height"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("E6001"));
}

#[test]
fn test_list_missing_input_file() {
    let dir = TempDir::new().unwrap();
    atlas(&dir)
        .args(["list", "--input", "does-not-exist.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn test_list_malformed_input_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    atlas(&dir)
        .args(["list", "--input", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array"));
}

// ============================================================================
// show
// ============================================================================

#[test]
fn test_show_detail_with_borders() {
    let dir = TempDir::new().unwrap();
    atlas(&dir)
        .args(["show", "belgium", "--input", fixture()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kingdom of Belgium"))
        .stdout(predicate::str::contains("Belgique"))
        .stdout(predicate::str::contains("11,555,997"))
        .stdout(predicate::str::contains("Western Europe"))
        .stdout(predicate::str::contains("Euro (€)"))
        .stdout(predicate::str::contains("Luxembourg"))
        .stdout(predicate::str::contains("Netherlands"));
}

#[test]
fn test_show_json_borders_in_order() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(atlas(&dir).args([
        "show", "Belgium", "--input", fixture(), "--format", "json",
    ]));

    let codes: Vec<&str> = value["borders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["cca3"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["FRA", "DEU", "LUX", "NLD"]);
    assert_eq!(value["country"]["cca3"], "BEL");
}

#[test]
fn test_show_unknown_country() {
    let dir = TempDir::new().unwrap();
    atlas(&dir)
        .args(["show", "Atlantis", "--input", fixture()])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Country not found: Atlantis"));
}

#[test]
fn test_show_unknown_country_json_report() {
    let dir = TempDir::new().unwrap();
    atlas(&dir)
        .args(["show", "Atlantis", "--input", fixture(), "--format", "json"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("\"code_str\": \"E4004\""));
}

// ============================================================================
// regions / query
// ============================================================================

#[test]
fn test_regions_counts() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(atlas(&dir).args(["regions", "--input", fixture(), "--format", "json"]));

    assert_eq!(value["total"], 10);
    let regions: Vec<(String, u64)> = value["regions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| (r["region"].as_str().unwrap().to_string(), r["count"].as_u64().unwrap()))
        .collect();
    assert_eq!(
        regions,
        vec![
            ("Africa".to_string(), 1),
            ("Americas".to_string(), 2),
            ("Antarctic".to_string(), 1),
            ("Asia".to_string(), 1),
            ("Europe".to_string(), 5),
        ]
    );
}

#[test]
fn test_query_canonical_form() {
    let dir = TempDir::new().unwrap();
    atlas(&dir)
        .args(["query", "?page=3&search=ger&sortOrder=asc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("search=ger&page=3"));
}

#[test]
fn test_query_json_sanitizes() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(atlas(&dir).args(["query", "sortBy=bogus&page=-5", "--format", "json"]));

    assert_eq!(value["state"]["currentPage"], 1);
    assert_eq!(value["state"]["filters"]["sortBy"], "name");
    assert_eq!(value["params"]["sortBy"], "bogus");
    assert_eq!(value["query"], "");
}

// ============================================================================
// configuration
// ============================================================================

#[test]
fn test_config_in_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("atlas.toml"), "[browse]\nitems_per_page = 2\n").unwrap();

    let value = json_stdout(atlas(&dir).args(["list", "--input", fixture(), "--format", "json"]));
    assert_eq!(common_names(&value).len(), 2);
    assert_eq!(value["pagination"]["totalPages"], 5);
}

#[test]
fn test_missing_explicit_config() {
    let dir = TempDir::new().unwrap();
    atlas(&dir)
        .args(["--config", "nope.toml", "query", "search=x"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E3001"));
}

#[test]
fn test_invalid_config_value() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("atlas.toml"), "[browse]\nfuzzy_threshold = 2.0\n").unwrap();

    atlas(&dir)
        .args(["query", "search=x"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("browse.fuzzy_threshold"));
}

//! CLI integration tests for Basemap.
//!
//! These tests verify the full CLI workflow from workspace creation
//! through listing and converting vector data.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the basemap binary command.
fn basemap() -> Command {
    Command::cargo_bin("basemap").unwrap()
}

/// Create a temporary directory for test workspaces.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

const PARCELS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [153.02, -27.47] },
            "properties": { "name": "lot-1", "area": 421.5 }
        },
        {
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [153.03, -27.48] },
            "properties": { "name": "lot-2", "area": 380.0 }
        }
    ]
}"#;

/// Create a workspace named `name` under `root` and return its path.
fn create_workspace(root: &Path, name: &str) -> std::path::PathBuf {
    basemap()
        .args(["new", name])
        .current_dir(root)
        .assert()
        .success();
    root.join(name)
}

// ============================================================================
// basemap new
// ============================================================================

#[test]
fn test_new_creates_workspace_tree() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "survey");

    // Manifest and starter files
    assert!(ws.join("Basemap.toml").exists());
    assert!(ws.join("README.md").exists());
    assert!(ws.join("LICENSE").exists());
    assert!(ws.join(".gitignore").exists());
    assert!(ws.join("environment.yml").exists());
    assert!(ws.join(".github/workflows/test.yml").exists());
    assert!(ws.join("notebooks/analysis/vector_analysis.ipynb").exists());

    // Directory tree
    assert!(ws.join("data/raw/vector/shapefiles").is_dir());
    assert!(ws.join("data/raw/vector/geojson").is_dir());
    assert!(ws.join("data/raw/vector/other_formats").is_dir());
    assert!(ws.join("data/raw/raster/tiff").is_dir());
    assert!(ws.join("data/processed").is_dir());
    assert!(ws.join("output/figures").is_dir());

    // Manifest content
    let manifest = fs::read_to_string(ws.join("Basemap.toml")).unwrap();
    assert!(manifest.contains("name = \"survey\""));
}

#[test]
fn test_new_fails_if_directory_exists() {
    let tmp = temp_dir();
    fs::create_dir(tmp.path().join("existing")).unwrap();

    basemap()
        .args(["new", "existing"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_new_rejects_invalid_name() {
    let tmp = temp_dir();

    basemap()
        .args(["new", ".hidden"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("project name"));
}

// ============================================================================
// basemap init
// ============================================================================

#[test]
fn test_init_in_empty_directory() {
    let tmp = temp_dir();

    basemap()
        .args(["init", "--name", "inplace"])
        .current_dir(tmp.path())
        .assert()
        .success();

    assert!(tmp.path().join("Basemap.toml").exists());
    assert!(tmp.path().join("data/raw/vector/shapefiles").is_dir());
}

#[test]
fn test_init_fails_if_manifest_exists() {
    let tmp = temp_dir();
    fs::write(
        tmp.path().join("Basemap.toml"),
        "[project]\nname = \"test\"\n",
    )
    .unwrap();

    basemap()
        .args(["init"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ============================================================================
// basemap ensure
// ============================================================================

#[test]
fn test_ensure_recreates_missing_directories() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "repairme");

    let victim = ws.join("data/raw/vector/shapefiles");
    fs::remove_dir_all(&victim).unwrap();
    assert!(!victim.exists());

    basemap()
        .args(["ensure"])
        .current_dir(&ws)
        .assert()
        .success()
        .stderr(predicate::str::contains("missing"));

    assert!(victim.is_dir());
}

#[test]
fn test_ensure_is_idempotent() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "stable");

    for _ in 0..2 {
        basemap()
            .args(["ensure"])
            .current_dir(&ws)
            .assert()
            .success()
            .stderr(predicate::str::contains("already complete"));
    }
}

#[test]
fn test_ensure_fails_outside_workspace() {
    let tmp = temp_dir();

    basemap()
        .args(["ensure"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no manifest found"));
}

// ============================================================================
// basemap ls
// ============================================================================

#[test]
fn test_ls_empty_workspace() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "empty");

    basemap()
        .args(["ls"])
        .current_dir(&ws)
        .assert()
        .success()
        .stderr(predicate::str::contains("No vector files found"));
}

#[test]
fn test_ls_lists_files_by_category() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "inventory");

    fs::write(ws.join("data/raw/vector/shapefiles/roads.shp"), "").unwrap();
    fs::write(ws.join("data/raw/vector/geojson/parcels.geojson"), PARCELS).unwrap();
    fs::write(ws.join("data/raw/vector/other_formats/grid.gpkg"), "").unwrap();

    basemap()
        .args(["ls"])
        .current_dir(&ws)
        .assert()
        .success()
        .stdout(predicate::str::contains("shapefiles:"))
        .stdout(predicate::str::contains("data/raw/vector/shapefiles/roads.shp"))
        .stdout(predicate::str::contains("geojson:"))
        .stdout(predicate::str::contains("parcels.geojson"))
        .stdout(predicate::str::contains("other:"))
        .stdout(predicate::str::contains("grid.gpkg"));
}

// ============================================================================
// basemap convert
// ============================================================================

#[test]
fn test_convert_geojson_to_processed() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "conv");

    fs::write(ws.join("data/raw/vector/geojson/parcels.geojson"), PARCELS).unwrap();

    basemap()
        .args(["convert", "parcels.geojson", "--to", "geojson"])
        .current_dir(&ws)
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved"))
        .stderr(predicate::str::contains("2 features"));

    let out = ws.join("data/processed/parcels.geojson");
    assert!(out.is_file());
    let body = fs::read_to_string(out).unwrap();
    assert!(body.contains("lot-1"));
}

#[test]
fn test_convert_to_shapefile() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "shpconv");

    fs::write(ws.join("data/raw/vector/geojson/parcels.geojson"), PARCELS).unwrap();

    basemap()
        .args(["convert", "parcels.geojson", "--to", "shapefile", "--out", "lots"])
        .current_dir(&ws)
        .assert()
        .success()
        .stderr(predicate::str::contains("lots.shp"));

    assert!(ws.join("data/processed/lots.shp").is_file());
    assert!(ws.join("data/processed/lots.dbf").is_file());
}

#[test]
fn test_convert_uses_manifest_default_format() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "defaults");

    // The generated manifest sets default_format = "shapefile".
    fs::write(ws.join("data/raw/vector/geojson/parcels.geojson"), PARCELS).unwrap();

    basemap()
        .args(["convert", "parcels.geojson"])
        .current_dir(&ws)
        .assert()
        .success();

    assert!(ws.join("data/processed/parcels.shp").is_file());
}

#[test]
fn test_convert_missing_file_reports_not_found() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "nofile");

    basemap()
        .args(["convert", "missing.shp"])
        .current_dir(&ws)
        .assert()
        .failure()
        .stderr(predicate::str::contains("vector file not found: missing.shp"));
}

#[test]
fn test_convert_explicit_hint_skips_probing() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "hinted");

    // File lives in the shapefiles directory; an explicit geojson hint
    // must not probe its way to it.
    fs::write(ws.join("data/raw/vector/shapefiles/parcels.geojson"), PARCELS).unwrap();

    basemap()
        .args(["convert", "parcels.geojson", "--from", "geojson"])
        .current_dir(&ws)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    basemap()
        .args(["convert", "parcels.geojson", "--to", "geojson"])
        .current_dir(&ws)
        .assert()
        .success();
}

// ============================================================================
// basemap status
// ============================================================================

#[test]
fn test_status_reports_workspace() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "healthy");

    basemap()
        .args(["status"])
        .current_dir(&ws)
        .assert()
        .success()
        .stdout(predicate::str::contains("workspace: healthy"))
        .stdout(predicate::str::contains("data/raw/vector/shapefiles"))
        .stdout(predicate::str::contains("total files:"));
}

#[test]
fn test_status_warns_about_missing_directories() {
    let tmp = temp_dir();
    let ws = create_workspace(tmp.path(), "broken");

    fs::remove_dir_all(ws.join("data/raw/raster")).unwrap();

    basemap()
        .args(["status"])
        .current_dir(&ws)
        .assert()
        .success()
        .stdout(predicate::str::contains("missing"))
        .stderr(predicate::str::contains("basemap ensure"));
}

// ============================================================================
// Full workflow
// ============================================================================

#[test]
fn test_full_workflow() {
    let tmp = temp_dir();

    // 1. Create a workspace
    let ws = create_workspace(tmp.path(), "endtoend");

    // 2. Drop a raw file in and list it
    fs::write(ws.join("data/raw/vector/geojson/sites.geojson"), PARCELS).unwrap();

    basemap()
        .args(["ls"])
        .current_dir(&ws)
        .assert()
        .success()
        .stdout(predicate::str::contains("sites.geojson"));

    // 3. Convert it to a shapefile under data/processed
    basemap()
        .args(["convert", "sites.geojson", "--to", "shapefile"])
        .current_dir(&ws)
        .assert()
        .success();

    assert!(ws.join("data/processed/sites.shp").is_file());

    // 4. Status sees a complete tree with files in it
    basemap()
        .args(["status"])
        .current_dir(&ws)
        .assert()
        .success()
        .stdout(predicate::str::contains("workspace: endtoend"))
        .stdout(predicate::str::is_match(r"total files: [1-9]").unwrap());

    // 5. Commands also work from a subdirectory of the workspace
    basemap()
        .args(["ls"])
        .current_dir(ws.join("notebooks/analysis"))
        .assert()
        .success()
        .stdout(predicate::str::contains("sites.geojson"));
}

//! Basemap.toml manifest parsing and schema.
//!
//! The manifest marks the workspace root and records project settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical manifest filename.
pub const MANIFEST_NAME: &str = "Basemap.toml";

/// Errors raised while locating a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(
        "no manifest found\n\
         \n\
         Could not find `{MANIFEST_NAME}` in `{}` or any parent directory.\n\
         help: Run `basemap init` to create a workspace here.",
        dir.display()
    )]
    NotFound { dir: PathBuf },
}

/// Parsed Basemap.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// The `[project]` section.
    pub project: ProjectSection,

    /// The optional `[data]` section.
    #[serde(default)]
    pub data: DataSection,
}

/// Project identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    /// Project name.
    pub name: String,

    /// One-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Data handling defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Default output format for `basemap convert` when `--to` is omitted.
    pub default_format: Option<String>,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents)
            .with_context(|| format!("failed to parse manifest: {}", path.display()))
    }

    /// Load a manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;
        Self::parse(&contents, path)
    }

    /// Project name.
    pub fn name(&self) -> &str {
        &self.project.name
    }
}

/// Find `Basemap.toml` in `dir`, without searching upward.
pub fn find_manifest(dir: &Path) -> Result<PathBuf, ManifestError> {
    let candidate = dir.join(MANIFEST_NAME);
    if candidate.is_file() {
        Ok(candidate)
    } else {
        Err(ManifestError::NotFound {
            dir: dir.to_path_buf(),
        })
    }
}

/// Find `Basemap.toml` starting from `start` and searching upward.
pub fn find_manifest_upward(start: &Path) -> Result<PathBuf, ManifestError> {
    let mut current = start.to_path_buf();
    loop {
        if let Ok(path) = find_manifest(&current) {
            return Ok(path);
        }
        if !current.pop() {
            return Err(ManifestError::NotFound {
                dir: start.to_path_buf(),
            });
        }
    }
}

/// Generate a default Basemap.toml for a new workspace.
pub fn generate_manifest(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
description = "Geospatial analysis workspace"

[data]
# Default output format for `basemap convert` (shapefile or geojson).
default_format = "shapefile"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_basic_manifest() {
        let content = r#"
[project]
name = "coastal-survey"
description = "Erosion monitoring"

[data]
default_format = "geojson"
"#;
        let manifest = Manifest::parse(content, Path::new("Basemap.toml")).unwrap();
        assert_eq!(manifest.name(), "coastal-survey");
        assert_eq!(
            manifest.project.description.as_deref(),
            Some("Erosion monitoring")
        );
        assert_eq!(manifest.data.default_format.as_deref(), Some("geojson"));
    }

    #[test]
    fn test_parse_minimal_manifest() {
        let content = "[project]\nname = \"minimal\"\n";
        let manifest = Manifest::parse(content, Path::new("Basemap.toml")).unwrap();
        assert_eq!(manifest.name(), "minimal");
        assert!(manifest.data.default_format.is_none());
    }

    #[test]
    fn test_generated_manifest_round_trips() {
        let generated = generate_manifest("wetlands");
        let manifest = Manifest::parse(&generated, Path::new("Basemap.toml")).unwrap();
        assert_eq!(manifest.name(), "wetlands");
        assert_eq!(manifest.data.default_format.as_deref(), Some("shapefile"));
    }

    #[test]
    fn test_find_manifest_upward() {
        let tmp = TempDir::new().unwrap();
        let manifest_path = tmp.path().join(MANIFEST_NAME);
        std::fs::write(&manifest_path, generate_manifest("nested")).unwrap();

        let nested = tmp.path().join("data/raw/vector");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_manifest_upward(&nested).unwrap();
        assert_eq!(found, manifest_path);
    }

    #[test]
    fn test_find_manifest_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = find_manifest(tmp.path());
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }
}

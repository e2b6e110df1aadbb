//! Workspace - central configuration hub.
//!
//! A Workspace ties together the manifest, the root directory, and the
//! directory layout derived from it.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::layout::ProjectLayout;
use crate::core::manifest::{find_manifest_upward, Manifest};

/// An opened basemap workspace.
#[derive(Debug)]
pub struct Workspace {
    /// Parsed Basemap.toml.
    manifest: Manifest,

    /// Workspace root (directory containing the manifest).
    root: PathBuf,

    /// Directory layout derived from the root.
    layout: ProjectLayout,
}

impl Workspace {
    /// Open a workspace from a manifest path.
    pub fn open(manifest_path: &Path) -> Result<Self> {
        let manifest = Manifest::load(manifest_path)?;
        let root = manifest_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();
        let layout = ProjectLayout::new(root.clone());

        Ok(Workspace {
            manifest,
            root,
            layout,
        })
    }

    /// Locate and open the workspace containing `start`, searching upward
    /// for `Basemap.toml`.
    pub fn discover(start: &Path) -> Result<Self> {
        let manifest_path = find_manifest_upward(start).map_err(anyhow::Error::from)?;
        Self::open(&manifest_path)
    }

    /// Locate and open the workspace containing the current directory.
    pub fn discover_from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::discover(&cwd)
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(crate::core::manifest::MANIFEST_NAME)
    }

    /// Create any missing layout directories.
    pub fn ensure_directories(&self) -> Result<()> {
        self.layout.ensure_directories()
    }

    /// Display a path relative to the workspace root when possible.
    pub fn display_path(&self, path: &Path) -> PathBuf {
        pathdiff::diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf())
    }
}

//! Implementation of `basemap new` and `basemap init`.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::layout::ProjectLayout;
use crate::core::manifest::{generate_manifest, MANIFEST_NAME};
use crate::templates;
use crate::util::fs::write_string;

/// Options for creating a new workspace.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Project name
    pub name: String,

    /// Initialize in existing directory
    pub init: bool,
}

/// Create a new basemap workspace: the full directory tree plus starter
/// files.
pub fn new_workspace(path: &Path, opts: &ScaffoldOptions) -> Result<()> {
    if path.exists() && !opts.init {
        bail!(
            "destination `{}` already exists\n\
             \n\
             Use `basemap init` to initialize an existing directory.",
            path.display()
        );
    }

    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }

    let manifest_path = path.join(MANIFEST_NAME);
    if manifest_path.exists() {
        bail!("`{MANIFEST_NAME}` already exists in `{}`", path.display());
    }

    // Directory tree first, so starter files can land inside it.
    let layout = ProjectLayout::new(path);
    layout.ensure_directories()?;

    std::fs::write(&manifest_path, generate_manifest(&opts.name))
        .with_context(|| format!("failed to write {MANIFEST_NAME}"))?;

    write_string(&path.join("README.md"), &templates::readme(&opts.name))?;
    write_string(&path.join("LICENSE"), &templates::license(&opts.name))?;
    write_string(&path.join(".gitignore"), templates::gitignore())?;
    write_string(
        &path.join("environment.yml"),
        &templates::environment_yml(&opts.name),
    )?;
    write_string(
        &layout.analysis_dir().join("vector_analysis.ipynb"),
        &templates::notebook(&opts.name),
    )?;
    write_string(
        &path.join(".github/workflows/test.yml"),
        templates::ci_workflow(),
    )?;
    write_string(&layout.data_dir().join("README.md"), templates::data_readme())?;
    write_string(
        &path.join("output/README.md"),
        templates::output_readme(),
    )?;

    Ok(())
}

/// Initialize a basemap workspace in an existing directory.
pub fn init_workspace(path: &Path, opts: &ScaffoldOptions) -> Result<()> {
    let mut opts = opts.clone();
    opts.init = true;
    new_workspace(path, &opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::workspace::Workspace;
    use tempfile::TempDir;

    #[test]
    fn test_new_workspace_creates_tree_and_files() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("survey");

        let opts = ScaffoldOptions {
            name: "survey".to_string(),
            init: false,
        };

        new_workspace(&project_dir, &opts).unwrap();

        assert!(project_dir.join("Basemap.toml").exists());
        assert!(project_dir.join("README.md").exists());
        assert!(project_dir.join("LICENSE").exists());
        assert!(project_dir.join(".gitignore").exists());
        assert!(project_dir.join("environment.yml").exists());
        assert!(project_dir.join(".github/workflows/test.yml").exists());
        assert!(project_dir.join("data/README.md").exists());
        assert!(project_dir.join("output/README.md").exists());
        assert!(project_dir
            .join("notebooks/analysis/vector_analysis.ipynb")
            .exists());
        assert!(project_dir.join("data/raw/vector/shapefiles").is_dir());
        assert!(project_dir.join("output/processed_data").is_dir());

        // The result is an openable workspace.
        let ws = Workspace::discover(&project_dir).unwrap();
        assert_eq!(ws.manifest().name(), "survey");
    }

    #[test]
    fn test_new_workspace_refuses_existing_directory() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("taken");
        std::fs::create_dir(&project_dir).unwrap();

        let opts = ScaffoldOptions {
            name: "taken".to_string(),
            init: false,
        };

        let err = new_workspace(&project_dir, &opts).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_init_existing_dir() {
        let tmp = TempDir::new().unwrap();

        let opts = ScaffoldOptions {
            name: "existing".to_string(),
            init: false,
        };

        init_workspace(tmp.path(), &opts).unwrap();
        assert!(tmp.path().join("Basemap.toml").exists());
    }

    #[test]
    fn test_init_refuses_second_manifest() {
        let tmp = TempDir::new().unwrap();

        let opts = ScaffoldOptions {
            name: "dup".to_string(),
            init: true,
        };

        init_workspace(tmp.path(), &opts).unwrap();
        let err = init_workspace(tmp.path(), &opts).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}

//! `basemap new` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::NewArgs;
use basemap::ops::scaffold::{new_workspace, ScaffoldOptions};

/// Determines the output path for a new workspace.
///
/// If a path is explicitly specified, uses that. Otherwise, creates a
/// directory with the same name as the project.
pub fn determine_workspace_path(name: &str, path: &Option<PathBuf>) -> PathBuf {
    path.clone().unwrap_or_else(|| PathBuf::from(name))
}

/// Validates a project name for common issues.
pub fn validate_project_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("project name cannot be empty");
    }

    if name.starts_with('-') || name.starts_with('_') {
        return Err("project name cannot start with a hyphen or underscore");
    }

    if name.starts_with('.') {
        return Err("project name cannot start with a dot");
    }

    for c in name.chars() {
        if !c.is_alphanumeric() && c != '-' && c != '_' {
            return Err("project name contains invalid characters");
        }
    }

    Ok(())
}

pub fn execute(args: NewArgs) -> Result<()> {
    validate_project_name(&args.name).map_err(anyhow::Error::msg)?;

    let path = determine_workspace_path(&args.name, &args.path);

    let opts = ScaffoldOptions {
        name: args.name.clone(),
        init: false,
    };

    new_workspace(&path, &opts)?;

    eprintln!("     Created workspace `{}`", args.name);

    Ok(())
}

//! `basemap ls` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::LsArgs;
use basemap::core::workspace::Workspace;
use basemap::ops::vector::VectorStore;
use basemap::util::config::{global_config_path, load_config, project_config_path};
use basemap::util::diagnostic::{suggestions, Diagnostic};

pub fn execute(args: LsArgs) -> Result<()> {
    let workspace = Workspace::discover_from_cwd()?;

    let global = global_config_path().unwrap_or_default();
    let config = load_config(&global, &project_config_path(workspace.root()));
    let relative = config.listing.relative_paths && !args.absolute;

    let store = VectorStore::new(workspace.layout().clone());

    // Listing never fails on missing directories, but point at the fix.
    for (_, dir) in workspace.layout().all_dirs() {
        if dir.starts_with(workspace.layout().vector_dir()) && !dir.is_dir() {
            let diag = Diagnostic::warning("layout directory missing")
                .with_location(workspace.display_path(dir))
                .with_suggestion(suggestions::MISSING_DIRECTORIES);
            basemap::util::diagnostic::emit(&diag);
            break;
        }
    }

    let available = store.list_available()?;

    print_section("shapefiles", &available.shapefiles, &workspace, relative);
    print_section("geojson", &available.geojson, &workspace, relative);
    print_section("other", &available.other, &workspace, relative);

    if available.is_empty() {
        eprintln!("     No vector files found");
    }

    Ok(())
}

fn print_section(title: &str, files: &[PathBuf], workspace: &Workspace, relative: bool) {
    if files.is_empty() {
        return;
    }

    println!("{title}:");
    for file in files {
        if relative {
            println!("  {}", workspace.display_path(file).display());
        } else {
            println!("  {}", file.display());
        }
    }
}

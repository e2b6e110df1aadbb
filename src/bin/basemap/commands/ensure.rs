//! `basemap ensure` command

use anyhow::Result;

use crate::cli::EnsureArgs;
use basemap::core::workspace::Workspace;
use basemap::ops::status::status;

pub fn execute(_args: EnsureArgs) -> Result<()> {
    let workspace = Workspace::discover_from_cwd()?;

    let before = status(&workspace)?;
    let missing = before.missing().count();

    workspace.ensure_directories()?;

    if missing == 0 {
        eprintln!("     Workspace `{}` already complete", workspace.manifest().name());
    } else {
        eprintln!(
            "     Created {} missing director{} in `{}`",
            missing,
            if missing == 1 { "y" } else { "ies" },
            workspace.manifest().name()
        );
    }

    Ok(())
}

//! `basemap status` command

use anyhow::Result;

use crate::cli::StatusArgs;
use basemap::core::workspace::Workspace;
use basemap::ops::status::{format_report, status};
use basemap::util::diagnostic::{suggestions, Diagnostic};

pub fn execute(_args: StatusArgs) -> Result<()> {
    let workspace = Workspace::discover_from_cwd()?;

    let report = status(&workspace)?;
    print!("{}", format_report(&report));

    let missing: Vec<_> = report.missing().collect();
    if !missing.is_empty() {
        let diag = Diagnostic::warning(format!(
            "{} layout director{} missing",
            missing.len(),
            if missing.len() == 1 { "y is" } else { "ies are" }
        ))
        .with_suggestion(suggestions::MISSING_DIRECTORIES);
        basemap::util::diagnostic::emit(&diag);
    }

    Ok(())
}

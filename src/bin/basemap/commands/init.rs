//! `basemap init` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::InitArgs;
use basemap::ops::scaffold::{init_workspace, ScaffoldOptions};

/// Determines the project name from the arguments or directory.
pub fn determine_project_name(name: &Option<String>, path: &PathBuf) -> String {
    name.clone().unwrap_or_else(|| {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string()
    })
}

pub fn execute(args: InitArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from("."));

    // `init .` should pick up the real directory name, not `.`.
    let resolved = path.canonicalize().unwrap_or_else(|_| path.clone());
    let name = determine_project_name(&args.name, &resolved);

    let opts = ScaffoldOptions {
        name: name.clone(),
        init: true,
    };

    init_workspace(&path, &opts)?;

    eprintln!("     Initialized workspace `{}`", name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InitArgs;
    use clap::Parser;

    fn parse_init_args(args: &[&str]) -> InitArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            init: InitArgs,
        }
        let cli = TestCli::parse_from(args);
        cli.init
    }

    #[test]
    fn test_init_args_defaults() {
        let args = parse_init_args(&["test"]);
        assert!(args.name.is_none());
        assert!(args.path.is_none());
    }

    #[test]
    fn test_init_with_explicit_name() {
        let args = parse_init_args(&["test", "--name", "survey"]);
        assert_eq!(args.name.as_deref(), Some("survey"));
    }

    #[test]
    fn test_determine_project_name_from_directory() {
        let name = determine_project_name(&None, &PathBuf::from("/projects/coastal"));
        assert_eq!(name, "coastal");
    }

    #[test]
    fn test_determine_project_name_explicit_wins() {
        let name = determine_project_name(
            &Some("survey".to_string()),
            &PathBuf::from("/projects/coastal"),
        );
        assert_eq!(name, "survey");
    }
}

//! Workspace health report.
//!
//! The `status` command inspects an opened workspace and reports, for
//! every layout directory, whether it exists and how many files it holds.
//! Purely a query: nothing on disk is touched.

use anyhow::Result;
use walkdir::WalkDir;

use crate::core::workspace::Workspace;

/// State of a single layout directory.
#[derive(Debug, Clone)]
pub struct DirStatus {
    /// Root-relative label, e.g. `data/raw/vector/shapefiles`.
    pub label: &'static str,

    /// Whether the directory exists on disk.
    pub exists: bool,

    /// Number of files anywhere beneath it (0 when missing).
    pub file_count: usize,
}

/// Summary of a workspace inspection.
#[derive(Debug, Clone)]
pub struct StatusReport {
    /// Project name from the manifest.
    pub name: String,

    /// Workspace root.
    pub root: std::path::PathBuf,

    /// Per-directory state, in layout order. Counts are recursive, so a
    /// parent directory includes its children's files.
    pub dirs: Vec<DirStatus>,

    /// Files anywhere under the workspace root, counted once each.
    pub total_files: usize,
}

impl StatusReport {
    /// Labels of directories missing on disk.
    pub fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dirs.iter().filter(|d| !d.exists).map(|d| d.label)
    }
}

fn count_files(path: &std::path::Path) -> usize {
    WalkDir::new(path)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

/// Inspect a workspace.
pub fn status(workspace: &Workspace) -> Result<StatusReport> {
    let mut dirs = Vec::new();

    for (label, path) in workspace.layout().all_dirs() {
        let exists = path.is_dir();
        let file_count = if exists { count_files(path) } else { 0 };

        dirs.push(DirStatus {
            label,
            exists,
            file_count,
        });
    }

    Ok(StatusReport {
        name: workspace.manifest().name().to_string(),
        root: workspace.root().to_path_buf(),
        dirs,
        total_files: count_files(workspace.root()),
    })
}

/// Render a report for terminal output.
pub fn format_report(report: &StatusReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("workspace: {}\n", report.name));
    out.push_str(&format!("root: {}\n", report.root.display()));
    out.push('\n');

    for dir in &report.dirs {
        let mark = if dir.exists { "ok" } else { "missing" };
        out.push_str(&format!(
            "  {:<32} {:>8}  {} files\n",
            dir.label, mark, dir.file_count
        ));
    }

    out.push('\n');
    out.push_str(&format!("total files: {}\n", report.total_files));
    out
}

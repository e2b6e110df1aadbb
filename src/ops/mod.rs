//! High-level operations.
//!
//! This module contains the implementation of Basemap commands.

pub mod scaffold;
pub mod status;
pub mod vector;

pub use scaffold::{init_workspace, new_workspace, ScaffoldOptions};
pub use status::{format_report, status, DirStatus, StatusReport};
pub use vector::{
    load_vector, AvailableFiles, FormatHint, SaveFormat, VectorError, VectorStore,
};

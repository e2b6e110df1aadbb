//! Core data structures for Basemap.
//!
//! This module contains the foundational types used throughout Basemap:
//! - Workspace directory layout resolution
//! - Manifest parsing and discovery
//! - Workspace management

pub mod layout;
pub mod manifest;
pub mod workspace;

pub use layout::ProjectLayout;
pub use manifest::{find_manifest, find_manifest_upward, Manifest, ManifestError, MANIFEST_NAME};
pub use workspace::Workspace;

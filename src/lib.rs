//! Basemap - A workspace manager for geospatial analysis projects
//!
//! This crate provides the core library functionality for Basemap,
//! including workspace layout resolution, vector data loading/saving,
//! and project scaffolding.

pub mod core;
pub mod geodata;
pub mod ops;
pub mod templates;
pub mod util;

pub use crate::core::{layout::ProjectLayout, manifest::Manifest, workspace::Workspace};

pub use crate::ops::vector::{FormatHint, SaveFormat, VectorError, VectorStore};

//! Vector data loading, saving, and listing.
//!
//! A [`VectorStore`] resolves filenames against the workspace layout and
//! delegates the actual file I/O to the geodata codecs. Every operation is
//! a single-shot, stateless call against the filesystem.

use std::path::{Path, PathBuf};

use anyhow::Context;
use geojson::FeatureCollection;
use miette::Diagnostic;
use thiserror::Error;

use crate::core::layout::ProjectLayout;
use crate::geodata;
use crate::util::fs::list_files_with_extensions;

/// Errors from vector store operations.
#[derive(Debug, Error, Diagnostic)]
pub enum VectorError {
    /// The requested filename exists in none of the probed directories.
    #[error("vector file not found: {filename}")]
    #[diagnostic(
        code(basemap::vector::not_found),
        help("run `basemap ls` to see available vector files")
    )]
    NotFound { filename: String },

    /// Anything else is passed through from the geodata/filesystem layer.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// How to resolve a filename to a directory when loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatHint<'a> {
    /// Probe the vector directories in fixed priority order and take the
    /// first existing path.
    #[default]
    Auto,

    /// Resolve directly via the layout's directory for this sub-format
    /// tag, without probing.
    Explicit(&'a str),
}

/// Output format tags recognized when saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Shapefile,
    GeoJson,
    /// Unrecognized tag: the name is written as-is, with no extension
    /// appended.
    Raw,
}

impl SaveFormat {
    /// Parse a user-supplied format tag. Unknown tags map to [`Raw`],
    /// mirroring the layout resolver's fall-through behavior.
    ///
    /// [`Raw`]: SaveFormat::Raw
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "shapefile" | "shp" => SaveFormat::Shapefile,
            "geojson" | "json" => SaveFormat::GeoJson,
            _ => SaveFormat::Raw,
        }
    }

    fn file_name(&self, name: &str) -> String {
        match self {
            SaveFormat::Shapefile => format!("{name}.shp"),
            SaveFormat::GeoJson => format!("{name}.geojson"),
            SaveFormat::Raw => name.to_string(),
        }
    }
}

/// Vector file access rooted in a workspace layout.
#[derive(Debug)]
pub struct VectorStore {
    layout: ProjectLayout,
}

/// Filenames found per vector subdirectory by [`VectorStore::list_available`].
#[derive(Debug, Default)]
pub struct AvailableFiles {
    pub shapefiles: Vec<PathBuf>,
    pub geojson: Vec<PathBuf>,
    pub other: Vec<PathBuf>,
}

impl AvailableFiles {
    pub fn is_empty(&self) -> bool {
        self.shapefiles.is_empty() && self.geojson.is_empty() && self.other.is_empty()
    }
}

impl VectorStore {
    pub fn new(layout: ProjectLayout) -> Self {
        VectorStore { layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Candidate paths probed for `filename` in auto mode, in priority
    /// order. First existing match wins; this order is a documented
    /// contract, not an accident of implementation.
    fn candidates(&self, filename: &str) -> [PathBuf; 4] {
        [
            self.layout.shapefiles_dir().join(filename),
            self.layout.geojson_dir().join(filename),
            self.layout.vector_other_dir().join(filename),
            self.layout.vector_dir().join(filename),
        ]
    }

    /// Resolve `filename` to the path it would be loaded from, without
    /// reading it.
    pub fn resolve(&self, filename: &str, hint: FormatHint) -> Result<PathBuf, VectorError> {
        let path = match hint {
            FormatHint::Auto => self
                .candidates(filename)
                .into_iter()
                .find(|p| p.exists()),
            FormatHint::Explicit(tag) => {
                let path = self.layout.data_path("vector", Some(tag)).join(filename);
                path.exists().then_some(path)
            }
        };

        path.ok_or_else(|| VectorError::NotFound {
            filename: filename.to_string(),
        })
    }

    /// Load a vector file by name.
    ///
    /// With [`FormatHint::Auto`], the shapefiles, geojson, and
    /// other-formats directories are probed in that order, then the
    /// generic vector directory; no content sniffing is performed. The
    /// dataset is returned exactly as the codec produced it.
    pub fn load(&self, filename: &str, hint: FormatHint) -> Result<FeatureCollection, VectorError> {
        let path = self.resolve(filename, hint)?;
        tracing::debug!(path = %path.display(), "loading vector file");
        Ok(geodata::read_vector_file(&path)?)
    }

    /// Save a dataset under the processed-data directory and return the
    /// resolved output path.
    ///
    /// No overwrite protection and no atomicity: a crash mid-write leaves
    /// a partial file.
    pub fn save(
        &self,
        dataset: &FeatureCollection,
        name: &str,
        format: SaveFormat,
    ) -> Result<PathBuf, VectorError> {
        let out = self.layout.processed_dir().join(format.file_name(name));

        std::fs::create_dir_all(self.layout.processed_dir())
            .with_context(|| {
                format!(
                    "failed to create directory: {}",
                    self.layout.processed_dir().display()
                )
            })
            .map_err(VectorError::Other)?;

        geodata::write_vector_file(dataset, &out)?;
        tracing::debug!(path = %out.display(), "saved vector file");
        Ok(out)
    }

    /// List the vector files present in the workspace, per subdirectory.
    ///
    /// Shapefiles are `*.shp`, geojson is `*.geojson` plus `*.json`, and
    /// the other-formats directory lists everything. Non-recursive; order
    /// is whatever the filesystem enumeration yields. Missing directories
    /// simply produce empty lists.
    pub fn list_available(&self) -> Result<AvailableFiles, VectorError> {
        Ok(AvailableFiles {
            shapefiles: list_files_with_extensions(self.layout.shapefiles_dir(), &["shp"])?,
            geojson: list_files_with_extensions(self.layout.geojson_dir(), &["geojson", "json"])?,
            other: list_files_with_extensions(self.layout.vector_other_dir(), &[])?,
        })
    }
}

/// Load a vector file from the workspace rooted at `root`.
///
/// Convenience wrapper around [`VectorStore::load`] for one-off calls.
pub fn load_vector(root: &Path, filename: &str, hint: FormatHint) -> Result<FeatureCollection, VectorError> {
    VectorStore::new(ProjectLayout::new(root)).load(filename, hint)
}

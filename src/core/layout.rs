//! Workspace directory layout.
//!
//! A [`ProjectLayout`] maps semantic data categories (vector/raster, plus a
//! sub-format tag) onto fixed subdirectories of a single workspace root.
//! Every path is derived from the root at construction time; the value is
//! immutable afterwards.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Directory layout of a basemap workspace.
///
/// All paths are absolute if the root is absolute. Constructed once,
/// never mutated.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,

    data_dir: PathBuf,
    raw_data_dir: PathBuf,
    processed_dir: PathBuf,
    external_dir: PathBuf,

    vector_dir: PathBuf,
    shapefiles_dir: PathBuf,
    geojson_dir: PathBuf,
    vector_other_dir: PathBuf,

    raster_dir: PathBuf,
    tiff_dir: PathBuf,
    imagery_dir: PathBuf,
    raster_other_dir: PathBuf,

    notebooks_dir: PathBuf,
    exploratory_dir: PathBuf,
    analysis_dir: PathBuf,
    visualization_dir: PathBuf,

    src_dir: PathBuf,
    data_processing_dir: PathBuf,
    analysis_code_dir: PathBuf,
    visualization_code_dir: PathBuf,

    output_dir: PathBuf,
    figures_dir: PathBuf,
    tables_dir: PathBuf,
    processed_output_dir: PathBuf,

    docs_dir: PathBuf,
    tests_dir: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data_dir = root.join("data");
        let raw_data_dir = data_dir.join("raw");
        let vector_dir = raw_data_dir.join("vector");
        let raster_dir = raw_data_dir.join("raster");
        let notebooks_dir = root.join("notebooks");
        let src_dir = root.join("src");
        let output_dir = root.join("output");

        ProjectLayout {
            processed_dir: data_dir.join("processed"),
            external_dir: data_dir.join("external"),

            shapefiles_dir: vector_dir.join("shapefiles"),
            geojson_dir: vector_dir.join("geojson"),
            vector_other_dir: vector_dir.join("other_formats"),

            tiff_dir: raster_dir.join("tiff"),
            imagery_dir: raster_dir.join("imagery"),
            raster_other_dir: raster_dir.join("other_formats"),

            exploratory_dir: notebooks_dir.join("exploratory"),
            analysis_dir: notebooks_dir.join("analysis"),
            visualization_dir: notebooks_dir.join("visualization"),

            data_processing_dir: src_dir.join("data_processing"),
            analysis_code_dir: src_dir.join("analysis"),
            visualization_code_dir: src_dir.join("visualization"),

            figures_dir: output_dir.join("figures"),
            tables_dir: output_dir.join("tables"),
            processed_output_dir: output_dir.join("processed_data"),

            docs_dir: root.join("docs"),
            tests_dir: root.join("tests"),

            data_dir,
            raw_data_dir,
            vector_dir,
            raster_dir,
            notebooks_dir,
            src_dir,
            output_dir,
            root,
        }
    }

    /// The workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn raw_data_dir(&self) -> &Path {
        &self.raw_data_dir
    }

    pub fn processed_dir(&self) -> &Path {
        &self.processed_dir
    }

    pub fn external_dir(&self) -> &Path {
        &self.external_dir
    }

    pub fn vector_dir(&self) -> &Path {
        &self.vector_dir
    }

    pub fn shapefiles_dir(&self) -> &Path {
        &self.shapefiles_dir
    }

    pub fn geojson_dir(&self) -> &Path {
        &self.geojson_dir
    }

    pub fn vector_other_dir(&self) -> &Path {
        &self.vector_other_dir
    }

    pub fn raster_dir(&self) -> &Path {
        &self.raster_dir
    }

    pub fn tiff_dir(&self) -> &Path {
        &self.tiff_dir
    }

    pub fn imagery_dir(&self) -> &Path {
        &self.imagery_dir
    }

    pub fn raster_other_dir(&self) -> &Path {
        &self.raster_other_dir
    }

    pub fn notebooks_dir(&self) -> &Path {
        &self.notebooks_dir
    }

    pub fn analysis_dir(&self) -> &Path {
        &self.analysis_dir
    }

    pub fn figures_dir(&self) -> &Path {
        &self.figures_dir
    }

    /// Resolve the directory designated for a data category and optional
    /// sub-format tag.
    ///
    /// This is a total function: unrecognized sub-format tags fall back to
    /// the category's `other_formats` directory, and unrecognized
    /// categories fall back to `data/raw`. Typos in a tag therefore land
    /// in a generic directory rather than failing.
    pub fn data_path(&self, category: &str, format: Option<&str>) -> &Path {
        match category {
            "vector" => match format {
                Some("shapefile") => &self.shapefiles_dir,
                Some("geojson") => &self.geojson_dir,
                _ => &self.vector_other_dir,
            },
            "raster" => match format {
                Some("tiff") => &self.tiff_dir,
                Some("imagery") => &self.imagery_dir,
                _ => &self.raster_other_dir,
            },
            _ => &self.raw_data_dir,
        }
    }

    /// All directories of the workspace tree, as `(relative label, path)`
    /// pairs in creation order.
    ///
    /// The paths are independent of each other, so callers may create or
    /// inspect them in any order.
    pub fn all_dirs(&self) -> Vec<(&'static str, &Path)> {
        vec![
            ("data", &self.data_dir),
            ("data/raw", &self.raw_data_dir),
            ("data/raw/vector", &self.vector_dir),
            ("data/raw/vector/shapefiles", &self.shapefiles_dir),
            ("data/raw/vector/geojson", &self.geojson_dir),
            ("data/raw/vector/other_formats", &self.vector_other_dir),
            ("data/raw/raster", &self.raster_dir),
            ("data/raw/raster/tiff", &self.tiff_dir),
            ("data/raw/raster/imagery", &self.imagery_dir),
            ("data/raw/raster/other_formats", &self.raster_other_dir),
            ("data/processed", &self.processed_dir),
            ("data/external", &self.external_dir),
            ("notebooks", &self.notebooks_dir),
            ("notebooks/exploratory", &self.exploratory_dir),
            ("notebooks/analysis", &self.analysis_dir),
            ("notebooks/visualization", &self.visualization_dir),
            ("src", &self.src_dir),
            ("src/data_processing", &self.data_processing_dir),
            ("src/analysis", &self.analysis_code_dir),
            ("src/visualization", &self.visualization_code_dir),
            ("output", &self.output_dir),
            ("output/figures", &self.figures_dir),
            ("output/tables", &self.tables_dir),
            ("output/processed_data", &self.processed_output_dir),
            ("docs", &self.docs_dir),
            ("tests", &self.tests_dir),
        ]
    }

    /// Create every known directory on disk if missing.
    ///
    /// Idempotent: safe to call any number of times.
    pub fn ensure_directories(&self) -> Result<()> {
        for (_, dir) in self.all_dirs() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }
}

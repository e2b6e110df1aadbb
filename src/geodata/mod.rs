//! Vector file reading and writing.
//!
//! The in-memory dataset is [`geojson::FeatureCollection`], an externally
//! defined container of geometry plus attribute rows. This module never
//! defines its own dataset structure; it only dispatches on the file
//! extension to the ecosystem codec for that format and passes the result
//! through unmodified. Reprojection, validation, and schema checks are all
//! out of scope here.

use std::path::Path;

use anyhow::{bail, Result};
use geojson::FeatureCollection;

pub mod json;
pub mod shp;

/// Read a vector file into a feature collection.
///
/// Dispatches on the file extension: `.geojson`/`.json` use the GeoJSON
/// codec, `.shp` the shapefile codec. Anything else is unsupported.
pub fn read_vector_file(path: &Path) -> Result<FeatureCollection> {
    match extension(path).as_deref() {
        Some("geojson") | Some("json") => json::read_geojson(path),
        Some("shp") => shp::read_shapefile(path),
        _ => bail!("unsupported vector format: {}", path.display()),
    }
}

/// Write a feature collection to a vector file.
///
/// `.shp` paths go through the shapefile codec; everything else (including
/// extensionless paths) is written as a GeoJSON body, matching the default
/// the original tooling inherited from its I/O library.
pub fn write_vector_file(collection: &FeatureCollection, path: &Path) -> Result<()> {
    match extension(path).as_deref() {
        Some("shp") => shp::write_shapefile(collection, path),
        _ => json::write_geojson(collection, path),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(extension(Path::new("a/b/ROADS.SHP")).as_deref(), Some("shp"));
        assert_eq!(extension(Path::new("x.GeoJSON")).as_deref(), Some("geojson"));
        assert_eq!(extension(Path::new("noext")), None);
    }

    #[test]
    fn test_read_unsupported_format_fails() {
        let err = read_vector_file(Path::new("grid.gpkg")).unwrap_err();
        assert!(err.to_string().contains("unsupported vector format"));
    }
}

//! GeoJSON file codec.

use std::path::Path;

use anyhow::{Context, Result};
use geojson::{FeatureCollection, GeoJson};

/// Read a GeoJSON file into a feature collection.
pub fn read_geojson(path: &Path) -> Result<FeatureCollection> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))?;

    let geojson: GeoJson = contents
        .parse()
        .with_context(|| format!("failed to parse GeoJSON: {}", path.display()))?;

    FeatureCollection::try_from(geojson)
        .with_context(|| format!("not a feature collection: {}", path.display()))
}

/// Write a feature collection as GeoJSON.
pub fn write_geojson(collection: &FeatureCollection, path: &Path) -> Result<()> {
    let body = serde_json::to_string_pretty(collection)
        .context("failed to serialize feature collection")?;

    std::fs::write(path, body)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const POINTS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [153.02, -27.47] },
                "properties": { "name": "Brisbane", "population": 2568927 }
            }
        ]
    }"#;

    #[test]
    fn test_read_geojson() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cities.geojson");
        std::fs::write(&path, POINTS).unwrap();

        let collection = read_geojson(&path).unwrap();
        assert_eq!(collection.features.len(), 1);

        let props = collection.features[0].properties.as_ref().unwrap();
        assert_eq!(props["name"], "Brisbane");
    }

    #[test]
    fn test_read_rejects_non_collection() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("geom.json");
        std::fs::write(&path, r#"{ "type": "Point", "coordinates": [0, 0] }"#).unwrap();

        let err = read_geojson(&path).unwrap_err();
        assert!(err.to_string().contains("not a feature collection"));
    }

    #[test]
    fn test_write_then_read_preserves_features() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("in.geojson");
        std::fs::write(&src, POINTS).unwrap();

        let collection = read_geojson(&src).unwrap();
        let out = tmp.path().join("out.geojson");
        write_geojson(&collection, &out).unwrap();

        let reread = read_geojson(&out).unwrap();
        assert_eq!(reread.features.len(), collection.features.len());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let err = read_geojson(Path::new("/nonexistent/file.geojson")).unwrap_err();
        assert!(err.to_string().contains("failed to read file"));
    }
}

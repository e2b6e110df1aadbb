//! `basemap convert` command

use std::path::Path;

use anyhow::Result;

use crate::cli::ConvertArgs;
use basemap::core::workspace::Workspace;
use basemap::ops::vector::{FormatHint, SaveFormat, VectorStore};
use basemap::util::config::{global_config_path, load_config, project_config_path};

/// Pick the output format tag: command line, then manifest, then settings,
/// then geojson.
pub fn resolve_format_tag(
    cli: Option<&str>,
    manifest: Option<&str>,
    config: Option<&str>,
) -> String {
    cli.or(manifest).or(config).unwrap_or("geojson").to_string()
}

/// Default output name: the input filename without its extension.
pub fn default_output_name(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
        .to_string()
}

pub fn execute(args: ConvertArgs) -> Result<()> {
    let workspace = Workspace::discover_from_cwd()?;

    let global = global_config_path().unwrap_or_default();
    let config = load_config(&global, &project_config_path(workspace.root()));

    let store = VectorStore::new(workspace.layout().clone());

    let hint = match args.from.as_deref() {
        Some(tag) => FormatHint::Explicit(tag),
        None => FormatHint::Auto,
    };

    let dataset = store.load(&args.filename, hint)?;

    let tag = resolve_format_tag(
        args.to.as_deref(),
        workspace.manifest().data.default_format.as_deref(),
        config.output.default_format.as_deref(),
    );
    let name = args
        .out
        .unwrap_or_else(|| default_output_name(&args.filename));

    let out = store.save(&dataset, &name, SaveFormat::parse(&tag))?;

    eprintln!(
        "     Saved {} ({} features)",
        workspace.display_path(&out).display(),
        dataset.features.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_format_tag_precedence() {
        assert_eq!(
            resolve_format_tag(Some("shapefile"), Some("geojson"), None),
            "shapefile"
        );
        assert_eq!(resolve_format_tag(None, Some("geojson"), Some("shapefile")), "geojson");
        assert_eq!(resolve_format_tag(None, None, Some("shapefile")), "shapefile");
        assert_eq!(resolve_format_tag(None, None, None), "geojson");
    }

    #[test]
    fn test_default_output_name_strips_extension() {
        assert_eq!(default_output_name("roads.shp"), "roads");
        assert_eq!(default_output_name("sites.geojson"), "sites");
        assert_eq!(default_output_name("noext"), "noext");
    }
}

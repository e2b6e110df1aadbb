//! Starter file contents written by `basemap new` / `basemap init`.
//!
//! The scaffolded workspace targets notebook-based geospatial analysis,
//! so the environment file and notebook template reference the usual
//! Python geostack. The notebook is assembled as JSON rather than pasted
//! as a string so the output is always well-formed.

/// README.md for a fresh workspace.
pub fn readme(name: &str) -> String {
    format!(
        r#"# {name}

Geospatial analysis workspace managed with `basemap`.

## Setup

```bash
conda env create -f environment.yml
conda activate {name}
```

## Usage

1. Place your data files in the appropriate directories:
   - Shapefiles: `data/raw/vector/shapefiles/`
   - GeoJSON: `data/raw/vector/geojson/`
   - Raster data: `data/raw/raster/`

2. See what is available:

```bash
basemap ls
```

3. Open the starter notebook:

```bash
jupyter notebook notebooks/analysis/vector_analysis.ipynb
```

## Directory structure

- `data/` - All data files (raw, processed, external)
- `notebooks/` - Jupyter notebooks for analysis
- `src/` - Analysis source code
- `output/` - Results and visualizations
- `docs/` - Documentation
- `tests/` - Test files

## License

This project is licensed under the MIT License - see the [LICENSE](LICENSE)
file for details.
"#
    )
}

/// MIT license text.
pub fn license(name: &str) -> String {
    format!(
        r#"MIT License

Copyright (c) {name} contributors

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#
    )
}

/// .gitignore tuned for geospatial projects: large data and generated
/// output stay out of version control.
pub fn gitignore() -> &'static str {
    r#"# Data files (too large for git)
data/raw/
data/processed/
data/external/
*.shp
*.shx
*.dbf
*.prj
*.cpg
*.geojson
*.gpkg
*.tif
*.tiff

# Generated output
output/figures/
output/tables/
output/processed_data/

# Python
__pycache__/
*.py[cod]
.ipynb_checkpoints/
.venv/

# Basemap local settings
.basemap/

# Editor files
*.swp
*~
.vscode/
.idea/

# OS files
.DS_Store
Thumbs.db
"#
}

/// Conda environment with the geospatial analysis stack.
pub fn environment_yml(name: &str) -> String {
    format!(
        r#"name: {name}
channels:
  - conda-forge
dependencies:
  - python=3.11
  # Geospatial libraries
  - geopandas>=0.14
  - rasterio>=1.3
  - shapely>=2.0
  - fiona>=1.8
  - pyproj>=3.4
  # Data analysis
  - pandas>=2.0
  - numpy>=1.24
  - scipy>=1.10
  # Visualization
  - matplotlib>=3.7
  - seaborn>=0.12
  - folium>=0.14
  # Jupyter
  - jupyter>=1.0
  - ipykernel>=6.0
"#
    )
}

/// Starter analysis notebook.
pub fn notebook(name: &str) -> String {
    let nb = serde_json::json!({
        "cells": [
            {
                "cell_type": "markdown",
                "metadata": {},
                "source": [
                    "# Vector Data Analysis\n",
                    "\n",
                    format!("**Project:** {name}\n"),
                    "\n",
                    "## Setup Instructions\n",
                    "1. Place vector files in `data/raw/vector/shapefiles/` or `data/raw/vector/geojson/`\n",
                    "2. Run the cells below to start your analysis\n",
                    "3. Change the filename in the loading cell to match your data"
                ]
            },
            {
                "cell_type": "code",
                "execution_count": null,
                "metadata": {},
                "outputs": [],
                "source": [
                    "from pathlib import Path\n",
                    "\n",
                    "import geopandas as gpd\n",
                    "import matplotlib.pyplot as plt\n",
                    "\n",
                    "project_root = Path.cwd().parents[1]\n",
                    "vector_dir = project_root / \"data\" / \"raw\" / \"vector\"\n",
                    "figures_dir = project_root / \"output\" / \"figures\"\n",
                    "\n",
                    "print(f\"Project root: {project_root}\")"
                ]
            },
            {
                "cell_type": "code",
                "execution_count": null,
                "metadata": {},
                "outputs": [],
                "source": [
                    "# Load vector data (change the filename to your own)\n",
                    "# gdf = gpd.read_file(vector_dir / \"shapefiles\" / \"your_file.shp\")\n",
                    "\n",
                    "from shapely.geometry import Point\n",
                    "gdf = gpd.GeoDataFrame(\n",
                    "    {\"name\": [\"A\", \"B\", \"C\"], \"value\": [10, 20, 15]},\n",
                    "    geometry=[Point(1, 1), Point(2, 2), Point(3, 1)],\n",
                    "    crs=\"EPSG:4326\",\n",
                    ")\n",
                    "gdf.head()"
                ]
            },
            {
                "cell_type": "code",
                "execution_count": null,
                "metadata": {},
                "outputs": [],
                "source": [
                    "fig, ax = plt.subplots(figsize=(10, 8))\n",
                    "gdf.plot(ax=ax, markersize=100, alpha=0.7)\n",
                    "ax.set_title(\"Vector Data\")\n",
                    "plt.savefig(figures_dir / \"vector_analysis.png\", dpi=300, bbox_inches=\"tight\")\n",
                    "plt.show()"
                ]
            }
        ],
        "metadata": {
            "kernelspec": {
                "display_name": "Python 3",
                "language": "python",
                "name": "python3"
            },
            "language_info": {
                "name": "python",
                "version": "3.11.0"
            }
        },
        "nbformat": 4,
        "nbformat_minor": 4
    });

    // json! output is always serializable
    serde_json::to_string_pretty(&nb).expect("notebook template serializes") + "\n"
}

/// GitHub Actions workflow verifying the analysis environment builds.
pub fn ci_workflow() -> &'static str {
    r#"name: Test GIS Environment

on:
  push:
    branches: [main]
  pull_request:
    branches: [main]

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4

      - uses: conda-incubator/setup-miniconda@v3
        with:
          environment-file: environment.yml
          auto-activate-base: false

      - name: Verify imports
        shell: bash -el {0}
        run: |
          python -c "import geopandas, rasterio, shapely, pyproj"
"#
}

/// README placed in `data/`.
pub fn data_readme() -> &'static str {
    r#"# Data

Raw inputs live under `raw/`, split by category and format:

- `raw/vector/shapefiles/` - ESRI shapefiles (`.shp` plus sidecars)
- `raw/vector/geojson/` - GeoJSON files
- `raw/vector/other_formats/` - any other vector format
- `raw/raster/tiff/`, `raw/raster/imagery/`, `raw/raster/other_formats/`

`processed/` holds derived datasets written by `basemap convert`;
`external/` holds third-party reference data.

Large files are excluded from version control - check `.gitignore` before
committing anything here.
"#
}

/// README placed in `output/`.
pub fn output_readme() -> &'static str {
    r#"# Output

Generated artifacts only - everything here can be rebuilt from `data/`
and the notebooks.

- `figures/` - plots and maps
- `tables/` - exported tables
- `processed_data/` - datasets prepared for downstream tools

Large files are excluded via `.gitignore`.
"#
}

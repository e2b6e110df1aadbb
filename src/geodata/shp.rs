//! ESRI shapefile codec.
//!
//! Geometry interop goes through `geo-types`; attribute rows go through
//! the `dbase` crate re-exported by `shapefile`. A shapefile holds a
//! single shape class per file, so writing takes the class from the first
//! feature and rejects mixed collections.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};
use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};

/// Read a shapefile (with its `.dbf` sidecar) into a feature collection.
pub fn read_shapefile(path: &Path) -> Result<FeatureCollection> {
    let mut reader = shapefile::Reader::from_path(path)
        .with_context(|| format!("failed to open shapefile: {}", path.display()))?;

    let mut features = Vec::new();
    for pair in reader.iter_shapes_and_records() {
        let (shape, record) =
            pair.with_context(|| format!("failed to read shapefile: {}", path.display()))?;

        let geometry = match shape {
            shapefile::Shape::NullShape => None,
            shape => {
                let geom = geo_types::Geometry::<f64>::try_from(shape)
                    .map_err(|e| anyhow!("unsupported shape in {}: {:?}", path.display(), e))?;
                Some(geojson::Geometry::new(geojson::Value::from(&geom)))
            }
        };

        features.push(Feature {
            bbox: None,
            geometry,
            id: None,
            properties: Some(record_properties(record)),
            foreign_members: None,
        });
    }

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Write a feature collection as a shapefile.
///
/// The attribute table schema is derived from the feature properties:
/// all-numeric columns become `Numeric`, all-boolean columns `Logical`,
/// everything else `Character`. Field names are truncated to the ten
/// characters the DBF format allows.
pub fn write_shapefile(collection: &FeatureCollection, path: &Path) -> Result<()> {
    let mut rows = Vec::with_capacity(collection.features.len());
    for feature in &collection.features {
        let geometry = feature
            .geometry
            .as_ref()
            .context("cannot write a feature without geometry to a shapefile")?;
        let geom = geo_types::Geometry::<f64>::try_from(geometry.value.clone())
            .context("unsupported GeoJSON geometry")?;
        rows.push((geom, feature.properties.as_ref()));
    }

    let schema = collect_schema(collection);
    let mut builder = TableWriterBuilder::new();
    for field in &schema {
        let name = FieldName::try_from(field.dbf_name.as_str())
            .map_err(|e| anyhow!("invalid attribute name `{}`: {:?}", field.dbf_name, e))?;
        builder = match field.kind {
            FieldKind::Numeric => builder.add_numeric_field(name, 20, 8),
            FieldKind::Logical => builder.add_logical_field(name),
            FieldKind::Character(len) => builder.add_character_field(name, len),
        };
    }

    let mut writer = shapefile::Writer::from_path(path, builder)
        .with_context(|| format!("failed to create shapefile: {}", path.display()))?;

    let class = match rows.first() {
        Some((geom, _)) => shape_class(geom)?,
        None => return Ok(()),
    };

    for (geom, props) in &rows {
        let record = build_record(&schema, *props);
        write_row(&mut writer, class, geom, &record)
            .with_context(|| format!("failed to write shapefile: {}", path.display()))?;
    }

    Ok(())
}

/// Shape classes a shapefile can hold. One class per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeClass {
    Point,
    Multipoint,
    Polyline,
    Polygon,
}

fn shape_class(geom: &geo_types::Geometry<f64>) -> Result<ShapeClass> {
    use geo_types::Geometry;
    Ok(match geom {
        Geometry::Point(_) => ShapeClass::Point,
        Geometry::MultiPoint(_) => ShapeClass::Multipoint,
        Geometry::LineString(_) | Geometry::MultiLineString(_) => ShapeClass::Polyline,
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) => ShapeClass::Polygon,
        _ => bail!("geometry type not representable in a shapefile"),
    })
}

fn write_row<W: std::io::Write + std::io::Seek>(
    writer: &mut shapefile::Writer<W>,
    class: ShapeClass,
    geom: &geo_types::Geometry<f64>,
    record: &Record,
) -> Result<()> {
    use geo_types::Geometry;

    match (class, geom) {
        (ShapeClass::Point, Geometry::Point(p)) => {
            writer.write_shape_and_record(&shapefile::Point::new(p.x(), p.y()), record)?;
        }
        (ShapeClass::Multipoint, Geometry::MultiPoint(mp)) => {
            let points: Vec<shapefile::Point> = mp
                .0
                .iter()
                .map(|p| shapefile::Point::new(p.x(), p.y()))
                .collect();
            writer.write_shape_and_record(&shapefile::Multipoint::new(points), record)?;
        }
        (ShapeClass::Polyline, Geometry::LineString(ls)) => {
            writer.write_shape_and_record(&shapefile::Polyline::new(ring_points(ls)), record)?;
        }
        (ShapeClass::Polyline, Geometry::MultiLineString(mls)) => {
            let parts: Vec<Vec<shapefile::Point>> = mls.0.iter().map(ring_points).collect();
            writer.write_shape_and_record(&shapefile::Polyline::with_parts(parts), record)?;
        }
        (ShapeClass::Polygon, Geometry::Polygon(poly)) => {
            writer
                .write_shape_and_record(&shapefile::Polygon::with_rings(polygon_rings(poly)), record)?;
        }
        (ShapeClass::Polygon, Geometry::MultiPolygon(mp)) => {
            let rings: Vec<shapefile::PolygonRing<shapefile::Point>> =
                mp.0.iter().flat_map(polygon_rings).collect();
            writer.write_shape_and_record(&shapefile::Polygon::with_rings(rings), record)?;
        }
        _ => bail!("mixed geometry types in collection"),
    }
    Ok(())
}

fn ring_points(line: &geo_types::LineString<f64>) -> Vec<shapefile::Point> {
    line.coords()
        .map(|c| shapefile::Point::new(c.x, c.y))
        .collect()
}

fn polygon_rings(poly: &geo_types::Polygon<f64>) -> Vec<shapefile::PolygonRing<shapefile::Point>> {
    let mut rings = vec![shapefile::PolygonRing::Outer(ring_points(poly.exterior()))];
    rings.extend(
        poly.interiors()
            .iter()
            .map(|ring| shapefile::PolygonRing::Inner(ring_points(ring))),
    );
    rings
}

/// Attribute column kinds supported on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Numeric,
    Logical,
    Character(u8),
}

#[derive(Debug)]
struct SchemaField {
    /// JSON property key.
    key: String,
    /// DBF field name (key truncated to ten characters).
    dbf_name: String,
    kind: FieldKind,
}

fn collect_schema(collection: &FeatureCollection) -> Vec<SchemaField> {
    struct Acc {
        seen: bool,
        numeric: bool,
        boolean: bool,
        max_len: usize,
    }

    let mut order: Vec<String> = Vec::new();
    let mut accs: Vec<Acc> = Vec::new();

    for feature in &collection.features {
        let Some(props) = &feature.properties else {
            continue;
        };
        for (key, value) in props {
            let idx = match order.iter().position(|k| k == key) {
                Some(i) => i,
                None => {
                    order.push(key.clone());
                    accs.push(Acc {
                        seen: false,
                        numeric: true,
                        boolean: true,
                        max_len: 1,
                    });
                    order.len() - 1
                }
            };
            let acc = &mut accs[idx];
            if value.is_null() {
                continue;
            }
            acc.seen = true;
            acc.numeric &= value.is_number();
            acc.boolean &= value.is_boolean();
            if let Some(text) = json_value_text(value) {
                acc.max_len = acc.max_len.max(text.len());
            }
        }
    }

    order
        .into_iter()
        .zip(accs)
        .map(|(key, acc)| {
            let kind = if !acc.seen {
                FieldKind::Character(1)
            } else if acc.numeric {
                FieldKind::Numeric
            } else if acc.boolean {
                FieldKind::Logical
            } else {
                FieldKind::Character(acc.max_len.clamp(1, 254) as u8)
            };
            let dbf_name: String = key.chars().take(10).collect();
            SchemaField {
                key,
                dbf_name,
                kind,
            }
        })
        .collect()
}

fn build_record(schema: &[SchemaField], props: Option<&JsonObject>) -> Record {
    let mut record = Record::default();
    for field in schema {
        let value = props.and_then(|p| p.get(&field.key));
        let field_value = match field.kind {
            FieldKind::Numeric => FieldValue::Numeric(value.and_then(JsonValue::as_f64)),
            FieldKind::Logical => FieldValue::Logical(value.and_then(JsonValue::as_bool)),
            FieldKind::Character(_) => FieldValue::Character(value.and_then(json_value_text)),
        };
        record.insert(field.dbf_name.clone(), field_value);
    }
    record
}

fn json_value_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn record_properties(record: Record) -> JsonObject {
    let mut props = JsonObject::new();
    for (name, value) in record {
        props.insert(name, field_to_json(value));
    }
    props
}

fn field_to_json(value: FieldValue) -> JsonValue {
    match value {
        FieldValue::Character(opt) => opt.map(JsonValue::String).unwrap_or(JsonValue::Null),
        FieldValue::Numeric(opt) => opt
            .and_then(serde_json::Number::from_f64)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        FieldValue::Float(opt) => opt
            .and_then(|n| serde_json::Number::from_f64(f64::from(n)))
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        FieldValue::Logical(opt) => opt.map(JsonValue::Bool).unwrap_or(JsonValue::Null),
        FieldValue::Integer(n) => JsonValue::from(n),
        FieldValue::Double(n) => serde_json::Number::from_f64(n)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        FieldValue::Date(opt) => opt
            .map(|d| JsonValue::String(format!("{:04}-{:02}-{:02}", d.year(), d.month(), d.day())))
            .unwrap_or(JsonValue::Null),
        _ => JsonValue::Null,
    }
}

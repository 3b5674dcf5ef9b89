//! GeoJSON course data
//!
//! Features follow OSM golf tagging: `golf=fairway|green|bunker|...` on
//! polygon features, `golf=tee`/`golf=pin` on points (or a tee polygon),
//! and `golf=hole` on the line from tee to green carrying `par`, `ref` and
//! `yards`. An explicit `surface` property overrides the golf tag, and any
//! feature whose name mentions water is water.

use super::Hole;
use crate::domain::{GeoPoint, Polygonal, SurfaceLabel, SurfaceSet};
use crate::error::{HoleError, Result};
use geo::{Centroid, Coord, LineString, MultiPolygon, Polygon};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Raw GeoJSON feature collection
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<HashMap<String, Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Geometry with coordinates left raw until the type is known
#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub coordinates: Value,
}

impl Feature {
    fn prop_str(&self, key: &str) -> Option<&str> {
        self.properties.as_ref()?.get(key)?.as_str()
    }

    /// Numeric property, accepting OSM-style numeric strings
    fn prop_u32(&self, key: &str) -> Option<u32> {
        match self.properties.as_ref()?.get(key)? {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn name(&self) -> &str {
        self.prop_str("name").unwrap_or("")
    }

    /// Hole this feature belongs to; hole lines are numbered by `ref`
    fn hole_number(&self) -> Option<u32> {
        self.prop_u32("hole")
            .or_else(|| parse_hole_number(self.name()))
            .or_else(|| match self.prop_str("golf") {
                Some("hole") => self.prop_u32("ref"),
                _ => None,
            })
    }

    fn surface(&self) -> Option<SurfaceLabel> {
        if let Some(label) = self.prop_str("surface").and_then(SurfaceLabel::from_golf_tag) {
            return Some(label);
        }
        if self.name().to_lowercase().contains("water") {
            return Some(SurfaceLabel::Water);
        }
        self.prop_str("golf").and_then(SurfaceLabel::from_golf_tag)
    }
}

/// Hole number embedded in a feature name such as `pebble_beach_hole_8_green`
pub fn parse_hole_number(name: &str) -> Option<u32> {
    let start = name.find("hole_")? + "hole_".len();
    let digits: String = name[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok().filter(|&n| n > 0)
}

/// Read a GeoJSON file and build one hole from it
pub fn load_course(path: &Path, hole: Option<u32>) -> Result<Hole> {
    let contents = std::fs::read_to_string(path)?;
    let collection: FeatureCollection = serde_json::from_str(&contents)?;
    parse_course(&collection, hole)
}

pub fn parse_course_str(json: &str, hole: Option<u32>) -> Result<Hole> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    parse_course(&collection, hole)
}

/// Build a hole from parsed features
///
/// With `hole` set, features numbered for a different hole are skipped;
/// unnumbered features are shared by every hole. The pin falls back to the
/// centroid of the first green when no pin or hole line is tagged.
pub fn parse_course(collection: &FeatureCollection, hole: Option<u32>) -> Result<Hole> {
    let mut builder = SurfaceSet::builder();
    let mut tee = None;
    let mut pin = None;
    let mut line_ends = None;
    let mut par = None;
    let mut yards = None;
    let mut number = hole;
    let mut green_center = None;

    for feature in &collection.features {
        let feature_hole = feature.hole_number();
        if let (Some(wanted), Some(found)) = (hole, feature_hole)
            && wanted != found
        {
            continue;
        }

        let Some(geometry) = &feature.geometry else {
            continue;
        };

        match (feature.prop_str("golf"), geometry.type_.as_str()) {
            (Some("tee"), "Point") => {
                tee = Some(point(&geometry.coordinates)?);
                continue;
            }
            (Some("tee"), "Polygon") => {
                let polygon = polygon(&geometry.coordinates)?;
                tee = polygon.centroid().map(|c| GeoPoint::new(c.y(), c.x()));
                continue;
            }
            (Some("pin"), "Point") => {
                pin = Some(point(&geometry.coordinates)?);
                continue;
            }
            (Some("hole"), "LineString") => {
                let line = line(&geometry.coordinates)?;
                if let (Some(first), Some(last)) = (line.0.first(), line.0.last()) {
                    line_ends = Some((GeoPoint::from(*first), GeoPoint::from(*last)));
                }
                par = feature.prop_u32("par");
                yards = feature.prop_u32("yards");
                number = number.or(feature_hole);
                continue;
            }
            _ => {}
        }

        let Some(label) = feature.surface() else {
            tracing::debug!(name = feature.name(), "skipping feature without surface");
            continue;
        };

        let shape: Polygonal = match geometry.type_.as_str() {
            "Polygon" => polygon(&geometry.coordinates)?.into(),
            "MultiPolygon" => multi_polygon(&geometry.coordinates)?.into(),
            other => {
                tracing::warn!(name = feature.name(), geometry = other, "surface is not polygonal");
                continue;
            }
        };

        if label == SurfaceLabel::Green && green_center.is_none() {
            green_center = centroid(&shape);
        }

        builder.add(label, shape);
    }

    let tee = tee
        .or(line_ends.map(|(start, _)| start))
        .ok_or_else(|| HoleError::InvalidCourse("no tee found".to_string()))?;
    let pin = pin
        .or(line_ends.map(|(_, end)| end))
        .or(green_center)
        .ok_or_else(|| HoleError::InvalidCourse("no pin or green found".to_string()))?;

    let surfaces = builder.build();
    if surfaces.is_empty() {
        tracing::warn!("course has no surface geometry; every lie will be rough");
    }

    Ok(Hole {
        number,
        par,
        yards,
        tee,
        pin,
        surfaces,
    })
}

fn centroid(shape: &Polygonal) -> Option<GeoPoint> {
    let c = match shape {
        Polygonal::Polygon(p) => p.centroid(),
        Polygonal::MultiPolygon(mp) => mp.centroid(),
    }?;
    Some(GeoPoint::new(c.y(), c.x()))
}

fn position(value: &Value) -> Result<Coord<f64>> {
    let pair: Vec<f64> = serde_json::from_value(value.clone())?;
    match pair.as_slice() {
        [x, y, ..] => Ok(Coord { x: *x, y: *y }),
        _ => Err(HoleError::InvalidCourse(format!(
            "position needs longitude and latitude: {}",
            value
        ))),
    }
}

fn point(value: &Value) -> Result<GeoPoint> {
    position(value).map(GeoPoint::from)
}

fn positions(value: &Value) -> Result<Vec<Coord<f64>>> {
    match value {
        Value::Array(items) => items.iter().map(position).collect(),
        other => Err(HoleError::InvalidCourse(format!(
            "expected coordinate array, got {}",
            other
        ))),
    }
}

fn line(value: &Value) -> Result<LineString<f64>> {
    Ok(LineString::new(positions(value)?))
}

fn polygon(value: &Value) -> Result<Polygon<f64>> {
    let rings = match value {
        Value::Array(rings) => rings,
        other => {
            return Err(HoleError::InvalidCourse(format!(
                "expected polygon rings, got {}",
                other
            )));
        }
    };

    let mut rings = rings.iter().map(line);
    let exterior = rings
        .next()
        .transpose()?
        .ok_or_else(|| HoleError::InvalidCourse("polygon without rings".to_string()))?;
    if exterior.0.len() < 3 {
        tracing::warn!(points = exterior.0.len(), "ring has fewer than 3 points");
    }
    let interiors = rings.collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

fn multi_polygon(value: &Value) -> Result<MultiPolygon<f64>> {
    match value {
        Value::Array(polygons) => Ok(MultiPolygon(
            polygons.iter().map(polygon).collect::<Result<Vec<_>>>()?,
        )),
        other => Err(HoleError::InvalidCourse(format!(
            "expected multipolygon, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::classify;

    const SMALL_COURSE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"golf": "tee", "name": "club_hole_1_tee"},
             "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}},
            {"type": "Feature", "properties": {"golf": "hole", "par": "3", "ref": "1", "yards": 150},
             "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [0.001, 0.001]]}},
            {"type": "Feature", "properties": {"golf": "green", "name": "club_hole_1_green"},
             "geometry": {"type": "Polygon", "coordinates": [[[0.0009, 0.0009], [0.0011, 0.0009], [0.0011, 0.0011], [0.0009, 0.0011], [0.0009, 0.0009]]]}},
            {"type": "Feature", "properties": {"golf": "bunker", "name": "club_hole_2_bunker"},
             "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]]}},
            {"type": "Feature", "properties": {"name": "Pond water", "golf": "rough"},
             "geometry": {"type": "MultiPolygon", "coordinates": [[[[0.0004, 0.0], [0.0006, 0.0], [0.0006, 0.0002], [0.0004, 0.0002]]]]}},
            {"type": "Feature", "properties": {"golf": "driving_range"},
             "geometry": {"type": "Polygon", "coordinates": [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0]]]}},
            {"type": "Feature", "properties": null, "geometry": null}
        ]
    }"#;

    #[test]
    fn test_parse_hole_number() {
        assert_eq!(parse_hole_number("pebble_beach_hole_8_green"), Some(8));
        assert_eq!(parse_hole_number("course_hole_18"), Some(18));
        assert_eq!(parse_hole_number("hole_x"), None);
        assert_eq!(parse_hole_number("clubhouse"), None);
    }

    #[test]
    fn test_parse_small_course() {
        let hole = parse_course_str(SMALL_COURSE, Some(1)).unwrap();

        assert_eq!(hole.number, Some(1));
        assert_eq!(hole.par, Some(3));
        assert_eq!(hole.yards, Some(150));
        assert_eq!(hole.tee, GeoPoint::new(0.0, 0.0));
        assert_eq!(hole.pin, GeoPoint::new(0.001, 0.001));
        assert_eq!(hole.surfaces.count(SurfaceLabel::Green), 1);
        assert_eq!(hole.surfaces.count(SurfaceLabel::Water), 1);
        // Hole 2 bunker filtered out
        assert_eq!(hole.surfaces.count(SurfaceLabel::Bunker), 0);

        assert_eq!(
            classify(GeoPoint::new(0.0001, 0.0005), &hole.surfaces),
            SurfaceLabel::Water
        );
        assert_eq!(classify(hole.pin, &hole.surfaces), SurfaceLabel::Green);
    }

    #[test]
    fn test_hole_lines_filtered_by_ref() {
        let json = r#"{"features": [
            {"properties": {"golf": "hole", "ref": "1", "par": 3, "yards": 150},
             "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [0.001, 0.001]]}},
            {"properties": {"golf": "hole", "ref": "2", "par": 5, "yards": 520},
             "geometry": {"type": "LineString", "coordinates": [[1.0, 1.0], [1.005, 1.005]]}}
        ]}"#;

        let first = parse_course_str(json, Some(1)).unwrap();
        assert_eq!(first.number, Some(1));
        assert_eq!(first.tee, GeoPoint::new(0.0, 0.0));
        assert_eq!(first.pin, GeoPoint::new(0.001, 0.001));
        assert_eq!(first.par, Some(3));
        assert_eq!(first.yards, Some(150));

        let second = parse_course_str(json, Some(2)).unwrap();
        assert_eq!(second.number, Some(2));
        assert_eq!(second.tee, GeoPoint::new(1.0, 1.0));
        assert_eq!(second.par, Some(5));
        assert_eq!(second.yards, Some(520));
    }

    #[test]
    fn test_unfiltered_keeps_every_hole() {
        let hole = parse_course_str(SMALL_COURSE, None).unwrap();
        assert_eq!(hole.surfaces.count(SurfaceLabel::Bunker), 1);
        assert_eq!(hole.number, Some(1));
    }

    #[test]
    fn test_pin_falls_back_to_green_centroid() {
        let json = r#"{"features": [
            {"properties": {"golf": "tee"}, "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}},
            {"properties": {"golf": "green"},
             "geometry": {"type": "Polygon", "coordinates": [[[1.0, 1.0], [3.0, 1.0], [3.0, 3.0], [1.0, 3.0], [1.0, 1.0]]]}}
        ]}"#;
        let hole = parse_course_str(json, None).unwrap();
        assert!((hole.pin.latitude - 2.0).abs() < 1e-9);
        assert!((hole.pin.longitude - 2.0).abs() < 1e-9);
        assert_eq!(hole.par, None);
    }

    #[test]
    fn test_missing_tee_is_error() {
        let json = r#"{"features": [
            {"properties": {"golf": "pin"}, "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}}
        ]}"#;
        let err = parse_course_str(json, None).unwrap_err();
        assert!(matches!(err, HoleError::InvalidCourse(_)));
    }

    #[test]
    fn test_bad_position_is_error() {
        let json = r#"{"features": [
            {"properties": {"golf": "tee"}, "geometry": {"type": "Point", "coordinates": [1.0]}}
        ]}"#;
        assert!(parse_course_str(json, None).is_err());
    }

    #[test]
    fn test_load_course_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("course.geojson");
        std::fs::write(&path, SMALL_COURSE).unwrap();

        let hole = load_course(&path, Some(1)).unwrap();
        assert_eq!(hole.par, Some(3));

        let missing = load_course(&dir.path().join("nope.geojson"), None);
        assert!(matches!(missing, Err(HoleError::Io(_))));
    }
}

use geo::{MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Surface under a point on the hole
///
/// A closed set: the classifier never produces anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceLabel {
    Fairway,
    Green,
    Bunker,
    Water,
    Ob,
    Rough,
}

impl SurfaceLabel {
    /// Map an OSM `golf=*` tag (or an explicit label) to a surface
    pub fn from_golf_tag(tag: &str) -> Option<SurfaceLabel> {
        match tag {
            "fairway" => Some(SurfaceLabel::Fairway),
            "green" | "greens" => Some(SurfaceLabel::Green),
            "bunker" | "bunkers" => Some(SurfaceLabel::Bunker),
            "water" | "water_hazard" | "lateral_water_hazard" => Some(SurfaceLabel::Water),
            "ob" | "out_of_bounds" | "outOfBounds" => Some(SurfaceLabel::Ob),
            "rough" => Some(SurfaceLabel::Rough),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceLabel::Fairway => "fairway",
            SurfaceLabel::Green => "green",
            SurfaceLabel::Bunker => "bunker",
            SurfaceLabel::Water => "water",
            SurfaceLabel::Ob => "ob",
            SurfaceLabel::Rough => "rough",
        }
    }
}

impl fmt::Display for SurfaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either shape a course feature may arrive as
///
/// Rings are stored with x = longitude and y = latitude. Interior rings are
/// kept but containment only ever looks at exterior rings.
#[derive(Debug, Clone, PartialEq)]
pub enum Polygonal {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl From<Polygon<f64>> for Polygonal {
    fn from(p: Polygon<f64>) -> Self {
        Polygonal::Polygon(p)
    }
}

impl From<MultiPolygon<f64>> for Polygonal {
    fn from(mp: MultiPolygon<f64>) -> Self {
        Polygonal::MultiPolygon(mp)
    }
}

/// Surface geometry for one hole, keyed by label
///
/// Built once through [`SurfaceSetBuilder`] and read-only afterwards. Every
/// label maps to a plain sequence of geometries regardless of how the
/// source data grouped them.
#[derive(Debug, Clone, Default)]
pub struct SurfaceSet {
    regions: HashMap<SurfaceLabel, Vec<Polygonal>>,
}

impl SurfaceSet {
    pub fn builder() -> SurfaceSetBuilder {
        SurfaceSetBuilder::default()
    }

    /// Geometries registered for a label, empty if none
    pub fn regions(&self, label: SurfaceLabel) -> &[Polygonal] {
        self.regions.get(&label).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, label: SurfaceLabel) -> usize {
        self.regions(label).len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.values().all(Vec::is_empty)
    }
}

#[derive(Debug, Default)]
pub struct SurfaceSetBuilder {
    regions: HashMap<SurfaceLabel, Vec<Polygonal>>,
}

impl SurfaceSetBuilder {
    pub fn add(&mut self, label: SurfaceLabel, geometry: impl Into<Polygonal>) -> &mut Self {
        self.regions.entry(label).or_default().push(geometry.into());
        self
    }

    pub fn with(mut self, label: SurfaceLabel, geometry: impl Into<Polygonal>) -> Self {
        self.add(label, geometry);
        self
    }

    pub fn build(self) -> SurfaceSet {
        SurfaceSet {
            regions: self.regions,
        }
    }
}

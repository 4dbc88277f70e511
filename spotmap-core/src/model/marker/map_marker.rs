use serde::{Deserialize, Serialize};

use crate::model::coordinate::Coordinate;

/// role of a marker on a map surface.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MarkerKind {
    /// the point a nearest-listing search was centered on
    Reference,
    /// a listing returned by a search or selected by a filter
    Result,
    /// a circle summarizing many listings, sized by `radius`
    Cluster { radius: f64 },
}

impl MarkerKind {
    pub fn color(&self) -> &'static str {
        match self {
            MarkerKind::Reference => "blue",
            MarkerKind::Result => "red",
            MarkerKind::Cluster { .. } => "red",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MarkerKind::Reference => "reference",
            MarkerKind::Result => "result",
            MarkerKind::Cluster { .. } => "cluster",
        }
    }
}

/// a point to draw on an interactive map, with optional hover and click text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub coordinate: Coordinate,
    pub kind: MarkerKind,
    pub tooltip: Option<String>,
    pub popup: Option<String>,
}

use serde::{Deserialize, Serialize};

use crate::model::{coordinate::Coordinate, dataset::SpotDataset};

use super::{resolve_postal_code, LocatorError};

/// where a nearest-listing search is centered: either a postal code that must be
/// resolved against the dataset, or a coordinate chosen directly (e.g. a map click).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePoint {
    PostalCode(String),
    Coordinate(Coordinate),
}

impl ReferencePoint {
    pub fn resolve(&self, dataset: &SpotDataset) -> Result<Coordinate, LocatorError> {
        match self {
            ReferencePoint::PostalCode(code) => resolve_postal_code(dataset, code),
            ReferencePoint::Coordinate(c) => Coordinate::try_new(c.latitude, c.longitude)
                .map_err(LocatorError::InvalidInput),
        }
    }
}

impl std::fmt::Display for ReferencePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferencePoint::PostalCode(code) => write!(f, "postal code {code}"),
            ReferencePoint::Coordinate(c) => write!(f, "point {c}"),
        }
    }
}

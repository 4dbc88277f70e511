use serde::{Deserialize, Serialize};

/// opaque identifier of a listing ("Spot ID" in the source data).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpotId(pub String);

impl std::fmt::Display for SpotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

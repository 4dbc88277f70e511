use serde::{Deserialize, Serialize};

/// free-text category of a space. known synonyms are normalized on construction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "String", into = "String")]
pub struct SpaceCategory(String);

/// raw category values and the label they are reported under.
const SYNONYMS: [(&str, &str); 1] = [("field", "empty lot")];

impl SpaceCategory {
    pub fn new(value: &str) -> Self {
        let trimmed = value.trim();
        let normalized = SYNONYMS
            .iter()
            .find(|(raw, _)| *raw == trimmed)
            .map(|(_, label)| *label)
            .unwrap_or(trimmed);
        Self(normalized.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SpaceCategory {
    fn from(value: String) -> Self {
        SpaceCategory::new(&value)
    }
}

impl From<SpaceCategory> for String {
    fn from(value: SpaceCategory) -> Self {
        value.0
    }
}

impl std::fmt::Display for SpaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! categorical listing attributes. the source dataset encodes each of these as
//! an integer code (1 or 2); already-labelled exports are accepted as well.
//! any other value is treated as missing.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListingType {
    Rent,
    Sale,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PriceArea {
    #[serde(rename = "All space")]
    AllSpace,
    #[serde(rename = "By Sq M")]
    BySqM,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurrencyType {
    #[serde(rename = "MXP")]
    Mxp,
    #[serde(rename = "USD")]
    Usd,
}

/// source codes are integers but may arrive as floats ("1.0") when the column
/// has gaps in it.
fn parse_code(value: &str) -> Option<u8> {
    let trimmed = value.trim();
    match trimmed.parse::<u8>() {
        Ok(code) => Some(code),
        Err(_) => trimmed
            .parse::<f64>()
            .ok()
            .filter(|f| f.fract() == 0.0 && (0.0..=255.0).contains(f))
            .map(|f| f as u8),
    }
}

impl ListingType {
    pub fn from_source(value: &str) -> Option<Self> {
        match parse_code(value) {
            Some(1) => return Some(Self::Rent),
            Some(2) => return Some(Self::Sale),
            Some(_) => return None,
            None => {}
        }
        match value.trim().to_lowercase().as_str() {
            "rent" => Some(Self::Rent),
            "sale" => Some(Self::Sale),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingType::Rent => "Rent",
            ListingType::Sale => "Sale",
        }
    }
}

impl PriceArea {
    pub fn from_source(value: &str) -> Option<Self> {
        match parse_code(value) {
            Some(1) => return Some(Self::AllSpace),
            Some(2) => return Some(Self::BySqM),
            Some(_) => return None,
            None => {}
        }
        match value.trim().to_lowercase().as_str() {
            "all space" => Some(Self::AllSpace),
            "by sq m" => Some(Self::BySqM),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceArea::AllSpace => "All space",
            PriceArea::BySqM => "By Sq M",
        }
    }
}

impl CurrencyType {
    pub fn from_source(value: &str) -> Option<Self> {
        match parse_code(value) {
            Some(1) => return Some(Self::Mxp),
            Some(2) => return Some(Self::Usd),
            Some(_) => return None,
            None => {}
        }
        match value.trim().to_uppercase().as_str() {
            "MXP" | "MXN" => Some(Self::Mxp),
            "USD" => Some(Self::Usd),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CurrencyType::Mxp => "MXP",
            CurrencyType::Usd => "USD",
        }
    }
}

impl std::fmt::Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::fmt::Display for PriceArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ListingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_source(s).ok_or_else(|| {
            format!("unknown listing type '{s}', expected one of [Rent, Sale] or [1, 2]")
        })
    }
}

impl std::str::FromStr for PriceArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_source(s).ok_or_else(|| {
            format!("unknown price area '{s}', expected one of ['All space', 'By Sq M'] or [1, 2]")
        })
    }
}

impl std::str::FromStr for CurrencyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_source(s).ok_or_else(|| {
            format!("unknown currency type '{s}', expected one of [MXP, USD] or [1, 2]")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_map_to_labels() {
        assert_eq!(ListingType::from_source("1"), Some(ListingType::Rent));
        assert_eq!(ListingType::from_source("2"), Some(ListingType::Sale));
        assert_eq!(PriceArea::from_source("1"), Some(PriceArea::AllSpace));
        assert_eq!(PriceArea::from_source("2.0"), Some(PriceArea::BySqM));
        assert_eq!(CurrencyType::from_source("1"), Some(CurrencyType::Mxp));
        assert_eq!(CurrencyType::from_source("2"), Some(CurrencyType::Usd));
    }

    #[test]
    fn test_unknown_codes_are_missing() {
        assert_eq!(ListingType::from_source("3"), None);
        assert_eq!(PriceArea::from_source("0"), None);
        assert_eq!(CurrencyType::from_source("1.5"), None);
        assert_eq!(CurrencyType::from_source(""), None);
    }

    #[test]
    fn test_labels_are_accepted() {
        assert_eq!(ListingType::from_source("sale"), Some(ListingType::Sale));
        assert_eq!(PriceArea::from_source("By Sq M"), Some(PriceArea::BySqM));
        assert_eq!(CurrencyType::from_source("usd"), Some(CurrencyType::Usd));
    }

    #[test]
    fn test_serialize_as_label() {
        let json = serde_json::to_string(&PriceArea::AllSpace).unwrap();
        assert_eq!(json, "\"All space\"");
        let json = serde_json::to_string(&CurrencyType::Mxp).unwrap();
        assert_eq!(json, "\"MXP\"");
    }
}

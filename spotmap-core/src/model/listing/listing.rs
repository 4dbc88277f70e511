use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    model::coordinate::Coordinate,
    util::date_ops,
};

use super::{CurrencyType, ListingRecord, ListingType, PriceArea, SpaceCategory, SpotId};

/// a typed, normalized listing ("spot"). listings are immutable once loaded
/// into a dataset.
///
/// invariants established on construction:
///   - if present, the coordinate is finite and in range
///   - longitude is always stored as a non-positive (western hemisphere) value
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Listing {
    pub spot_id: SpotId,
    pub coordinate: Option<Coordinate>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub listing_type: Option<ListingType>,
    pub price_area: Option<PriceArea>,
    pub currency: Option<CurrencyType>,
    pub space_category: Option<SpaceCategory>,
    pub rate: Option<f64>,
    pub square_space: Option<f64>,
    /// None when the source timestamp was missing or could not be parsed.
    pub created_at: Option<NaiveDateTime>,
}

impl Listing {
    pub fn latitude(&self) -> Option<f64> {
        self.coordinate.map(|c| c.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinate.map(|c| c.longitude)
    }
}

impl TryFrom<ListingRecord> for Listing {
    type Error = String;

    fn try_from(record: ListingRecord) -> Result<Self, Self::Error> {
        let spot_id = record.spot_id.trim();
        if spot_id.is_empty() {
            return Err(String::from("listing has an empty 'Spot ID'"));
        }
        let spot_id = SpotId(spot_id.to_string());
        let coordinate = normalize_coordinate(&spot_id, record.latitude, record.longitude);

        Ok(Listing {
            spot_id,
            coordinate,
            zip_code: non_empty(record.zip_code),
            city: non_empty(record.city),
            listing_type: record.listing_type.as_deref().and_then(ListingType::from_source),
            price_area: record.price_area.as_deref().and_then(PriceArea::from_source),
            currency: record.currency.as_deref().and_then(CurrencyType::from_source),
            space_category: non_empty(record.space_category).map(|c| SpaceCategory::new(&c)),
            rate: record.rate.filter(|r| r.is_finite()),
            square_space: record.square_space.filter(|s| s.is_finite()),
            created_at: record.created_at.as_deref().and_then(date_ops::parse_created_at),
        })
    }
}

/// longitudes in the source data are sometimes exported without their sign.
/// all listings are in the western hemisphere, so the stored longitude is forced
/// to be non-positive. invalid values drop the coordinate entirely.
fn normalize_coordinate(
    spot_id: &SpotId,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Option<Coordinate> {
    let (lat, lon) = match (latitude, longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        (None, None) => return None,
        _ => {
            log::warn!("listing {spot_id} has only one of latitude/longitude, ignoring its location");
            return None;
        }
    };
    match Coordinate::try_new(lat, -lon.abs()) {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("listing {spot_id} has an invalid location, ignoring it: {e}");
            None
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

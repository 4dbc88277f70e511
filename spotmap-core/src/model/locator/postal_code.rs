use crate::model::{coordinate::Coordinate, dataset::SpotDataset};

use super::LocatorError;

/// finds the location of a postal code using the first listing, in dataset order,
/// whose postal code matches exactly (case-sensitive) and which has a location.
pub fn resolve_postal_code(dataset: &SpotDataset, code: &str) -> Result<Coordinate, LocatorError> {
    let mut n_matched = 0;
    for listing in dataset.iter() {
        if listing.zip_code.as_deref() != Some(code) {
            continue;
        }
        n_matched += 1;
        if let Some(coordinate) = listing.coordinate {
            log::debug!(
                "postal code {code} resolved to {coordinate} via listing {}",
                listing.spot_id
            );
            return Ok(coordinate);
        }
    }
    if n_matched == 0 {
        Err(LocatorError::NotFound(format!(
            "postal code '{code}' does not match any listing"
        )))
    } else {
        Err(LocatorError::NotFound(format!(
            "postal code '{code}' matched {n_matched} listing(s) but none has a location"
        )))
    }
}

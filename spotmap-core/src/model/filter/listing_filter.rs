use std::collections::HashSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::listing::{CurrencyType, Listing, ListingType, PriceArea};

/// selections applied to the listing dataset before aggregating or mapping it.
///
/// each field is optional. `None` places no restriction on that attribute, while
/// `Some(set)` only admits listings whose value is present and a member of the set.
/// listings missing the attribute are therefore rejected by any explicit selection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ListingFilter {
    pub listing_types: Option<HashSet<ListingType>>,
    pub price_areas: Option<HashSet<PriceArea>>,
    pub currencies: Option<HashSet<CurrencyType>>,
    /// exact city names, as they appear in the dataset
    pub cities: Option<HashSet<String>>,
}

impl ListingFilter {
    pub fn accepts(&self, listing: &Listing) -> bool {
        admits(&self.listing_types, listing.listing_type.as_ref())
            && admits(&self.price_areas, listing.price_area.as_ref())
            && admits(&self.currencies, listing.currency.as_ref())
            && admits(&self.cities, listing.city.as_ref())
    }

    /// true when no selection has been made on any attribute.
    pub fn is_unrestricted(&self) -> bool {
        self.listing_types.is_none()
            && self.price_areas.is_none()
            && self.currencies.is_none()
            && self.cities.is_none()
    }
}

fn admits<T: Eq + std::hash::Hash>(selection: &Option<HashSet<T>>, value: Option<&T>) -> bool {
    match (selection, value) {
        (None, _) => true,
        (Some(set), Some(v)) => set.contains(v),
        (Some(_), None) => false,
    }
}

impl std::fmt::Display for ListingFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn describe<T: std::fmt::Display>(name: &str, set: &Option<HashSet<T>>) -> Option<String> {
            set.as_ref().map(|s| {
                let values = s.iter().map(|v| v.to_string()).sorted().join("|");
                format!("{name} in [{values}]")
            })
        }
        let parts = [
            describe("type", &self.listing_types),
            describe("price_area", &self.price_areas),
            describe("currency", &self.currencies),
            describe("city", &self.cities),
        ]
        .into_iter()
        .flatten()
        .collect_vec();
        if parts.is_empty() {
            write!(f, "<all listings>")
        } else {
            write!(f, "{}", parts.join(" & "))
        }
    }
}

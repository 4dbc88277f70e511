use uom::si::f64::Length;

use crate::{model::listing::Listing, util::geo_utils};

/// a listing paired with its distance from the query reference point. results
/// borrow from the dataset snapshot rather than copying or annotating it.
#[derive(Clone, Debug, PartialEq)]
pub struct NearestResult<'a> {
    pub listing: &'a Listing,
    pub distance: Length,
}

impl NearestResult<'_> {
    pub fn distance_km(&self) -> f64 {
        geo_utils::as_kilometers(&self.distance)
    }
}

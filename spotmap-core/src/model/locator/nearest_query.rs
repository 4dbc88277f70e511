use uom::si::f64::Length;

use crate::{model::coordinate::Coordinate, util::geo_utils};

use super::LocatorError;

/// a validated radius query: at most `limit` listings within `radius` of `reference`.
/// fields are private so that a query can only exist in a valid state.
#[derive(Clone, Debug, PartialEq)]
pub struct NearestQuery {
    reference: Coordinate,
    radius: Length,
    limit: usize,
}

impl NearestQuery {
    /// builds a query, failing with [`LocatorError::InvalidInput`] when
    ///   - the reference coordinate is not finite or out of range
    ///   - the radius is not a positive, finite number of kilometers
    ///   - the limit is zero
    pub fn new(reference: Coordinate, radius_km: f64, limit: usize) -> Result<Self, LocatorError> {
        let reference = Coordinate::try_new(reference.latitude, reference.longitude)
            .map_err(LocatorError::InvalidInput)?;
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(LocatorError::InvalidInput(format!(
                "radius must be a positive number of kilometers, found {radius_km}"
            )));
        }
        if limit == 0 {
            return Err(LocatorError::InvalidInput(String::from(
                "limit must be a positive number of results",
            )));
        }
        Ok(Self {
            reference,
            radius: Length::new::<uom::si::length::kilometer>(radius_km),
            limit,
        })
    }

    pub fn reference(&self) -> &Coordinate {
        &self.reference
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    pub fn radius_km(&self) -> f64 {
        geo_utils::as_kilometers(&self.radius)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl std::fmt::Display for NearestQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "up to {} listings within {} km of {}",
            self.limit,
            self.radius_km(),
            self.reference
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEXICO_CITY: Coordinate = Coordinate {
        latitude: 19.4326,
        longitude: -99.1332,
    };

    #[test]
    fn test_valid_query() {
        let query = NearestQuery::new(MEXICO_CITY, 5.0, 3).unwrap();
        assert_eq!(query.radius_km(), 5.0);
        assert_eq!(query.limit(), 3);
        assert_eq!(query.reference(), &MEXICO_CITY);
    }

    #[test]
    fn test_zero_radius_is_invalid() {
        let result = NearestQuery::new(MEXICO_CITY, 0.0, 3);
        assert!(matches!(result, Err(LocatorError::InvalidInput(_))));
    }

    #[test]
    fn test_negative_or_nan_radius_is_invalid() {
        assert!(matches!(
            NearestQuery::new(MEXICO_CITY, -1.0, 3),
            Err(LocatorError::InvalidInput(_))
        ));
        assert!(matches!(
            NearestQuery::new(MEXICO_CITY, f64::NAN, 3),
            Err(LocatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_limit_is_invalid() {
        let result = NearestQuery::new(MEXICO_CITY, 5.0, 0);
        assert!(matches!(result, Err(LocatorError::InvalidInput(_))));
    }

    #[test]
    fn test_out_of_range_reference_is_invalid() {
        let reference = Coordinate {
            latitude: 91.0,
            longitude: -99.1332,
        };
        let result = NearestQuery::new(reference, 5.0, 3);
        assert!(matches!(result, Err(LocatorError::InvalidInput(_))));
        let reference = Coordinate {
            latitude: 19.4326,
            longitude: -181.0,
        };
        let result = NearestQuery::new(reference, 5.0, 3);
        assert!(matches!(result, Err(LocatorError::InvalidInput(_))));
    }
}

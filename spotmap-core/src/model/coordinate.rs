use geo::Point;
use serde::{Deserialize, Serialize};

/// default center for map surfaces (Mexico City).
pub const DEFAULT_MAP_CENTER: Coordinate = Coordinate {
    latitude: 19.4326,
    longitude: -99.1332,
};

/// a WGS84 location in decimal degrees. construct with [`Coordinate::try_new`]
/// to guarantee finite, in-range values.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(format!(
                "coordinate ({latitude}, {longitude}) must have finite latitude and longitude"
            ));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(format!(
                "latitude {latitude} must be in range [-90, 90]"
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(format!(
                "longitude {longitude} must be in range [-180, 180]"
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// geo point in (x=longitude, y=latitude) order.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinate() {
        let c = Coordinate::try_new(19.4326, -99.1332).unwrap();
        let p = c.to_point();
        assert_eq!(p.x(), -99.1332);
        assert_eq!(p.y(), 19.4326);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(Coordinate::try_new(90.0, 180.0).is_ok());
        assert!(Coordinate::try_new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(Coordinate::try_new(90.1, 0.0).is_err());
        assert!(Coordinate::try_new(0.0, -180.5).is_err());
        assert!(Coordinate::try_new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::try_new(0.0, f64::INFINITY).is_err());
    }
}

use geo::{Distance, Geodesic, Haversine, Point};
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// method used to compute the great-circle distance between two lat/lon points.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DistanceCalculationPolicy {
    /// ellipsoidal (WGS84) geodesic distance. slower but accurate to the millimeter.
    #[default]
    Geodesic,
    /// spherical approximation using the mean earth radius.
    Haversine,
}

impl DistanceCalculationPolicy {
    /// computes the distance between two points. points are expected to be
    /// in (x=longitude, y=latitude) order.
    pub fn distance(&self, a: Point<f64>, b: Point<f64>) -> Length {
        let meters = match self {
            DistanceCalculationPolicy::Geodesic => Geodesic.distance(a, b),
            DistanceCalculationPolicy::Haversine => Haversine.distance(a, b),
        };
        Length::new::<uom::si::length::meter>(meters)
    }
}

impl std::fmt::Display for DistanceCalculationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DistanceCalculationPolicy::Geodesic => "geodesic",
            DistanceCalculationPolicy::Haversine => "haversine",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for DistanceCalculationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "geodesic" => Ok(Self::Geodesic),
            "haversine" => Ok(Self::Haversine),
            other => Err(format!(
                "unknown distance calculation policy '{other}', expected one of [geodesic, haversine]"
            )),
        }
    }
}

/// convenience for reporting a distance in kilometers.
pub fn as_kilometers(distance: &Length) -> f64 {
    distance.get::<uom::si::length::kilometer>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::point;

    #[test]
    fn test_distance_is_symmetric() {
        let mexico_city = point!(x: -99.1332, y: 19.4326);
        let guadalajara = point!(x: -103.3496, y: 20.6597);
        for policy in [
            DistanceCalculationPolicy::Geodesic,
            DistanceCalculationPolicy::Haversine,
        ] {
            let ab = as_kilometers(&policy.distance(mexico_city, guadalajara));
            let ba = as_kilometers(&policy.distance(guadalajara, mexico_city));
            assert!((ab - ba).abs() < 1e-9, "{policy} was not symmetric: {ab} vs {ba}");
        }
    }

    #[test]
    fn test_policies_agree_within_approximation_error() {
        let mexico_city = point!(x: -99.1332, y: 19.4326);
        let guadalajara = point!(x: -103.3496, y: 20.6597);
        let geodesic = as_kilometers(&DistanceCalculationPolicy::Geodesic.distance(mexico_city, guadalajara));
        let haversine =
            as_kilometers(&DistanceCalculationPolicy::Haversine.distance(mexico_city, guadalajara));
        // roughly 460 km apart; the spherical model drifts by well under 1%
        assert!(geodesic > 440.0 && geodesic < 480.0, "unexpected distance {geodesic}");
        assert!((geodesic - haversine).abs() / geodesic < 0.01);
    }

    #[test]
    fn test_zero_distance() {
        let p = point!(x: -99.1332, y: 19.4326);
        let d = DistanceCalculationPolicy::default().distance(p, p);
        assert!(as_kilometers(&d).abs() < 1e-9);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(
            "Haversine".parse::<DistanceCalculationPolicy>(),
            Ok(DistanceCalculationPolicy::Haversine)
        );
        assert!("vincenty".parse::<DistanceCalculationPolicy>().is_err());
    }
}

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{
    model::{coordinate::Coordinate, dataset::SpotDataset},
    util::geo_utils::DistanceCalculationPolicy,
};

use super::{NearestQuery, NearestResult};

/// finds the listings closest to the query reference point.
///
/// computes the distance from the reference point to every listing with a location,
/// discards those farther than the query radius, and returns at most `limit` results
/// in ascending order of distance. listings at equal distances keep their dataset
/// order. an empty dataset, or one with no listing in range, produces no results.
pub fn nearest_listings<'a>(
    dataset: &'a SpotDataset,
    query: &NearestQuery,
    policy: &DistanceCalculationPolicy,
) -> Vec<NearestResult<'a>> {
    let reference = query.reference().to_point();
    let radius = query.radius();
    let mut results = dataset
        .with_coordinates()
        .map(|(listing, coordinate)| NearestResult {
            listing,
            distance: policy.distance(reference, coordinate.to_point()),
        })
        .filter(|r| r.distance <= radius)
        .collect_vec();

    // stable sort, ties remain in dataset order
    results.sort_by_key(|r| OrderedFloat(r.distance.value));
    results.truncate(query.limit());

    log::debug!(
        "found {} result(s) for query: {query} using {policy} distance",
        results.len()
    );
    results
}

/// the single listing closest to a coordinate, without any radius limit. used to
/// describe a location picked on a map, e.g. reporting its nearest postal code.
pub fn nearest_listing<'a>(
    dataset: &'a SpotDataset,
    coordinate: &Coordinate,
    policy: &DistanceCalculationPolicy,
) -> Option<NearestResult<'a>> {
    let reference = coordinate.to_point();
    dataset
        .with_coordinates()
        .map(|(listing, c)| NearestResult {
            listing,
            distance: policy.distance(reference, c.to_point()),
        })
        .min_by_key(|r| OrderedFloat(r.distance.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        listing::{Listing, SpotId},
        locator::LocatorError,
    };
    use geo::{Destination, Geodesic, Point};

    const MEXICO_CITY: Coordinate = Coordinate {
        latitude: 19.4326,
        longitude: -99.1332,
    };

    fn listing(id: &str, coordinate: Option<Coordinate>) -> Listing {
        Listing {
            spot_id: SpotId(id.to_string()),
            coordinate,
            zip_code: None,
            city: None,
            listing_type: None,
            price_area: None,
            currency: None,
            space_category: None,
            rate: None,
            square_space: None,
            created_at: None,
        }
    }

    /// a coordinate `km` kilometers from the origin along `bearing` degrees.
    fn offset(origin: &Coordinate, bearing: f64, km: f64) -> Coordinate {
        let p: Point<f64> = Geodesic.destination(origin.to_point(), bearing, km * 1000.0);
        Coordinate::try_new(p.y(), p.x()).unwrap()
    }

    fn scenario_dataset() -> SpotDataset {
        let distances = [(1.2, 0.0), (4.9, 90.0), (5.1, 180.0), (10.0, 270.0), (0.3, 45.0)];
        let listings = distances
            .iter()
            .enumerate()
            .map(|(idx, (km, bearing))| {
                listing(
                    &format!("spot-{idx}"),
                    Some(offset(&MEXICO_CITY, *bearing, *km)),
                )
            })
            .collect();
        SpotDataset::new(listings)
    }

    fn ids(results: &[NearestResult]) -> Vec<String> {
        results.iter().map(|r| r.listing.spot_id.0.clone()).collect()
    }

    #[test]
    fn test_mexico_city_scenario() {
        let dataset = scenario_dataset();
        let query = NearestQuery::new(MEXICO_CITY, 5.0, 3).unwrap();
        let results = nearest_listings(&dataset, &query, &DistanceCalculationPolicy::Geodesic);
        assert_eq!(ids(&results), vec!["spot-4", "spot-0", "spot-1"]);
        let expected = [0.3, 1.2, 4.9];
        for (result, km) in results.iter().zip(expected) {
            assert!(
                (result.distance_km() - km).abs() < 1e-6,
                "expected {km} km, found {}",
                result.distance_km()
            );
        }
    }

    #[test]
    fn test_results_respect_radius_order_and_limit() {
        let dataset = scenario_dataset();
        for policy in [
            DistanceCalculationPolicy::Geodesic,
            DistanceCalculationPolicy::Haversine,
        ] {
            for (radius, limit) in [(0.1, 5), (2.0, 1), (6.0, 10), (20.0, 2), (20.0, 100)] {
                let query = NearestQuery::new(MEXICO_CITY, radius, limit).unwrap();
                let results = nearest_listings(&dataset, &query, &policy);
                assert!(results.len() <= limit);
                assert!(results.iter().all(|r| r.distance_km() <= radius));
                assert!(results
                    .iter()
                    .tuple_windows()
                    .all(|(a, b)| a.distance <= b.distance));
            }
        }
    }

    #[test]
    fn test_limit_larger_than_qualifying() {
        let dataset = scenario_dataset();
        let query = NearestQuery::new(MEXICO_CITY, 5.0, 50).unwrap();
        let results = nearest_listings(&dataset, &query, &DistanceCalculationPolicy::Geodesic);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        let shared = offset(&MEXICO_CITY, 30.0, 2.0);
        let dataset = SpotDataset::new(vec![
            listing("far", Some(offset(&MEXICO_CITY, 0.0, 3.0))),
            listing("second", Some(shared)),
            listing("unlocated", None),
            listing("first", Some(shared)),
            listing("third", Some(shared)),
        ]);
        let query = NearestQuery::new(MEXICO_CITY, 5.0, 4).unwrap();
        let results = nearest_listings(&dataset, &query, &DistanceCalculationPolicy::Geodesic);
        assert_eq!(ids(&results), vec!["second", "first", "third", "far"]);
    }

    #[test]
    fn test_empty_dataset_returns_empty() {
        let dataset = SpotDataset::default();
        let query = NearestQuery::new(MEXICO_CITY, 5.0, 3).unwrap();
        let results = nearest_listings(&dataset, &query, &DistanceCalculationPolicy::Geodesic);
        assert!(results.is_empty());
        assert!(nearest_listing(&dataset, &MEXICO_CITY, &DistanceCalculationPolicy::Geodesic).is_none());
    }

    #[test]
    fn test_zero_radius_rejected_before_search() {
        assert!(matches!(
            NearestQuery::new(MEXICO_CITY, 0.0, 3),
            Err(LocatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_dataset_is_not_modified() {
        let dataset = scenario_dataset();
        let before = dataset.listings().to_vec();
        let query = NearestQuery::new(MEXICO_CITY, 5.0, 3).unwrap();
        let _ = nearest_listings(&dataset, &query, &DistanceCalculationPolicy::Geodesic);
        let _ = nearest_listings(&dataset, &query, &DistanceCalculationPolicy::Haversine);
        assert_eq!(dataset.listings(), &before[..]);
    }

    #[test]
    fn test_nearest_listing_ignores_radius() {
        let dataset = SpotDataset::new(vec![
            listing("x", Some(offset(&MEXICO_CITY, 0.0, 120.0))),
            listing("y", Some(offset(&MEXICO_CITY, 90.0, 80.0))),
        ]);
        let result =
            nearest_listing(&dataset, &MEXICO_CITY, &DistanceCalculationPolicy::Geodesic).unwrap();
        assert_eq!(result.listing.spot_id.0, "y");
        assert!((result.distance_km() - 80.0).abs() < 1e-6);
    }
}

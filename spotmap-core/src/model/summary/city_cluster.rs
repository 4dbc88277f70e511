use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{coordinate::Coordinate, dataset::SpotDataset, listing::Listing};

/// listings of a single city collapsed to one point, used to draw one
/// proportionally sized circle per city on an overview map.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CityCluster {
    pub city: String,
    /// mean location of the city's listings that have one
    pub centroid: Option<Coordinate>,
    pub count: usize,
    pub rate_min: Option<f64>,
    pub rate_max: Option<f64>,
}

/// groups listings by city, ordered by city name. listings without a city are skipped.
pub fn city_clusters(dataset: &SpotDataset) -> Vec<CityCluster> {
    dataset
        .iter()
        .filter_map(|l| l.city.as_ref().map(|city| (city.as_str(), l)))
        .into_group_map()
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(city, listings)| CityCluster::new(city, &listings))
        .collect()
}

impl CityCluster {
    fn new(city: &str, listings: &[&Listing]) -> Self {
        let located = listings.iter().filter_map(|l| l.coordinate).collect_vec();
        let centroid = if located.is_empty() {
            None
        } else {
            let n = located.len() as f64;
            let lat = located.iter().map(|c| c.latitude).sum::<f64>() / n;
            let lon = located.iter().map(|c| c.longitude).sum::<f64>() / n;
            Some(Coordinate {
                latitude: lat,
                longitude: lon,
            })
        };
        let rates = listings.iter().filter_map(|l| l.rate).collect_vec();
        let rate_min = rates.iter().copied().reduce(f64::min);
        let rate_max = rates.iter().copied().reduce(f64::max);
        Self {
            city: city.to_string(),
            centroid,
            count: listings.len(),
            rate_min,
            rate_max,
        }
    }

    /// map circle size, one unit per ten listings.
    pub fn marker_radius(&self) -> f64 {
        self.count as f64 / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_clusters() {
        let data = "Spot ID,latitude,longitude,zip_codes_city,rate\n\
                    1,20.0,-100.0,Querétaro,100\n\
                    2,,,Puebla,50\n\
                    3,22.0,-102.0,Querétaro,300\n\
                    4,19.0,-98.0,Puebla,\n\
                    5,19.5,-99.0,,10\n";
        let dataset = SpotDataset::from_reader(data.as_bytes()).unwrap();
        let clusters = city_clusters(&dataset);
        assert_eq!(clusters.len(), 2);

        let puebla = &clusters[0];
        assert_eq!(puebla.city, "Puebla");
        assert_eq!(puebla.count, 2);
        assert_eq!(
            puebla.centroid,
            Some(Coordinate {
                latitude: 19.0,
                longitude: -98.0
            })
        );
        assert_eq!((puebla.rate_min, puebla.rate_max), (Some(50.0), Some(50.0)));

        let queretaro = &clusters[1];
        assert_eq!(queretaro.city, "Querétaro");
        assert_eq!(
            queretaro.centroid,
            Some(Coordinate {
                latitude: 21.0,
                longitude: -101.0
            })
        );
        assert_eq!(
            (queretaro.rate_min, queretaro.rate_max),
            (Some(100.0), Some(300.0))
        );
        assert_eq!(queretaro.marker_radius(), 0.2);
    }
}

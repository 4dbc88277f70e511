use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::model::{
    coordinate::Coordinate, dataset::SpotDataset, listing::Listing, locator::NearestResult,
    summary::CityCluster,
};

use super::{MapMarker, MarkerKind};

/// one marker for the search reference point followed by one marker per result,
/// in result order.
pub fn nearest_markers(reference: &Coordinate, results: &[NearestResult]) -> Vec<MapMarker> {
    let reference_marker = MapMarker {
        coordinate: *reference,
        kind: MarkerKind::Reference,
        tooltip: Some(String::from("Selected Location")),
        popup: None,
    };
    let result_markers = results.iter().filter_map(|r| {
        r.listing.coordinate.map(|coordinate| MapMarker {
            coordinate,
            kind: MarkerKind::Result,
            tooltip: Some(format!("Spot ID: {}", r.listing.spot_id)),
            popup: Some(format!(
                "Spot ID: {}\nType: {}\nPrice Area: {}\nCurrency Type: {}\nSquare Space: {}\nDistance: {:.3} km",
                r.listing.spot_id,
                display_or_unknown(r.listing.listing_type),
                display_or_unknown(r.listing.price_area),
                display_or_unknown(r.listing.currency),
                display_or_unknown(r.listing.square_space),
                r.distance_km()
            )),
        })
    });
    std::iter::once(reference_marker).chain(result_markers).collect()
}

/// one marker per listing with a location, in dataset order.
pub fn listing_markers(dataset: &SpotDataset) -> Vec<MapMarker> {
    dataset
        .with_coordinates()
        .map(|(listing, coordinate)| MapMarker {
            coordinate,
            kind: MarkerKind::Result,
            tooltip: Some(format!("Spot ID: {}", listing.spot_id)),
            popup: Some(listing_popup(listing)),
        })
        .collect()
}

/// one circle per city with at least one located listing.
pub fn cluster_markers(clusters: &[CityCluster]) -> Vec<MapMarker> {
    clusters
        .iter()
        .filter_map(|cluster| {
            cluster.centroid.map(|coordinate| MapMarker {
                coordinate,
                kind: MarkerKind::Cluster {
                    radius: cluster.marker_radius(),
                },
                tooltip: Some(cluster.city.clone()),
                popup: Some(format!(
                    "{}: {} spaces, Rate Range: {} - {}",
                    cluster.city,
                    cluster.count,
                    display_or_unknown(cluster.rate_min),
                    display_or_unknown(cluster.rate_max)
                )),
            })
        })
        .collect()
}

/// encodes markers as GeoJSON point features. marker kind, color and text are
/// stored as feature properties. the map view center is written to the
/// collection as a `center` member in `[lon, lat]` order.
pub fn markers_to_geojson(markers: &[MapMarker], center: &Coordinate) -> FeatureCollection {
    let features = markers
        .iter()
        .map(|marker| {
            let geometry = Geometry::new(Value::Point(vec![
                marker.coordinate.longitude,
                marker.coordinate.latitude,
            ]));
            let mut properties = JsonObject::new();
            properties.insert(String::from("kind"), json!(marker.kind.name()));
            properties.insert(String::from("color"), json!(marker.kind.color()));
            if let MarkerKind::Cluster { radius } = marker.kind {
                properties.insert(String::from("radius"), json!(radius));
            }
            if let Some(tooltip) = &marker.tooltip {
                properties.insert(String::from("tooltip"), json!(tooltip));
            }
            if let Some(popup) = &marker.popup {
                properties.insert(String::from("popup"), json!(popup));
            }
            Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();
    let mut foreign_members = JsonObject::new();
    foreign_members.insert(
        String::from("center"),
        json!([center.longitude, center.latitude]),
    );
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(foreign_members),
    }
}

fn listing_popup(listing: &Listing) -> String {
    format!(
        "City: {}, Rate: {}, Type: {}, Area: {} sqm",
        listing.city.as_deref().unwrap_or("unknown"),
        display_or_unknown(listing.rate),
        display_or_unknown(listing.listing_type),
        display_or_unknown(listing.square_space)
    )
}

fn display_or_unknown<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| String::from("unknown"))
}

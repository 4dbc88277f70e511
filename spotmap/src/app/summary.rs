use std::{
    collections::HashSet,
    io::{self, Write},
    path::Path,
};

use spotmap_core::model::{
    coordinate::Coordinate,
    dataset::SpotDataset,
    filter::ListingFilter,
    listing::{CurrencyType, ListingType, PriceArea},
    marker::{cluster_markers, listing_markers, MapMarker},
    summary::{city_clusters, SpotSummary},
};

use super::{
    output::{write_geojson, write_to_file},
    SpotmapAppError,
};

/// turns repeated command line selections into a filter. an attribute with no
/// selections is left unrestricted.
pub fn build_filter(
    listing_types: &[ListingType],
    price_areas: &[PriceArea],
    currencies: &[CurrencyType],
    cities: &[String],
) -> ListingFilter {
    fn selection<T: Clone + Eq + std::hash::Hash>(values: &[T]) -> Option<HashSet<T>> {
        if values.is_empty() {
            None
        } else {
            Some(values.iter().cloned().collect())
        }
    }
    ListingFilter {
        listing_types: selection(listing_types),
        price_areas: selection(price_areas),
        currencies: selection(currencies),
        cities: selection(cities),
    }
}

/// markers for the filtered listings. without a city selection each city is
/// drawn as a single circle, otherwise every listing gets its own marker.
pub fn summary_markers(filtered: &SpotDataset, filter: &ListingFilter) -> Vec<MapMarker> {
    match filter.cities {
        None => cluster_markers(&city_clusters(filtered)),
        Some(_) => listing_markers(filtered),
    }
}

/// prints the summary as JSON, or writes summary.json and markers.geojson to
/// `output_directory`. the marker map is centered on `map_center`.
pub fn run(
    dataset: &SpotDataset,
    filter: &ListingFilter,
    city_share_threshold: f64,
    map_center: &Coordinate,
    output_directory: Option<&Path>,
) -> Result<(), SpotmapAppError> {
    let filtered = dataset.filter(filter);
    if filtered.is_empty() {
        log::warn!("no listings match filter {filter}");
    }
    let summary = SpotSummary::new(&filtered, city_share_threshold);
    log::info!(
        "{} spaces totaling {} sq meters match {filter}",
        summary.total_spaces,
        summary.total_square_space
    );

    match output_directory {
        None => {
            serde_json::to_writer_pretty(io::stdout().lock(), &summary)
                .map_err(|e| SpotmapAppError::SerializationError(e.to_string()))?;
            println!();
            Ok(())
        }
        Some(outdir) => {
            write_to_file(outdir, "summary.json", |mut w| {
                serde_json::to_writer_pretty(&mut w, &summary)
                    .map_err(|e| format!("failed writing summary: {e}"))?;
                w.flush().map_err(|e| format!("failed flushing summary: {e}"))
            })?;
            let markers = summary_markers(&filtered, filter);
            write_to_file(outdir, "markers.geojson", |w| {
                write_geojson(w, &markers, map_center)
            })
        }
    }
}

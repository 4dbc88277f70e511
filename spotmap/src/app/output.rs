use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use spotmap_core::model::{
    coordinate::Coordinate,
    listing::{CurrencyType, ListingType, PriceArea},
    locator::NearestResult,
    marker::{markers_to_geojson, MapMarker},
};

use super::SpotmapAppError;

/// a single row of the nearest-listing result table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NearestResultRow {
    pub rank: usize,
    pub spot_id: String,
    pub distance_km: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub listing_type: Option<ListingType>,
    pub price_area: Option<PriceArea>,
    pub currency: Option<CurrencyType>,
    pub space_category: Option<String>,
    pub rate: Option<f64>,
    pub square_space: Option<f64>,
}

impl NearestResultRow {
    pub fn new(rank: usize, result: &NearestResult) -> Self {
        let listing = result.listing;
        Self {
            rank,
            spot_id: listing.spot_id.to_string(),
            distance_km: result.distance_km(),
            latitude: listing.latitude(),
            longitude: listing.longitude(),
            zip_code: listing.zip_code.clone(),
            city: listing.city.clone(),
            listing_type: listing.listing_type,
            price_area: listing.price_area,
            currency: listing.currency,
            space_category: listing.space_category.as_ref().map(|c| c.to_string()),
            rate: listing.rate,
            square_space: listing.square_space,
        }
    }
}

/// writes results as CSV, ranked from 1 in result order. the header is written
/// even when there are no results.
pub fn write_nearest_csv<W: Write>(writer: W, results: &[NearestResult]) -> Result<(), String> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer
        .write_record([
            "rank",
            "spot_id",
            "distance_km",
            "latitude",
            "longitude",
            "zip_code",
            "city",
            "listing_type",
            "price_area",
            "currency",
            "space_category",
            "rate",
            "square_space",
        ])
        .map_err(|e| format!("failed writing header: {e}"))?;
    for (idx, result) in results.iter().enumerate() {
        let row = NearestResultRow::new(idx + 1, result);
        csv_writer
            .serialize(&row)
            .map_err(|e| format!("failed writing result for spot {}: {e}", row.spot_id))?;
    }
    csv_writer
        .flush()
        .map_err(|e| format!("failed flushing results: {e}"))
}

pub fn write_geojson<W: Write>(
    mut writer: W,
    markers: &[MapMarker],
    center: &Coordinate,
) -> Result<(), String> {
    let collection = markers_to_geojson(markers, center);
    serde_json::to_writer_pretty(&mut writer, &collection)
        .map_err(|e| format!("failed writing GeoJSON: {e}"))?;
    writer
        .flush()
        .map_err(|e| format!("failed flushing GeoJSON: {e}"))
}

/// creates (or truncates) a file in `output_directory`, runs `op` against it and
/// attaches the file path to any error.
pub fn write_to_file<F>(output_directory: &Path, filename: &str, op: F) -> Result<(), SpotmapAppError>
where
    F: FnOnce(BufWriter<File>) -> Result<(), String>,
{
    std::fs::create_dir_all(output_directory).map_err(|e| SpotmapAppError::WriteError {
        path: output_directory.to_path_buf(),
        message: e.to_string(),
    })?;
    let path = output_directory.join(filename);
    let file = File::create(&path).map_err(|e| SpotmapAppError::WriteError {
        path: path.clone(),
        message: e.to_string(),
    })?;
    op(BufWriter::new(file)).map_err(|message| SpotmapAppError::WriteError {
        path: path.clone(),
        message,
    })?;
    log::info!("wrote {}", path.display());
    Ok(())
}

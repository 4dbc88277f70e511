use std::{io, path::Path};

use spotmap_core::{
    model::{
        coordinate::Coordinate,
        dataset::SpotDataset,
        locator::{nearest_listing, nearest_listings, NearestQuery, NearestResult, ReferencePoint},
        marker::nearest_markers,
    },
    util::geo_utils::DistanceCalculationPolicy,
};

use super::{
    output::{write_geojson, write_nearest_csv, write_to_file},
    SpotmapAppError,
};

/// search settings after merging command line arguments with configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct NearestParams {
    pub radius_km: f64,
    pub limit: usize,
    pub policy: DistanceCalculationPolicy,
    /// map view center when a search finds nothing
    pub map_center: Coordinate,
}

/// picks the search center from the command line: a postal code, or a latitude
/// and longitude given together.
pub fn reference_from_args(
    zip_code: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<ReferencePoint, SpotmapAppError> {
    match (zip_code, lat, lon) {
        (Some(code), None, None) => Ok(ReferencePoint::PostalCode(code.to_string())),
        (None, Some(latitude), Some(longitude)) => Ok(ReferencePoint::Coordinate(Coordinate {
            latitude,
            longitude,
        })),
        (None, None, None) => Err(SpotmapAppError::InvalidUserInput(String::from(
            "please provide a zip code or a point (--lat and --lon)",
        ))),
        _ => Err(SpotmapAppError::InvalidUserInput(String::from(
            "provide either a zip code or both --lat and --lon, not a mix",
        ))),
    }
}

/// resolves the reference point and finds the listings nearest to it.
pub fn search<'a>(
    dataset: &'a SpotDataset,
    reference: &ReferencePoint,
    params: &NearestParams,
) -> Result<(Coordinate, Vec<NearestResult<'a>>), SpotmapAppError> {
    let coordinate = reference.resolve(dataset)?;
    let query = NearestQuery::new(coordinate, params.radius_km, params.limit)?;

    // a point picked by hand has no postal code of its own, report the closest one
    if let ReferencePoint::Coordinate(_) = reference {
        let nearest_zip = nearest_listing(dataset, &coordinate, &params.policy)
            .and_then(|r| r.listing.zip_code.clone());
        if let Some(zip) = nearest_zip {
            log::info!("zip code of selected point: {zip}");
        }
    }

    let results = nearest_listings(dataset, &query, &params.policy);
    Ok((coordinate, results))
}

pub fn run(
    dataset: &SpotDataset,
    reference: &ReferencePoint,
    params: &NearestParams,
    output_directory: Option<&Path>,
) -> Result<(), SpotmapAppError> {
    let (coordinate, results) = search(dataset, reference, params)?;
    if results.is_empty() {
        log::info!("no spaces found within {} km of {reference}", params.radius_km);
    } else {
        log::info!(
            "found {} spaces within {} km of {reference}",
            results.len(),
            params.radius_km
        );
    }

    match output_directory {
        None => write_nearest_csv(io::stdout().lock(), &results).map_err(|message| {
            SpotmapAppError::WriteError {
                path: "<stdout>".into(),
                message,
            }
        }),
        Some(outdir) => {
            write_to_file(outdir, "nearest.csv", |w| write_nearest_csv(w, &results))?;
            let markers = nearest_markers(&coordinate, &results);
            let center = if results.is_empty() {
                params.map_center
            } else {
                coordinate
            };
            write_to_file(outdir, "nearest_markers.geojson", |w| {
                write_geojson(w, &markers, &center)
            })
        }
    }
}

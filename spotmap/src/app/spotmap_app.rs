use std::path::Path;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use spotmap_core::{
    model::{
        dataset::SpotDataset,
        filter::matching_cities,
        listing::{CurrencyType, ListingType, PriceArea},
    },
    util::geo_utils::DistanceCalculationPolicy,
};

use super::{nearest, summary, SpotmapAppError, SpotmapConfig};

/// Command line tool for exploring the supply of real-estate listings ("spots")
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SpotmapApp {
    #[command(subcommand)]
    pub op: SpotmapOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum SpotmapOperation {
    /// find the listings nearest to a postal code or a coordinate
    Nearest {
        /// listings CSV export
        #[arg(short, long)]
        data_file: String,

        /// optional TOML file overriding default settings
        #[arg(short, long)]
        configuration_file: Option<String>,

        /// center the search on the location of this postal code
        #[arg(short, long, conflicts_with_all(["lat", "lon"]))]
        zip_code: Option<String>,

        /// center the search on this latitude (requires --lon)
        #[arg(long, requires("lon"), allow_hyphen_values(true))]
        lat: Option<f64>,

        /// center the search on this longitude (requires --lat)
        #[arg(long, requires("lat"), allow_hyphen_values(true))]
        lon: Option<f64>,

        /// search radius in kilometers
        #[arg(short, long)]
        radius: Option<f64>,

        /// maximum number of listings to return
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// distance calculation, one of [geodesic, haversine]
        #[arg(long)]
        distance_policy: Option<DistanceCalculationPolicy>,

        /// write nearest.csv and nearest_markers.geojson here instead of
        /// printing the result table.
        #[arg(short, long)]
        output_directory: Option<String>,
    },
    /// summarize listing supply, optionally narrowed by filters
    Summary {
        /// listings CSV export
        #[arg(short, long)]
        data_file: String,

        /// optional TOML file overriding default settings
        #[arg(short, long)]
        configuration_file: Option<String>,

        /// keep only these listing types (Rent, Sale). repeatable.
        #[arg(long = "listing-type")]
        listing_types: Vec<ListingType>,

        /// keep only these price area bases ("All space", "By Sq M"). repeatable.
        #[arg(long = "price-area")]
        price_areas: Vec<PriceArea>,

        /// keep only these currencies (MXP, USD). repeatable.
        #[arg(long = "currency")]
        currencies: Vec<CurrencyType>,

        /// keep only these cities, matched exactly. repeatable.
        #[arg(long = "city")]
        cities: Vec<String>,

        /// write summary.json and markers.geojson here instead of printing
        /// the summary.
        #[arg(short, long)]
        output_directory: Option<String>,
    },
    /// list the cities whose name contains the search text
    Cities {
        /// listings CSV export
        #[arg(short, long)]
        data_file: String,

        /// case-insensitive text to search for. lists all cities when omitted.
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

impl SpotmapOperation {
    pub fn run(&self) -> Result<(), SpotmapAppError> {
        match self {
            SpotmapOperation::Nearest {
                data_file,
                configuration_file,
                zip_code,
                lat,
                lon,
                radius,
                limit,
                distance_policy,
                output_directory,
            } => {
                let config = SpotmapConfig::load(configuration_file.as_deref())?;
                let reference = nearest::reference_from_args(zip_code.as_deref(), *lat, *lon)?;
                let dataset = SpotDataset::try_from(Path::new(data_file))?;
                let params = nearest::NearestParams {
                    radius_km: radius.unwrap_or(config.default_radius_km),
                    limit: limit.unwrap_or(config.default_limit),
                    policy: distance_policy.unwrap_or(config.distance_policy),
                    map_center: config.map_center,
                };
                let outdir = output_directory.as_ref().map(Path::new);
                nearest::run(&dataset, &reference, &params, outdir)
            }
            SpotmapOperation::Summary {
                data_file,
                configuration_file,
                listing_types,
                price_areas,
                currencies,
                cities,
                output_directory,
            } => {
                let config = SpotmapConfig::load(configuration_file.as_deref())?;
                let dataset = SpotDataset::try_from(Path::new(data_file))?;
                let filter = summary::build_filter(listing_types, price_areas, currencies, cities);
                let outdir = output_directory.as_ref().map(Path::new);
                summary::run(
                    &dataset,
                    &filter,
                    config.city_share_threshold,
                    &config.map_center,
                    outdir,
                )
            }
            SpotmapOperation::Cities { data_file, search } => {
                let dataset = SpotDataset::try_from(Path::new(data_file))?;
                let cities = matching_cities(&dataset, search);
                if cities.is_empty() {
                    log::info!("no cities match '{search}'");
                }
                for city in cities {
                    println!("{city}");
                }
                Ok(())
            }
        }
    }
}

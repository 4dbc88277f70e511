mod error;
pub mod nearest;
mod output;
mod spotmap_app;
mod spotmap_config;
pub mod summary;

pub use error::SpotmapAppError;
pub use output::{write_geojson, write_nearest_csv, NearestResultRow};
pub use spotmap_app::{SpotmapApp, SpotmapOperation};
pub use spotmap_config::SpotmapConfig;

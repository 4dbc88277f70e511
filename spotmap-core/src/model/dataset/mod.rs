mod error;
mod spot_dataset;

pub use error::DatasetError;
pub use spot_dataset::SpotDataset;

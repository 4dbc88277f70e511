pub mod coordinate;
pub mod dataset;
pub mod filter;
pub mod listing;
pub mod locator;
pub mod marker;
pub mod summary;

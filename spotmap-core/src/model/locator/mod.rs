mod error;
mod locator_ops;
mod nearest_query;
mod nearest_result;
mod postal_code;
mod reference_point;

pub use error::LocatorError;
pub use locator_ops::{nearest_listing, nearest_listings};
pub use nearest_query::NearestQuery;
pub use nearest_result::NearestResult;
pub use postal_code::resolve_postal_code;
pub use reference_point::ReferencePoint;

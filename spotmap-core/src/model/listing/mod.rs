mod attributes;
#[allow(clippy::module_inception)]
mod listing;
mod listing_record;
mod space_category;
mod spot_id;

pub use attributes::{CurrencyType, ListingType, PriceArea};
pub use listing::Listing;
pub use listing_record::ListingRecord;
pub use space_category::SpaceCategory;
pub use spot_id::SpotId;

mod city_search;
mod listing_filter;

pub use city_search::matching_cities;
pub use listing_filter::ListingFilter;

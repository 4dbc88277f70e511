pub mod date_ops;
pub mod geo_utils;

mod city_cluster;
mod spot_summary;
mod value_counts;

pub use city_cluster::{city_clusters, CityCluster};
pub use spot_summary::{CityShare, CurrencyShare, SpotSummary, DEFAULT_CITY_SHARE_THRESHOLD};
pub use value_counts::{cumulative_cutoff, value_counts, CumulativeShare, ValueCount};

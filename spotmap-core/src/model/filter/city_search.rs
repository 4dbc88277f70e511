use std::collections::HashSet;

use crate::model::dataset::SpotDataset;

/// unique city names containing `search`, ignoring case, in the order they are
/// first seen in the dataset. an empty search matches every city.
pub fn matching_cities(dataset: &SpotDataset, search: &str) -> Vec<String> {
    let needle = search.trim().to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    dataset
        .iter()
        .filter_map(|l| l.city.as_deref())
        .filter(|city| city.to_lowercase().contains(&needle))
        .filter(|city| seen.insert(*city))
        .map(String::from)
        .collect()
}

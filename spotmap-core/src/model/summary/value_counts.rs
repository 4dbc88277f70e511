use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// frequency of a single value within a collection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
    /// count as a fraction of all counted (non-missing) values
    pub proportion: f64,
}

/// an entry of an ordered frequency table along with the running share of
/// all entries up to and including this one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CumulativeShare<T> {
    pub value: T,
    pub count: usize,
    pub proportion: f64,
    pub cumulative_proportion: f64,
}

/// counts occurrences of each present value. the result is ordered by descending
/// count, and values with equal counts keep the order in which they were first seen.
/// missing values are not counted and do not contribute to proportions.
pub fn value_counts<T, I>(values: I) -> Vec<ValueCount<T>>
where
    T: Eq + Hash,
    I: IntoIterator<Item = Option<T>>,
{
    let mut counts: IndexMap<T, usize> = IndexMap::new();
    for value in values.into_iter().flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }
    let total: usize = counts.values().sum();
    let mut result: Vec<ValueCount<T>> = counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value,
            count,
            proportion: count as f64 / total as f64,
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

/// keeps the leading entries of an ordered frequency table while their running
/// share stays at or below `threshold`. the running share is computed from the
/// running count so that it does not accumulate rounding error.
pub fn cumulative_cutoff<T: Clone>(counts: &[ValueCount<T>], threshold: f64) -> Vec<CumulativeShare<T>> {
    let total: usize = counts.iter().map(|c| c.count).sum();
    let mut running = 0;
    counts
        .iter()
        .map(|c| {
            running += c.count;
            CumulativeShare {
                value: c.value.clone(),
                count: c.count,
                proportion: c.proportion,
                cumulative_proportion: running as f64 / total as f64,
            }
        })
        .take_while(|c| c.cumulative_proportion <= threshold)
        .collect()
}

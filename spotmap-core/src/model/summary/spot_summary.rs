use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    model::{dataset::SpotDataset, listing::CurrencyType},
    util::date_ops,
};

use super::{cumulative_cutoff, value_counts};

/// share of listings used to pick the cities that make up most of the supply.
pub const DEFAULT_CITY_SHARE_THRESHOLD: f64 = 0.8;

/// key metrics describing the supply of listings in a (filtered) dataset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct SpotSummary {
    /// number of listings
    pub total_spaces: usize,
    /// sum of square meters over listings reporting a size
    pub total_square_space: f64,
    /// mean size per space category, ordered by category. None when no listing
    /// in the category reports a size.
    pub avg_square_space_by_category: IndexMap<String, Option<f64>>,
    /// the largest cities that together hold at most `city_share_threshold` of listings
    pub spaces_by_city: Vec<CityShare>,
    /// share of each currency, in percent
    pub currency_distribution: Vec<CurrencyShare>,
    /// listing counts per creation month (YYYY-MM) and space category
    pub monthly_spaces_by_category: IndexMap<String, IndexMap<String, usize>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CityShare {
    pub city: String,
    pub share: f64,
    pub cumulative_share: f64,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CurrencyShare {
    pub currency: CurrencyType,
    pub percentage: f64,
}

impl SpotSummary {
    pub fn new(dataset: &SpotDataset, city_share_threshold: f64) -> Self {
        let total_square_space = dataset.iter().filter_map(|l| l.square_space).sum();

        let city_counts = value_counts(dataset.iter().map(|l| l.city.clone()));
        let spaces_by_city = cumulative_cutoff(&city_counts, city_share_threshold)
            .into_iter()
            .map(|c| CityShare {
                city: c.value,
                share: c.proportion,
                cumulative_share: c.cumulative_proportion,
                count: c.count,
            })
            .collect_vec();

        let currency_distribution = value_counts(dataset.iter().map(|l| l.currency))
            .into_iter()
            .map(|c| CurrencyShare {
                currency: c.value,
                percentage: c.proportion * 100.0,
            })
            .collect_vec();

        Self {
            total_spaces: dataset.len(),
            total_square_space,
            avg_square_space_by_category: average_square_space_by_category(dataset),
            spaces_by_city,
            currency_distribution,
            monthly_spaces_by_category: monthly_spaces_by_category(dataset),
        }
    }
}

fn average_square_space_by_category(dataset: &SpotDataset) -> IndexMap<String, Option<f64>> {
    let mut acc: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for listing in dataset.iter() {
        let Some(category) = &listing.space_category else {
            continue;
        };
        let entry = acc.entry(category.to_string()).or_insert((0.0, 0));
        if let Some(size) = listing.square_space {
            entry.0 += size;
            entry.1 += 1;
        }
    }
    acc.into_iter()
        .map(|(category, (sum, n))| {
            let avg = if n == 0 { None } else { Some(sum / n as f64) };
            (category, avg)
        })
        .collect()
}

/// pivots listing counts into months x categories. months are ordered
/// chronologically and every month lists every category, with zeros where a
/// category had no listings that month. listings with an unknown creation time
/// or category are skipped.
fn monthly_spaces_by_category(dataset: &SpotDataset) -> IndexMap<String, IndexMap<String, usize>> {
    let mut counts: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    let mut categories: BTreeSet<String> = BTreeSet::new();
    for listing in dataset.iter() {
        let (Some(created_at), Some(category)) = (&listing.created_at, &listing.space_category)
        else {
            continue;
        };
        let month = date_ops::month_period(created_at);
        let _ = categories.insert(category.to_string());
        *counts
            .entry(month)
            .or_default()
            .entry(category.to_string())
            .or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(month, by_category)| {
            let row = categories
                .iter()
                .map(|c| (c.clone(), by_category.get(c).copied().unwrap_or(0)))
                .collect();
            (month, row)
        })
        .collect()
}

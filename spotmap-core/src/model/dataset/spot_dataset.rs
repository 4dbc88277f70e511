use std::{fs::File, io::Read, path::Path, sync::Arc};

use csv::{ReaderBuilder, Trim};
use itertools::Itertools;
use kdam::tqdm;

use crate::model::{
    coordinate::Coordinate,
    filter::ListingFilter,
    listing::{Listing, ListingRecord},
};

use super::DatasetError;

/// an immutable, in-memory snapshot of the listing dataset. cloning is cheap and
/// shares the underlying listings. operations that narrow the dataset return a new
/// snapshot, the source snapshot is never modified.
#[derive(Clone, Debug)]
pub struct SpotDataset {
    listings: Arc<[Listing]>,
}

impl SpotDataset {
    /// wraps already-built listings, preserving their order. unlike the loaders,
    /// this accepts an empty collection.
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: Arc::from(listings),
        }
    }

    /// reads a listings CSV stream. fails with [`DatasetError::MissingData`] when
    /// the stream has no listings.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let listings = read_listings(reader, false)?;
        Self::try_from_loaded(listings)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    /// listings that can participate in spatial queries, in dataset order.
    pub fn with_coordinates(&self) -> impl Iterator<Item = (&Listing, Coordinate)> {
        self.listings
            .iter()
            .filter_map(|l| l.coordinate.map(|c| (l, c)))
    }

    /// derives a new snapshot holding only the listings accepted by the filter.
    pub fn filter(&self, filter: &ListingFilter) -> SpotDataset {
        let listings = self
            .listings
            .iter()
            .filter(|l| filter.accepts(l))
            .cloned()
            .collect_vec();
        log::debug!(
            "filter {filter} kept {} of {} listings",
            listings.len(),
            self.len()
        );
        SpotDataset::new(listings)
    }

    fn try_from_loaded(listings: Vec<Listing>) -> Result<Self, DatasetError> {
        if listings.is_empty() {
            return Err(DatasetError::MissingData(String::from(
                "no listings found in source",
            )));
        }
        let n_duplicates = listings.iter().map(|l| &l.spot_id).duplicates().count();
        if n_duplicates > 0 {
            log::warn!("dataset contains {n_duplicates} duplicated 'Spot ID' value(s)");
        }
        let n_located = listings.iter().filter(|l| l.coordinate.is_some()).count();
        log::info!(
            "loaded {} listings, {} with a valid location",
            listings.len(),
            n_located
        );
        Ok(Self::new(listings))
    }
}

impl Default for SpotDataset {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl TryFrom<&Path> for SpotDataset {
    type Error = DatasetError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = File::open(path).map_err(|e| DatasetError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let listings = read_listings(file, true)?;
        SpotDataset::try_from_loaded(listings).map_err(|e| match e {
            DatasetError::MissingData(msg) => {
                DatasetError::MissingData(format!("{msg} '{}'", path.display()))
            }
            other => other,
        })
    }
}

fn read_listings<R: Read>(reader: R, progress: bool) -> Result<Vec<Listing>, DatasetError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);
    let rows = csv_reader.deserialize::<ListingRecord>();
    let row_iter: Box<dyn Iterator<Item = Result<ListingRecord, csv::Error>> + '_> = if progress
    {
        Box::new(tqdm!(rows, desc = "read listings"))
    } else {
        Box::new(rows)
    };

    let mut listings = vec![];
    let mut n_skipped = 0;
    for (idx, row) in row_iter.enumerate() {
        // 1-based index of the data row, header excluded
        let row_number = idx + 1;
        let record = row.map_err(|e| DatasetError::Deserialize {
            row: row_number,
            message: e.to_string(),
        })?;
        match Listing::try_from(record) {
            Ok(listing) => listings.push(listing),
            Err(message) => {
                log::warn!("skipping data row {row_number}: {message}");
                n_skipped += 1;
            }
        }
    }
    if n_skipped > 0 {
        log::warn!("skipped {n_skipped} row(s) that could not be read as listings");
    }
    if progress {
        eprintln!();
    }
    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::listing::ListingType;
    use std::collections::HashSet;

    const HEADER: &str = "Spot ID,latitude,longitude,zip_code_id,zip_codes_city,Type,Price Area,Currency Type,space_category,rate,square_space,created_at_x";

    fn csv_of(rows: &[&str]) -> String {
        let mut s = String::from(HEADER);
        for row in rows {
            s.push('\n');
            s.push_str(row);
        }
        s
    }

    #[test]
    fn test_from_reader_preserves_order_and_normalizes() {
        let data = csv_of(&[
            "1,19.43,99.13,06700,Cuauhtémoc,1,1,1,office,15000,80,2023-01-05",
            "2,19.40,-99.17,11560,Miguel Hidalgo,2,2,2,field,900,1500,not-a-date",
            "3,,,03100,Benito Juárez,1,1,1,retail,,,",
        ]);
        let dataset = SpotDataset::from_reader(data.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        let ids = dataset.iter().map(|l| l.spot_id.0.as_str()).collect_vec();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(dataset.iter().all(|l| l.longitude().map(|x| x <= 0.0).unwrap_or(true)));
        assert_eq!(dataset.with_coordinates().count(), 2);
        assert_eq!(dataset.listings()[1].created_at, None);
        assert_eq!(
            dataset.listings()[1].space_category.as_ref().map(|c| c.as_str()),
            Some("empty lot")
        );
    }

    #[test]
    fn test_extra_columns_and_bad_numbers_are_tolerated() {
        let data = "Spot ID,latitude,longitude,rate,unused\n7,19.4,-99.1,n/a,foo\n";
        let dataset = SpotDataset::from_reader(data.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.listings()[0].rate, None);
        assert!(dataset.listings()[0].coordinate.is_some());
    }

    #[test]
    fn test_header_only_is_missing_data() {
        let data = csv_of(&[]);
        let result = SpotDataset::from_reader(data.as_bytes());
        assert!(matches!(result, Err(DatasetError::MissingData(_))));
    }

    #[test]
    fn test_blank_spot_id_row_is_skipped() {
        let data = csv_of(&[
            "1,19.43,-99.13,06700,Cuauhtémoc,1,1,1,office,15000,80,",
            ",19.43,-99.13,06700,Cuauhtémoc,1,1,1,office,15000,80,",
            "3,19.40,-99.17,11560,Miguel Hidalgo,2,2,2,retail,900,150,",
        ]);
        let dataset = SpotDataset::from_reader(data.as_bytes()).unwrap();
        let ids = dataset.iter().map(|l| l.spot_id.0.as_str()).collect_vec();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_only_blank_spot_ids_is_missing_data() {
        let data = csv_of(&[",19.43,-99.13,06700,Cuauhtémoc,1,1,1,office,15000,80,"]);
        let result = SpotDataset::from_reader(data.as_bytes());
        assert!(matches!(result, Err(DatasetError::MissingData(_))));
    }

    #[test]
    fn test_malformed_row_reports_data_row_index() {
        let data = csv_of(&[
            "1,19.43,-99.13,06700,Cuauhtémoc,1,1,1,office,15000,80,",
            "2,19.43,-99.13",
        ]);
        match SpotDataset::from_reader(data.as_bytes()) {
            Err(DatasetError::Deserialize { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected deserialize error, found {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = SpotDataset::try_from(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(DatasetError::Read { .. })));
    }

    #[test]
    fn test_filter_returns_new_snapshot() {
        let data = csv_of(&[
            "1,19.43,-99.13,06700,Cuauhtémoc,1,1,1,office,15000,80,",
            "2,19.40,-99.17,11560,Miguel Hidalgo,2,2,2,field,900,1500,",
        ]);
        let dataset = SpotDataset::from_reader(data.as_bytes()).unwrap();
        let filter = ListingFilter {
            listing_types: Some(HashSet::from([ListingType::Sale])),
            ..Default::default()
        };
        let filtered = dataset.filter(&filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.listings()[0].spot_id.0, "2");
        assert_eq!(dataset.len(), 2);
    }
}

use serde::{Deserialize, Serialize};

/// a single row of the listings CSV export, using the export's column names.
/// values are kept close to their raw form; [`super::Listing`] applies the
/// normalization rules. unparseable numeric cells are read as missing.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ListingRecord {
    #[serde(rename = "Spot ID")]
    pub spot_id: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
    #[serde(rename = "zip_code_id", default)]
    pub zip_code: Option<String>,
    #[serde(rename = "zip_codes_city", default)]
    pub city: Option<String>,
    /// 1 = Rent, 2 = Sale
    #[serde(rename = "Type", default)]
    pub listing_type: Option<String>,
    /// 1 = All space, 2 = By Sq M
    #[serde(rename = "Price Area", default)]
    pub price_area: Option<String>,
    /// 1 = MXP, 2 = USD
    #[serde(rename = "Currency Type", default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub space_category: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub rate: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub square_space: Option<f64>,
    #[serde(rename = "created_at_x", default)]
    pub created_at: Option<String>,
}

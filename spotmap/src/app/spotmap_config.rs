use std::path::Path;

use config::{Config, File, Source};
use serde::{Deserialize, Serialize};
use spotmap_core::{
    model::{
        coordinate::{Coordinate, DEFAULT_MAP_CENTER},
        summary::DEFAULT_CITY_SHARE_THRESHOLD,
    },
    util::geo_utils::DistanceCalculationPolicy,
};

use super::SpotmapAppError;

/// optional settings read from a TOML file. every key has a default, and
/// command line arguments take precedence over values set here.
///
/// ```toml
/// distance_policy = "haversine"
/// default_radius_km = 2.5
/// default_limit = 10
/// city_share_threshold = 0.9
///
/// [map_center]
/// latitude = 20.6597
/// longitude = -103.3496
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpotmapConfig {
    #[serde(default)]
    pub distance_policy: DistanceCalculationPolicy,
    /// search radius used when none is given on the command line
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    /// number of results returned when none is given on the command line
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// share of listings covered when reporting the top cities
    #[serde(default = "default_city_share_threshold")]
    pub city_share_threshold: f64,
    /// where map surfaces are centered before a search is made
    #[serde(default = "default_map_center")]
    pub map_center: Coordinate,
}

fn default_radius_km() -> f64 {
    5.0
}

fn default_limit() -> usize {
    5
}

fn default_city_share_threshold() -> f64 {
    DEFAULT_CITY_SHARE_THRESHOLD
}

fn default_map_center() -> Coordinate {
    DEFAULT_MAP_CENTER
}

impl Default for SpotmapConfig {
    fn default() -> Self {
        Self {
            distance_policy: DistanceCalculationPolicy::default(),
            default_radius_km: default_radius_km(),
            default_limit: default_limit(),
            city_share_threshold: default_city_share_threshold(),
            map_center: default_map_center(),
        }
    }
}

impl SpotmapConfig {
    /// loads the configuration file if one was provided, otherwise the defaults.
    pub fn load(configuration_file: Option<&str>) -> Result<Self, SpotmapAppError> {
        match configuration_file {
            None => Ok(Self::default()),
            Some(f) => {
                let path = Path::new(f);
                let conf = Self::from_source(File::from(path)).map_err(|message| {
                    SpotmapAppError::Configuration {
                        path: path.to_path_buf(),
                        message,
                    }
                })?;
                log::debug!("loaded configuration from {f}: {conf:?}");
                Ok(conf)
            }
        }
    }

    pub fn from_source<S>(source: S) -> Result<Self, String>
    where
        S: Source + Send + Sync + 'static,
    {
        let conf = Config::builder()
            .add_source(source)
            .build()
            .map_err(|e| format!("unable to read configuration: {e}"))?
            .try_deserialize::<SpotmapConfig>()
            .map_err(|e| format!("unable to deserialize configuration: {e}"))?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.default_radius_km.is_finite() || self.default_radius_km <= 0.0 {
            return Err(format!(
                "default_radius_km must be positive, found {}",
                self.default_radius_km
            ));
        }
        if self.default_limit == 0 {
            return Err(String::from("default_limit must be positive"));
        }
        if !(0.0..=1.0).contains(&self.city_share_threshold) {
            return Err(format!(
                "city_share_threshold must be in range [0, 1], found {}",
                self.city_share_threshold
            ));
        }
        Coordinate::try_new(self.map_center.latitude, self.map_center.longitude)
            .map_err(|e| format!("invalid map_center: {e}"))?;
        Ok(())
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("timezone offset {0} out of range [-12, 14]")]
    TimezoneOutOfRange(f64),

    #[error("fajr angle {0} out of range (0, 90)")]
    FajrAngleOutOfRange(f64),

    #[error("isha offset must not be negative, got {0} minutes")]
    NegativeIshaOffset(i32),

    #[error("iqama delay must not be negative, got {0} minutes")]
    NegativeIqamaDelay(i32),
}

/// Location and calculation parameters. Built once at startup and passed by
/// reference to every calculation; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub latitude: f64,
    pub longitude: f64,
    /// Hours east of UTC.
    pub timezone_offset: f64,
    /// Degrees below the horizon.
    pub fajr_angle_degrees: f64,
    pub isha_offset_minutes: i32,
    pub iqama_delay_minutes: i32,
    pub location_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latitude: 23.61,
            longitude: 58.54,
            timezone_offset: 4.0,
            fajr_angle_degrees: 18.5,
            isha_offset_minutes: 90,
            iqama_delay_minutes: 15,
            location_label: "Muscat".to_string(),
        }
    }
}

impl Config {
    /// Parses a TOML document. Fields left out keep their `Default` value.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        debug!(
            "loaded config for {} ({:.4}, {:.4}) UTC{:+}",
            config.location_label, config.latitude, config.longitude, config.timezone_offset
        );
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ConfigError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ConfigError::LongitudeOutOfRange(self.longitude));
        }
        if !(-12.0..=14.0).contains(&self.timezone_offset) {
            return Err(ConfigError::TimezoneOutOfRange(self.timezone_offset));
        }
        if !(self.fajr_angle_degrees > 0.0 && self.fajr_angle_degrees < 90.0) {
            return Err(ConfigError::FajrAngleOutOfRange(self.fajr_angle_degrees));
        }
        if self.isha_offset_minutes < 0 {
            return Err(ConfigError::NegativeIshaOffset(self.isha_offset_minutes));
        }
        if self.iqama_delay_minutes < 0 {
            return Err(ConfigError::NegativeIqamaDelay(self.iqama_delay_minutes));
        }
        Ok(())
    }

    pub fn timezone_offset_seconds(&self) -> i32 {
        (self.timezone_offset * 3600.0).round() as i32
    }
}

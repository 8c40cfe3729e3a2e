//! Configuration management for the box office.
//!
//! Loads configuration from environment variables with defaults equal to the
//! reference hall: 5x5 seats, five showtimes, $10 front row, $2 off per row.

use crate::error::ConfigError;
use crate::pricing::PricingPolicy;
use crate::types::Showtime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Showtimes of the reference configuration, in screening order
pub const DEFAULT_SHOWTIMES: [&str; 5] = ["10:00 AM", "1:00 PM", "4:00 PM", "7:00 PM", "10:00 PM"];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where bookings are persisted
    pub storage: StorageConfig,
    /// Hall layout and showtimes
    pub hall: HallConfig,
    /// Seat pricing
    pub pricing: PricingPolicy,
    /// Logging
    pub log: LogConfig,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the seat grids of every showtime
    pub bookings_file: PathBuf,
}

/// Hall layout: seat grid dimensions and the showtimes screened in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallConfig {
    /// Seat rows
    pub rows: usize,
    /// Seats per row
    pub cols: usize,
    /// Showtimes in screening order
    pub showtimes: Vec<Showtime>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value cannot be parsed or the resulting
    /// configuration is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to the reference configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value cannot be parsed or the resulting
    /// configuration is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let showtimes = match lookup("SHOWTIMES") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(Showtime::from)
                .collect(),
            None => defaults.hall.showtimes,
        };

        let config = Self {
            storage: StorageConfig {
                bookings_file: lookup("BOOKINGS_FILE")
                    .map_or(defaults.storage.bookings_file, PathBuf::from),
            },
            hall: HallConfig {
                rows: parse_or(&lookup, "HALL_ROWS", defaults.hall.rows)?,
                cols: parse_or(&lookup, "HALL_COLS", defaults.hall.cols)?,
                showtimes,
            },
            pricing: PricingPolicy {
                base_price: parse_or(&lookup, "BASE_PRICE", defaults.pricing.base_price)?,
                row_discount: parse_or(&lookup, "ROW_DISCOUNT", defaults.pricing.row_discount)?,
            },
            log: LogConfig {
                level: lookup("RUST_LOG").unwrap_or(defaults.log.level),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the booking core cannot work with.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyHall`] for zero rows or columns
    /// - [`ConfigError::NoShowtimes`] for an empty showtime list
    /// - [`ConfigError::DuplicateShowtime`] for a repeated label
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hall.validate()
    }
}

impl HallConfig {
    /// Check dimensions and showtimes.
    ///
    /// # Errors
    ///
    /// See [`Config::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyHall {
                rows: self.rows,
                cols: self.cols,
            });
        }

        if self.showtimes.is_empty() {
            return Err(ConfigError::NoShowtimes);
        }

        let mut seen = HashSet::new();
        for showtime in &self.showtimes {
            if !seen.insert(showtime) {
                return Err(ConfigError::DuplicateShowtime(showtime.to_string()));
            }
        }

        Ok(())
    }

    /// Number of seats per showtime
    #[must_use]
    pub const fn seats_per_showtime(&self) -> usize {
        self.rows * self.cols
    }

    /// Look up a configured showtime by label
    #[must_use]
    pub fn showtime(&self, label: &str) -> Option<&Showtime> {
        self.showtimes.iter().find(|showtime| showtime.as_str() == label.trim())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                bookings_file: PathBuf::from("bookings.json"),
            },
            hall: HallConfig::default(),
            pricing: PricingPolicy::default(),
            log: LogConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Default for HallConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            showtimes: DEFAULT_SHOWTIMES.into_iter().map(Showtime::from).collect(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

//! Environment configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use cab_rl_core::{RLError, Result};

use crate::clock::Calendar;

/// Fixed parameters of the cab-driver world.
///
/// Built once, validated, then handed to [`crate::CabDriverEnv::new`]; the
/// environment keeps its own copy and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CabConfig {
    /// Number of locations (`m`)
    pub locations: usize,
    /// Number of hourly time slots per day (`t`)
    pub hours: usize,
    /// Number of days per week (`d`)
    pub days: usize,
    /// Fuel and other costs per hour (`C`)
    pub cost_per_hour: i64,
    /// Revenue per hour of ride (`R`)
    pub revenue_per_hour: i64,
    /// Mean number of ride requests per location
    pub request_rates: Vec<f64>,
    /// Cap on ride requests in one batch, idle excluded
    pub max_requests: usize,
    /// Simulated hours in one episode
    pub episode_hours: u64,
}

impl Default for CabConfig {
    fn default() -> Self {
        Self {
            locations: 5,
            hours: 24,
            days: 7,
            cost_per_hour: 5,
            revenue_per_hour: 9,
            request_rates: vec![2.0, 15.0, 4.0, 7.0, 8.0],
            max_requests: 15,
            episode_hours: 24 * 30,
        }
    }
}

impl CabConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.locations < 2 {
            return Err(RLError::InvalidConfig(format!(
                "need at least 2 locations, got {}",
                self.locations
            )));
        }
        if self.hours == 0 || self.days == 0 {
            return Err(RLError::InvalidConfig(format!(
                "hours and days must be positive, got {} and {}",
                self.hours, self.days
            )));
        }
        if self.request_rates.len() != self.locations {
            return Err(RLError::InvalidConfig(format!(
                "expected {} request rates, got {}",
                self.locations,
                self.request_rates.len()
            )));
        }
        if let Some(rate) = self
            .request_rates
            .iter()
            .find(|r| !r.is_finite() || **r < 0.0)
        {
            return Err(RLError::InvalidConfig(format!(
                "request rate {rate} must be finite and non-negative"
            )));
        }
        Ok(())
    }

    /// Number of ride actions, `m * (m - 1)`
    #[must_use]
    pub fn ride_count(&self) -> usize {
        self.locations * self.locations.saturating_sub(1)
    }

    /// Size of the full action space, rides plus idle
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.ride_count() + 1
    }

    /// Size of the state space, `m * t * d`
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.locations * self.hours * self.days
    }

    /// The time-of-day / day-of-week arithmetic for this world
    #[must_use]
    pub fn calendar(&self) -> Calendar {
        Calendar::new(self.hours, self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CabConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ride_count(), 20);
        assert_eq!(config.action_count(), 21);
        assert_eq!(config.state_count(), 5 * 24 * 7);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = CabConfig::from_json_str(r#"{ "cost_per_hour": 6 }"#)
            .unwrap();
        assert_eq!(config.cost_per_hour, 6);
        assert_eq!(config.revenue_per_hour, 9);
        assert_eq!(config.locations, 5);
    }

    #[test]
    fn test_rate_table_must_match_locations() {
        let err = CabConfig::from_json_str(r#"{ "locations": 3 }"#)
            .unwrap_err();
        assert!(matches!(err, RLError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_negative_rate() {
        let config = CabConfig {
            request_rates: vec![2.0, -1.0, 4.0, 7.0, 8.0],
            ..CabConfig::default()
        };
        assert!(matches!(config.validate(), Err(RLError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        let config = CabConfig {
            locations: 1,
            request_rates: vec![1.0],
            ..CabConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CabConfig {
            days: 0,
            ..CabConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_counts_on_an_empty_world() {
        let config = CabConfig {
            locations: 0,
            request_rates: vec![],
            ..CabConfig::default()
        };
        assert_eq!(config.ride_count(), 0);
        assert_eq!(config.action_count(), 1);
        assert_eq!(config.state_count(), 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = CabConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, RLError::Serialization(_)));
    }
}

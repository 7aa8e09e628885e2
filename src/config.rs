//! Environment-driven configuration.
//!
//! Front-ends that do not carry their own config file can set these keys
//! (a `.env` file in the working directory is honored):
//!
//! | key                   | field                  | example    |
//! |-----------------------|------------------------|------------|
//! | `ROI_MAX_YEARS`       | `max_years`            | `10`       |
//! | `ROI_INFLATION_PCT`   | `inflation.annual_pct` | `2.1`      |
//! | `ROI_INFLATION_MODEL` | `inflation.model`      | `compound` |
//! | `ROI_DROP_POINTS`     | `drop_points`          | `24`       |
//! | `ROI_RECOVERY`        | `recovery`             | `true`     |
//!
//! Unset keys keep the `RunConfig::default()` value.

use std::str::FromStr;

use crate::domain::RunConfig;
use crate::error::{ConfigError, RoiError};

pub const ENV_MAX_YEARS: &str = "ROI_MAX_YEARS";
pub const ENV_INFLATION_PCT: &str = "ROI_INFLATION_PCT";
pub const ENV_INFLATION_MODEL: &str = "ROI_INFLATION_MODEL";
pub const ENV_DROP_POINTS: &str = "ROI_DROP_POINTS";
pub const ENV_RECOVERY: &str = "ROI_RECOVERY";

impl RunConfig {
    /// Load `.env` (if any) and read the `ROI_*` keys from the process environment.
    pub fn from_env() -> Result<Self, RoiError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, then validate it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RoiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RunConfig::default();

        if let Some(v) = lookup(ENV_MAX_YEARS) {
            config.max_years = parse_value(ENV_MAX_YEARS, &v)?;
        }
        if let Some(v) = lookup(ENV_INFLATION_PCT) {
            config.inflation.annual_pct = parse_value(ENV_INFLATION_PCT, &v)?;
        }
        if let Some(v) = lookup(ENV_INFLATION_MODEL) {
            config.inflation.model = v.parse()?;
        }
        if let Some(v) = lookup(ENV_DROP_POINTS) {
            config.drop_points = parse_value(ENV_DROP_POINTS, &v)?;
        }
        if let Some(v) = lookup(ENV_RECOVERY) {
            config.recovery = parse_flag(&v).ok_or_else(|| invalid(ENV_RECOVERY, &v))?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| invalid(key, raw))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::InflationModel;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = RunConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn all_keys_are_read() {
        let config = RunConfig::from_lookup(lookup_from(&[
            (ENV_MAX_YEARS, "25"),
            (ENV_INFLATION_PCT, " 3.94 "),
            (ENV_INFLATION_MODEL, "linear"),
            (ENV_DROP_POINTS, "120"),
            (ENV_RECOVERY, "yes"),
        ]))
        .unwrap();

        assert_eq!(config.max_years, 25);
        assert!((config.inflation.annual_pct - 3.94).abs() < 1e-12);
        assert_eq!(config.inflation.model, InflationModel::Linear);
        assert_eq!(config.drop_points, 120);
        assert!(config.recovery);
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = RunConfig::from_lookup(lookup_from(&[(ENV_MAX_YEARS, "ten")])).unwrap_err();
        assert_eq!(
            err,
            RoiError::Config(ConfigError::InvalidEnv {
                key: ENV_MAX_YEARS.to_string(),
                value: "ten".to_string(),
            })
        );

        let err = RunConfig::from_lookup(lookup_from(&[(ENV_RECOVERY, "maybe")])).unwrap_err();
        assert!(matches!(err, RoiError::Config(ConfigError::InvalidEnv { .. })));

        let err = RunConfig::from_lookup(lookup_from(&[(ENV_INFLATION_MODEL, "cubic")])).unwrap_err();
        assert_eq!(
            err,
            RoiError::Config(ConfigError::UnknownInflationModel("cubic".to_string()))
        );

        // Parses fine, then fails validation.
        let err = RunConfig::from_lookup(lookup_from(&[(ENV_INFLATION_PCT, "-2")])).unwrap_err();
        assert_eq!(err, RoiError::Config(ConfigError::InvalidInflation(-2.0)));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{ "max_years": 30, "inflation": { "annual_pct": 5.55 } }"#).unwrap();
        assert_eq!(config.max_years, 30);
        assert_eq!(config.inflation.model, InflationModel::Compound);
        assert_eq!(config.drop_points, 0);
        assert!(!config.recovery);
    }
}

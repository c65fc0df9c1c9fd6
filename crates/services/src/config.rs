//! Store configuration, read from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `BOOKSTORE_STORE_EMAIL` | `store@gmail.com` |
//! | `BOOKSTORE_SHIPPING_RATE_PER_KG` | `5.0` |

use thiserror::Error;

use crate::shipping::DEFAULT_SHIPPING_RATE_PER_KG;

pub const STORE_EMAIL_VAR: &str = "BOOKSTORE_STORE_EMAIL";
pub const SHIPPING_RATE_VAR: &str = "BOOKSTORE_SHIPPING_RATE_PER_KG";

const DEFAULT_STORE_EMAIL: &str = "store@gmail.com";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a number: {value:?}")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must be a finite, non-negative number (got {value})")]
    OutOfRange { var: &'static str, value: f64 },

    #[error("{var} cannot be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Sender address for outgoing book mail.
    pub store_email: String,
    pub shipping_rate_per_kg: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_email: DEFAULT_STORE_EMAIL.to_string(),
            shipping_rate_per_kg: DEFAULT_SHIPPING_RATE_PER_KG,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Missing variables fall back to defaults; present but invalid ones are
    /// rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let store_email = match lookup(STORE_EMAIL_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Empty { var: STORE_EMAIL_VAR });
            }
            Some(value) => value.trim().to_string(),
            None => {
                tracing::warn!("{STORE_EMAIL_VAR} not set; using {}", defaults.store_email);
                defaults.store_email
            }
        };

        let shipping_rate_per_kg = match lookup(SHIPPING_RATE_VAR) {
            Some(value) => parse_rate(&value)?,
            None => {
                tracing::warn!(
                    "{SHIPPING_RATE_VAR} not set; using {}",
                    defaults.shipping_rate_per_kg
                );
                defaults.shipping_rate_per_kg
            }
        };

        Ok(Self {
            store_email,
            shipping_rate_per_kg,
        })
    }
}

fn parse_rate(value: &str) -> Result<f64, ConfigError> {
    let rate: f64 = value.trim().parse().map_err(|_| ConfigError::NotANumber {
        var: SHIPPING_RATE_VAR,
        value: value.to_string(),
    })?;
    if !rate.is_finite() || rate < 0.0 {
        return Err(ConfigError::OutOfRange {
            var: SHIPPING_RATE_VAR,
            value: rate,
        });
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.shipping_rate_per_kg, 5.0);
        assert_eq!(config.store_email, "store@gmail.com");
    }

    #[test]
    fn variables_override_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[
            (STORE_EMAIL_VAR, " books@example.org "),
            (SHIPPING_RATE_VAR, "7.25"),
        ]))
        .unwrap();

        assert_eq!(config.store_email, "books@example.org");
        assert_eq!(config.shipping_rate_per_kg, 7.25);
    }

    #[test]
    fn unparsable_rate_is_rejected() {
        let err = StoreConfig::from_lookup(lookup(&[(SHIPPING_RATE_VAR, "cheap")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotANumber {
                var: SHIPPING_RATE_VAR,
                value: "cheap".to_string()
            }
        );
    }

    #[test]
    fn negative_rate_is_rejected_not_clamped() {
        let err = StoreConfig::from_lookup(lookup(&[(SHIPPING_RATE_VAR, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }

    #[test]
    fn blank_email_is_rejected() {
        let err = StoreConfig::from_lookup(lookup(&[(STORE_EMAIL_VAR, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty { var: STORE_EMAIL_VAR });
    }
}

//! Runtime configuration.
//!
//! Layers, later wins: built-in defaults, an optional TOML file, then
//! `SMART_DOSE_*` environment variables (`__` separates nested keys, e.g.
//! `SMART_DOSE_CLINIC__NAME`).

use std::path::Path;

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::demo;
use crate::models::{ClinicDetails, DoctorProfile};
use crate::session::SessionSettings;

/// Longest follow-up interval accepted from configuration.
pub const MAX_FOLLOW_UP_DAYS: u32 = 3650;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything the engine reads from its environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmartDoseConfig {
    /// Fixed amount reported with every confirmed order
    pub order_amount: u32,
    /// Highest roller value for a single dose period
    pub max_units_per_period: u8,
    /// Days between issue and follow-up on printed prescriptions
    pub follow_up_days: u32,
    /// Storage key for doctor-added patients
    pub patient_records_key: String,
    /// Storage key for the auth state
    pub auth_key: String,
    /// Start signed in as the default doctor
    pub demo_mode: bool,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    pub clinic: ClinicDetails,
    pub default_doctor: DoctorProfile,
}

impl Default for SmartDoseConfig {
    fn default() -> Self {
        Self {
            order_amount: 450,
            max_units_per_period: 5,
            follow_up_days: 15,
            patient_records_key: "doz3_patient_records".to_string(),
            auth_key: "doz3_doctor_auth".to_string(),
            demo_mode: true,
            log_filter: "smart_dose_core=info".to_string(),
            clinic: ClinicDetails::default(),
            default_doctor: demo::default_doctor(),
        }
    }
}

impl SmartDoseConfig {
    /// Load defaults, then `path` if it exists, then the environment.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(
            Environment::with_prefix("SMART_DOSE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document over the defaults. The environment is not read.
    pub fn from_toml_str(toml: &str) -> ConfigResult<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_units_per_period == 0 {
            return Err(ConfigError::Invalid(
                "max_units_per_period must be at least 1".to_string(),
            ));
        }
        if !(1..=MAX_FOLLOW_UP_DAYS).contains(&self.follow_up_days) {
            return Err(ConfigError::Invalid(format!(
                "follow_up_days must be between 1 and {}",
                MAX_FOLLOW_UP_DAYS
            )));
        }
        if self.patient_records_key.is_empty() || self.auth_key.is_empty() {
            return Err(ConfigError::Invalid("storage keys must not be empty".to_string()));
        }
        Ok(())
    }

    /// Draft limits derived from this configuration.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            max_units_per_period: self.max_units_per_period,
            order_amount: self.order_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SmartDoseConfig::default();
        assert_eq!(config.order_amount, 450);
        assert_eq!(config.session_settings(), SessionSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_overrides_only_given_keys() {
        let config = SmartDoseConfig::from_toml_str(
            r#"
            order_amount = 600
            demo_mode = false

            [clinic]
            name = "Koramangala Clinic"
            "#,
        )
        .unwrap();

        assert_eq!(config.order_amount, 600);
        assert!(!config.demo_mode);
        assert_eq!(config.clinic.name, "Koramangala Clinic");
        assert_eq!(config.clinic.contact, ClinicDetails::default().contact);
        assert_eq!(config.follow_up_days, 15);
    }

    #[test]
    fn test_invalid_max_units() {
        let err = SmartDoseConfig::from_toml_str("max_units_per_period = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_follow_up_days_bounds() {
        for days in [0, MAX_FOLLOW_UP_DAYS + 1, u32::MAX] {
            let err = SmartDoseConfig::from_toml_str(&format!("follow_up_days = {}", days))
                .unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{} days accepted", days);
        }
        let config =
            SmartDoseConfig::from_toml_str(&format!("follow_up_days = {}", MAX_FOLLOW_UP_DAYS))
                .unwrap();
        assert_eq!(config.follow_up_days, MAX_FOLLOW_UP_DAYS);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config = SmartDoseConfig::load(Some(Path::new("/nonexistent/smart-dose.toml")));
        assert!(config.is_ok());
    }
}

// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    DEFAULT_BLUR_AMOUNT, DEFAULT_MAX_IMAGE_SIZE, MAX_BLUR_AMOUNT, MIN_BLUR_AMOUNT,
};
use crate::error::ConfigError;

/// Limits applied while validating request parameters
///
/// Configuration can only tighten the built-in limits: the ceiling stays at
/// or below 5000 and the blur range inside [1, 10].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamsConfig {
    /// Maximum width/height that can be requested, unless it equals the
    /// source image's natural dimension
    #[serde(default = "default_max_image_size")]
    pub max_image_size: i64,

    #[serde(default = "default_min_blur_amount")]
    pub min_blur_amount: i64,

    #[serde(default = "default_max_blur_amount")]
    pub max_blur_amount: i64,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
            min_blur_amount: MIN_BLUR_AMOUNT,
            max_blur_amount: MAX_BLUR_AMOUNT,
        }
    }
}

fn default_max_image_size() -> i64 {
    DEFAULT_MAX_IMAGE_SIZE
}

fn default_min_blur_amount() -> i64 {
    MIN_BLUR_AMOUNT
}

fn default_max_blur_amount() -> i64 {
    MAX_BLUR_AMOUNT
}

impl ParamsConfig {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, ConfigError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let mut missing = None;
        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                if missing.is_none() {
                    missing = Some(var_name.to_string());
                }
                String::new()
            })
        });

        if let Some(var_name) = missing {
            return Err(ConfigError::MissingEnvVar(var_name));
        }

        // An empty document means "all defaults"
        if substituted.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&substituted)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=DEFAULT_MAX_IMAGE_SIZE).contains(&self.max_image_size) {
            return Err(ConfigError::Invalid(format!(
                "max_image_size must be within 1-{}, got {}",
                DEFAULT_MAX_IMAGE_SIZE, self.max_image_size
            )));
        }

        if self.min_blur_amount < MIN_BLUR_AMOUNT {
            return Err(ConfigError::Invalid(format!(
                "min_blur_amount must be at least {}, got {}",
                MIN_BLUR_AMOUNT, self.min_blur_amount
            )));
        }

        if self.max_blur_amount > MAX_BLUR_AMOUNT {
            return Err(ConfigError::Invalid(format!(
                "max_blur_amount must be at most {}, got {}",
                MAX_BLUR_AMOUNT, self.max_blur_amount
            )));
        }

        // A bare `blur` resolves to the default amount, which must stay valid
        if !(self.min_blur_amount..=self.max_blur_amount).contains(&DEFAULT_BLUR_AMOUNT) {
            return Err(ConfigError::Invalid(format!(
                "blur range {}-{} must include the default amount {}",
                self.min_blur_amount, self.max_blur_amount, DEFAULT_BLUR_AMOUNT
            )));
        }

        Ok(())
    }
}

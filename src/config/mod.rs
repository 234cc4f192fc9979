//! Configuration for the validation engine
//!
//! Limits are deployment policy, not consensus: operators tune them per
//! network. All fields default to conservative values so an empty TOML file
//! (or no file at all) yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, RouterError};
use crate::types::{Amount, Timestamp};

/// Validation limits applied by the preflight engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationLimits {
    /// Maximum number of hops in a swap path
    #[serde(default = "default_max_path_length")]
    pub max_path_length: usize,

    /// Maximum allowed distance of a deadline into the future, in seconds
    #[serde(default = "default_max_deadline_extension")]
    pub max_deadline_extension: Timestamp,

    /// Minimum viable desired amount per side of a liquidity operation
    #[serde(default = "default_min_liquidity")]
    pub min_liquidity: Amount,
}

fn default_max_path_length() -> usize {
    4
}

fn default_max_deadline_extension() -> Timestamp {
    // One day; longer deadlines are almost always caller bugs
    86_400
}

fn default_min_liquidity() -> Amount {
    1_000
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_path_length: default_max_path_length(),
            max_deadline_extension: default_max_deadline_extension(),
            min_liquidity: default_min_liquidity(),
        }
    }
}

impl ValidationLimits {
    /// Load limits from a TOML file, applying defaults for missing fields
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| RouterError::Config(format!("failed to read limits file: {}", e)))?;
        let limits: ValidationLimits = toml::from_str(&contents)
            .map_err(|e| RouterError::Config(format!("failed to parse limits file: {}", e)))?;
        limits.validate()?;
        Ok(limits)
    }

    /// Check internal consistency of the limits themselves
    ///
    /// A path needs at least two hops, so a maximum below 2 would make
    /// every path invalid.
    pub fn validate(&self) -> Result<()> {
        if self.max_path_length < 2 {
            return Err(RouterError::Config(format!(
                "max_path_length must be at least 2, got {}",
                self.max_path_length
            )));
        }
        if self.min_liquidity == 0 {
            return Err(RouterError::Config(
                "min_liquidity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

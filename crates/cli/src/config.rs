//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PJ_CART_FILE` - Path of the cart slot file
//!   (default: `$HOME/.playjoy/cart.json`, relative to the working
//!   directory when `HOME` is unset)

use std::env;
use std::path::PathBuf;

use playjoy_cart::{CartStore, FileSlot, LogNotifier};
use thiserror::Error;

const CART_FILE_VAR: &str = "PJ_CART_FILE";
const DEFAULT_CART_FILE: &str = ".playjoy/cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path of the cart slot file.
    pub cart_file: PathBuf,
}

impl CliConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `PJ_CART_FILE` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cart_file = match env::var_os(CART_FILE_VAR) {
            Some(value) if value.is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    CART_FILE_VAR,
                    "path must not be empty".to_owned(),
                ));
            }
            Some(value) => PathBuf::from(value),
            None => default_cart_file(),
        };
        Ok(Self { cart_file })
    }

    /// Open a cart store over the configured slot file, rendering
    /// notifications to the log.
    #[must_use]
    pub fn open_store(&self) -> CartStore<FileSlot, LogNotifier> {
        CartStore::new(FileSlot::new(&self.cart_file), LogNotifier)
    }
}

fn default_cart_file() -> PathBuf {
    env::var_os("HOME").map_or_else(
        || PathBuf::from(DEFAULT_CART_FILE),
        |home| PathBuf::from(home).join(DEFAULT_CART_FILE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_under_home() {
        let path = default_cart_file();
        assert!(path.ends_with(".playjoy/cart.json"));
    }
}

//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BASKET_STATE_DIR` - Directory holding the cart state (default:
//!   `basket/` under the platform data directory)
//! - `BASKET_NAMESPACE` - Storage key the cart is persisted as
//!   (default: `cart`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use basket_cart::DEFAULT_NAMESPACE;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a data directory; set BASKET_STATE_DIR")]
    NoStateDir,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory the cart state lives under.
    pub state_dir: PathBuf,
    /// Storage key the cart is persisted as.
    pub namespace: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoStateDir` when `BASKET_STATE_DIR` is unset
    /// and no platform data directory can be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let state_dir = match env::var("BASKET_STATE_DIR") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::data_dir()
                .ok_or(ConfigError::NoStateDir)?
                .join("basket"),
        };

        let namespace = env::var("BASKET_NAMESPACE")
            .ok()
            .filter(|ns| !ns.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_owned());

        Ok(Self {
            state_dir,
            namespace,
        })
    }
}

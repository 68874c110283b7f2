//! # smurfdykt
//!
//! "Something about secrets and do you keep them?"
//!
//! Pulls one secret from AWS Secrets Manager and prints either the value of a
//! single tag from it or the raw secret string.
//!
//! ## Flow
//!
//! ```text
//! flags ─┬─> SmurfConfig ──> AwsSecretsManagerClient ──> retrieve ──> stdout
//!        └─ override file (replaces the whole config)        │
//!                                                   raw? ────┴── extract_tag
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smurfdykt::config::SmurfConfig;
//! use smurfdykt::secrets::{retrieve, AwsClientConfig, AwsSecretsManagerClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SmurfConfig {
//!         secret_name: "prod/db".to_string(),
//!         ..SmurfConfig::from_flag_defaults()
//!     };
//!     let client_config = AwsClientConfig::for_profile(&config.profile);
//!     let client = AwsSecretsManagerClient::connect(client_config).await?;
//!     println!("{}", retrieve(&config, &client).await?);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod observability;
pub mod secrets;

// Re-export commonly used types and traits
pub use config::SmurfConfig;
pub use errors::{Error, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

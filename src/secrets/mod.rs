//! Secret retrieval and tag extraction.
//!
//! # Architecture
//!
//! The retriever is written against the [`SecretsClient`] trait, a single
//! read-only operation:
//! - **get_secret**: fetch the string payload of a secret by identifier
//!
//! [`AwsSecretsManagerClient`] is the production implementation. The payload is
//! either returned verbatim (raw mode) or parsed as a list of `Key`/`Value`
//! tags by [`extract_tag`].
//!
//! # Example
//!
//! ```rust,ignore
//! use smurfdykt::config::SmurfConfig;
//! use smurfdykt::secrets::{retrieve, AwsClientConfig, AwsSecretsManagerClient};
//!
//! let client = AwsSecretsManagerClient::connect(AwsClientConfig::for_profile("prod")).await?;
//! let config = SmurfConfig::from_flag_defaults();
//! let username = retrieve(&config, &client).await?;
//! ```
//!
//! # Security Considerations
//!
//! - Payloads travel as [`SecretString`] and are redacted in Debug/Display
//! - Secret values are never logged

pub mod aws;
pub mod client;
pub mod error;
pub mod parser;
pub mod retriever;
pub mod types;

// Re-export main types
pub use aws::{AwsClientConfig, AwsSecretsManagerClient};
pub use client::SecretsClient;
pub use error::{Result, SecretsError};
pub use parser::{extract_tag, KeyValueEntry};
pub use retriever::retrieve;
pub use types::SecretString;

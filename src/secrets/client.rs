//! Core secrets client trait.

use async_trait::async_trait;

use super::error::Result;
use super::types::SecretString;

/// Read-only access to a remote secret store.
///
/// This is the only capability the retriever needs, so the AWS client can be
/// swapped for a stub in tests.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use smurfdykt::secrets::{Result, SecretString, SecretsClient};
/// use async_trait::async_trait;
///
/// struct FixedSecret(&'static str);
///
/// #[async_trait]
/// impl SecretsClient for FixedSecret {
///     async fn get_secret(&self, _secret_id: &str) -> Result<SecretString> {
///         Ok(SecretString::new(self.0))
///     }
/// }
/// ```
#[async_trait]
pub trait SecretsClient: Send + Sync {
    /// Fetch the string payload of a secret by identifier (name or ARN).
    ///
    /// Implementations issue exactly one request and MUST NOT retry.
    ///
    /// # Errors
    ///
    /// - `SecretsError::NotFound` if the secret doesn't exist
    /// - `SecretsError::AccessDenied` if reading is not permitted
    /// - `SecretsError::ConnectionFailed` if the backend is unreachable
    async fn get_secret(&self, secret_id: &str) -> Result<SecretString>;
}

//! Single-shot secret retrieval.

use tracing::debug;

use super::client::SecretsClient;
use super::error::Result;
use super::parser::extract_tag;
use crate::config::SmurfConfig;

/// Fetch `config.secret_name` once and render it.
///
/// In raw mode the secret string is returned verbatim, whatever its shape.
/// Otherwise the configured tag is extracted from it. Store errors are
/// returned as-is; nothing is retried.
pub async fn retrieve<C>(config: &SmurfConfig, client: &C) -> Result<String>
where
    C: SecretsClient + ?Sized,
{
    debug!(secret_name = %config.secret_name, raw = config.raw, "Fetching secret");
    let payload = client.get_secret(&config.secret_name).await?;

    if config.raw {
        return Ok(payload.into_inner());
    }

    debug!(tag = %config.tag, "Extracting tag from secret payload");
    extract_tag(&config.tag, payload.expose_secret())
}

//! AWS Secrets Manager client.
//!
//! Credentials come from the SDK's standard resolution chain. A non-empty
//! profile name selects a shared-config profile; otherwise environment
//! variables, `AWS_PROFILE`, the default profile, and container/instance roles
//! are tried in the SDK's usual order.
//!
//! ## Environment overrides
//!
//! - `SMURFDYKT_AWS_REGION` - explicit region (otherwise the SDK chain decides)
//! - `SMURFDYKT_AWS_SM_ENDPOINT` - Secrets Manager endpoint URL (e.g. LocalStack)
//!
//! SDK retries are disabled: every lookup is exactly one request.

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client;
use tracing::{debug, info};

use super::client::SecretsClient;
use super::error::{Result, SecretsError};
use super::types::SecretString;
use crate::errors::Error;

/// Environment variable holding an explicit region.
pub const REGION_ENV: &str = "SMURFDYKT_AWS_REGION";

/// Environment variable holding an explicit Secrets Manager endpoint URL.
pub const SM_ENDPOINT_ENV: &str = "SMURFDYKT_AWS_SM_ENDPOINT";

/// How to build the Secrets Manager client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsClientConfig {
    /// Shared-config profile; `None` defers to the default chain.
    pub profile: Option<String>,

    /// Region override.
    pub region: Option<String>,

    /// Endpoint override for Secrets Manager.
    pub endpoint_url: Option<String>,
}

impl AwsClientConfig {
    /// Client settings for a profile name as given on the command line.
    pub fn for_profile(profile: &str) -> Self {
        Self { profile: non_blank(profile.to_string()), ..Self::default() }
    }

    /// Apply `SMURFDYKT_AWS_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(region) = lookup(REGION_ENV).and_then(non_blank) {
            self.region = Some(region);
        }
        if let Some(endpoint) = lookup(SM_ENDPOINT_ENV).and_then(non_blank) {
            self.endpoint_url = Some(endpoint);
        }
        self
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// [`SecretsClient`] backed by AWS Secrets Manager `GetSecretValue`.
#[derive(Clone)]
pub struct AwsSecretsManagerClient {
    client: Client,
}

impl std::fmt::Debug for AwsSecretsManagerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManagerClient").field("client", &"[SecretsManager]").finish()
    }
}

impl AwsSecretsManagerClient {
    /// Resolve credentials and build a client.
    ///
    /// Credentials are resolved once up front so that a broken profile or an
    /// unreachable instance role surfaces here as [`Error::Credential`] rather
    /// than on the first request.
    pub async fn connect(config: AwsClientConfig) -> crate::errors::Result<Self> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());
        if let Some(profile) = config.profile.as_deref() {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }
        let shared_config = loader.load().await;

        let provider = shared_config
            .credentials_provider()
            .ok_or_else(|| Error::credential("no credentials provider available"))?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| Error::credential(DisplayErrorContext(&e).to_string()))?;

        let mut builder = aws_sdk_secretsmanager::config::Builder::from(&shared_config);
        if let Some(endpoint) = config.endpoint_url.as_deref() {
            builder = builder.endpoint_url(endpoint);
        }

        info!(
            profile = config.profile.as_deref().unwrap_or("<default>"),
            region = shared_config.region().map(|r| r.as_ref()).unwrap_or("<unset>"),
            endpoint = config.endpoint_url.as_deref().unwrap_or("<default>"),
            "Initialized AWS Secrets Manager client"
        );

        Ok(Self { client: Client::from_conf(builder.build()) })
    }
}

#[async_trait]
impl SecretsClient for AwsSecretsManagerClient {
    async fn get_secret(&self, secret_id: &str) -> Result<SecretString> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|err| classify_error(secret_id, err))?;

        debug!(
            secret_id = %secret_id,
            version_id = output.version_id().unwrap_or("<none>"),
            "Fetched secret value"
        );

        output.secret_string().map(SecretString::new).ok_or_else(|| {
            SecretsError::invalid_value(format!("Secret '{}' has no string value", secret_id))
        })
    }
}

/// Map an SDK failure onto [`SecretsError`], keeping the service message.
fn classify_error(secret_id: &str, err: SdkError<GetSecretValueError>) -> SecretsError {
    match &err {
        SdkError::ServiceError(context) => {
            let service_err = context.err();
            let message = service_err.message().unwrap_or("no message").to_string();
            match service_err.code() {
                Some("ResourceNotFoundException") => SecretsError::not_found(secret_id),
                Some("AccessDeniedException") => SecretsError::access_denied(secret_id, message),
                Some("ThrottlingException") | Some("TooManyRequestsException") => {
                    SecretsError::throttled(message)
                }
                Some("UnrecognizedClientException")
                | Some("InvalidSignatureException")
                | Some("ExpiredTokenException") => SecretsError::authentication_failed(message),
                _ => SecretsError::backend_error(DisplayErrorContext(&err).to_string()),
            }
        }
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) | SdkError::ResponseError(_) => {
            SecretsError::connection_failed(DisplayErrorContext(&err).to_string())
        }
        _ => SecretsError::backend_error(DisplayErrorContext(&err).to_string()),
    }
}

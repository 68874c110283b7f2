//! # Command Line Interface
//!
//! Flags mirror the classic Go `flag` spelling (`-secretname foo`, `-raw`);
//! the double-dash forms work as well.

use crate::config::{load_config, SmurfConfig, DEFAULT_SECRET_NAME, DEFAULT_TAG};
use crate::errors::Result;
use crate::observability::init_logging;
use crate::secrets::{retrieve, AwsClientConfig, AwsSecretsManagerClient, SecretsClient};
use anyhow::Context;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::io::Write;

/// Long flags that may be written with a single dash.
const LONG_FLAGS: &[&str] =
    &["config", "profile", "tag", "secretname", "raw", "verbose", "help", "version"];

#[derive(Parser, Debug)]
#[command(name = "smurfdykt")]
#[command(about = "Pull a secret from AWS Secrets Manager and print one tag or the raw value")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Filename of YAML configuration file. Contents override all parameters.
    /// Leave blank to use parameters only.
    #[arg(long, env = "SMURFDYKT_CONFIG", default_value = "", allow_hyphen_values = true)]
    pub config: String,

    /// AWS credentials profile; if blank the default or instance profile is used
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub profile: String,

    /// Tag key to grab from the secret. The value of this key is printed
    #[arg(long, default_value = DEFAULT_TAG, allow_hyphen_values = true)]
    pub tag: String,

    /// Name of the secret to retrieve
    #[arg(long = "secretname", default_value = DEFAULT_SECRET_NAME, allow_hyphen_values = true)]
    pub secret_name: String,

    /// Print the raw secret string instead of extracting a tag
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub raw: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Configuration as given by flags alone.
    pub fn baseline(&self) -> SmurfConfig {
        SmurfConfig {
            profile: self.profile.clone(),
            secret_name: self.secret_name.clone(),
            tag: self.tag.clone(),
            raw: self.raw,
        }
    }
}

/// Rewrite `-flag` / `-flag=value` into `--flag` / `--flag=value` for known
/// long flags. Everything after a bare `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(idx, arg)| {
            if idx == 0 || passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if LONG_FLAGS.contains(&name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

/// Run CLI commands
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    init_logging(cli.verbose);

    let config = load_config(cli.baseline(), &cli.config);

    let client_config = AwsClientConfig::for_profile(&config.profile).with_env_overrides();
    let client = AwsSecretsManagerClient::connect(client_config)
        .await
        .context("Error loading default or shared profile credentials")?;

    let mut stdout = std::io::stdout().lock();
    emit_secret(&config, &client, &mut stdout).await?;
    Ok(())
}

/// Retrieve the configured secret and write it as a single line.
///
/// Nothing is written when retrieval fails.
pub async fn emit_secret<C, W>(config: &SmurfConfig, client: &C, out: &mut W) -> Result<()>
where
    C: SecretsClient + ?Sized,
    W: Write,
{
    let value = retrieve(config, client).await?;
    writeln!(out, "{}", value)?;
    out.flush()?;
    Ok(())
}

//! Runtime settings for a single secret lookup.

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

use crate::errors::{Error, Result};

/// Tag key extracted when none is given on the command line.
pub const DEFAULT_TAG: &str = "username";

/// Secret name used when none is given on the command line.
pub const DEFAULT_SECRET_NAME: &str = "foo";

/// Everything needed to fetch and render one secret.
///
/// Built once at startup from flags, optionally replaced by an override file,
/// then passed by reference and never mutated.
///
/// `Default` yields the zero value of every field (empty strings, `false`);
/// this is what keys missing from an override file become. The flag defaults
/// live in [`SmurfConfig::from_flag_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmurfConfig {
    /// Shared credentials profile; empty means the SDK default chain.
    pub profile: String,

    /// Name or ARN of the secret to fetch.
    pub secret_name: String,

    /// Tag key whose value is printed.
    pub tag: String,

    /// Print the secret string as-is instead of extracting a tag.
    pub raw: bool,
}

impl SmurfConfig {
    /// Configuration with the command-line defaults applied.
    pub fn from_flag_defaults() -> Self {
        Self {
            profile: String::new(),
            secret_name: DEFAULT_SECRET_NAME.to_string(),
            tag: DEFAULT_TAG.to_string(),
            raw: false,
        }
    }

    /// Replace this configuration with the contents of a YAML file.
    ///
    /// An unreadable file leaves `self` untouched. Otherwise see
    /// [`apply_yaml`](Self::apply_yaml).
    pub fn parse_config_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config_file(format!("{}: {}", path.display(), e)))?;

        self.apply_yaml(&contents)
            .map_err(|e| Error::config_file(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "Loaded override configuration file");
        Ok(())
    }

    /// Overwrite this configuration with an override document.
    ///
    /// Once the document parses as a mapping the whole structure is reset:
    /// keys missing from it take their zero value, not the value currently
    /// held. A key whose value has the wrong type keeps its zero value while
    /// the remaining keys are still assigned, and the first such error is
    /// returned. A document that is not YAML, or not a mapping, leaves `self`
    /// untouched. An empty document is an empty mapping.
    pub fn apply_yaml(&mut self, contents: &str) -> std::result::Result<(), serde_yaml::Error> {
        let document = if contents.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str::<Value>(contents)?
        };

        match document {
            Value::Null => {
                *self = Self::default();
                Ok(())
            }
            Value::Mapping(fields) => {
                *self = Self::default();
                self.assign_fields(&fields)
            }
            other => serde_yaml::from_value::<Mapping>(other).map(|_| ()),
        }
    }

    fn assign_fields(&mut self, fields: &Mapping) -> std::result::Result<(), serde_yaml::Error> {
        let mut first_error = None;

        for (key, value) in fields {
            let assigned = match key.as_str() {
                Some("profile") => assign(&mut self.profile, value),
                Some("secret_name") => assign(&mut self.secret_name, value),
                Some("tag") => assign(&mut self.tag, value),
                Some("raw") => assign(&mut self.raw, value),
                _ => Ok(()),
            };
            if let Err(e) = assigned {
                first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}

fn assign<T: DeserializeOwned>(
    slot: &mut T,
    value: &Value,
) -> std::result::Result<(), serde_yaml::Error> {
    // An explicit null leaves the zero value in place.
    if !value.is_null() {
        *slot = serde_yaml::from_value(value.clone())?;
    }
    Ok(())
}

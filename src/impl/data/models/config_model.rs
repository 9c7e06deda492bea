use std::{str::FromStr, time::Duration};

use fractic_server_error::ServerError;
use serde_derive::Deserialize;

use crate::{
    entities::{TxBuilderConfig, DEFAULT_CURRENCY, DEFAULT_DOT_INDENT, DEFAULT_HISTORY_TTL},
    errors::InvalidRon,
};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct ConfigModel {
    dot_indent: usize,
    history_ttl_secs: u64,
    default_currency: String,
}

impl Default for ConfigModel {
    fn default() -> Self {
        Self {
            dot_indent: DEFAULT_DOT_INDENT,
            history_ttl_secs: DEFAULT_HISTORY_TTL.as_secs(),
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl From<ConfigModel> for TxBuilderConfig {
    fn from(m: ConfigModel) -> Self {
        TxBuilderConfig {
            dot_indent: m.dot_indent,
            history_ttl: Duration::from_secs(m.history_ttl_secs),
            default_currency: m.default_currency,
        }
    }
}

/// Parses a RON config, e.g. `(dot_indent: 52, default_currency: "USD")`.
/// Missing fields take their defaults.
impl FromStr for TxBuilderConfig {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let model: ConfigModel =
            ron::from_str(s).map_err(|e| InvalidRon::with_debug("TxBuilderConfig", &e))?;
        Ok(model.into())
    }
}

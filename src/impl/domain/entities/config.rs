use std::time::Duration;

pub const DEFAULT_DOT_INDENT: usize = 47;
pub const DEFAULT_HISTORY_TTL: Duration = Duration::from_secs(15 * 60);
pub const DEFAULT_CURRENCY: &str = "EUR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxBuilderConfig {
    /// Column (counted from the start of the account name) the amount's
    /// decimal point is aligned to on the "from" posting line.
    pub dot_indent: usize,
    /// How long fetched history suggestions stay cached.
    pub history_ttl: Duration,
    /// Currency used when the user's preferences can't be read.
    pub default_currency: String,
}

impl Default for TxBuilderConfig {
    fn default() -> Self {
        Self {
            dot_indent: DEFAULT_DOT_INDENT,
            history_ttl: DEFAULT_HISTORY_TTL,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Per-conversation rendering preferences, read once per rendered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPreferences {
    pub currency: String,
    pub tag: Option<String>,
    /// Whole hours added to UTC when computing today's date.
    pub tz_offset: i32,
}

impl UserPreferences {
    pub fn new(currency: impl Into<String>, tag: Option<String>, tz_offset: i32) -> Self {
        Self {
            currency: currency.into(),
            tag,
            tz_offset,
        }
    }

    /// Used when the preference source can't be reached.
    pub fn fallback(default_currency: &str) -> Self {
        Self::new(default_currency, None, 0)
    }

    /// Tag to append to the record header, if any. Empty tags count as unset.
    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or("")
    }
}

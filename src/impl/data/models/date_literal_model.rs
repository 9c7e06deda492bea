use std::{str::FromStr, sync::LazyLock};

use fractic_server_error::ServerError;
use regex::Regex;

use crate::errors::InvalidDateLiteral;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("hardcoded regex should be valid"));

/// Date typed as 'YYYY-MM-DD'. Only the shape is checked, not whether the day
/// exists, so it is kept as text.
#[derive(Debug)]
pub(crate) struct DateLiteralModel(String);

impl FromStr for DateLiteralModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !DATE_PATTERN.is_match(s) {
            return Err(InvalidDateLiteral::new(s));
        }
        Ok(DateLiteralModel(s.to_string()))
    }
}

impl From<DateLiteralModel> for String {
    fn from(d: DateLiteralModel) -> Self {
        d.0
    }
}

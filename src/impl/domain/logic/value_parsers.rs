//! Parsers bound to transaction steps. Each maps the raw reply to the value
//! stored for the step.

use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::data::models::{amount_model::AmountModel, date_literal_model::DateLiteralModel};

/// Amount with optional arithmetic shorthand and currency, e.g. "12,50",
/// "3+4.5 USD" or "2*3.20". See [`crate::parsers::format_amount`] for how the
/// result is rendered.
pub fn handle_amount(raw: &str) -> Result<String, ServerError> {
    Ok(AmountModel::from_str(raw)?.to_string())
}

pub fn handle_raw(raw: &str) -> Result<String, ServerError> {
    Ok(raw.to_string())
}

pub fn parse_date(raw: &str) -> Result<String, ServerError> {
    Ok(DateLiteralModel::from_str(raw)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_examples() {
        assert_eq!(handle_amount("17.34").unwrap(), "17.34");
        assert_eq!(handle_amount("-5").unwrap(), "5.00");
        assert_eq!(handle_amount("5 USD").unwrap(), "5.00 USD");
        assert!(handle_amount("5 USD EXTRA").is_err());
        assert_eq!(handle_amount("10+5").unwrap(), "15.00");
        assert_eq!(handle_amount("2*3").unwrap(), "6.00");
        assert!(handle_amount("2*3*4").is_err());
        assert!(handle_amount("10+ USD").is_err());
    }

    #[test]
    fn raw_is_passed_through() {
        assert_eq!(handle_raw(" Assets:Wallet ").unwrap(), " Assets:Wallet ");
    }

    #[test]
    fn date_literal() {
        assert_eq!(parse_date("2023-01-15").unwrap(), "2023-01-15");
        assert!(parse_date("yesterday").is_err());
    }
}

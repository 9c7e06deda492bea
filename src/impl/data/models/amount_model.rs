use std::{fmt, str::FromStr};

use fractic_server_error::ServerError;
use log::{info, trace};

use crate::{
    errors::{
        InvalidAmount, InvalidFactor, InvalidFactorCount, InvalidSummand, OpenSumWithCurrency,
        TooManySpaces,
    },
    presentation::utils::format_amount,
};

/// Amount as typed by the user: a number with optional arithmetic shorthand
/// ('a+b+c' or 'a*b'), optionally followed by a currency.
///
/// Only a plain negative number is turned positive (the record template
/// supplies the sign). Sums and products keep whatever sign they evaluate to.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AmountModel {
    pub(crate) value: f64,
    pub(crate) currency: Option<String>,
}

impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().replace(',', ".");
        let split: Vec<&str> = input.split(' ').collect();
        if split.len() > 2 {
            return Err(TooManySpaces::new(&input));
        }
        let raw_value = split[0];
        let currency = split.get(1).map(|c| c.to_string());

        // A trailing '+' keeps the sum open for later additions, which can't be
        // combined with a currency.
        if raw_value.ends_with('+') && currency.is_some() {
            return Err(OpenSumWithCurrency::new());
        }

        let value = if raw_value.contains('+') {
            sum(raw_value)?
        } else if raw_value.contains('*') {
            product(raw_value)?
        } else {
            let mut v = parse_decimal(raw_value).ok_or_else(|| InvalidAmount::new(raw_value))?;
            if v < 0.0 {
                info!("Got negative value. Inverting.");
                v *= -1.0;
            }
            v
        };
        if !value.is_finite() {
            return Err(InvalidAmount::new(raw_value));
        }
        trace!("Handled amount: '{}' -> {}", s, value);

        Ok(AmountModel { value, currency })
    }
}

impl fmt::Display for AmountModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_amount(self.value))?;
        if let Some(currency) = &self.currency {
            write!(f, " {}", currency)?;
        }
        Ok(())
    }
}

fn sum(raw_value: &str) -> Result<f64, ServerError> {
    raw_value.split('+').try_fold(0.0, |acc, summand| {
        parse_decimal(summand)
            .map(|v| acc + v)
            .ok_or_else(|| InvalidSummand::new(summand))
    })
}

fn product(raw_value: &str) -> Result<f64, ServerError> {
    let factors: Vec<&str> = raw_value.split('*').collect();
    if factors.len() != 2 {
        return Err(InvalidFactorCount::new());
    }
    factors.iter().try_fold(1.0, |acc, factor| {
        parse_decimal(factor)
            .map(|v| acc * v)
            .ok_or_else(|| InvalidFactor::new(factor))
    })
}

/// Finite decimal number, or `None`.
pub(crate) fn parse_decimal(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

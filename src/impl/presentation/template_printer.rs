use fractic_server_error::ServerError;

use crate::{
    data::models::amount_model::parse_decimal,
    entities::{TransactionRecord, DEFAULT_DOT_INDENT},
    errors::InvalidAmount,
};

use super::utils::{count_leading_digits, format_amount};

#[derive(Debug, Clone)]
pub(crate) struct TemplatePrinter {
    dot_indent: usize,
}

impl TemplatePrinter {
    pub(crate) fn new(dot_indent: usize) -> Self {
        Self { dot_indent }
    }

    /// Prints a simple two-posting record:
    ///
    /// ```text
    /// 2024-01-01 * "Buy something" #vacation2021
    ///   Assets:Wallet                               -17.34 EUR
    ///   Expenses:Groceries
    /// ```
    ///
    /// A currency captured with the amount takes precedence over `currency`.
    pub(crate) fn print_transaction(
        &self,
        record: &TransactionRecord,
        currency: &str,
        tag: &str,
    ) -> Result<String, ServerError> {
        let mut amount_split = record.amount.split(' ');
        let raw_number = amount_split.next().unwrap_or("");
        let number = parse_decimal(raw_number).ok_or_else(|| InvalidAmount::new(raw_number))?;
        let currency = amount_split.next().unwrap_or(currency);

        let padding = " ".repeat(self.padding(&record.account_from, number));
        let tag_suffix = if tag.is_empty() {
            String::new()
        } else {
            format!(" #{}", tag)
        };

        Ok(format!(
            "{} * \"{}\"{}\n  {}{} -{} {}\n  {}\n",
            record.date,
            record.description,
            tag_suffix,
            record.account_from,
            padding,
            format_amount(number),
            currency,
            record.account_to,
        ))
    }

    /// Spaces between the "from" account and the amount, so the decimal
    /// point lands on `dot_indent`. The 2 accounts for the separating space
    /// and the minus sign.
    fn padding(&self, account_from: &str, amount: f64) -> usize {
        self.dot_indent
            .saturating_sub(account_from.chars().count())
            .saturating_sub(count_leading_digits(amount))
            .saturating_sub(2)
    }
}

impl Default for TemplatePrinter {
    fn default() -> Self {
        Self::new(DEFAULT_DOT_INDENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(amount: &str, account_from: &str) -> TransactionRecord {
        TransactionRecord {
            date: "2024-01-01".to_string(),
            description: "Buy something".to_string(),
            account_from: account_from.to_string(),
            account_to: "Expenses:Groceries".to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn prints_aligned_record() {
        let printed = TemplatePrinter::default()
            .print_transaction(&record("17.34", "Assets:Wallet"), "EUR", "vacation2021")
            .unwrap();
        assert_eq!(
            printed,
            "2024-01-01 * \"Buy something\" #vacation2021\n  Assets:Wallet                               -17.34 EUR\n  Expenses:Groceries\n"
        );
    }

    #[test]
    fn decimal_point_is_aligned_across_records() {
        let printer = TemplatePrinter::default();
        let a = printer
            .print_transaction(&record("17.34", "Assets:Wallet"), "EUR", "")
            .unwrap();
        let b = printer
            .print_transaction(&record("1234.50", "Assets:Cash"), "EUR", "")
            .unwrap();
        let dot_col = |s: &str| s.lines().nth(1).unwrap().find('.').unwrap();
        assert_eq!(dot_col(&a), dot_col(&b));
        // Two spaces of posting indent plus the configured column.
        assert_eq!(dot_col(&a), 2 + 47);
    }

    #[test]
    fn no_tag_suffix_when_tag_empty() {
        let printed = TemplatePrinter::default()
            .print_transaction(&record("5.00", "Assets:Wallet"), "EUR", "")
            .unwrap();
        assert!(printed.starts_with("2024-01-01 * \"Buy something\"\n"));
    }

    #[test]
    fn captured_currency_overrides_default() {
        let printed = TemplatePrinter::default()
            .print_transaction(&record("5.00 USD", "Assets:Wallet"), "EUR", "")
            .unwrap();
        assert!(printed.contains(" -5.00 USD\n"));
        assert!(!printed.contains("EUR"));
    }

    #[test]
    fn padding_is_clamped_for_long_accounts() {
        let account = "Assets:Some:Very:Long:Account:Name:That:Exceeds:Everything";
        let printed = TemplatePrinter::default()
            .print_transaction(&record("17.34", account), "EUR", "")
            .unwrap();
        assert!(printed.contains(&format!("  {} -17.34 EUR\n", account)));
    }

    #[test]
    fn custom_dot_indent() {
        let printed = TemplatePrinter::new(20)
            .print_transaction(&record("17.34", "Assets:Wallet"), "EUR", "")
            .unwrap();
        // 20 - 13 - 2 - 2 = 3 spaces of padding.
        assert!(printed.contains("  Assets:Wallet    -17.34 EUR\n"));
    }

    #[test]
    fn unparsable_amount_fails() {
        assert!(TemplatePrinter::default()
            .print_transaction(&record("abc", "Assets:Wallet"), "EUR", "")
            .is_err());
    }
}

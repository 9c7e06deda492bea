/// Values of a completed simple transaction, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub date: String,
    pub description: String,
    pub account_from: String,
    pub account_to: String,
    /// Canonical amount as captured, optionally followed by a currency
    /// (e.g. "17.34" or "5.00 USD").
    pub amount: String,
}

use super::hint::Hint;

/// Outcome of feeding one reply into an open transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// More data is needed; prompt the user with this hint.
    Next(Hint),
    /// All steps are complete. Holds the rendered ledger record, which has
    /// already been handed to the transaction sink.
    Finished(String),
}

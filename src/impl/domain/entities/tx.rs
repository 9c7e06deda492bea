use std::collections::BTreeMap;

use fractic_server_error::ServerError;

use crate::domain::repositories::hint_repository::HintRepository;

use super::{
    hint::Hint,
    history::{ConversationId, HistoryCategory},
};

/// A transaction being gathered step by step.
pub trait Tx: Send + Sync {
    /// Parses the reply for the current step and advances to the next one. On
    /// error nothing changes, and the same step can be retried.
    fn input(&mut self, raw: &str) -> Result<(), ServerError>;

    fn is_done(&self) -> bool;

    /// Enriched hint for the current step, or `None` once all steps are done.
    fn next_hint(&self, hints: &dyn HintRepository, scope: &ConversationId) -> Option<Hint>;

    /// Renders the finished ledger record. If no date was given when the
    /// transaction was opened, today's date (UTC shifted by `tz_offset`
    /// hours) is fixed on the first call and reused afterwards.
    fn render(&mut self, currency: &str, tag: &str, tz_offset: i32)
        -> Result<String, ServerError>;

    /// Captured values keyed by category, for history recording.
    fn data_keys(&self) -> BTreeMap<HistoryCategory, String>;

    fn debug(&self) -> String;
}

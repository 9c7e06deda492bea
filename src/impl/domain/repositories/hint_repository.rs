use std::collections::BTreeMap;

use fractic_server_error::ServerError;

use crate::entities::{ConversationId, HistoryCategory};

pub trait HintRepository: Send + Sync {
    fn hints(
        &self,
        category: HistoryCategory,
        scope: &ConversationId,
    ) -> Result<Vec<String>, ServerError>;

    /// Remembers the values of a finished transaction. Best effort: failures
    /// are logged, not returned.
    fn record(&self, scope: &ConversationId, values: &BTreeMap<HistoryCategory, String>);
}

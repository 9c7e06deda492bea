use async_trait::async_trait;
use fractic_server_error::ServerError;

use super::{
    history::{ConversationId, HistoryCategory},
    preferences::UserPreferences,
};

// External collaborators, implemented by the embedding application.
// ---

/// Store of previously entered values, used for suggestions.
pub trait HistorySource: Send + Sync {
    /// Most relevant previous values first.
    fn fetch(
        &self,
        category: HistoryCategory,
        scope: &ConversationId,
    ) -> Result<Vec<String>, ServerError>;

    fn record(
        &self,
        category: HistoryCategory,
        scope: &ConversationId,
        value: &str,
    ) -> Result<(), ServerError>;
}

pub trait PreferencesSource: Send + Sync {
    fn preferences(&self, scope: &ConversationId) -> Result<UserPreferences, ServerError>;
}

/// Receives every finished ledger record.
#[async_trait]
pub trait TransactionSink: Send + Sync {
    async fn store(&self, scope: &ConversationId, transaction: &str) -> Result<(), ServerError>;
}

use fractic_server_error::ServerError;

use crate::{
    data::repositories::hint_repository_impl::HistoryCache,
    domain::usecases::conversation_usecase::{ConversationUsecase as _, ConversationUsecaseImpl},
    entities::{
        ConversationId, Hint, HistorySource, PreferencesSource, Progress, TransactionSink,
        TxBuilderConfig,
    },
};

/// Guides conversations through entering simple ledger transactions, one
/// reply at a time. Holds at most one open transaction per conversation.
///
/// ```ignore
/// let util = TxBuilderUtil::new(TxBuilderConfig::default(), history, preferences, sink);
/// let hint = util.start(&chat, "/simple").await?;     // asks for the amount
/// util.input(&chat, "17.34").await?;                  // asks for the source account
/// util.input(&chat, "Assets:Wallet").await?;
/// util.input(&chat, "Expenses:Groceries").await?;
/// let Progress::Finished(record) = util.input(&chat, "Groceries").await? else { .. };
/// ```
pub struct TxBuilderUtil<H, P, S>
where
    H: HistorySource,
    P: PreferencesSource,
    S: TransactionSink,
{
    conversation_usecase: ConversationUsecaseImpl<HistoryCache<H>, P, S>,
}

impl<H, P, S> TxBuilderUtil<H, P, S>
where
    H: HistorySource,
    P: PreferencesSource,
    S: TransactionSink,
{
    pub fn new(config: TxBuilderConfig, history_source: H, preferences_source: P, sink: S) -> Self {
        let history_cache = HistoryCache::new(history_source, config.history_ttl);
        Self {
            conversation_usecase: ConversationUsecaseImpl::new(
                config,
                history_cache,
                preferences_source,
                sink,
            ),
        }
    }

    /// Opens a transaction from the message that started it (optionally
    /// carrying a 'YYYY-MM-DD' date as second token) and returns the first
    /// prompt.
    pub async fn start(
        &self,
        scope: &ConversationId,
        initiating_text: &str,
    ) -> Result<Hint, ServerError> {
        self.conversation_usecase.start(scope, initiating_text).await
    }

    /// Feeds one reply into the open transaction. Once the last step is
    /// filled, the record is rendered, stored and returned.
    pub async fn input(&self, scope: &ConversationId, text: &str) -> Result<Progress, ServerError> {
        self.conversation_usecase.input(scope, text).await
    }

    pub async fn hint(&self, scope: &ConversationId) -> Option<Hint> {
        self.conversation_usecase.hint(scope).await
    }

    pub async fn cancel(&self, scope: &ConversationId) -> bool {
        self.conversation_usecase.cancel(scope).await
    }

    pub async fn is_active(&self, scope: &ConversationId) -> bool {
        self.conversation_usecase.is_active(scope).await
    }

    pub fn history(&self) -> &HistoryCache<H> {
        self.conversation_usecase.hint_repository()
    }
}

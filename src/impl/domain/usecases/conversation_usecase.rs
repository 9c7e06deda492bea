use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use log::{info, warn};
use tokio::sync::Mutex;

use crate::{
    domain::{logic::simple_tx::create_simple_tx, repositories::hint_repository::HintRepository},
    entities::{
        ConversationId, Hint, PreferencesSource, Progress, TransactionSink, Tx, TxBuilderConfig,
        UserPreferences,
    },
    errors::{MissingHint, NoActiveTransaction},
};

#[async_trait]
pub trait ConversationUsecase: Send + Sync {
    /// Opens a new transaction for `scope`, replacing any open one.
    async fn start(&self, scope: &ConversationId, initiating_text: &str)
        -> Result<Hint, ServerError>;

    /// Feeds one reply into the open transaction. If a previous attempt at
    /// rendering the finished transaction failed, the reply is not consumed
    /// and rendering is retried.
    async fn input(&self, scope: &ConversationId, text: &str) -> Result<Progress, ServerError>;

    async fn hint(&self, scope: &ConversationId) -> Option<Hint>;

    /// Drops the open transaction of `scope`. Returns whether there was one.
    async fn cancel(&self, scope: &ConversationId) -> bool;

    async fn is_active(&self, scope: &ConversationId) -> bool;
}

// The registry lock is only held for lookups. Work on a transaction (parsing,
// history lookups, rendering) happens under its own lock, which is always
// taken before the registry lock.
type Session = Arc<Mutex<Box<dyn Tx>>>;

pub(crate) struct ConversationUsecaseImpl<R, P, S>
where
    R: HintRepository,
    P: PreferencesSource,
    S: TransactionSink,
{
    config: TxBuilderConfig,
    hint_repository: R,
    preferences_source: P,
    sink: S,
    sessions: Mutex<HashMap<ConversationId, Session>>,
}

impl<R, P, S> ConversationUsecaseImpl<R, P, S>
where
    R: HintRepository,
    P: PreferencesSource,
    S: TransactionSink,
{
    pub(crate) fn new(
        config: TxBuilderConfig,
        hint_repository: R,
        preferences_source: P,
        sink: S,
    ) -> Self {
        Self {
            config,
            hint_repository,
            preferences_source,
            sink,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn hint_repository(&self) -> &R {
        &self.hint_repository
    }

    fn preferences(&self, scope: &ConversationId) -> UserPreferences {
        self.preferences_source
            .preferences(scope)
            .unwrap_or_else(|e| {
                warn!(
                    "[{}] Encountered error while getting user preferences, using defaults: {:?}",
                    scope, e
                );
                UserPreferences::fallback(&self.config.default_currency)
            })
    }

    fn current_hint(&self, tx: &dyn Tx, scope: &ConversationId) -> Result<Hint, ServerError> {
        tx.next_hint(&self.hint_repository, scope)
            .ok_or_else(|| MissingHint::new(&tx.debug()))
    }

    async fn session(&self, scope: &ConversationId) -> Option<Session> {
        self.sessions.lock().await.get(scope).cloned()
    }

    /// Whether `session` is still the open transaction of `scope`, i.e. it
    /// was neither finished, cancelled nor replaced while waiting for it.
    async fn is_current(&self, scope: &ConversationId, session: &Session) -> bool {
        self.sessions
            .lock()
            .await
            .get(scope)
            .is_some_and(|s| Arc::ptr_eq(s, session))
    }

    async fn discard(&self, scope: &ConversationId, session: &Session) {
        let mut sessions = self.sessions.lock().await;
        if sessions
            .get(scope)
            .is_some_and(|s| Arc::ptr_eq(s, session))
        {
            sessions.remove(scope);
        }
    }
}

#[async_trait]
impl<R, P, S> ConversationUsecase for ConversationUsecaseImpl<R, P, S>
where
    R: HintRepository,
    P: PreferencesSource,
    S: TransactionSink,
{
    async fn start(
        &self,
        scope: &ConversationId,
        initiating_text: &str,
    ) -> Result<Hint, ServerError> {
        let currency = self.preferences(scope).currency;
        let tx = create_simple_tx(initiating_text, &currency)?
            .with_dot_indent(self.config.dot_indent);
        let hint = self.current_hint(&tx, scope)?;

        let tx: Box<dyn Tx> = Box::new(tx);
        let replaced = self
            .sessions
            .lock()
            .await
            .insert(scope.clone(), Arc::new(Mutex::new(tx)));
        if replaced.is_some() {
            info!("[{}] Replaced open transaction.", scope);
        }
        info!("[{}] Started transaction.", scope);
        Ok(hint)
    }

    async fn input(&self, scope: &ConversationId, text: &str) -> Result<Progress, ServerError> {
        let session = self
            .session(scope)
            .await
            .ok_or_else(|| NoActiveTransaction::new())?;
        let mut tx = session.lock().await;
        if !self.is_current(scope, &session).await {
            return Err(NoActiveTransaction::new());
        }

        if tx.is_done() {
            info!("[{}] Retrying to finish transaction: {}", scope, tx.debug());
        } else {
            tx.input(text)?;
            if !tx.is_done() {
                return Ok(Progress::Next(self.current_hint(&**tx, scope)?));
            }
        }

        let preferences = self.preferences(scope);
        let rendered = tx.render(
            &preferences.currency,
            preferences.tag(),
            preferences.tz_offset,
        )?;
        info!("[{}] Finished transaction: {}", scope, tx.debug());
        let data_keys = tx.data_keys();
        self.discard(scope, &session).await;
        drop(tx);

        self.sink.store(scope, &rendered).await?;
        self.hint_repository.record(scope, &data_keys);
        Ok(Progress::Finished(rendered))
    }

    async fn hint(&self, scope: &ConversationId) -> Option<Hint> {
        let session = self.session(scope).await?;
        let tx = session.lock().await;
        tx.next_hint(&self.hint_repository, scope)
    }

    async fn cancel(&self, scope: &ConversationId) -> bool {
        let cancelled = self.sessions.lock().await.remove(scope).is_some();
        if cancelled {
            info!("[{}] Cancelled transaction.", scope);
        }
        cancelled
    }

    async fn is_active(&self, scope: &ConversationId) -> bool {
        self.sessions.lock().await.contains_key(scope)
    }
}

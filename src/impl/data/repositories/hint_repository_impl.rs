use std::{
    collections::{BTreeMap, HashMap},
    sync::{Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use fractic_server_error::ServerError;
use log::{error, trace};

use crate::{
    domain::repositories::hint_repository::HintRepository,
    entities::{ConversationId, HistoryCategory, HistorySource},
};

type CacheKey = (ConversationId, HistoryCategory);

struct CacheEntry {
    expiry: Instant,
    values: Vec<String>,
}

/// History suggestions with a fixed time-to-live in front of a
/// [`HistorySource`]. Expired entries are pruned on every access.
pub struct HistoryCache<H: HistorySource> {
    source: H,
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl<H: HistorySource> HistoryCache<H> {
    pub fn new(source: H, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &H {
        &self.source
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<CacheKey, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn prune(entries: &mut HashMap<CacheKey, CacheEntry>, now: Instant) {
        entries.retain(|_, e| e.expiry > now);
    }
}

impl<H: HistorySource> HintRepository for HistoryCache<H> {
    fn hints(
        &self,
        category: HistoryCategory,
        scope: &ConversationId,
    ) -> Result<Vec<String>, ServerError> {
        let key = (scope.clone(), category);
        {
            let mut entries = self.entries();
            Self::prune(&mut entries, Instant::now());
            if let Some(entry) = entries.get(&key) {
                trace!("[{}] Cached hints hit ({}).", scope, category);
                return Ok(entry.values.clone());
            }
        }

        let values = self.source.fetch(category, scope)?;
        self.entries().insert(
            key,
            CacheEntry {
                expiry: Instant::now() + self.ttl,
                values: values.clone(),
            },
        );
        Ok(values)
    }

    fn record(&self, scope: &ConversationId, values: &BTreeMap<HistoryCategory, String>) {
        for (category, value) in values {
            if !category.is_suggestable() || value.is_empty() {
                continue;
            }
            if let Err(e) = self.source.record(*category, scope, value) {
                error!(
                    "[{}] Error occurred recording hint ({}): {:?}",
                    scope, category, e
                );
            }
            self.entries().remove(&(scope.clone(), *category));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::errors::NoActiveTransaction;

    #[derive(Default)]
    struct CountingSource {
        fetches: AtomicUsize,
        recorded: Mutex<Vec<(HistoryCategory, String)>>,
        fail: bool,
    }

    impl HistorySource for CountingSource {
        fn fetch(
            &self,
            category: HistoryCategory,
            _scope: &ConversationId,
        ) -> Result<Vec<String>, ServerError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(NoActiveTransaction::new());
            }
            let recorded = self.recorded.lock().unwrap();
            Ok(recorded
                .iter()
                .filter(|(c, _)| *c == category)
                .map(|(_, v)| v.clone())
                .collect())
        }

        fn record(
            &self,
            category: HistoryCategory,
            _scope: &ConversationId,
            value: &str,
        ) -> Result<(), ServerError> {
            self.recorded
                .lock()
                .unwrap()
                .push((category, value.to_string()));
            Ok(())
        }
    }

    fn fetches(cache: &HistoryCache<CountingSource>) -> usize {
        cache.source().fetches.load(Ordering::SeqCst)
    }

    #[test]
    fn hits_are_served_from_cache() {
        let cache = HistoryCache::new(CountingSource::default(), Duration::from_secs(60));
        let scope = ConversationId::from("chat-1");
        cache.hints(HistoryCategory::AccountFrom, &scope).unwrap();
        cache.hints(HistoryCategory::AccountFrom, &scope).unwrap();
        assert_eq!(fetches(&cache), 1);

        // Other category and other scope are separate entries.
        cache.hints(HistoryCategory::AccountTo, &scope).unwrap();
        cache
            .hints(HistoryCategory::AccountFrom, &ConversationId::from("chat-2"))
            .unwrap();
        assert_eq!(fetches(&cache), 3);
    }

    #[test]
    fn expired_entries_are_refetched() {
        let cache = HistoryCache::new(CountingSource::default(), Duration::ZERO);
        let scope = ConversationId::from("chat-1");
        cache.hints(HistoryCategory::Description, &scope).unwrap();
        cache.hints(HistoryCategory::Description, &scope).unwrap();
        assert_eq!(fetches(&cache), 2);
    }

    #[test]
    fn failures_are_returned_and_not_cached() {
        let source = CountingSource {
            fail: true,
            ..Default::default()
        };
        let cache = HistoryCache::new(source, Duration::from_secs(60));
        let scope = ConversationId::from("chat-1");
        assert!(cache.hints(HistoryCategory::Description, &scope).is_err());
        assert!(cache.hints(HistoryCategory::Description, &scope).is_err());
        assert_eq!(fetches(&cache), 2);
    }

    #[test]
    fn record_forwards_suggestable_values_and_invalidates() {
        let cache = HistoryCache::new(CountingSource::default(), Duration::from_secs(60));
        let scope = ConversationId::from("chat-1");
        assert!(cache
            .hints(HistoryCategory::AccountFrom, &scope)
            .unwrap()
            .is_empty());

        let values: BTreeMap<HistoryCategory, String> = [
            (HistoryCategory::Amount, "17.34".to_string()),
            (HistoryCategory::AccountFrom, "Assets:Wallet".to_string()),
            (HistoryCategory::Description, String::new()),
        ]
        .into_iter()
        .collect();
        cache.record(&scope, &values);

        assert_eq!(
            *cache.source().recorded.lock().unwrap(),
            vec![(HistoryCategory::AccountFrom, "Assets:Wallet".to_string())]
        );
        assert_eq!(
            cache.hints(HistoryCategory::AccountFrom, &scope).unwrap(),
            vec!["Assets:Wallet"]
        );
        assert_eq!(fetches(&cache), 2);
    }
}

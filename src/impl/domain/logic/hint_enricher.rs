use log::{error, trace};

use crate::{
    domain::repositories::hint_repository::HintRepository,
    entities::{ConversationId, Hint, HintStrategy, Step},
};

/// Adds suggestions to the prompt of a step. Never fails: if history can't be
/// read the bare prompt is returned.
pub(crate) struct HintEnricher<'a> {
    hints: &'a dyn HintRepository,
    scope: &'a ConversationId,
}

impl<'a> HintEnricher<'a> {
    pub(crate) fn new(hints: &'a dyn HintRepository, scope: &'a ConversationId) -> Self {
        Self { hints, scope }
    }

    pub(crate) fn enrich(&self, step: &Step) -> Hint {
        trace!("[{}] Enriching hint ({}).", self.scope, step.role);
        let mut hint = step.hint();
        match step.strategy() {
            HintStrategy::History(category) => match self.hints.hints(*category, self.scope) {
                Ok(suggestions) => hint.suggestions = suggestions,
                Err(e) => error!(
                    "[{}] Error occurred getting cached hint ({}): {:?}",
                    self.scope, category, e
                ),
            },
            HintStrategy::Fixed(suggestions) => hint.suggestions = suggestions.clone(),
            HintStrategy::Passthrough => {}
        }
        hint
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use fractic_server_error::ServerError;

    use super::*;
    use crate::{
        entities::{HistoryCategory, StepRole},
        errors::NoActiveTransaction,
        parsers::handle_raw,
    };

    struct FakeHints {
        fail: bool,
    }

    impl HintRepository for FakeHints {
        fn hints(
            &self,
            category: HistoryCategory,
            scope: &ConversationId,
        ) -> Result<Vec<String>, ServerError> {
            if self.fail {
                return Err(NoActiveTransaction::new());
            }
            Ok(vec![format!("{}@{}", category, scope)])
        }

        fn record(&self, _scope: &ConversationId, _values: &BTreeMap<HistoryCategory, String>) {}
    }

    fn enrich(role: StepRole, fail: bool) -> Hint {
        let hints = FakeHints { fail };
        let scope = ConversationId::from("chat-1");
        HintEnricher::new(&hints, &scope).enrich(&Step::new(role, "prompt", handle_raw))
    }

    #[test]
    fn accounts_use_direction_specific_history() {
        assert_eq!(enrich(StepRole::From, false).suggestions, vec!["account:from@chat-1"]);
        assert_eq!(enrich(StepRole::To, false).suggestions, vec!["account:to@chat-1"]);
    }

    #[test]
    fn description_uses_description_history() {
        let hint = enrich(StepRole::Description, false);
        assert_eq!(hint.prompt, "prompt");
        assert_eq!(hint.suggestions, vec!["description@chat-1"]);
    }

    #[test]
    fn date_suggests_today() {
        assert_eq!(enrich(StepRole::Date, true).suggestions, vec!["today"]);
    }

    #[test]
    fn amount_is_passed_through() {
        assert_eq!(enrich(StepRole::Amount, false), Hint::new("prompt"));
    }

    #[test]
    fn history_failure_degrades_to_bare_prompt() {
        assert_eq!(enrich(StepRole::From, true), Hint::new("prompt"));
        assert_eq!(enrich(StepRole::Description, true), Hint::new("prompt"));
    }
}

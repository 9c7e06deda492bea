use std::fmt;

use fractic_server_error::ServerError;

use super::{hint::Hint, history::HistoryCategory};

/// Parses the raw reply for a step into its canonical stored value.
pub type ValueParser = fn(&str) -> Result<String, ServerError>;

/// What a step asks the user for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepRole {
    Amount,
    From,
    To,
    Description,
    Date,
}

/// How the bare prompt of a step is enriched before it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintStrategy {
    /// Suggest previously used values of this category.
    History(HistoryCategory),
    /// Always suggest the same values.
    Fixed(Vec<String>),
    /// Show the prompt as-is.
    Passthrough,
}

impl StepRole {
    pub fn category(&self) -> HistoryCategory {
        match self {
            StepRole::Amount => HistoryCategory::Amount,
            StepRole::From => HistoryCategory::AccountFrom,
            StepRole::To => HistoryCategory::AccountTo,
            StepRole::Description => HistoryCategory::Description,
            StepRole::Date => HistoryCategory::Date,
        }
    }

    pub fn hint_strategy(&self) -> HintStrategy {
        match self {
            StepRole::Description | StepRole::From | StepRole::To => {
                HintStrategy::History(self.category())
            }
            StepRole::Date => HintStrategy::Fixed(vec!["today".to_string()]),
            StepRole::Amount => HintStrategy::Passthrough,
        }
    }
}

impl fmt::Display for StepRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepRole::Amount => "amount",
            StepRole::From => "from",
            StepRole::To => "to",
            StepRole::Description => "description",
            StepRole::Date => "date",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct Step {
    pub role: StepRole,
    pub prompt: String,
    pub(crate) parser: ValueParser,
    pub(crate) strategy: HintStrategy,
}

impl Step {
    pub fn new(role: StepRole, prompt: impl Into<String>, parser: ValueParser) -> Self {
        Self {
            role,
            prompt: prompt.into(),
            parser,
            strategy: role.hint_strategy(),
        }
    }

    pub fn parse(&self, raw: &str) -> Result<String, ServerError> {
        (self.parser)(raw)
    }

    pub fn strategy(&self) -> &HintStrategy {
        &self.strategy
    }

    /// The bare, unenriched hint of this step.
    pub fn hint(&self) -> Hint {
        Hint::new(self.prompt.clone())
    }
}

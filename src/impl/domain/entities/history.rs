use std::fmt;

/// Opaque identity of the conversation a transaction belongs to. Used to scope
/// history lookups, preferences and stored records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationId(pub String);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        ConversationId(s.to_string())
    }
}

impl From<i64> for ConversationId {
    fn from(id: i64) -> Self {
        ConversationId(id.to_string())
    }
}

/// Kind of value captured by a transaction. The first three are backed by
/// history and offered as suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HistoryCategory {
    Description,
    AccountFrom,
    AccountTo,
    Amount,
    Date,
}

impl HistoryCategory {
    pub fn key(&self) -> &'static str {
        match self {
            HistoryCategory::Description => "description",
            HistoryCategory::AccountFrom => "account:from",
            HistoryCategory::AccountTo => "account:to",
            HistoryCategory::Amount => "amount",
            HistoryCategory::Date => "date",
        }
    }

    /// Whether values of this category are kept as history and suggested.
    pub fn is_suggestable(&self) -> bool {
        matches!(
            self,
            HistoryCategory::Description | HistoryCategory::AccountFrom | HistoryCategory::AccountTo
        )
    }
}

impl fmt::Display for HistoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

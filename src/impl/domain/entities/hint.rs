/// Prompt for the current step, plus quick-reply suggestions for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hint {
    pub prompt: String,
    pub suggestions: Vec<String>,
}

impl Hint {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            suggestions: Vec::new(),
        }
    }
}

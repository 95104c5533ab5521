#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

/// State for the AI playground screen.
#[derive(Clone, Debug)]
pub struct AiState {
    /// Editable code content. Replaced wholesale by a successful generation;
    /// left untouched on failure.
    pub content: String,
    pub loading: bool,
}

impl Default for AiState {
    fn default() -> Self {
        Self { content: "// Ask the AI for some code below".to_owned(), loading: false }
    }
}

//! Prompt State

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptState {
    pub open: bool,
    pub input: String,
}

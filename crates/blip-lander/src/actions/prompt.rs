//! Prompt actions
//!
//! The prompt is the single text input of the terminal client. It takes
//! either a path to navigate to or a command (see `commands`).

#[derive(Debug, Clone)]
pub enum PromptAction {
    Open,
    Char(char),
    Backspace,
    Cancel,
    /// Submit the current input
    Submit,
}

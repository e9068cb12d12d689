//! Global actions

use ratatui::crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Quit the application
    Quit,
    /// Raw key press from the terminal
    KeyPressed(KeyEvent),
    /// Fire-and-forget metric event
    TrackMetric(String),
}

use crate::actions::{Action, NotificationAction, PromptAction};
use crate::commands::parse_command;
use crate::dispatcher::Dispatcher;
use crate::domain_models::Notification;
use crate::middleware::Middleware;
use crate::state::AppState;

/// PromptMiddleware - turns submitted prompt input into actions
///
/// Invalid input closes the prompt and explains itself in the banner.
pub struct PromptMiddleware;

impl PromptMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for PromptMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if !matches!(action, Action::Prompt(PromptAction::Submit)) {
            return true;
        }

        dispatcher.dispatch(Action::Prompt(PromptAction::Cancel));
        match parse_command(&state.prompt.input, state) {
            Ok(Action::None) => {}
            Ok(command) => dispatcher.dispatch(command),
            Err(e) => {
                log::warn!("Prompt input {:?} rejected: {}", state.prompt.input, e);
                dispatcher.dispatch(Action::Notification(NotificationAction::Show(
                    Notification::info(e.to_string()),
                )));
            }
        }

        false
    }
}

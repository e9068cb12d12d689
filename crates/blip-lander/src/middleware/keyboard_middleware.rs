//! KeyboardMiddleware - translates keyboard events into actions
//!
//! Two layers:
//! - Priority keys (Ctrl+C) always work
//! - With the prompt open every key edits the prompt; otherwise single keys
//!   map to application actions

use crate::actions::{Action, ApiRequest, GlobalAction, NotificationAction, PromptAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::view_models::{OverlayKind, RootFrameViewModel};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn prompt_key(key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Esc => PromptAction::Cancel,
            KeyCode::Enter => PromptAction::Submit,
            KeyCode::Backspace => PromptAction::Backspace,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                PromptAction::Char(c)
            }
            _ => return None,
        };
        Some(Action::Prompt(action))
    }

    fn app_key(key: KeyEvent, state: &AppState) -> Option<Action> {
        let frame = RootFrameViewModel::from_state(state);

        match key.code {
            KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
            // Everything but quitting waits while the logout overlay is up
            _ if frame.overlay == Some(OverlayKind::Logout) => None,
            KeyCode::Char(':') => Some(Action::Prompt(PromptAction::Open)),
            KeyCode::Char('x') => frame
                .notification
                .as_ref()
                .filter(|n| n.is_dismissable)
                .map(|_| Action::Notification(NotificationAction::Dismiss)),
            KeyCode::Char('a') if frame.overlay == Some(OverlayKind::Terms) => {
                Some(Action::Request(ApiRequest::AcceptTerms))
            }
            KeyCode::Char('L') if frame.authenticated => {
                Some(Action::Request(ApiRequest::Logout))
            }
            KeyCode::Char('f') => Some(Action::Global(GlobalAction::TrackMetric(
                "Clicked Give Feedback".to_string(),
            ))),
            _ => None,
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        // Ctrl+C: Emergency quit - always works
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        let mapped = if state.prompt.open {
            Self::prompt_key(*key)
        } else {
            Self::app_key(*key, state)
        };

        if let Some(mapped) = mapped {
            dispatcher.dispatch(mapped);
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Payload, WorkingAction};
    use crate::domain_models::OperationKind;
    use crate::reducers::app_reducer::reduce;
    use blip_client::User;
    use std::sync::mpsc::{self, Receiver};

    fn press(
        state: &AppState,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> (bool, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        let passes = KeyboardMiddleware::new().handle(
            &Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers))),
            state,
            &Dispatcher::new(tx),
        );
        (passes, rx)
    }

    fn logged_in_without_terms() -> AppState {
        let user = User {
            userid: "21".to_string(),
            username: "clinic@tidepool.org".to_string(),
            emails: vec![],
            profile: None,
            terms_accepted: None,
            permissions: None,
            team: vec![],
        };
        reduce(
            AppState::default(),
            &Action::Working(WorkingAction::Succeeded {
                generation: 0,
                payload: Payload::LoggedIn(user),
            }),
        )
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (passes, rx) = press(&AppState::default(), KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!passes);
        assert!(matches!(rx.try_recv(), Ok(Action::Global(GlobalAction::Quit))));
    }

    #[test]
    fn test_colon_opens_prompt() {
        let (_, rx) = press(&AppState::default(), KeyCode::Char(':'), KeyModifiers::NONE);
        assert!(matches!(rx.try_recv(), Ok(Action::Prompt(PromptAction::Open))));
    }

    #[test]
    fn test_open_prompt_captures_chars() {
        let mut state = AppState::default();
        state.prompt.open = true;
        let (_, rx) = press(&state, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(rx.try_recv(), Ok(Action::Prompt(PromptAction::Char('q')))));

        let (_, rx) = press(&state, KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(rx.try_recv(), Ok(Action::Prompt(PromptAction::Submit))));
    }

    #[test]
    fn test_accept_terms_only_with_terms_overlay() {
        let (_, rx) = press(&AppState::default(), KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(rx.try_recv().is_err());

        let state = logged_in_without_terms();
        let (_, rx) = press(&state, KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Request(ApiRequest::AcceptTerms))
        ));
    }

    #[test]
    fn test_logout_overlay_blocks_keys() {
        let state = reduce(
            logged_in_without_terms(),
            &Action::Working(WorkingAction::Begin {
                kind: OperationKind::LoggingOut,
                generation: 1,
            }),
        );
        let (_, rx) = press(&state, KeyCode::Char(':'), KeyModifiers::NONE);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dismiss_without_banner_is_noop() {
        let (_, rx) = press(&AppState::default(), KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(rx.try_recv().is_err());
    }
}

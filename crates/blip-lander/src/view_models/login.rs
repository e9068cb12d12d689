//! Login View Model

use crate::domain_models::{ApiFailure, OperationKind};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginViewModel {
    pub working: bool,
    pub notification: Option<ApiFailure>,
    /// Pre-filled from a signup or invitation link
    pub email: Option<String>,
    /// Came in through an invitation link
    pub is_invite: bool,
}

impl LoginViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let prefs = &state.root.query_prefs;
        Self {
            working: state.blip.working.in_progress(OperationKind::LoggingIn),
            notification: state
                .blip
                .working
                .notification(OperationKind::LoggingIn)
                .cloned(),
            email: prefs
                .invite_email
                .clone()
                .or_else(|| prefs.signup_email.clone()),
            is_invite: !prefs.invite_key.is_empty(),
        }
    }
}

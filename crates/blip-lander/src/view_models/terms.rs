//! Terms Overlay View Model

use crate::domain_models::{ApiFailure, OperationKind};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsViewModel {
    pub accepting: bool,
    pub notification: Option<ApiFailure>,
}

impl TermsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let working = &state.blip.working;
        Self {
            accepting: working.in_progress(OperationKind::AcceptingTerms),
            notification: working.notification(OperationKind::AcceptingTerms).cloned(),
        }
    }
}

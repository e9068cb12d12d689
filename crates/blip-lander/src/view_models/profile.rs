//! Account Profile View Model

use crate::domain_models::OperationKind;
use crate::state::AppState;
use blip_client::User;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileViewModel {
    pub user: Option<User>,
    pub fetching_user: bool,
    /// Account also carries a patient profile
    pub is_patient: bool,
}

impl ProfileViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let user = state.blip.logged_in_user().cloned();
        Self {
            is_patient: user.as_ref().is_some_and(User::is_patient),
            user,
            fetching_user: state.blip.working.in_progress(OperationKind::FetchingUser),
        }
    }
}

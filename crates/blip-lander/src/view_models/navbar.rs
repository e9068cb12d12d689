//! Navbar View Model

use crate::domain_models::{is_patient_visible_in_navbar, OperationKind};
use crate::state::AppState;
use blip_client::User;

#[derive(Debug, Clone, PartialEq)]
pub struct NavbarViewModel {
    pub user: Option<User>,
    pub fetching_user: bool,
    /// Only set on pages below `/patients/{id}/`
    pub patient: Option<User>,
    pub fetching_patient: bool,
    pub current_page: String,
}

impl NavbarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let page = &state.root.page;
        let patient = if is_patient_visible_in_navbar(page) {
            state
                .root
                .route
                .patient_id()
                .and_then(|id| state.blip.all_users.get(id))
                .or_else(|| state.blip.current_patient())
                .cloned()
        } else {
            None
        };

        Self {
            user: state.blip.logged_in_user().cloned(),
            fetching_user: state.blip.working.in_progress(OperationKind::FetchingUser),
            patient,
            fetching_patient: state
                .blip
                .working
                .in_progress(OperationKind::FetchingPatient),
            current_page: page.clone(),
        }
    }

    /// Text shown next to the account name, e.g. "Mary Smith"
    pub fn patient_label(&self) -> Option<&str> {
        self.patient.as_ref().map(|p| p.full_name())
    }
}

//! Patients List View Model
//!
//! The care-team list: patients the user belongs to, plus invitations
//! waiting for an answer.

use crate::domain_models::OperationKind;
use crate::state::AppState;
use blip_client::{Invite, User};

#[derive(Debug, Clone, PartialEq)]
pub struct PatientsViewModel {
    pub user: Option<User>,
    pub fetching_user: bool,
    pub patients: Vec<User>,
    pub fetching_patients: bool,
    pub invites: Vec<Invite>,
    pub fetching_invites: bool,
    /// Only shown when the user arrived from an invitation link
    pub show_invite_banner: bool,
}

impl PatientsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let working = &state.blip.working;
        Self {
            user: state.blip.logged_in_user().cloned(),
            fetching_user: working.in_progress(OperationKind::FetchingUser),
            patients: state
                .blip
                .member_patients()
                .into_iter()
                .cloned()
                .collect(),
            fetching_patients: working.in_progress(OperationKind::FetchingPatients),
            invites: state.blip.pending_received_invites.clone(),
            fetching_invites: working.in_progress(OperationKind::FetchingPendingReceivedInvites),
            show_invite_banner: !state.root.query_prefs.invite_key.is_empty(),
        }
    }

    /// Nothing to show yet, and nothing left to wait for
    pub fn is_empty(&self) -> bool {
        !self.fetching_patients
            && !self.fetching_invites
            && self.patients.is_empty()
            && self.invites.is_empty()
    }

    /// One line per patient, e.g. "John Doe (view, upload)"
    pub fn patient_rows(&self) -> Vec<String> {
        self.patients
            .iter()
            .map(|p| {
                let access = p
                    .permissions
                    .map(|perms| {
                        let mut parts = Vec::new();
                        if perms.root {
                            parts.push("owner");
                        }
                        if perms.view {
                            parts.push("view");
                        }
                        if perms.upload {
                            parts.push("upload");
                        }
                        parts.join(", ")
                    })
                    .unwrap_or_default();
                format!("{} [{}] ({})", p.full_name(), p.userid, access)
            })
            .collect()
    }
}

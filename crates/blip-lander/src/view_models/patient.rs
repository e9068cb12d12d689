//! Patient Profile View Model
//!
//! Shared by the patient profile and share pages; the share page only
//! renders the care-team part.

use crate::domain_models::OperationKind;
use crate::state::{AppState, WorkingStatus};
use blip_client::{Invite, User};

#[derive(Debug, Clone, PartialEq)]
pub struct PatientViewModel {
    pub user: Option<User>,
    pub fetching_user: bool,
    pub patient: Option<User>,
    pub fetching_patient: bool,
    pub pending_sent_invites: Vec<Invite>,
    pub changing_member_permissions: WorkingStatus,
    pub removing_member: WorkingStatus,
    pub inviting_member: WorkingStatus,
    pub cancelling_invite: WorkingStatus,
    pub share_only: bool,
}

impl PatientViewModel {
    pub fn from_state(state: &AppState, patient_id: &str, share_only: bool) -> Self {
        let working = &state.blip.working;
        Self {
            user: state.blip.logged_in_user().cloned(),
            fetching_user: working.in_progress(OperationKind::FetchingUser),
            patient: state.blip.all_users.get(patient_id).cloned(),
            fetching_patient: working.in_progress(OperationKind::FetchingPatient),
            pending_sent_invites: state.blip.pending_sent_invites.clone(),
            changing_member_permissions: working
                .get(OperationKind::SettingMemberPermissions)
                .clone(),
            removing_member: working.get(OperationKind::RemovingMember).clone(),
            inviting_member: working.get(OperationKind::SendingInvite).clone(),
            cancelling_invite: working.get(OperationKind::CancellingSentInvite).clone(),
            share_only,
        }
    }

    pub fn is_done_fetching_and_not_found(&self) -> bool {
        !self.fetching_patient && self.patient.is_none()
    }

    /// The viewer is looking at their own patient profile
    pub fn is_same_person(&self) -> bool {
        matches!(
            (&self.user, &self.patient),
            (Some(user), Some(patient)) if user.userid == patient.userid
        )
    }

    pub fn is_done_fetching_and_user_has_patient(&self) -> bool {
        !self.fetching_user && self.user.as_ref().is_some_and(User::is_patient)
    }

    /// Care-team changes are reserved to the owner of the account
    pub fn can_manage_team(&self) -> bool {
        self.patient
            .as_ref()
            .and_then(|p| p.permissions)
            .is_some_and(|perms| perms.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::ApiFailure;
    use blip_client::{PatientProfile, Permissions, Profile};

    fn patient_user(id: &str) -> User {
        User {
            userid: id.to_string(),
            username: format!("{}@example.com", id),
            emails: vec![],
            profile: Some(Profile {
                full_name: "Mary Smith".to_string(),
                patient: Some(PatientProfile::default()),
            }),
            terms_accepted: None,
            permissions: Some(Permissions {
                root: true,
                ..Permissions::default()
            }),
            team: vec![],
        }
    }

    #[test]
    fn test_viewer_is_the_patient() {
        let mut state = AppState::default();
        state.blip.merge_user(patient_user("11"));
        state.blip.logged_in_user_id = Some("11".to_string());

        let vm = PatientViewModel::from_state(&state, "11", false);
        assert!(vm.is_same_person());
        assert!(vm.is_done_fetching_and_user_has_patient());
        assert!(vm.can_manage_team());
        assert!(!vm.is_done_fetching_and_not_found());
    }

    #[test]
    fn test_missing_patient_after_fetch() {
        let mut state = AppState::default();
        state.blip.working.begin(OperationKind::FetchingPatient, 1);
        let vm = PatientViewModel::from_state(&state, "7", false);
        assert!(!vm.is_done_fetching_and_not_found());

        state
            .blip
            .working
            .fail(OperationKind::FetchingPatient, ApiFailure::new("not found"));
        let vm = PatientViewModel::from_state(&state, "7", false);
        assert!(vm.is_done_fetching_and_not_found());
    }

    #[test]
    fn test_care_team_statuses_are_passed_through() {
        let mut state = AppState::default();
        state.blip.working.begin(OperationKind::SendingInvite, 3);
        let vm = PatientViewModel::from_state(&state, "11", true);
        assert!(vm.inviting_member.in_progress);
        assert!(!vm.removing_member.in_progress);
        assert!(vm.share_only);
        assert_eq!(vm, PatientViewModel::from_state(&state, "11", true));
    }
}

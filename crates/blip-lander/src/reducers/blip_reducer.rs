//! Blip Reducer
//!
//! Feeds request lifecycle actions into the working-status tracker and
//! merges successful payloads into the entity collections.

use crate::actions::{Action, Payload, WorkingAction};
use crate::domain_models::OperationKind;
use crate::state::BlipState;

pub fn reduce(mut state: BlipState, action: &Action) -> BlipState {
    let Action::Working(working) = action else {
        return state;
    };

    match working {
        WorkingAction::Begin { kind, generation } => {
            state.working.begin(*kind, *generation);
        }
        WorkingAction::Succeeded { payload, .. } => {
            state.working.succeed(payload.kind());
            merge_payload(&mut state, payload);
        }
        WorkingAction::Failed { kind, error, .. } => {
            log::warn!("{} failed: {}", kind, error);
            state.working.fail(*kind, error.clone());
            if *kind == OperationKind::LoggingOut {
                // The session is gone locally whatever the server said
                state.clear_session();
            }
        }
    }

    state
}

fn merge_payload(state: &mut BlipState, payload: &Payload) {
    match payload {
        Payload::LoggedIn(user) | Payload::User(user) => {
            state.logged_in_user_id = Some(user.userid.clone());
            state.merge_user(user.clone());
        }
        Payload::LoggedOut => {
            state.clear_session();
        }
        Payload::Patient(patient) => {
            // A patient fetch is authoritative for the care team
            let mut patient = patient.clone();
            if patient.permissions.is_none() {
                patient.permissions = state
                    .all_users
                    .get(&patient.userid)
                    .and_then(|existing| existing.permissions);
            }
            state.current_patient_in_view_id = Some(patient.userid.clone());
            state.all_users.insert(patient.userid.clone(), patient);
        }
        Payload::Patients(patients) => {
            state.member_patient_ids = patients.iter().map(|p| p.userid.clone()).collect();
            for patient in patients {
                state.merge_user(patient.clone());
            }
        }
        Payload::PatientData(data) => {
            state
                .patient_data
                .insert(data.patient_id.clone(), data.clone());
        }
        Payload::PendingSentInvites(invites) => {
            state.pending_sent_invites = invites.clone();
        }
        Payload::PendingReceivedInvites(invites) => {
            state.pending_received_invites = invites.clone();
        }
        Payload::PatientUpdated(patient) => {
            state.merge_user(patient.clone());
        }
        Payload::MemberPermissionsSet {
            patient_id,
            member_id,
            permissions,
        } => {
            if let Some(member) = state
                .all_users
                .get_mut(patient_id)
                .and_then(|p| p.team.iter_mut().find(|m| &m.userid == member_id))
            {
                member.permissions = Some(*permissions);
            }
        }
        Payload::MemberRemoved {
            patient_id,
            member_id,
        } => {
            if let Some(patient) = state.all_users.get_mut(patient_id) {
                patient.team.retain(|m| &m.userid != member_id);
            }
        }
        Payload::InviteSent(invite) => {
            state.pending_sent_invites.push(invite.clone());
        }
        Payload::SentInviteCancelled { email } => {
            state.pending_sent_invites.retain(|i| &i.email != email);
        }
        Payload::TermsAccepted { accepted_at } => {
            let logged_in = state.logged_in_user_id.clone().unwrap_or_default();
            if let Some(user) = state.all_users.get_mut(&logged_in) {
                user.terms_accepted = Some(accepted_at.clone());
            }
        }
        Payload::SignupConfirmed => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{ApiFailure, OperationKind};
    use blip_client::{Invite, InviteStatus, Permissions, User};

    fn user(id: &str) -> User {
        User {
            userid: id.to_string(),
            username: format!("{}@example.com", id),
            emails: vec![],
            profile: None,
            terms_accepted: None,
            permissions: None,
            team: vec![],
        }
    }

    fn invite(email: &str) -> Invite {
        Invite {
            key: format!("key-{}", email),
            creator_id: "11".to_string(),
            email: email.to_string(),
            context: Permissions::view_only(),
            status: InviteStatus::Pending,
            creator: None,
        }
    }

    fn begin(kind: OperationKind, generation: u64) -> Action {
        Action::Working(WorkingAction::Begin { kind, generation })
    }

    fn succeeded(generation: u64, payload: Payload) -> Action {
        Action::Working(WorkingAction::Succeeded {
            generation,
            payload,
        })
    }

    #[test]
    fn test_begin_then_success_merges_user() {
        let state = reduce(BlipState::default(), &begin(OperationKind::FetchingUser, 1));
        assert!(state.working.in_progress(OperationKind::FetchingUser));

        let state = reduce(state, &succeeded(1, Payload::User(user("11"))));
        assert!(!state.working.in_progress(OperationKind::FetchingUser));
        assert!(state.working.notification(OperationKind::FetchingUser).is_none());
        assert_eq!(state.logged_in_user().map(|u| u.userid.as_str()), Some("11"));
    }

    #[test]
    fn test_failure_sets_notification_and_keeps_entities() {
        let state = reduce(BlipState::default(), &begin(OperationKind::FetchingPatient, 1));
        let state = reduce(
            state,
            &Action::Working(WorkingAction::Failed {
                kind: OperationKind::FetchingPatient,
                generation: 1,
                error: ApiFailure::new("not found"),
            }),
        );
        assert!(!state.working.in_progress(OperationKind::FetchingPatient));
        assert_eq!(
            state.working.notification(OperationKind::FetchingPatient),
            Some(&ApiFailure::new("not found"))
        );
        assert!(state.current_patient_in_view_id.is_none());
    }

    #[test]
    fn test_patient_fetch_sets_patient_in_view() {
        let mut patient = user("31");
        patient.team = vec![user("21")];
        let state = reduce(BlipState::default(), &succeeded(1, Payload::Patient(patient)));
        assert_eq!(state.current_patient_in_view_id.as_deref(), Some("31"));
        assert_eq!(state.current_patient().map(|p| p.team.len()), Some(1));
    }

    #[test]
    fn test_member_permissions_and_removal_update_team() {
        let mut patient = user("11");
        patient.team = vec![user("21"), user("31")];
        let state = reduce(BlipState::default(), &succeeded(1, Payload::Patient(patient)));

        let state = reduce(
            state,
            &succeeded(
                2,
                Payload::MemberPermissionsSet {
                    patient_id: "11".to_string(),
                    member_id: "21".to_string(),
                    permissions: Permissions::view_and_upload(),
                },
            ),
        );
        let team = &state.all_users["11"].team;
        assert_eq!(team[0].permissions, Some(Permissions::view_and_upload()));

        let state = reduce(
            state,
            &succeeded(
                3,
                Payload::MemberRemoved {
                    patient_id: "11".to_string(),
                    member_id: "31".to_string(),
                },
            ),
        );
        assert_eq!(state.all_users["11"].team.len(), 1);
    }

    #[test]
    fn test_invites_added_and_cancelled() {
        let state = reduce(
            BlipState::default(),
            &succeeded(1, Payload::PendingSentInvites(vec![invite("a@x.com")])),
        );
        let state = reduce(state, &succeeded(2, Payload::InviteSent(invite("b@x.com"))));
        assert_eq!(state.pending_sent_invites.len(), 2);

        let state = reduce(
            state,
            &succeeded(
                3,
                Payload::SentInviteCancelled {
                    email: "a@x.com".to_string(),
                },
            ),
        );
        assert_eq!(state.pending_sent_invites.len(), 1);
        assert_eq!(state.pending_sent_invites[0].email, "b@x.com");
    }

    #[test]
    fn test_terms_accepted_updates_logged_in_user() {
        let state = reduce(BlipState::default(), &succeeded(1, Payload::LoggedIn(user("21"))));
        let state = reduce(
            state,
            &succeeded(
                2,
                Payload::TermsAccepted {
                    accepted_at: "2024-05-01T10:00:00Z".to_string(),
                },
            ),
        );
        assert!(state.logged_in_user().unwrap().has_accepted_terms());
    }

    #[test]
    fn test_logout_clears_user_data() {
        let state = reduce(BlipState::default(), &succeeded(1, Payload::LoggedIn(user("11"))));
        let state = reduce(state, &succeeded(2, Payload::Patients(vec![user("31")])));
        let state = reduce(state, &succeeded(3, Payload::LoggedOut));
        assert!(state.all_users.is_empty());
        assert!(state.member_patient_ids.is_empty());
        assert!(state.logged_in_user_id.is_none());
    }

    #[test]
    fn test_failed_logout_still_clears_user_data() {
        let state = reduce(BlipState::default(), &succeeded(1, Payload::LoggedIn(user("11"))));
        let state = reduce(
            state,
            &Action::Working(WorkingAction::Failed {
                kind: OperationKind::LoggingOut,
                generation: 2,
                error: ApiFailure::new("service unavailable"),
            }),
        );
        assert!(state.all_users.is_empty());
        assert!(state.logged_in_user_id.is_none());
        assert!(state.working.notification(OperationKind::LoggingOut).is_some());
    }

    #[test]
    fn test_non_working_actions_are_ignored() {
        let state = reduce(BlipState::default(), &Action::navigate("/patients"));
        assert_eq!(state, BlipState::default());
    }
}

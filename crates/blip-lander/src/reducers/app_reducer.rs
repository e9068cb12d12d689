use crate::actions::{Action, GlobalAction, NotificationAction, WorkingAction};
use crate::reducers::{blip_reducer, prompt_reducer, root_view_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Working(working) if working.is_terminal() => {
            let kind = working.kind();
            if !state.blip.working.is_current(kind, working.generation()) {
                // A newer request of the same kind owns the tracker now
                log::debug!(
                    "Discarding stale {} completion (generation {})",
                    kind,
                    working.generation()
                );
                return state;
            }
        }
        Action::Working(WorkingAction::Begin { kind, generation })
            if state.blip.working.is_superseded(*kind, *generation) =>
        {
            log::debug!(
                "Ignoring late {} begin (generation {})",
                kind,
                generation
            );
            return state;
        }
        Action::Notification(NotificationAction::Dismiss) => {
            if let Some(source) = state.root.notification.as_ref().and_then(|n| n.source) {
                state.blip.working.dismiss(source);
            }
        }
        _ => {}
    }

    state.blip = blip_reducer::reduce(state.blip, action);
    state.root = root_view_reducer::reduce(state.root, action);
    state.prompt = prompt_reducer::reduce(state.prompt, action);

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Payload;
    use crate::domain_models::{ApiFailure, OperationKind};
    use blip_client::User;

    fn patient(id: &str) -> User {
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

    fn begin(generation: u64) -> Action {
        Action::Working(WorkingAction::Begin {
            kind: OperationKind::FetchingPatient,
            generation,
        })
    }

    #[test]
    fn test_quit_stops_the_app() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_stale_success_is_discarded() {
        let state = reduce(AppState::default(), &begin(1));
        let state = reduce(state, &begin(2));

        // Completion of the first request arrives after the second began
        let stale = Action::Working(WorkingAction::Succeeded {
            generation: 1,
            payload: Payload::Patient(patient("7")),
        });
        let after = reduce(state.clone(), &stale);
        assert_eq!(after.blip, state.blip);
        assert_eq!(after.root, state.root);
        assert!(after.blip.working.in_progress(OperationKind::FetchingPatient));

        let fresh = Action::Working(WorkingAction::Succeeded {
            generation: 2,
            payload: Payload::Patient(patient("8")),
        });
        let after = reduce(after, &fresh);
        assert_eq!(after.blip.current_patient_in_view_id.as_deref(), Some("8"));
        assert!(!after.blip.working.in_progress(OperationKind::FetchingPatient));
    }

    #[test]
    fn test_out_of_order_begins_keep_newest_completion() {
        let state = reduce(AppState::default(), &begin(5));
        // The older request's begin lands after the newer one
        let state = reduce(state, &begin(4));

        let newest = Action::Working(WorkingAction::Succeeded {
            generation: 5,
            payload: Payload::Patient(patient("8")),
        });
        let state = reduce(state, &newest);
        assert_eq!(state.blip.current_patient_in_view_id.as_deref(), Some("8"));

        let older = Action::Working(WorkingAction::Succeeded {
            generation: 4,
            payload: Payload::Patient(patient("7")),
        });
        let state = reduce(state, &older);
        assert_eq!(state.blip.current_patient_in_view_id.as_deref(), Some("8"));
    }

    #[test]
    fn test_late_logout_begin_does_not_raise_overlay() {
        let logout_begin = |generation| {
            Action::Working(WorkingAction::Begin {
                kind: OperationKind::LoggingOut,
                generation,
            })
        };
        let state = reduce(AppState::default(), &logout_begin(3));
        let state = reduce(
            state,
            &Action::Working(WorkingAction::Succeeded {
                generation: 3,
                payload: Payload::LoggedOut,
            }),
        );
        let state = reduce(state, &logout_begin(2));
        assert!(!state.root.logging_out);
    }

    #[test]
    fn test_stale_failure_raises_no_banner() {
        let state = reduce(AppState::default(), &begin(1));
        let state = reduce(state, &begin(2));
        let after = reduce(
            state,
            &Action::Working(WorkingAction::Failed {
                kind: OperationKind::FetchingPatient,
                generation: 1,
                error: ApiFailure::new("timeout"),
            }),
        );
        assert!(after.root.notification.is_none());
        assert!(after
            .blip
            .working
            .notification(OperationKind::FetchingPatient)
            .is_none());
    }

    #[test]
    fn test_dismiss_clears_banner_and_tracker_notification() {
        let state = reduce(AppState::default(), &begin(1));
        let state = reduce(
            state,
            &Action::Working(WorkingAction::Failed {
                kind: OperationKind::FetchingPatient,
                generation: 1,
                error: ApiFailure::new("timeout"),
            }),
        );
        assert!(state.root.notification.is_some());

        let state = reduce(state, &Action::Notification(NotificationAction::Dismiss));
        assert!(state.root.notification.is_none());
        assert!(state
            .blip
            .working
            .notification(OperationKind::FetchingPatient)
            .is_none());
    }

    #[test]
    fn test_changed_slices_reports_touched_state() {
        let before = AppState::default();
        let after = reduce(before.clone(), &begin(1));
        assert_eq!(after.changed_slices(&before), vec!["blip"]);
    }
}

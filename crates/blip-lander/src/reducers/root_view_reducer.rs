//! Root View Reducer
//!
//! Page location, banner and the logging-out overlay flag.

use crate::actions::{Action, NotificationAction, Payload, RouteAction, WorkingAction};
use crate::domain_models::{Notification, OperationKind};
use crate::state::RootViewState;

pub fn reduce(mut state: RootViewState, action: &Action) -> RootViewState {
    match action {
        Action::Route(RouteAction::Transition(location)) => {
            state.page = location.path.clone();
            state.route = location.route();
        }

        Action::Working(WorkingAction::Begin {
            kind: OperationKind::LoggingOut,
            ..
        }) => {
            state.logging_out = true;
        }

        Action::Working(WorkingAction::Succeeded { payload, .. }) => match payload {
            Payload::LoggedOut => {
                state.logging_out = false;
            }
            Payload::SignupConfirmed => {
                state.notification = Some(Notification::info(
                    "Thanks for signing up! Your account is confirmed, please log in.",
                ));
            }
            _ => {}
        },

        Action::Working(WorkingAction::Failed { kind, error, .. }) => {
            if *kind == OperationKind::LoggingOut {
                state.logging_out = false;
            }
            state.notification = Some(Notification::from_failure(*kind, error));
        }

        Action::Notification(NotificationAction::Show(notification)) => {
            state.notification = Some(notification.clone());
        }

        Action::Notification(NotificationAction::Dismiss) => {
            state.notification = None;
        }

        _ => {}
    }

    state
}

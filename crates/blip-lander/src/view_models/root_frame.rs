//! Root Frame View Model
//!
//! Decides what dominates the screen: an overlay, or the regular
//! navbar / banner / page / footer stack.

use super::NavbarViewModel;
use crate::domain_models::{Notification, OperationKind};
use crate::state::AppState;

/// Full-screen overlays, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Logout,
    BrowserWarning,
    Terms,
}

/// First matching overlay wins
///
/// No overlay is shown while the account is still loading, so the terms
/// overlay never flashes for a user who already accepted them.
pub fn select_overlay(
    logging_out: bool,
    browser_supported: bool,
    fetching_user: bool,
    authenticated: bool,
    terms_accepted: bool,
) -> Option<OverlayKind> {
    if logging_out {
        Some(OverlayKind::Logout)
    } else if !browser_supported {
        Some(OverlayKind::BrowserWarning)
    } else if fetching_user {
        None
    } else if authenticated && !terms_accepted {
        Some(OverlayKind::Terms)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterViewModel {
    pub feedback_label: &'static str,
    pub support_email: String,
    pub support_subject: String,
    /// e.g. "v0.9.3 beta"
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RootFrameViewModel {
    pub overlay: Option<OverlayKind>,
    pub authenticated: bool,
    /// Present only when authenticated
    pub navbar: Option<NavbarViewModel>,
    pub notification: Option<Notification>,
    pub page_title: &'static str,
    pub footer: FooterViewModel,
}

impl RootFrameViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let user = state.blip.logged_in_user();
        let authenticated = user.is_some();
        let terms_accepted = user.is_some_and(|u| u.has_accepted_terms());

        let overlay = select_overlay(
            state.root.logging_out,
            state.root.browser_supported,
            state.blip.working.in_progress(OperationKind::FetchingUser),
            authenticated,
            terms_accepted,
        );

        Self {
            overlay,
            authenticated,
            navbar: authenticated.then(|| NavbarViewModel::from_state(state)),
            notification: state.root.notification.clone(),
            page_title: state.root.route.title(),
            footer: FooterViewModel {
                feedback_label: "Send us feedback",
                support_email: state.config.support_email.clone(),
                support_subject: state.config.support_subject.clone(),
                version: state.config.version_label(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, NotificationAction, Payload, WorkingAction};
    use crate::domain_models::Notification;
    use crate::reducers::app_reducer::reduce;
    use blip_client::User;

    fn user(terms: Option<&str>) -> User {
        User {
            userid: "11".to_string(),
            username: "demo@tidepool.org".to_string(),
            emails: vec![],
            profile: None,
            terms_accepted: terms.map(str::to_string),
            permissions: None,
            team: vec![],
        }
    }

    fn logged_in(terms: Option<&str>) -> AppState {
        reduce(
            AppState::default(),
            &Action::Working(WorkingAction::Succeeded {
                generation: 0,
                payload: Payload::LoggedIn(user(terms)),
            }),
        )
    }

    #[test]
    fn test_overlay_precedence() {
        // logging out beats an unsupported terminal
        assert_eq!(
            select_overlay(true, false, true, true, false),
            Some(OverlayKind::Logout)
        );
        assert_eq!(
            select_overlay(false, false, false, true, false),
            Some(OverlayKind::BrowserWarning)
        );
        assert_eq!(select_overlay(false, true, true, true, false), None);
        assert_eq!(
            select_overlay(false, true, false, true, false),
            Some(OverlayKind::Terms)
        );
        assert_eq!(select_overlay(false, true, false, true, true), None);
        assert_eq!(select_overlay(false, true, false, false, false), None);
    }

    #[test]
    fn test_terms_overlay_for_user_without_acceptance() {
        let frame = RootFrameViewModel::from_state(&logged_in(None));
        assert_eq!(frame.overlay, Some(OverlayKind::Terms));

        let frame = RootFrameViewModel::from_state(&logged_in(Some("2024-01-01T00:00:00Z")));
        assert_eq!(frame.overlay, None);
    }

    #[test]
    fn test_logging_out_without_browser_support_shows_logout() {
        let mut state = logged_in(None);
        state.root.logging_out = true;
        state.root.browser_supported = false;
        assert_eq!(
            RootFrameViewModel::from_state(&state).overlay,
            Some(OverlayKind::Logout)
        );
    }

    #[test]
    fn test_navbar_only_when_authenticated() {
        assert!(RootFrameViewModel::from_state(&AppState::default())
            .navbar
            .is_none());
        assert!(RootFrameViewModel::from_state(&logged_in(None))
            .navbar
            .is_some());
    }

    #[test]
    fn test_footer_version_label() {
        let mut state = AppState::default();
        assert_eq!(RootFrameViewModel::from_state(&state).footer.version, None);
        state.config.version = Some("0.9.3".to_string());
        assert_eq!(
            RootFrameViewModel::from_state(&state).footer.version.as_deref(),
            Some("v0.9.3 beta")
        );
    }

    #[test]
    fn test_mapper_is_pure() {
        let state = reduce(
            logged_in(None),
            &Action::Notification(NotificationAction::Show(Notification::info("hello"))),
        );
        let first = RootFrameViewModel::from_state(&state);
        let second = RootFrameViewModel::from_state(&state);
        assert_eq!(first, second);
        assert_eq!(first.notification.map(|n| n.body), Some("hello".to_string()));
    }
}

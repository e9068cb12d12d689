//! Root view state
//!
//! Top-level UI state that does not belong in the shared slice: where the
//! user is, the preferences derived from the initial query string, the
//! banner and the overlay flags.

use crate::domain_models::{Notification, QueryPreferences, Route};

#[derive(Debug, Clone, PartialEq)]
pub struct RootViewState {
    /// Current page path
    pub page: String,
    pub route: Route,
    pub query_prefs: QueryPreferences,
    /// Most recently set banner that has not been dismissed
    pub notification: Option<Notification>,
    pub logging_out: bool,
    /// Whether the terminal can render the application
    pub browser_supported: bool,
}

impl RootViewState {
    pub fn new(query_prefs: QueryPreferences, browser_supported: bool) -> Self {
        Self {
            query_prefs,
            browser_supported,
            ..Self::default()
        }
    }
}

impl Default for RootViewState {
    fn default() -> Self {
        Self {
            page: "/".to_string(),
            route: Route::Login,
            query_prefs: QueryPreferences::default(),
            notification: None,
            logging_out: false,
            browser_supported: true,
        }
    }
}

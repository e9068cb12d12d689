//! Route actions

use crate::domain_models::Location;

#[derive(Debug, Clone)]
pub enum RouteAction {
    /// Request to navigate to a path (optionally with a query string)
    Navigate(String),
    /// The application moved to a new location; fired for the first mount too
    Transition(Location),
}

//! Actions module
//!
//! Every change to the store goes through one of these actions. Actions are
//! organized by:
//! - Intents (`Route`, `Request`, `Prompt`) that middleware turns into work
//! - Lifecycle markers (`Working`) produced by the action creators
//! - UI actions (`Notification`, `Global`)

pub mod global;
pub mod notification;
pub mod prompt;
pub mod request;
pub mod route;
pub mod working;

pub use global::GlobalAction;
pub use notification::NotificationAction;
pub use prompt::PromptAction;
pub use request::ApiRequest;
pub use route::RouteAction;
pub use working::{Payload, WorkingAction};

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Navigation requests and route transitions
    Route(RouteAction),
    /// API work to be started by the action creators (consumed by middleware)
    Request(ApiRequest),
    /// Request lifecycle: begin, succeeded, failed
    Working(WorkingAction),
    /// Notification banner
    Notification(NotificationAction),
    /// Path/command prompt
    Prompt(PromptAction),
    /// Application-wide actions
    Global(GlobalAction),

    /// No-op action
    None,
}

impl Action {
    /// Shortcut for `Action::Route(RouteAction::Navigate(..))`
    pub fn navigate(path: impl Into<String>) -> Action {
        Action::Route(RouteAction::Navigate(path.into()))
    }
}

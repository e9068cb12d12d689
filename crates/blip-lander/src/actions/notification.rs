//! Notification banner actions

use crate::domain_models::Notification;

#[derive(Debug, Clone)]
pub enum NotificationAction {
    /// Show a banner, replacing the current one
    Show(Notification),
    /// Close the current banner
    Dismiss,
}

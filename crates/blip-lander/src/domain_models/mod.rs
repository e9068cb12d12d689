//! Domain models
//!
//! Plain application types shared by actions, state and view models.

mod generation;
mod notification;
mod operation_kind;
pub mod query;
pub mod route;

pub use generation::{RequestGenerations, RequestTicket};
pub use notification::{ApiFailure, Notification, NotificationKind};
pub use operation_kind::OperationKind;
pub use query::{BgUnits, QueryPreferences};
pub use route::{is_patient_visible_in_navbar, Location, Route};

//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod blip;
mod prompt;
mod root_view;
mod working;

pub use app::AppState;
pub use blip::BlipState;
pub use prompt::PromptState;
pub use root_view::RootViewState;
pub use working::{WorkingState, WorkingStatus};

//! View models
//!
//! Pure projections of `AppState` (plus route parameters) into the flat
//! data one view renders. No I/O, no mutation.

pub mod login;
pub mod navbar;
pub mod patient;
pub mod patient_data;
pub mod patients;
pub mod profile;
pub mod root_frame;
pub mod terms;

pub use login::LoginViewModel;
pub use navbar::NavbarViewModel;
pub use patient::PatientViewModel;
pub use patient_data::PatientDataViewModel;
pub use patients::PatientsViewModel;
pub use profile::ProfileViewModel;
pub use root_frame::{FooterViewModel, OverlayKind, RootFrameViewModel};
pub use terms::TermsViewModel;

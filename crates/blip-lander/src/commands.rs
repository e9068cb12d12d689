//! Prompt commands
//!
//! Input starting with `/` is a path to navigate to. Everything else is a
//! command word followed by arguments:
//!
//! ```text
//! login <email> <password>      log in
//! logout                        log out
//! accept                        accept the terms of use
//! invite <email> [upload]       invite to the viewed patient's care team
//! cancel <email>                cancel a pending invitation
//! perm <member> view|upload     change a member's permissions
//! remove <member>               remove a member from the care team
//! name <full name>              rename the viewed patient
//! about <text>                  update the viewed patient's description
//! quit                          leave the application
//! ```
//!
//! Care-team commands act on the patient of the current page.

use crate::actions::{Action, ApiRequest, GlobalAction};
use crate::domain_models::query::is_valid_email;
use crate::state::AppState;
use blip_client::{Credentials, PatientProfile, Permissions, Profile, User};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Open a patient page first")]
    NoPatientInView,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Parse prompt input into the action it stands for
///
/// Empty input maps to `Action::None`.
pub fn parse_command(input: &str, state: &AppState) -> Result<Action, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Action::None);
    }
    if input.starts_with('/') {
        return Ok(Action::navigate(input));
    }

    let (word, rest) = input.split_once(' ').unwrap_or((input, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let request = match word {
        "quit" => return Ok(Action::Global(GlobalAction::Quit)),
        "logout" => ApiRequest::Logout,
        "accept" => ApiRequest::AcceptTerms,
        "login" => match args.as_slice() {
            [username, password] => ApiRequest::Login(Credentials {
                username: username.to_string(),
                password: password.to_string(),
            }),
            _ => return Err(CommandError::Usage("login <email> <password>")),
        },
        "invite" => {
            let (email, permissions) = match args.as_slice() {
                [email] => (*email, Permissions::view_only()),
                [email, "upload"] => (*email, Permissions::view_and_upload()),
                _ => return Err(CommandError::Usage("invite <email> [upload]")),
            };
            ApiRequest::SendInvite {
                email: valid_email(email)?,
                permissions,
            }
        }
        "cancel" => match args.as_slice() {
            [email] => ApiRequest::CancelSentInvite {
                email: valid_email(email)?,
            },
            _ => return Err(CommandError::Usage("cancel <email>")),
        },
        "perm" => {
            let (member, permissions) = match args.as_slice() {
                [member, "view"] => (*member, Permissions::view_only()),
                [member, "upload"] => (*member, Permissions::view_and_upload()),
                _ => return Err(CommandError::Usage("perm <member> view|upload")),
            };
            ApiRequest::SetMemberPermissions {
                patient_id: patient_in_view(state)?.userid.clone(),
                member_id: member.to_string(),
                permissions,
            }
        }
        "remove" => match args.as_slice() {
            [member] => ApiRequest::RemoveMember {
                patient_id: patient_in_view(state)?.userid.clone(),
                member_id: member.to_string(),
            },
            _ => return Err(CommandError::Usage("remove <member>")),
        },
        "name" if !rest.is_empty() => {
            let mut patient = patient_in_view(state)?.clone();
            patient.profile.get_or_insert_with(Profile::default).full_name = rest.to_string();
            ApiRequest::UpdatePatient(patient)
        }
        "name" => return Err(CommandError::Usage("name <full name>")),
        "about" => {
            let mut patient = patient_in_view(state)?.clone();
            let profile = patient.profile.get_or_insert_with(Profile::default);
            profile
                .patient
                .get_or_insert_with(PatientProfile::default)
                .about = Some(rest.to_string()).filter(|about| !about.is_empty());
            ApiRequest::UpdatePatient(patient)
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Action::Request(request))
}

fn valid_email(candidate: &str) -> Result<String, CommandError> {
    if is_valid_email(candidate) {
        Ok(candidate.to_string())
    } else {
        Err(CommandError::InvalidEmail(candidate.to_string()))
    }
}

/// The loaded patient of the current page
fn patient_in_view(state: &AppState) -> Result<&User, CommandError> {
    let id = state
        .root
        .route
        .patient_id()
        .ok_or(CommandError::NoPatientInView)?;
    state
        .blip
        .all_users
        .get(id)
        .ok_or(CommandError::NoPatientInView)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Route;

    fn on_patient_page(id: &str) -> AppState {
        let mut state = AppState::default();
        state.root.route = Route::PatientShare(id.to_string());
        state.blip.all_users.insert(
            id.to_string(),
            User {
                userid: id.to_string(),
                username: "mary@example.com".to_string(),
                emails: vec![],
                profile: None,
                terms_accepted: None,
                permissions: Some(Permissions {
                    root: true,
                    ..Permissions::default()
                }),
                team: vec![],
            },
        );
        state
    }

    fn request(input: &str, state: &AppState) -> ApiRequest {
        match parse_command(input, state) {
            Ok(Action::Request(request)) => request,
            other => panic!("expected request for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_path_navigates() {
        let action = parse_command("/patients/11/data?units=mmoll", &AppState::default()).unwrap();
        assert!(matches!(
            action,
            Action::Route(crate::actions::RouteAction::Navigate(path))
                if path == "/patients/11/data?units=mmoll"
        ));
    }

    #[test]
    fn test_empty_input_is_noop() {
        assert!(matches!(
            parse_command("   ", &AppState::default()),
            Ok(Action::None)
        ));
    }

    #[test]
    fn test_login() {
        assert_eq!(
            request("login demo@tidepool.org demo", &AppState::default()),
            ApiRequest::Login(Credentials {
                username: "demo@tidepool.org".to_string(),
                password: "demo".to_string(),
            })
        );
        assert_eq!(
            parse_command("login demo@tidepool.org", &AppState::default()).unwrap_err(),
            CommandError::Usage("login <email> <password>")
        );
    }

    #[test]
    fn test_invite_validates_email() {
        assert_eq!(
            request("invite nurse@example.com upload", &AppState::default()),
            ApiRequest::SendInvite {
                email: "nurse@example.com".to_string(),
                permissions: Permissions::view_and_upload(),
            }
        );
        assert_eq!(
            parse_command("invite nurse", &AppState::default()).unwrap_err(),
            CommandError::InvalidEmail("nurse".to_string())
        );
    }

    #[test]
    fn test_care_team_commands_need_patient_page() {
        assert_eq!(
            parse_command("remove 21", &AppState::default()).unwrap_err(),
            CommandError::NoPatientInView
        );

        let state = on_patient_page("11");
        assert_eq!(
            request("remove 21", &state),
            ApiRequest::RemoveMember {
                patient_id: "11".to_string(),
                member_id: "21".to_string(),
            }
        );
        assert_eq!(
            request("perm 21 upload", &state),
            ApiRequest::SetMemberPermissions {
                patient_id: "11".to_string(),
                member_id: "21".to_string(),
                permissions: Permissions::view_and_upload(),
            }
        );
    }

    #[test]
    fn test_name_updates_viewed_patient() {
        let state = on_patient_page("11");
        match request("name Mary Jane Smith", &state) {
            ApiRequest::UpdatePatient(patient) => {
                assert_eq!(patient.userid, "11");
                assert_eq!(patient.full_name(), "Mary Jane Smith");
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("frobnicate", &AppState::default()).unwrap_err(),
            CommandError::Unknown("frobnicate".to_string())
        );
    }
}

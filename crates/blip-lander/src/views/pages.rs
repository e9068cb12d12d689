//! Page bodies, one per route category

use crate::domain_models::Route;
use crate::state::AppState;
use crate::view_models::{
    LoginViewModel, PatientDataViewModel, PatientViewModel, PatientsViewModel, ProfileViewModel,
};
use ratatui::{
    layout::Rect,
    style::{Color, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(state: &AppState, title: &str, area: Rect, f: &mut Frame) {
    let lines = match &state.root.route {
        Route::Login => login(&LoginViewModel::from_state(state)),
        Route::PatientsList => patients(&PatientsViewModel::from_state(state)),
        Route::PatientProfile(id) => patient(&PatientViewModel::from_state(state, id, false)),
        Route::PatientShare(id) => patient(&PatientViewModel::from_state(state, id, true)),
        Route::PatientData(id) => patient_data(&PatientDataViewModel::from_state(state, id)),
        Route::Profile => profile(&ProfileViewModel::from_state(state)),
        Route::PatientNew => vec![
            Line::from("Set up a patient profile to start storing diabetes data."),
            Line::from("Use :name <full name> on your profile page once created."),
        ],
        Route::Signup => vec![Line::from("Sign up on the web, then log in here.")],
        Route::EmailVerification => vec![Line::from(
            "Please check your email and follow the link to verify your address.",
        )],
        Route::RequestPasswordReset | Route::ConfirmPasswordReset => vec![Line::from(
            "Password resets are handled through the link in your email.",
        )],
        Route::Unmatched => vec![
            Line::from(format!("Nothing here at {}.", state.root.page)),
            Line::from("Try :/patients"),
        ],
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn muted(text: impl Into<String>) -> Line<'static> {
    Line::from(text.into()).fg(Color::DarkGray)
}

fn login(vm: &LoginViewModel) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if vm.is_invite {
        lines.push(Line::from("You have been invited to a care team.").bold());
    }
    let email = vm.email.as_deref().unwrap_or("<email>");
    lines.push(Line::from(format!("Log in with :login {} <password>", email)));
    if vm.working {
        lines.push(muted("Logging in..."));
    }
    if let Some(err) = &vm.notification {
        lines.push(Line::from(err.to_string()).fg(Color::Red));
    }
    lines
}

fn patients(vm: &PatientsViewModel) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if vm.show_invite_banner {
        lines.push(Line::from("Welcome! Accept your invitation below.").bold());
    }
    for invite in &vm.invites {
        let from = invite
            .creator
            .as_ref()
            .map(|c| c.full_name().to_string())
            .unwrap_or_else(|| invite.creator_id.clone());
        lines.push(Line::from(format!("Invitation from {}", from)).fg(Color::Yellow));
    }
    if vm.fetching_patients {
        lines.push(muted("Loading care teams..."));
    }
    for row in vm.patient_rows() {
        lines.push(Line::from(row));
    }
    if vm.is_empty() {
        lines.push(muted("You are not part of any care team yet."));
    }
    lines
}

fn patient(vm: &PatientViewModel) -> Vec<Line<'static>> {
    if vm.is_done_fetching_and_not_found() {
        return vec![Line::from("Sorry, we could not find this patient.").fg(Color::Red)];
    }
    let Some(patient) = &vm.patient else {
        return vec![muted("Loading patient...")];
    };

    let mut lines = Vec::new();
    if !vm.share_only {
        lines.push(Line::from(patient.full_name().to_string()).bold());
        if let Some(details) = patient.profile.as_ref().and_then(|p| p.patient.as_ref()) {
            if let Some(birthday) = &details.birthday {
                lines.push(Line::from(format!("Birthday: {}", birthday)));
            }
            if let Some(diagnosed) = &details.diagnosis_date {
                lines.push(Line::from(format!("Diagnosed: {}", diagnosed)));
            }
            if let Some(about) = &details.about {
                lines.push(Line::from(about.clone()));
            }
        }
        if vm.is_same_person() {
            lines.push(muted("This is your own profile."));
        } else if let Some(user) = vm
            .user
            .as_ref()
            .filter(|_| vm.is_done_fetching_and_user_has_patient())
        {
            lines.push(muted(format!("Your own data: :/patients/{}/data", user.userid)));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from("Care team").bold());
    for member in &patient.team {
        let upload = member.permissions.is_some_and(|p| p.upload);
        lines.push(Line::from(format!(
            "  {} [{}]{}",
            member.full_name(),
            member.userid,
            if upload { " (upload)" } else { "" }
        )));
    }
    for invite in &vm.pending_sent_invites {
        lines.push(muted(format!("  {} (invited)", invite.email)));
    }

    for (status, label) in [
        (&vm.changing_member_permissions, "Changing permissions..."),
        (&vm.removing_member, "Removing member..."),
        (&vm.inviting_member, "Sending invitation..."),
        (&vm.cancelling_invite, "Cancelling invitation..."),
    ] {
        if status.in_progress {
            lines.push(muted(label));
        }
        if let Some(err) = &status.notification {
            lines.push(Line::from(err.to_string()).fg(Color::Red));
        }
    }

    if vm.can_manage_team() {
        lines.push(muted(
            ":invite <email> [upload]  :cancel <email>  :perm <member> view|upload  :remove <member>",
        ));
    }
    lines
}

fn patient_data(vm: &PatientDataViewModel) -> Vec<Line<'static>> {
    let Some(patient) = &vm.patient else {
        return if vm.fetching_patient {
            vec![muted("Loading patient...")]
        } else {
            vec![Line::from("Sorry, we could not find this patient.").fg(Color::Red)]
        };
    };

    let mut lines = vec![Line::from(format!(
        "{} - readings in {}{}",
        patient.full_name(),
        vm.bg_units.label(),
        vm.timezone_name
            .as_ref()
            .map(|tz| format!(", {}", tz))
            .unwrap_or_default()
    ))
    .bold()];

    if vm.fetching_patient_data {
        lines.push(muted("Loading data..."));
    } else if vm.rows.is_empty() {
        lines.push(muted("No data uploaded yet."));
    }
    for row in &vm.rows {
        lines.push(Line::from(format!(
            "{}  {:<6} {}",
            row.time, row.kind, row.value
        )));
    }
    lines
}

fn profile(vm: &ProfileViewModel) -> Vec<Line<'static>> {
    let Some(user) = &vm.user else {
        return vec![muted(if vm.fetching_user {
            "Loading account..."
        } else {
            "Not logged in."
        })];
    };

    let mut lines = vec![
        Line::from(user.full_name().to_string()).bold(),
        Line::from(format!("Email: {}", user.username)),
    ];
    if vm.is_patient {
        lines.push(Line::from(format!(
            "Your data: :/patients/{}/data",
            user.userid
        )));
    }
    lines
}

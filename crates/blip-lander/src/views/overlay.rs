//! Full-screen overlays

use crate::state::AppState;
use crate::view_models::{OverlayKind, TermsViewModel};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(kind: OverlayKind, state: &AppState, area: Rect, f: &mut Frame) {
    let (title, lines) = match kind {
        OverlayKind::Logout => (" Logging out ", vec![Line::from("Logging out...")]),
        OverlayKind::BrowserWarning => (
            " Unsupported terminal ",
            vec![
                Line::from("This terminal cannot display blip."),
                Line::from(""),
                Line::from("Use a terminal with TERM set to a capable emulator."),
                Line::from("Press q to quit."),
            ],
        ),
        OverlayKind::Terms => (" Terms of use ", terms_lines(&TermsViewModel::from_state(state))),
    };

    let [popup] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(9)])
        .flex(Flex::Center)
        .areas(popup);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}

fn terms_lines(vm: &TermsViewModel) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from("Before you continue, please accept the Terms of Use"),
        Line::from("and the Privacy Policy."),
        Line::from(""),
    ];
    if vm.accepting {
        lines.push(Line::from("Accepting...").italic());
    } else {
        lines.push(Line::from("Press a to accept, L to log out").bold());
    }
    if let Some(err) = &vm.notification {
        lines.push(Line::from(err.to_string()).fg(Color::Red));
    }
    lines
}

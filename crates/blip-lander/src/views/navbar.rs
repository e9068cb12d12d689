use crate::view_models::NavbarViewModel;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(vm: &NavbarViewModel, page_title: &str, area: Rect, f: &mut Frame) {
    let mut spans = vec![Span::from(" blip ").bold().fg(Color::Cyan)];

    match vm.patient_label() {
        Some(name) => spans.push(Span::from(format!("│ {} ", name)).bold()),
        None if vm.fetching_patient && vm.current_page.starts_with("/patients/") => {
            spans.push(Span::from("│ loading... ").italic())
        }
        None => {}
    }

    let account = match &vm.user {
        Some(user) => user.full_name().to_string(),
        None if vm.fetching_user => "loading...".to_string(),
        None => String::new(),
    };
    spans.push(Span::from(format!("│ {} ", account)).fg(Color::Gray));

    let block = Block::default()
        .title(format!(" {} ", page_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

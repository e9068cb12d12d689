use crate::view_models::FooterViewModel;
use ratatui::{
    layout::Rect,
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(vm: &FooterViewModel, area: Rect, f: &mut Frame) {
    let mut spans = vec![
        Span::from(format!(" {} (f): ", vm.feedback_label)).fg(Color::DarkGray),
        Span::from(format!("{} \"{}\"", vm.support_email, vm.support_subject)).underlined(),
    ];
    if let Some(version) = &vm.version {
        spans.push(Span::from(format!("  {}", version)).fg(Color::DarkGray));
    }
    spans.push(Span::from("   : go  q quit").fg(Color::DarkGray));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

use ratatui::{
    layout::Rect,
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(input: &str, area: Rect, f: &mut Frame) {
    let line = Line::from(vec![
        Span::from(":").fg(Color::Yellow).bold(),
        Span::from(input.to_string()),
        Span::from("█").fg(Color::Yellow),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

use crate::domain_models::{Notification, NotificationKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(banner: &Notification, area: Rect, f: &mut Frame) {
    let color = match banner.kind {
        NotificationKind::Error => Color::Red,
        NotificationKind::Info => Color::Green,
    };
    let title = if banner.is_dismissable {
        " x to dismiss "
    } else {
        ""
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    f.render_widget(
        Paragraph::new(banner.body.as_str())
            .style(Style::default().fg(color))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

//! Views
//!
//! Stateless rendering from view models. The root frame either shows one
//! overlay, or stacks navbar, banner, page, footer and prompt top to bottom.

use crate::state::AppState;
use crate::view_models::RootFrameViewModel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

mod footer;
mod navbar;
mod notification;
mod overlay;
mod pages;
mod prompt;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let frame = RootFrameViewModel::from_state(state);

    if let Some(kind) = frame.overlay {
        overlay::render(kind, state, area, f);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if frame.navbar.is_some() { 3 } else { 0 }),
            Constraint::Length(if frame.notification.is_some() { 3 } else { 0 }),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(if state.prompt.open { 1 } else { 0 }),
        ])
        .split(area);

    if let Some(navbar) = &frame.navbar {
        navbar::render(navbar, frame.page_title, chunks[0], f);
    }
    if let Some(banner) = &frame.notification {
        notification::render(banner, chunks[1], f);
    }
    pages::render(state, frame.page_title, chunks[2], f);
    footer::render(&frame.footer, chunks[3], f);
    if state.prompt.open {
        prompt::render(&state.prompt.input, chunks[4], f);
    }
}

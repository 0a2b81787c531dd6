//! Terminal UI rendering.

pub mod chat_panel;
pub mod sidebar;
pub mod status_bar;
pub mod theme;

use parley_core::clock::Clock;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
};

use crate::app::App;

/// Title shown in the top bar.
pub const TITLE: &str = "Realtime Chat App";

/// Main draw function for the entire UI.
pub fn draw<C: Clock>(frame: &mut Frame, app: &App<C>) {
    // Title bar, content, status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new(format!(" {TITLE}")).style(theme::brand_bar());
    frame.render_widget(title, main_chunks[0]);

    let content_area = main_chunks[1];
    match (app.shows_roster(), app.shows_conversation()) {
        (true, true) => {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(30), // Roster
                    Constraint::Percentage(70), // Conversation
                ])
                .split(content_area);
            sidebar::render(frame, content_chunks[0], app);
            chat_panel::render(frame, content_chunks[1], app);
        }
        (true, false) => sidebar::render(frame, content_area, app),
        _ => chat_panel::render(frame, content_area, app),
    }

    status_bar::render(frame, main_chunks[2], app);
}

//! Status bar rendering.

use parley_core::clock::Clock;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Key help for the current focus.
fn help_text<C: Clock>(app: &App<C>) -> &'static str {
    if app.session.is_emoji_picker_open() {
        return "←→: choose | Enter/1-9: insert | Esc: close";
    }
    match app.focus {
        PanelFocus::Search => "type to filter | ↓/Enter: list | Tab: switch panel | Esc: clear",
        PanelFocus::Roster => "↑↓/jk: navigate | Enter: open | /: search | Esc: quit",
        PanelFocus::Composer => "Enter: send | Ctrl-E: emoji | PgUp/PgDn: scroll | Esc: back",
    }
}

/// Render the status bar at the bottom of the screen.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let status_line = Line::from(vec![
        Span::styled(concat!("Parley v", env!("CARGO_PKG_VERSION")), theme::bold()),
        Span::raw(" | "),
        Span::styled(help_text(app), theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}

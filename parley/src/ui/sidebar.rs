//! Roster rendering: search box plus contact list.

use parley_core::clock::Clock;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Placeholder preview shown under every contact.
const PREVIEW: &str = "Last Message";

/// Render the roster panel.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_search(frame, chunks[0], app);
    render_contacts(frame, chunks[1], app);
}

fn render_search<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let is_focused = app.focus == PanelFocus::Search;
    let query = app.session.query();

    let line = if query.is_empty() && !is_focused {
        Line::from(Span::styled("Search contacts...", theme::dimmed()))
    } else if is_focused {
        Line::from(vec![
            Span::styled(query, theme::normal()),
            Span::styled("█", theme::normal()),
        ])
    } else {
        Line::from(Span::styled(query, theme::normal()))
    };

    let block = Block::default()
        .title("Search")
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_contacts<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let is_focused = app.focus == PanelFocus::Roster;
    let selected = app.session.selected();

    let items: Vec<ListItem> = app
        .session
        .visible_contacts()
        .into_iter()
        .enumerate()
        .map(|(idx, contact)| {
            let is_open = selected == Some(contact);
            let marker = if is_open { "● " } else { "  " };

            let lines = vec![
                Line::from(vec![
                    Span::styled(marker, theme::normal().fg(theme::PRESENCE_ONLINE)),
                    Span::styled(contact.name(), theme::bold()),
                ]),
                Line::from(Span::styled(format!("  {PREVIEW}"), theme::dimmed())),
            ];

            let style = if idx == app.roster_cursor && is_focused {
                theme::selected()
            } else if is_open {
                theme::highlighted()
            } else {
                theme::normal()
            };

            ListItem::new(lines).style(style)
        })
        .collect();

    let block = Block::default()
        .title("Chats")
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Span::styled(
            "No contacts match",
            theme::dimmed(),
        ))])
    } else {
        List::new(items)
    };

    frame.render_widget(list.block(block), area);
}

//! Conversation panel rendering (header, messages, emoji picker, input).

use parley_core::clock::Clock;
use parley_core::message::Message;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the conversation panel.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let picker_height = if app.session.is_emoji_picker_open() {
        3
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(picker_height),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_messages(frame, chunks[1], app);
    if picker_height > 0 {
        render_picker(frame, chunks[2], app);
    }
    render_input(frame, chunks[3], app);
}

/// Render the contact name and presence line.
fn render_header<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let block = Block::default().borders(Borders::BOTTOM);

    let line = match app.session.selected() {
        Some(contact) => Line::from(vec![
            Span::styled(contact.name(), theme::bold()),
            Span::raw("  "),
            Span::styled(
                app.presence_text(),
                theme::presence(app.session.is_typing()),
            ),
        ]),
        None => Line::from(Span::styled(
            "Select a contact to start chatting",
            theme::dimmed(),
        )),
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Lines for one message bubble: sender, body, timestamp.
fn message_lines<'a>(msg: &'a Message, local_name: &'a str) -> [Line<'a>; 3] {
    let local = msg.sender().is_local();
    let alignment = if local {
        Alignment::Right
    } else {
        Alignment::Left
    };

    [
        Line::from(Span::styled(
            msg.sender().display_name(local_name),
            theme::bold(),
        ))
        .alignment(alignment),
        Line::from(Span::styled(msg.content(), theme::bubble(local))).alignment(alignment),
        Line::from(Span::styled(msg.timestamp(), theme::dimmed())).alignment(alignment),
    ]
}

/// Render the message list, keeping `message_scroll` at the bottom edge.
fn render_messages<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let messages = app.session.messages();
    let end = (app.message_scroll + 1).min(messages.len());
    let visible_rows = usize::from(area.height.saturating_sub(2));

    let mut lines: Vec<Line> = Vec::new();
    for msg in &messages[..end] {
        lines.extend(message_lines(msg, app.session.local_name()));
        lines.push(Line::raw(""));
    }
    let skip = lines.len().saturating_sub(visible_rows);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::normal());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the emoji picker strip.
fn render_picker<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let mut spans = Vec::new();
    for (idx, glyph) in app.session.emoji_palette().iter().enumerate() {
        let style = if idx == app.picker_cursor {
            theme::selected()
        } else {
            theme::normal()
        };
        spans.push(Span::styled(format!(" {} {glyph} ", idx + 1), style));
    }

    let block = Block::default()
        .title("Emoji")
        .borders(Borders::ALL)
        .border_style(theme::highlighted());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Render the input box.
fn render_input<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let is_focused = app.focus == PanelFocus::Composer;
    let draft = app.session.draft();

    let input_line = if draft.is_empty() && !is_focused {
        Line::from(Span::styled("Type your message...", theme::dimmed()))
    } else if is_focused {
        Line::from(vec![
            Span::styled(draft, theme::normal()),
            Span::styled("█", theme::normal()),
        ])
    } else {
        Line::from(Span::styled(draft, theme::normal()))
    };

    let block = Block::default()
        .title("😊 Ctrl-E")
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    frame.render_widget(Paragraph::new(input_line).block(block), area);
}

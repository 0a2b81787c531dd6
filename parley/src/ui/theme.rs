//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Brand color for the title bar.
pub const BRAND: Color = Color::Rgb(37, 99, 235);

/// Presence: online indicator color.
pub const PRESENCE_ONLINE: Color = Color::Green;

/// Presence: typing indicator color.
pub const PRESENCE_TYPING: Color = Color::Yellow;

/// Bubble background for the local user's messages.
pub const BUBBLE_LOCAL: Color = Color::Rgb(219, 234, 254);

/// Bubble background for everyone else's messages.
pub const BUBBLE_REMOTE: Color = Color::Rgb(229, 231, 235);

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (timestamps, metadata).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Border style for a panel, depending on focus.
#[must_use]
pub fn border(focused: bool) -> Style {
    if focused { highlighted() } else { normal() }
}

/// Style for a message body bubble.
#[must_use]
pub fn bubble(local: bool) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(if local { BUBBLE_LOCAL } else { BUBBLE_REMOTE })
}

/// Style for the title bar.
#[must_use]
pub fn brand_bar() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(BRAND)
        .add_modifier(Modifier::BOLD)
}

/// Style for the presence line under the conversation header.
#[must_use]
pub fn presence(typing: bool) -> Style {
    let color = if typing {
        PRESENCE_TYPING
    } else {
        PRESENCE_ONLINE
    };
    Style::default().fg(color).add_modifier(Modifier::ITALIC)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

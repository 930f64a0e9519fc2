//! Semantic style builders for the dashboard theme.

use jobdash_app::StyleToken;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn column_header() -> Style {
    Style::default()
        .fg(palette::TEXT_HEADER)
        .bg(palette::HEADER_ROW_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn link() -> Style {
    Style::default()
        .fg(palette::LINK)
        .add_modifier(Modifier::UNDERLINED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Badge styles ---
pub fn badge(token: StyleToken) -> Style {
    let (bg, fg) = match token {
        StyleToken::Warning => (palette::WARNING_BG, palette::WARNING_FG),
        StyleToken::Neutral => (palette::NEUTRAL_BG, palette::NEUTRAL_FG),
        StyleToken::Success => (palette::SUCCESS_BG, palette::SUCCESS_FG),
        StyleToken::Danger => (palette::DANGER_BG, palette::DANGER_FG),
        StyleToken::Default => (palette::DEFAULT_BADGE_BG, palette::DEFAULT_BADGE_FG),
    };
    Style::default().fg(fg).bg(bg)
}

// --- Chrome item styles ---
pub fn chrome_item(active: bool) -> Style {
    if active {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::HOVER_BG)
    } else {
        text_muted()
    }
}

/// Keyboard-focused chrome item
pub fn focused_item() -> Style {
    Style::default()
        .fg(palette::TEXT_ON_ACCENT)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn primary_button(active: bool) -> Style {
    Style::default()
        .fg(palette::TEXT_ON_ACCENT)
        .bg(if active {
            palette::ACCENT_ACTIVE
        } else {
            palette::ACCENT
        })
}

// --- Row styles ---
pub fn row(selected: bool, under_cursor: bool) -> Style {
    let style = Style::default().bg(if selected {
        palette::SELECTED_ROW_BG
    } else {
        palette::PAGE_BG
    });
    if under_cursor {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

// --- Block builders ---
pub fn panel_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::PAGE_BG))
}

pub fn popup_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

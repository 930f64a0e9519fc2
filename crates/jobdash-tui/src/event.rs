//! Terminal event polling

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use jobdash_app::{InputKey, Message};
use jobdash_core::prelude::*;
use std::time::Duration;

use crate::hit_test::HitMap;

/// Poll timeout; also the tick period for toolbar highlight resets
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Mouse input: left clicks are hit-tested, the wheel moves the table cursor
fn mouse_event_to_message(mouse: MouseEvent, hit_map: &HitMap) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let message = hit_map.hit(mouse.column, mouse.row);
            trace!(
                "Click at ({}, {}) -> {:?}",
                mouse.column,
                mouse.row,
                message
            );
            message
        }
        MouseEventKind::ScrollUp => Some(Message::TableCursorUp),
        MouseEventKind::ScrollDown => Some(Message::TableCursorDown),
        _ => None,
    }
}

/// Translate one terminal event against the last rendered frame
pub fn event_to_message(event: Event, hit_map: &HitMap) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse, hit_map),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll(hit_map: &HitMap) -> Result<Option<Message>> {
    if event::poll(POLL_INTERVAL)? {
        let event = event::read()?;
        Ok(event_to_message(event, hit_map))
    } else {
        // Timeouts drive pending highlight resets
        Ok(Some(Message::Tick))
    }
}

//! Translates crossterm terminal events into game `InputEvent`s.
//!
//! Terminals differ in what they report. With keyboard enhancement
//! (kitty protocol and friends) we get proper press, repeat and release
//! events. Classic terminals only send presses, with OS key-repeat showing
//! up as more presses; there a direction key counts as held until no press
//! has arrived for `HOLD_WINDOW`.

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as TermButton, MouseEvent,
    MouseEventKind,
};

use shapestorm_core::commands::{InputEvent, Key, MouseButton};

use crate::viewport::Viewport;

/// How long a direction key stays held after its last press when the
/// terminal does not report releases.
pub const HOLD_WINDOW: Duration = Duration::from_millis(150);

const DIRECTIONS: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Escape),
        _ => None,
    }
}

fn map_button(button: TermButton) -> Option<MouseButton> {
    match button {
        TermButton::Left => Some(MouseButton::Left),
        TermButton::Right => Some(MouseButton::Right),
        TermButton::Middle => None,
    }
}

#[derive(Debug)]
pub struct InputTranslator {
    /// Held direction keys and the frame each was last pressed or repeated.
    held: HashMap<Key, u64>,
    hold_frames: u64,
    releases_reported: bool,
}

impl InputTranslator {
    pub fn new(framerate: u32, releases_reported: bool) -> Self {
        let millis = HOLD_WINDOW.as_millis() as u64;
        let hold_frames = (millis * framerate as u64).div_ceil(1000).max(1);
        Self {
            held: HashMap::new(),
            hold_frames,
            releases_reported,
        }
    }

    pub fn translate(
        &mut self,
        event: &Event,
        frame: u64,
        viewport: &Viewport,
        out: &mut Vec<InputEvent>,
    ) {
        match event {
            Event::Key(key) => self.key(key, frame, out),
            Event::Mouse(mouse) => mouse_event(mouse, viewport, out),
            _ => {}
        }
    }

    fn key(&mut self, event: &KeyEvent, frame: u64, out: &mut Vec<InputEvent>) {
        if event.kind == KeyEventKind::Press
            && event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            out.push(InputEvent::Quit);
            return;
        }
        let Some(key) = map_key(event.code) else {
            return;
        };

        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat if DIRECTIONS.contains(&key) => {
                if self.held.insert(key, frame).is_none() {
                    out.push(InputEvent::KeyDown { key });
                }
            }
            KeyEventKind::Press => out.push(InputEvent::KeyDown { key }),
            KeyEventKind::Repeat => {}
            KeyEventKind::Release => {
                if self.held.remove(&key).is_some() {
                    out.push(InputEvent::KeyUp { key });
                }
            }
        }
    }

    /// Release direction keys that have gone quiet. Call once per frame,
    /// after translating that frame's events.
    pub fn expire(&mut self, frame: u64, out: &mut Vec<InputEvent>) {
        if self.releases_reported {
            return;
        }
        for key in DIRECTIONS {
            let stale = self
                .held
                .get(&key)
                .is_some_and(|&last| frame.saturating_sub(last) > self.hold_frames);
            if stale {
                self.held.remove(&key);
                out.push(InputEvent::KeyUp { key });
            }
        }
    }
}

fn mouse_event(event: &MouseEvent, viewport: &Viewport, out: &mut Vec<InputEvent>) {
    let position = viewport.cell_to_world(event.column, event.row);
    match event.kind {
        MouseEventKind::Down(button) => {
            out.push(InputEvent::PointerMoved { position });
            if let Some(button) = map_button(button) {
                out.push(InputEvent::MouseDown { button });
            }
        }
        MouseEventKind::Up(button) => {
            if let Some(button) = map_button(button) {
                out.push(InputEvent::MouseUp { button });
            }
        }
        MouseEventKind::Drag(_) | MouseEventKind::Moved => {
            out.push(InputEvent::PointerMoved { position });
        }
        _ => {}
    }
}

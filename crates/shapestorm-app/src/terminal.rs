//! Terminal session setup and the event reader thread.

use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{cursor, terminal, ExecutableCommand};

/// Puts the terminal into game mode and restores it on drop, including
/// when the game loop returns an error.
pub struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    pub fn enter<W: Write>(out: &mut W, title: &str) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // Exists before any fallible step so an early return still restores.
        let mut guard = Self {
            keyboard_enhanced: false,
        };
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;
        out.execute(EnableMouseCapture)?;
        out.execute(terminal::SetTitle(title))?;

        // Release events are only available on terminals that support the
        // kitty keyboard protocol; elsewhere held keys time out instead.
        guard.keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
            && out
                .execute(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))
                .is_ok();
        tracing::info!(keyboard_enhanced = guard.keyboard_enhanced, "terminal ready");

        Ok(guard)
    }

    pub fn reports_key_releases(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = out.execute(DisableMouseCapture);
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Blocking event reads on a dedicated thread, so the frame loop never
/// waits on input. The thread ends when the receiver is dropped or the
/// terminal read fails.
pub fn spawn_event_reader() -> io::Result<mpsc::Receiver<Event>> {
    let (tx, rx) = mpsc::channel::<Event>();
    thread::Builder::new()
        .name("shapestorm-input".into())
        .spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "terminal event read failed");
                    break;
                }
            }
        })?;
    Ok(rx)
}

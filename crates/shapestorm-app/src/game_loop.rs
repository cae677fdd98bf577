//! Fixed-rate frame loop: drain terminal input, tick the game, draw.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::Event;

use shapestorm_core::commands::InputEvent;
use shapestorm_sim::Game;

use crate::input::InputTranslator;
use crate::render::Renderer;
use crate::viewport::Viewport;

/// Duration of one frame at `framerate` frames per second.
pub fn frame_duration(framerate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / framerate.max(1) as u64)
}

/// Run until the game stops. Returns the number of frames drawn.
pub fn run<R: Renderer>(
    game: &mut Game,
    events: &mpsc::Receiver<Event>,
    translator: &mut InputTranslator,
    viewport: &mut Viewport,
    renderer: &mut R,
) -> anyhow::Result<u64> {
    let frame_time = frame_duration(game.config().window.framerate);
    let mut next_frame_time = Instant::now();
    let mut frame: u64 = 0;
    let mut batch: Vec<InputEvent> = Vec::new();

    while game.is_running() {
        // 1. Drain terminal events
        loop {
            match events.try_recv() {
                Ok(Event::Resize(cols, rows)) => {
                    viewport.resize(cols, rows);
                    renderer.resize(cols, rows);
                }
                Ok(event) => translator.translate(&event, frame, viewport, &mut batch),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::warn!("input channel closed, stopping");
                    batch.push(InputEvent::Quit);
                    break;
                }
            }
        }
        translator.expire(frame, &mut batch);
        game.queue_events(batch.drain(..));

        // 2. Advance and draw
        let snapshot = game.tick();
        renderer.draw(&snapshot).context("failed to draw frame")?;
        frame += 1;

        // 3. Sleep until the next frame
        next_frame_time += frame_time;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_time * 2 {
            // Too far behind; drop the backlog instead of racing to catch up.
            next_frame_time = now;
        }
    }

    tracing::info!(
        frames = frame,
        highscore = game.score().highscore,
        "game loop finished"
    );
    Ok(frame)
}

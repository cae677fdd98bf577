//! Drawing `FrameSnapshot`s into the terminal.
//!
//! A frame is first composed into an in-memory `Canvas` of character
//! cells, then written out row by row. Composing is pure, so it is what
//! the tests look at.

use std::io::{self, Write};

use crossterm::style::{self, Color, Print};
use crossterm::{cursor, QueueableCommand};
use glam::Vec2;

use shapestorm_core::constants::PAUSE_BANNER;
use shapestorm_core::state::{FrameSnapshot, ShapeView};
use shapestorm_core::types::Rgba;

use crate::viewport::Viewport;

const OUTLINE: char = '#';
/// Used for shapes smaller than a cell.
const DOT: char = '•';
const PAUSE_COLOR: Rgba = Rgba::opaque(220, 30, 30);

/// Something that can present frames.
pub trait Renderer {
    fn resize(&mut self, cols: u16, rows: u16);
    fn draw(&mut self, snapshot: &FrameSnapshot) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgba,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    background: Rgba,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16, background: Rgba) -> Self {
        let blank = Cell {
            ch: ' ',
            fg: background,
        };
        Self {
            cols,
            rows,
            background,
            cells: vec![blank; cols as usize * rows as usize],
        }
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row as usize * self.cols as usize + col as usize])
    }

    /// Set one cell; anything off the canvas is clipped.
    pub fn plot(&mut self, col: i32, row: i32, ch: char, fg: Rgba) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        self.cells[row as usize * self.cols as usize + col as usize] = Cell { ch, fg };
    }

    /// Line between two points in fractional cell coordinates.
    pub fn line(&mut self, from: Vec2, to: Vec2, ch: char, fg: Rgba) {
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let p = from + delta * (i as f32 / steps as f32);
            self.plot(p.x.floor() as i32, p.y.floor() as i32, ch, fg);
        }
    }

    /// Regular-polygon outline, alpha blended toward the background.
    pub fn shape(&mut self, view: &ShapeView, viewport: &Viewport) {
        let fg = self.background.lerp(view.color, view.color.a as f32 / 255.0);
        let center = viewport.to_cell_space(view.position);
        let radius_cells = Vec2::splat(view.radius) / viewport.cell_size();

        if view.sides < 2 || (radius_cells.x < 1.0 && radius_cells.y < 1.0) {
            self.plot(center.x.floor() as i32, center.y.floor() as i32, DOT, fg);
            return;
        }

        let step = 360.0 / view.sides as f32;
        let vertex = |i: u32| {
            let dir = Vec2::from_angle((view.rotation + i as f32 * step).to_radians());
            center + dir * radius_cells
        };
        for i in 0..view.sides {
            self.line(vertex(i), vertex(i + 1), OUTLINE, fg);
        }
    }

    /// Multi-line text with its top-left corner at `(col, row)`.
    pub fn text(&mut self, col: u16, row: u16, text: &str, fg: Rgba) {
        for (dy, line) in text.lines().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                self.plot(col as i32 + dx as i32, row as i32 + dy as i32, ch, fg);
            }
        }
    }

    /// Multi-line text, each line ending `margin` cells from the right edge.
    pub fn text_right(&mut self, row: u16, margin: u16, text: &str, fg: Rgba) {
        for (dy, line) in text.lines().enumerate() {
            let width = line.chars().count() as i32;
            let col = self.cols as i32 - margin as i32 - width;
            for (dx, ch) in line.chars().enumerate() {
                self.plot(col + dx as i32, row as i32 + dy as i32, ch, fg);
            }
        }
    }

    pub fn banner(&mut self, text: &str, fg: Rgba) {
        let width = text.chars().count() as i32;
        let col = (self.cols as i32 - width) / 2;
        let row = self.rows as i32 / 2;
        for (dx, ch) in text.chars().enumerate() {
            self.plot(col + dx as i32, row, ch, fg);
        }
    }
}

/// Lay out one frame: shapes in snapshot order, then the HUD on top.
pub fn compose(snapshot: &FrameSnapshot, viewport: &Viewport) -> Canvas {
    let mut canvas = Canvas::new(viewport.cols(), viewport.rows(), snapshot.background);
    for view in &snapshot.shapes {
        canvas.shape(view, viewport);
    }

    let hud = &snapshot.hud;
    canvas.text(1, 0, &hud.score_text, hud.text_color);
    canvas.text_right(0, 1, &hud.ability_text, hud.text_color);
    if hud.paused {
        canvas.banner(PAUSE_BANNER, PAUSE_COLOR);
    }
    canvas
}

fn term_color(c: Rgba) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Queue the whole canvas, batching runs of same-coloured cells.
pub fn write_canvas<W: Write>(out: &mut W, canvas: &Canvas) -> io::Result<()> {
    out.queue(style::SetBackgroundColor(term_color(canvas.background)))?;
    for row in 0..canvas.rows {
        out.queue(cursor::MoveTo(0, row))?;
        let mut run = String::new();
        let mut run_fg = None;
        for col in 0..canvas.cols {
            let Some(cell) = canvas.get(col, row) else {
                continue;
            };
            if run_fg != Some(cell.fg) {
                if let Some(fg) = run_fg {
                    out.queue(style::SetForegroundColor(term_color(fg)))?;
                    out.queue(Print(&run))?;
                    run.clear();
                }
                run_fg = Some(cell.fg);
            }
            run.push(cell.ch);
        }
        if let Some(fg) = run_fg {
            out.queue(style::SetForegroundColor(term_color(fg)))?;
            out.queue(Print(&run))?;
        }
    }
    out.queue(style::ResetColor)?;
    out.flush()
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    viewport: Viewport,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, viewport: Viewport) -> Self {
        Self { out, viewport }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn resize(&mut self, cols: u16, rows: u16) {
        tracing::debug!(cols, rows, "terminal resized");
        self.viewport.resize(cols, rows);
    }

    fn draw(&mut self, snapshot: &FrameSnapshot) -> io::Result<()> {
        let canvas = compose(snapshot, &self.viewport);
        write_canvas(&mut self.out, &canvas)
    }
}

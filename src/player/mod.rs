//! Player — the animation loop.
//!
//! Owns the terminal and the animation state. Every tick it asks the engine
//! for a scene, has the renderer turn it into a frame, writes that frame and
//! waits for the next tick. An interrupt is the only way out.

mod guard;
mod ticker;

use std::io::{self, Write};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{cursor, queue, style, terminal};

pub use guard::TerminalGuard;
pub use ticker::{Tick, Ticker};

use crate::engine::frames::{BRAIN_FRAMES, NETWORK_FRAMES, RESEARCH_PHASES};
use crate::engine::state::{AnimationState, FrameSet, PhaseList};
use crate::engine::{Engine, Layout, Palette};
use crate::renderer::Renderer;
use crate::types::{Color, Frame, Grid, Style, TerminalContract};

/// Delay between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct Player {
    state: AnimationState,
    layout: Layout,
    palette: Palette,
    grid: Option<Grid>,
}

impl Player {
    /// Build a player laid out for a terminal `term_width` cells wide.
    pub fn new(term_width: u16) -> Result<Self> {
        let state = AnimationState::new(
            FrameSet::new(NETWORK_FRAMES.iter().copied())?,
            FrameSet::new(BRAIN_FRAMES.iter().copied())?,
            PhaseList::new(RESEARCH_PHASES.iter().copied())?,
        );
        Ok(Self {
            state,
            layout: Layout::new(term_width),
            palette: Palette::default(),
            grid: None,
        })
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Run the animation until interrupted.
    ///
    /// Takes over the terminal for the duration and gives it back on every
    /// exit path. Returns `Ok(())` once an interrupt has been received.
    pub fn play(&mut self) -> Result<()> {
        let (tx, rx) = mpsc::channel();
        ctrlc::set_handler(move || {
            let _ = tx.send(());
        })
        .context("Failed to install the interrupt handler")?;
        let ticker = Ticker::new(TICK_INTERVAL, rx);

        let mut term = TerminalGuard::acquire(io::stdout())?;
        self.run_loop(&mut *term, &ticker)
    }

    // -----------------------------------------------------------------------
    // Tick loop
    // -----------------------------------------------------------------------

    fn run_loop(&mut self, out: &mut impl Write, ticker: &Ticker) -> Result<()> {
        loop {
            let (width, height) = terminal::size()?;
            self.tick(out, TerminalContract { width, height })?;

            if ticker.wait() == Tick::Cancelled {
                return Ok(());
            }
        }
    }

    /// Draw the current state clipped to `bounds`, then advance it.
    pub fn tick(&mut self, out: &mut impl Write, bounds: TerminalContract) -> Result<()> {
        let scene = Engine::compose(&self.state, &self.layout, &self.palette);
        let grid = Renderer::rasterize(&scene, bounds);
        let frame = Renderer::next_frame(self.grid.as_ref(), &grid);
        self.grid = Some(grid);

        write_frame(out, &frame)?;
        self.state.advance();
        out.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Terminal output
// ---------------------------------------------------------------------------

pub fn write_frame(out: &mut impl Write, frame: &Frame) -> Result<()> {
    match frame {
        Frame::Full { cells } => {
            queue!(out, terminal::Clear(terminal::ClearType::All))?;
            for (y, row) in cells.iter().enumerate() {
                for (x, cell) in row.iter().enumerate() {
                    if cell.is_blank() {
                        continue;
                    }
                    let cs = to_content_style(&cell.style);
                    queue!(
                        out,
                        cursor::MoveTo(x as u16, y as u16),
                        style::PrintStyledContent(style::StyledContent::new(cs, cell.ch)),
                    )?;
                }
            }
        }
        Frame::Diff { changes } => {
            for change in changes {
                let cs = to_content_style(&change.cell.style);
                queue!(
                    out,
                    cursor::MoveTo(change.x, change.y),
                    style::PrintStyledContent(style::StyledContent::new(cs, change.cell.ch)),
                )?;
            }
        }
    }
    Ok(())
}

/// Print the farewell line. Starts on a fresh line so it does not share one
/// with the echoed `^C`.
pub fn announce_stop(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nAnimation stopped.")?;
    out.flush()
}

// ---------------------------------------------------------------------------
// Style conversion
// ---------------------------------------------------------------------------

pub fn to_content_style(s: &Style) -> style::ContentStyle {
    let mut cs = style::ContentStyle::default();
    if let Some(fg) = s.fg {
        cs.foreground_color = Some(to_ct_color(fg));
    }
    cs
}

pub fn to_ct_color(c: Color) -> style::Color {
    match c {
        Color::Green => style::Color::Green,
        Color::Cyan => style::Color::Cyan,
        Color::Yellow => style::Color::Yellow,
    }
}

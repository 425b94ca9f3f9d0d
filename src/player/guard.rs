use std::io::Write;
use std::ops::{Deref, DerefMut};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, terminal};

/// Exclusive claim on the terminal display, holding the writer it draws to.
///
/// While alive the alternate screen is active and the cursor hidden. Dropping
/// the guard restores both, whether the loop returned, failed, or panicked.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    pub fn acquire(mut out: W) -> Result<Self> {
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )
        .context("Failed to take over the terminal")?;
        Ok(TerminalGuard { out })
    }
}

impl<W: Write> Deref for TerminalGuard<W> {
    type Target = W;

    fn deref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> DerefMut for TerminalGuard<W> {
    fn deref_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
    }
}

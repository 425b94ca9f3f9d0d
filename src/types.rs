//! Shared boundary types for the research animation.
//!
//! This module defines the two key data contracts:
//! - Engine → Renderer: `ResolvedScene` containing `DrawOp`s
//! - Renderer → Player: `Frame`s built from a clipped `Cell` grid

// ---------------------------------------------------------------------------
// Shared style primitives
// ---------------------------------------------------------------------------

/// Foreground colors used by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Cyan,
    Yellow,
}

/// Cell style. The background is always the terminal's default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
}

impl Style {
    pub fn fg(color: Color) -> Self {
        Style { fg: Some(color) }
    }

    pub fn is_default(&self) -> bool {
        self.fg.is_none()
    }
}

// ---------------------------------------------------------------------------
// Engine → Renderer boundary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub x: u16,
    pub y: u16,
    pub ch: char,
    pub style: Style,
}

/// Draw operations for one tick, in paint order. Later ops win.
#[derive(Debug, Clone, Default)]
pub struct ResolvedScene {
    pub ops: Vec<DrawOp>,
}

// ---------------------------------------------------------------------------
// Renderer → Player boundary
// ---------------------------------------------------------------------------

/// Size of the drawable surface, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalContract {
    pub width: u16,
    pub height: u16,
}

impl TerminalContract {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        self.ch == ' ' && self.style.is_default()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellChange {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

pub type Grid = Vec<Vec<Cell>>;

#[derive(Debug, Clone)]
pub enum Frame {
    Full { cells: Grid },
    Diff { changes: Vec<CellChange> },
}

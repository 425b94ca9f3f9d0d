//! Scene objects and their resolve implementations.
//!
//! Each object lives in its own module with its struct definition and
//! `Resolve` implementation side by side.

mod glyph;
mod label;
mod progress_bar;

pub use glyph::Glyph;
pub use label::Label;
pub use progress_bar::{ProgressBar, bar_text, usable_width};

use crate::types::{DrawOp, Style};

/// Screen position in cells. Signed so a layout computed for a narrow
/// terminal can point off the left edge; such draws are never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

#[derive(Debug, Clone)]
pub enum SceneObject {
    Glyph(Glyph),
    ProgressBar(ProgressBar),
    Label(Label),
}

/// Resolve an object into concrete `DrawOp`s.
pub trait Resolve {
    fn resolve(&self, ops: &mut Vec<DrawOp>);
}

impl Resolve for SceneObject {
    fn resolve(&self, ops: &mut Vec<DrawOp>) {
        match self {
            SceneObject::Glyph(o) => o.resolve(ops),
            SceneObject::ProgressBar(o) => o.resolve(ops),
            SceneObject::Label(o) => o.resolve(ops),
        }
    }
}

/// Emit one op per char of `text`, left to right from `pos`.
///
/// A run starting above or left of the screen is dropped whole.
fn push_text(ops: &mut Vec<DrawOp>, pos: Position, text: &str, style: &Style) {
    let (Ok(x0), Ok(y)) = (u16::try_from(pos.x), u16::try_from(pos.y)) else {
        return;
    };
    for (i, ch) in text.chars().enumerate() {
        let Some(x) = u16::try_from(i).ok().and_then(|i| x0.checked_add(i)) else {
            break;
        };
        ops.push(DrawOp {
            x,
            y,
            ch,
            style: style.clone(),
        });
    }
}

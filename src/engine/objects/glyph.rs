use crate::types::{DrawOp, Style};

use super::{Position, Resolve, push_text};

/// A multi-line text block. Line `i` is drawn at `origin.y + i`, starting
/// at `origin.x`. Whitespace is drawn like any other char.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub frame: String,
    pub origin: Position,
    pub style: Style,
}

impl Resolve for Glyph {
    fn resolve(&self, ops: &mut Vec<DrawOp>) {
        for (i, line) in self.frame.split('\n').enumerate() {
            let pos = Position::new(self.origin.x, self.origin.y + i as i32);
            push_text(ops, pos, line, &self.style);
        }
    }
}

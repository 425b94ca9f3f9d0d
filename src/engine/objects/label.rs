use crate::types::{DrawOp, Style};

use super::{Position, Resolve, push_text};

/// A single line of text.
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub position: Position,
    pub style: Style,
}

impl Resolve for Label {
    fn resolve(&self, ops: &mut Vec<DrawOp>) {
        push_text(ops, self.position, &self.text, &self.style);
    }
}

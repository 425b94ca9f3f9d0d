use crate::types::{DrawOp, Style};

use super::{Label, Position, Resolve};

/// Cells of the panel taken up by the label and brackets.
const BAR_MARGIN: i32 = 20;
/// Column where the label starts.
const LABEL_COLUMN: i32 = 2;
/// Column where the bracketed bar starts. Overwrites the label's trailing space.
const BAR_COLUMN: i32 = 12;

const FILLED: char = '█';
const EMPTY: char = '░';

/// A labelled horizontal bar: `Track <name>: [████░░░░]`.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    pub track: String,
    pub row: i32,
    pub panel_width: i32,
    pub fill_ratio: f64,
    pub label_style: Style,
    pub bar_style: Style,
}

/// Number of bar cells between the brackets for a panel of this width.
pub fn usable_width(panel_width: i32) -> usize {
    (panel_width - BAR_MARGIN).max(0) as usize
}

/// The bracketed bar for `fill_ratio` of `panel_width`.
pub fn bar_text(panel_width: i32, fill_ratio: f64) -> String {
    let width = usable_width(panel_width);
    let filled = ((width as f64 * fill_ratio).floor().max(0.0) as usize).min(width);

    let mut bar = String::with_capacity((width + 2) * FILLED.len_utf8());
    bar.push('[');
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, width - filled));
    bar.push(']');
    bar
}

impl ProgressBar {
    fn parts(&self) -> [Label; 2] {
        [
            Label {
                text: format!("Track {}: ", self.track),
                position: Position::new(LABEL_COLUMN, self.row),
                style: self.label_style.clone(),
            },
            Label {
                text: bar_text(self.panel_width, self.fill_ratio),
                position: Position::new(BAR_COLUMN, self.row),
                style: self.bar_style.clone(),
            },
        ]
    }
}

impl Resolve for ProgressBar {
    fn resolve(&self, ops: &mut Vec<DrawOp>) {
        for part in self.parts() {
            part.resolve(ops);
        }
    }
}

//! Engine — the scene composer.
//!
//! Turns the current `AnimationState` into a `ResolvedScene` (concrete draw
//! instructions) for one tick.
//!
//! The engine understands layout, colors and what the scene shows. It never
//! deals with terminals, ANSI codes, or grids.

pub mod frames;
pub mod objects;
pub mod state;

use crate::types::{Color, ResolvedScene, Style};
use objects::{Glyph, Label, Position, ProgressBar, Resolve, SceneObject};
use state::AnimationState;

/// Track "Two" always runs at this fraction of track "One".
pub const SECOND_TRACK_RATIO: f64 = 0.8;

/// Colors for each part of the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub network: Style,
    pub brain: Style,
    pub track_label: Style,
    pub track_bar: Style,
    pub status: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            network: Style::fg(Color::Green),
            brain: Style::fg(Color::Cyan),
            track_label: Style::fg(Color::Cyan),
            track_bar: Style::fg(Color::Green),
            status: Style::fg(Color::Yellow),
        }
    }
}

/// Fixed screen geometry, computed once from the startup terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub network_origin: Position,
    pub brain_origin: Position,
    pub panel_width: i32,
    pub track_one_row: i32,
    pub track_two_row: i32,
    pub status_row: i32,
}

impl Layout {
    pub fn new(term_width: u16) -> Self {
        let width = i32::from(term_width);
        Layout {
            network_origin: Position::new(2, 2),
            brain_origin: Position::new(width - 20, 2),
            panel_width: width - 4,
            track_one_row: 15,
            track_two_row: 16,
            status_row: 18,
        }
    }
}

pub struct Engine;

impl Engine {
    /// Compose the scene for the current state. Objects are listed in paint
    /// order: network, brain, both tracks, status line.
    pub fn compose(state: &AnimationState, layout: &Layout, palette: &Palette) -> ResolvedScene {
        let mut ops = Vec::new();

        for obj in Self::objects(state, layout, palette) {
            obj.resolve(&mut ops);
        }

        ResolvedScene { ops }
    }

    fn objects(state: &AnimationState, layout: &Layout, palette: &Palette) -> Vec<SceneObject> {
        let progress = state.progress();

        vec![
            SceneObject::Glyph(Glyph {
                frame: state.network.current().to_string(),
                origin: layout.network_origin,
                style: palette.network.clone(),
            }),
            SceneObject::Glyph(Glyph {
                frame: state.brain.current().to_string(),
                origin: layout.brain_origin,
                style: palette.brain.clone(),
            }),
            SceneObject::ProgressBar(ProgressBar {
                track: "One".into(),
                row: layout.track_one_row,
                panel_width: layout.panel_width,
                fill_ratio: progress,
                label_style: palette.track_label.clone(),
                bar_style: palette.track_bar.clone(),
            }),
            SceneObject::ProgressBar(ProgressBar {
                track: "Two".into(),
                row: layout.track_two_row,
                panel_width: layout.panel_width,
                fill_ratio: progress * SECOND_TRACK_RATIO,
                label_style: palette.track_label.clone(),
                bar_style: palette.track_bar.clone(),
            }),
            SceneObject::Label(Label {
                text: format!("Current Phase: {}", state.phase()),
                position: Position::new(2, layout.status_row),
                style: palette.status.clone(),
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::frames::{BRAIN_FRAMES, NETWORK_FRAMES, RESEARCH_PHASES};
    use super::state::{FrameSet, PhaseList};
    use crate::renderer::Renderer;
    use crate::types::TerminalContract;

    fn default_state() -> AnimationState {
        AnimationState::new(
            FrameSet::new(NETWORK_FRAMES.iter().copied()).unwrap(),
            FrameSet::new(BRAIN_FRAMES.iter().copied()).unwrap(),
            PhaseList::new(RESEARCH_PHASES.iter().copied()).unwrap(),
        )
    }

    fn row_text(scene: &ResolvedScene, y: u16) -> String {
        let mut cells: Vec<_> = scene.ops.iter().filter(|op| op.y == y).collect();
        cells.sort_by_key(|op| op.x);
        let mut out = String::new();
        let mut last_x = None;
        for op in cells {
            if last_x == Some(op.x) {
                out.pop();
            }
            out.push(op.ch);
            last_x = Some(op.x);
        }
        out
    }

    fn filled(text: &str) -> usize {
        text.chars().filter(|&c| c == '█').count()
    }

    #[test]
    fn layout_follows_startup_width() {
        let layout = Layout::new(100);
        assert_eq!(layout.network_origin, Position::new(2, 2));
        assert_eq!(layout.brain_origin, Position::new(80, 2));
        assert_eq!(layout.panel_width, 96);
    }

    #[test]
    fn status_line_names_current_phase() {
        let scene = Engine::compose(&default_state(), &Layout::new(80), &Palette::default());
        assert_eq!(row_text(&scene, 18), "Current Phase: Initializing research agent...");
        assert!(scene.ops.iter().filter(|op| op.y == 18).all(|op| op.x >= 2));
    }

    #[test]
    fn track_two_runs_at_eight_tenths_of_track_one() {
        let mut state = default_state();
        let layout = Layout::new(124);
        for _ in 0..50 {
            state.advance();
        }
        let scene = Engine::compose(&state, &layout, &Palette::default());
        // usable width 100, progress 0.5
        assert_eq!(filled(&row_text(&scene, 15)), 50);
        assert_eq!(filled(&row_text(&scene, 16)), 40);
    }

    #[test]
    fn track_rows_carry_labels() {
        let scene = Engine::compose(&default_state(), &Layout::new(44), &Palette::default());
        assert!(row_text(&scene, 15).starts_with("Track One:["));
        assert!(row_text(&scene, 16).starts_with("Track Two:["));
    }

    #[test]
    fn glyphs_use_their_palette_colors() {
        let palette = Palette::default();
        let scene = Engine::compose(&default_state(), &Layout::new(80), &palette);
        let lattice = scene.ops.iter().find(|op| op.ch == '◉').unwrap();
        assert_eq!(lattice.style, palette.network);
        let brain = scene.ops.iter().find(|op| op.ch == '╭').unwrap();
        assert_eq!(brain.style, palette.brain);
        assert_eq!(brain.y, 3);
        assert_eq!(brain.x, 60 + 4);
    }

    #[test]
    fn narrow_terminal_drops_offscreen_brain_cells() {
        let palette = Palette::default();
        for width in [10, 15, 19] {
            let scene = Engine::compose(&default_state(), &Layout::new(width), &palette);
            // brain rows hold nothing but the network lattice
            assert!(
                scene.ops.iter().filter(|op| (2..=9).contains(&op.y)).all(|op| op.style == palette.network),
                "width {width}"
            );
            assert!(!scene.ops.iter().any(|op| op.ch == '╭'));
            assert_eq!(row_text(&scene, 18), "Current Phase: Initializing research agent...");
        }
    }

    #[test]
    fn narrow_terminal_keeps_the_lattice_intact() {
        let mut state = default_state();
        let bounds = TerminalContract { width: 15, height: 24 };
        let wide = Renderer::rasterize(
            &Engine::compose(&state, &Layout::new(80), &Palette::default()),
            bounds,
        );
        let narrow = Renderer::rasterize(
            &Engine::compose(&state, &Layout::new(15), &Palette::default()),
            bounds,
        );
        assert_eq!(wide[3], narrow[3]);
        assert!(narrow[3].iter().any(|cell| cell.ch == '◉'));

        state.advance();
        let narrow = Renderer::rasterize(
            &Engine::compose(&state, &Layout::new(15), &Palette::default()),
            bounds,
        );
        assert!(narrow[3].iter().any(|cell| cell.ch == '○'));
    }
}

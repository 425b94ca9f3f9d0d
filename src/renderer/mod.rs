//! Renderer — the deterministic rasterizer.
//!
//! Takes a `ResolvedScene` (from the engine) and produces the `Frame` the
//! player writes to the terminal.
//!
//! The renderer is pure and stateless. Given the same input, it always
//! produces the same output. It knows nothing about time, animation,
//! or what the scene means.

use crate::types::{Cell, CellChange, Frame, Grid, ResolvedScene, TerminalContract};

pub struct Renderer;

impl Renderer {
    /// Rasterize a resolved scene onto a blank grid the size of `bounds`.
    ///
    /// Ops are applied in order, so later ops paint over earlier ones. Ops
    /// that fall outside `bounds` are skipped one by one; the rest of the
    /// scene still lands.
    pub fn rasterize(scene: &ResolvedScene, bounds: TerminalContract) -> Grid {
        let w = bounds.width as usize;
        let h = bounds.height as usize;
        let mut grid = vec![vec![Cell::default(); w]; h];

        for op in &scene.ops {
            if bounds.contains(op.x, op.y) {
                grid[op.y as usize][op.x as usize] = Cell {
                    ch: op.ch,
                    style: op.style.clone(),
                };
            }
        }

        grid
    }

    /// Build the frame that turns `prev` into `next`.
    ///
    /// The first frame, and any frame after the terminal changed size, is a
    /// full frame. Otherwise only the changed cells are sent.
    pub fn next_frame(prev: Option<&Grid>, next: &Grid) -> Frame {
        match prev {
            Some(prev) if same_size(prev, next) => Frame::Diff {
                changes: Self::diff(prev, next),
            },
            _ => Frame::Full {
                cells: next.clone(),
            },
        }
    }

    /// Compute a cell-level diff between two grids of the same size.
    fn diff(prev: &[Vec<Cell>], next: &[Vec<Cell>]) -> Vec<CellChange> {
        let mut changes = Vec::new();
        for (y, (prev_row, next_row)) in prev.iter().zip(next.iter()).enumerate() {
            for (x, (prev_cell, next_cell)) in prev_row.iter().zip(next_row.iter()).enumerate() {
                if prev_cell != next_cell {
                    changes.push(CellChange {
                        x: x as u16,
                        y: y as u16,
                        cell: next_cell.clone(),
                    });
                }
            }
        }
        changes
    }
}

fn same_size(a: &Grid, b: &Grid) -> bool {
    a.len() == b.len() && a.first().map(Vec::len) == b.first().map(Vec::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DrawOp, Style};

    fn op(x: u16, y: u16, ch: char) -> DrawOp {
        DrawOp {
            x,
            y,
            ch,
            style: Style::default(),
        }
    }

    fn bounds(width: u16, height: u16) -> TerminalContract {
        TerminalContract { width, height }
    }

    #[test]
    fn out_of_bounds_ops_do_not_block_later_ones() {
        let scene = ResolvedScene {
            ops: vec![op(0, 30, 'x'), op(50, 0, 'y'), op(1, 1, 'z')],
        };
        let grid = Renderer::rasterize(&scene, bounds(10, 5));
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0].len(), 10);
        assert_eq!(grid[1][1].ch, 'z');
        let drawn = grid.iter().flatten().filter(|c| !c.is_blank()).count();
        assert_eq!(drawn, 1);
    }

    #[test]
    fn later_ops_paint_over_earlier_ones() {
        let scene = ResolvedScene {
            ops: vec![op(2, 0, ' '), op(2, 0, '[')],
        };
        let grid = Renderer::rasterize(&scene, bounds(4, 1));
        assert_eq!(grid[0][2].ch, '[');
    }

    #[test]
    fn first_frame_is_full() {
        let grid = Renderer::rasterize(&ResolvedScene::default(), bounds(3, 2));
        assert!(matches!(Renderer::next_frame(None, &grid), Frame::Full { .. }));
    }

    #[test]
    fn unchanged_scene_yields_empty_diff() {
        let scene = ResolvedScene {
            ops: vec![op(0, 0, 'a')],
        };
        let a = Renderer::rasterize(&scene, bounds(3, 2));
        let b = Renderer::rasterize(&scene, bounds(3, 2));
        match Renderer::next_frame(Some(&a), &b) {
            Frame::Diff { changes } => assert!(changes.is_empty()),
            Frame::Full { .. } => panic!("expected a diff"),
        }
    }

    #[test]
    fn diff_carries_changed_and_cleared_cells() {
        let a = Renderer::rasterize(&ResolvedScene { ops: vec![op(0, 0, 'a')] }, bounds(3, 2));
        let b = Renderer::rasterize(&ResolvedScene { ops: vec![op(2, 1, 'b')] }, bounds(3, 2));
        let Frame::Diff { changes } = Renderer::next_frame(Some(&a), &b) else {
            panic!("expected a diff");
        };
        assert_eq!(changes.len(), 2);
        assert_eq!((changes[0].x, changes[0].y, changes[0].cell.ch), (0, 0, ' '));
        assert_eq!((changes[1].x, changes[1].y, changes[1].cell.ch), (2, 1, 'b'));
    }

    #[test]
    fn resize_forces_full_frame() {
        let a = Renderer::rasterize(&ResolvedScene::default(), bounds(3, 2));
        let b = Renderer::rasterize(&ResolvedScene::default(), bounds(2, 2));
        assert!(matches!(Renderer::next_frame(Some(&a), &b), Frame::Full { .. }));
    }
}

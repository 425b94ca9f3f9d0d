//! Mutable animation state advanced once per tick.

use anyhow::{Result, ensure};

/// Progress added on every tick. A bar fills in 100 ticks.
pub const PROGRESS_STEP: f64 = 0.01;

/// Cyclic sequence of pre-rendered text frames for one animated glyph.
#[derive(Debug, Clone)]
pub struct FrameSet {
    frames: Vec<String>,
    index: usize,
}

impl FrameSet {
    pub fn new<S: Into<String>>(frames: impl IntoIterator<Item = S>) -> Result<Self> {
        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        ensure!(!frames.is_empty(), "a frame set needs at least one frame");
        Ok(FrameSet { frames, index: 0 })
    }

    pub fn current(&self) -> &str {
        &self.frames[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.frames.len();
    }
}

/// Cyclic list of status labels.
#[derive(Debug, Clone)]
pub struct PhaseList {
    labels: Vec<String>,
}

impl PhaseList {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        ensure!(!labels.is_empty(), "a phase list needs at least one label");
        Ok(PhaseList { labels })
    }

    pub fn label(&self, index: usize) -> &str {
        &self.labels[index % self.labels.len()]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Everything that changes from one tick to the next.
///
/// `progress` stays in `[0, 1)`: reaching 1.0 resets it and moves on to the
/// next phase.
#[derive(Debug, Clone)]
pub struct AnimationState {
    pub network: FrameSet,
    pub brain: FrameSet,
    pub phases: PhaseList,
    phase_index: usize,
    progress: f64,
    ticks: u64,
}

impl AnimationState {
    pub fn new(network: FrameSet, brain: FrameSet, phases: PhaseList) -> Self {
        AnimationState {
            network,
            brain,
            phases,
            phase_index: 0,
            progress: 0.0,
            ticks: 0,
        }
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn phase(&self) -> &str {
        self.phases.label(self.phase_index)
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply one tick: both glyphs step to their next frame and the progress
    /// counter moves by `PROGRESS_STEP`.
    pub fn advance(&mut self) {
        self.network.advance();
        self.brain.advance();

        self.progress += PROGRESS_STEP;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.phase_index = (self.phase_index + 1) % self.phases.len();
        }
        self.ticks += 1;
    }
}

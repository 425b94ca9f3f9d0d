//! Pre-rendered glyph frames and the default phase labels.
//!
//! Every frame starts with a newline, so its first row is blank and the art
//! begins one row below the glyph origin.

/// Network lattice, drawn at the left of the screen.
pub const NETWORK_FRAMES: &[&str] = &[
    "
     ◉────◉────◉
     │╲   │   ╱│
     │ ╲  │  ╱ │
     │  ╲ │ ╱  │
     │   ╲│╱   │
     ◉────◉────◉
     │   ╱│╲   │
     │  ╱ │ ╲  │
     │ ╱  │  ╲ │
     │╱   │   ╲│
     ◉────◉────◉
    ",
    "
     ○────○────○
     │╲   │   ╱│
     │ ╲  │  ╱ │
     │  ╲ │ ╱  │
     │   ╲│╱   │
     ◉────◉────◉
     │   ╱│╲   │
     │  ╱ │  ╲ │
     │ ╱  │   ╲│
     │╱   │    ╲
     ○────○────○
    ",
];

/// Brain box, drawn near the right edge.
pub const BRAIN_FRAMES: &[&str] = &[
    "
    ╭────────────╮
    │  ▗▄▄▄▄▄▄▟  │
    │ ▗▛▀▀▜▛▀▀▜  │
    │ ▐▄▄▌▐▄▄▌   │
    │  ▝▀▀▀▀▀▘   │
    ╰────────────╯
    ",
    "
    ╭────────────╮
    │  ▗▄▄▄▄▄▄▟  │
    │ ▗▛▀▀▜▛▀▀▜  │
    │ ▐▀▀▌▐▀▀▌   │
    │  ▝▄▄▄▄▄▘   │
    ╰────────────╯
    ",
];

pub const RESEARCH_PHASES: &[&str] = &[
    "Initializing research agent...",
    "Loading knowledge base...",
    "Analyzing research topic...",
    "Generating search queries...",
    "Processing web research...",
    "Synthesizing information...",
    "Generating debate perspectives...",
    "Evaluating sources...",
    "Cross-referencing data...",
    "Formulating insights...",
];

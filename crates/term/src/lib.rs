//! Terminal board rendering for the bowling scorer.
//!
//! Rendering is split in two steps:
//! - [`RenderGrid`] composites region drawing functions into text rows through
//!   a [`LineSink`] (pure, testable)
//! - [`TerminalRenderer`] flushes finished rows to a real terminal
//!
//! [`BoardView`] holds the bowling-specific regions (borders, pin deck, lane,
//! scoreboard).

pub mod board_view;
pub mod grid;
pub mod renderer;
pub mod sink;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use board_view::BoardView;
pub use grid::{GridError, Rect, RegionFn, RegionId, RenderGrid};
pub use renderer::{encode_into, TerminalRenderer};
pub use sink::{LineBuffer, LineSink};

//! TUI Bowling (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_bowling::{core,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_bowling_core as core;
pub use tui_bowling_term as term;
pub use tui_bowling_types as types;

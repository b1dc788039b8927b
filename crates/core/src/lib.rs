//! Core scoring engine - pure, deterministic, and testable
//!
//! This crate holds the bowling rules: frame validation, strike and spare
//! detection, bonus lookahead and the maximum-score projection. It has no
//! UI or I/O dependencies.
//!
//! # Module Structure
//!
//! - [`frame`]: one frame's rolls, validated with copy-validate-commit
//! - [`game`]: ten frames, the fill cursor, scoring and projection
//! - [`snapshot`]: a serializable summary of a game
//! - [`error`]: the [`BowlingError`] failure type
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::Game;
//!
//! let mut game = Game::new();
//! game.set_next_frame(&[10]).unwrap();
//! game.set_next_frame(&[10]).unwrap();
//! game.set_next_frame(&[5, 2]).unwrap();
//!
//! assert_eq!(game.calculate_frame(0, false).unwrap(), Some(25));
//! assert_eq!(game.current_score(), 49);
//! assert_eq!(game.max_possible_score(), 259);
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod snapshot;

pub use tui_bowling_types as types;

pub use error::{BowlingError, Result};
pub use frame::Frame;
pub use game::Game;
pub use snapshot::{FrameSnapshot, GameSnapshot};

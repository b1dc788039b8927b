//! Error type for the scoring engine.
//!
//! Every mutation validates a full candidate before committing it, so any of
//! these errors leaves the frame or game exactly as it was.

use thiserror::Error;

/// Failures raised while building or scoring a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BowlingError {
    /// A roll outside 0-10.
    #[error("invalid roll value {value}: must be between 0 and 10")]
    InvalidRollValue { value: u8 },

    /// A roll position outside the frame, or one that would leave a gap.
    #[error("invalid roll position {position} for a frame of {max_rolls} rolls")]
    InvalidPosition { position: usize, max_rolls: usize },

    /// A frame index outside 0-9.
    #[error("invalid frame index {index}")]
    InvalidFrameIndex { index: usize },

    /// A candidate roll sequence broke a frame invariant.
    #[error("invalid rolls {rolls:?} for frame {index}")]
    InvalidFrame { index: usize, rolls: Vec<u8> },

    /// All ten frames are already filled.
    #[error("game is complete")]
    GameComplete,
}

pub type Result<T> = std::result::Result<T, BowlingError>;

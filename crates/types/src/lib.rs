//! Core types module - shared constants and symbols
//!
//! This module defines the fundamental values used throughout the workspace.
//! Everything here is plain data, usable from the scoring engine, the board
//! renderer and the binary alike.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_COUNT` | 10 | Frames in a game |
//! | `TENTH_FRAME_INDEX` | 9 | Zero-based index of the last frame |
//! | `PIN_COUNT` | 10 | Pins in a full rack |
//! | `FRAME_MAX_ROLLS` | 2 | Balls in frames 1-9 |
//! | `TENTH_FRAME_MAX_ROLLS` | 3 | Balls in the tenth frame |
//! | `FRAME_MAX_SCORE` | 10 | Pins knocked in frames 1-9 |
//! | `TENTH_FRAME_MAX_SCORE` | 30 | Pins knocked in the tenth frame |
//! | `PERFECT_GAME` | 300 | Twelve strikes in a row |
//!
//! # Board Geometry
//!
//! The ASCII board uses inclusive bounds: a width of 89 covers columns
//! `0..=89` and a height of 47 covers rows `0..=47`.
//!
//! - `BOARD_WIDTH`: 89
//! - `BOARD_HEIGHT`: 47
//! - `LANE_WIDTH`: 39 columns between the lane walls
//! - `PIN_WIDTH`: 5 columns per drawn pin
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{RollMark, FRAME_COUNT, PIN_COUNT};
//!
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(RollMark::Strike.as_char(), 'X');
//! assert_eq!(RollMark::Pins(7).as_char(), '7');
//! assert_eq!(RollMark::from_char('-'), Some(RollMark::Gutter));
//! assert_eq!(PIN_COUNT, 10);
//! ```

use serde::Serialize;

/// Number of frames in a game
pub const FRAME_COUNT: usize = 10;

/// Zero-based index of the tenth frame
pub const TENTH_FRAME_INDEX: usize = FRAME_COUNT - 1;

/// Pins in a full rack
pub const PIN_COUNT: u8 = 10;

/// Maximum balls thrown in frames 1-9
pub const FRAME_MAX_ROLLS: usize = 2;

/// Maximum balls thrown in the tenth frame
pub const TENTH_FRAME_MAX_ROLLS: usize = 3;

/// Maximum pin total for frames 1-9
pub const FRAME_MAX_SCORE: u16 = 10;

/// Maximum pin total for the tenth frame
pub const TENTH_FRAME_MAX_SCORE: u16 = 30;

/// Score of twelve consecutive strikes
pub const PERFECT_GAME: u16 = 300;

/// Board width (inclusive upper column bound)
pub const BOARD_WIDTH: u16 = 89;

/// Board height (inclusive upper row bound)
pub const BOARD_HEIGHT: u16 = 47;

/// Columns between the two lane walls
pub const LANE_WIDTH: usize = 39;

/// Columns taken by a single drawn pin
pub const PIN_WIDTH: usize = 5;

/// Scoreboard symbol for a single recorded roll.
///
/// - **Strike**: `X`, a full rack on the first ball (also any other ball
///   counted as ten, such as the last ball of a tenth frame `[10, 3, 10]`)
/// - **Spare**: `/`, the second ball cleared the rack
/// - **Gutter**: `-`, no pins
/// - **Pins**: the pin count, 1-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "char")]
pub enum RollMark {
    Strike,
    Spare,
    Gutter,
    Pins(u8),
}

impl RollMark {
    /// Character drawn on the scoreboard
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::RollMark;
    ///
    /// assert_eq!(RollMark::Spare.as_char(), '/');
    /// assert_eq!(RollMark::Gutter.as_char(), '-');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            RollMark::Strike => 'X',
            RollMark::Spare => '/',
            RollMark::Gutter => '-',
            RollMark::Pins(n) => char::from_digit(u32::from(*n), 10).unwrap_or('?'),
        }
    }

    /// Parse a scoreboard character back into a mark
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(RollMark::Strike),
            '/' => Some(RollMark::Spare),
            '-' => Some(RollMark::Gutter),
            '1'..='9' => ch.to_digit(10).map(|n| RollMark::Pins(n as u8)),
            _ => None,
        }
    }
}

impl From<RollMark> for char {
    fn from(mark: RollMark) -> Self {
        mark.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants_agree() {
        assert_eq!(TENTH_FRAME_INDEX, 9);
        assert_eq!(FRAME_MAX_SCORE, u16::from(PIN_COUNT));
        assert_eq!(TENTH_FRAME_MAX_SCORE, 3 * u16::from(PIN_COUNT));
        assert_eq!(PERFECT_GAME, 12 * u16::from(PIN_COUNT) * 5 / 2);
    }

    #[test]
    fn pin_marks_round_trip_through_chars() {
        for n in 1..=9u8 {
            let mark = RollMark::Pins(n);
            assert_eq!(RollMark::from_char(mark.as_char()), Some(mark));
        }
        assert_eq!(RollMark::from_char('0'), None);
        assert_eq!(RollMark::from_char('x'), Some(RollMark::Strike));
    }
}

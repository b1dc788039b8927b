//! Frame module - one of the ten scoring units of a game
//!
//! A frame owns its rolls in a fixed-capacity inline vector (no heap
//! allocation). Frames 1-9 hold at most two rolls, the tenth frame up to
//! three. Every mutation builds a candidate roll list, validates the whole
//! candidate and only then replaces the stored rolls.
//!
//! Strikes and spares are detected per rack: a rack is the set of pins a
//! ball is thrown at. In the tenth frame the rack is reset after a strike or
//! a spare, so `[10, 10, 10]` holds three strikes while `[10, 3, 7]` holds a
//! strike followed by a spare.

use arrayvec::ArrayVec;

use crate::error::{BowlingError, Result};
use crate::types::{
    RollMark, FRAME_COUNT, FRAME_MAX_ROLLS, FRAME_MAX_SCORE, PIN_COUNT, TENTH_FRAME_INDEX,
    TENTH_FRAME_MAX_ROLLS, TENTH_FRAME_MAX_SCORE,
};

/// Roll storage, sized for the tenth frame.
pub type Rolls = ArrayVec<u8, TENTH_FRAME_MAX_ROLLS>;

/// Scoreboard marks for a frame.
pub type Marks = ArrayVec<RollMark, TENTH_FRAME_MAX_ROLLS>;

/// A single bowling frame
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    index: usize,
    rolls: Rolls,
}

/// What a left-to-right walk over the rolls found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RackScan {
    strike: bool,
    spare: bool,
    /// Pins still up after the latest roll.
    standing: u8,
}

impl Frame {
    /// Create an empty frame for the given zero-based index
    pub fn new(index: usize) -> Result<Self> {
        if index >= FRAME_COUNT {
            return Err(BowlingError::InvalidFrameIndex { index });
        }
        Ok(Self::blank(index))
    }

    pub(crate) fn blank(index: usize) -> Self {
        Self {
            index,
            rolls: Rolls::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_tenth(&self) -> bool {
        self.index == TENTH_FRAME_INDEX
    }

    pub fn max_rolls(&self) -> usize {
        if self.is_tenth() {
            TENTH_FRAME_MAX_ROLLS
        } else {
            FRAME_MAX_ROLLS
        }
    }

    pub fn max_score(&self) -> u16 {
        if self.is_tenth() {
            TENTH_FRAME_MAX_SCORE
        } else {
            FRAME_MAX_SCORE
        }
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Replace every roll of this frame.
    ///
    /// Fails with [`BowlingError::InvalidFrame`] and leaves the frame
    /// untouched when the candidate breaks a frame invariant.
    pub fn set_rolls(&mut self, rolls: &[u8]) -> Result<()> {
        let candidate = Rolls::try_from(rolls).map_err(|_| self.invalid(rolls))?;
        self.commit(candidate)
    }

    /// Overwrite (or append) the roll at `position`.
    ///
    /// Positions past the current length are rejected: a frame never has an
    /// unset slot in front of a recorded roll.
    pub fn set_roll_at_position(&mut self, value: u8, position: usize) -> Result<()> {
        if !Self::is_valid_value(value) {
            return Err(BowlingError::InvalidRollValue { value });
        }
        if position >= self.max_rolls() || position > self.rolls.len() {
            return Err(BowlingError::InvalidPosition {
                position,
                max_rolls: self.max_rolls(),
            });
        }

        let mut candidate = self.rolls.clone();
        if position == candidate.len() {
            candidate.push(value);
        } else {
            candidate[position] = value;
        }
        self.commit(candidate)
    }

    /// Roll at `position`, or `None` if that ball has not been thrown.
    pub fn value_at_position(&self, position: usize) -> Result<Option<u8>> {
        if position >= self.max_rolls() {
            return Err(BowlingError::InvalidPosition {
                position,
                max_rolls: self.max_rolls(),
            });
        }
        Ok(self.roll_at(position))
    }

    /// Non-failing variant of [`Frame::value_at_position`].
    pub fn roll_at(&self, position: usize) -> Option<u8> {
        self.rolls.get(position).copied()
    }

    /// Sum of the recorded rolls.
    ///
    /// An empty frame has no value unless `treat_empty_as_zero` is set.
    pub fn total(&self, treat_empty_as_zero: bool) -> Option<u16> {
        if self.rolls.is_empty() && !treat_empty_as_zero {
            return None;
        }
        Some(sum(&self.rolls))
    }

    pub fn is_finished(&self) -> bool {
        let scan = self.scan();
        let needed = if self.is_tenth() {
            if scan.strike || scan.spare {
                TENTH_FRAME_MAX_ROLLS
            } else {
                FRAME_MAX_ROLLS
            }
        } else if scan.strike {
            1
        } else {
            FRAME_MAX_ROLLS
        };
        self.rolls.len() >= needed
    }

    pub fn has_strike(&self) -> bool {
        self.scan().strike
    }

    /// Two consecutive rolls of one rack summing to ten. A strike never
    /// pairs with the following ball.
    pub fn has_spare(&self) -> bool {
        self.scan().spare
    }

    /// Pins left on the deck after the latest roll.
    pub fn pins_standing(&self) -> u8 {
        self.scan().standing
    }

    /// Most pins the next ball of this frame can knock down.
    ///
    /// A cleared deck means a fresh rack (tenth frame bonus balls).
    pub fn pins_available(&self) -> u8 {
        match self.scan().standing {
            0 => PIN_COUNT,
            n => n,
        }
    }

    /// Scoreboard symbols for the recorded rolls.
    pub fn marks(&self) -> Marks {
        let mut marks = Marks::new();
        scan_rolls(&self.rolls, |mark| marks.push(mark));
        marks
    }

    /// This frame completed with its highest-scoring continuation.
    ///
    /// Each missing ball knocks down every pin available to it:
    /// - `[]` becomes `[10]` (`[10, 10, 10]` in the tenth frame)
    /// - `[x]` becomes `[x, 10 - x]` (plus a bonus strike in the tenth frame)
    /// - tenth `[10, x]` becomes `[10, x, 10 - x]`, tenth `[10, 10]` or a
    ///   spare gets a bonus strike
    ///
    /// Finished frames are returned unchanged.
    pub fn maximized(&self) -> Frame {
        let mut frame = self.clone();
        while !frame.is_finished() && frame.rolls.len() < frame.max_rolls() {
            let ball = frame.pins_available();
            frame.rolls.push(ball);
        }
        debug_assert!(frame.is_valid(&frame.rolls));
        frame
    }

    /// Check that `value` is a legal roll (0-10)
    pub fn is_valid_value(value: u8) -> bool {
        value <= PIN_COUNT
    }

    /// Check a candidate roll list against this frame's limits:
    ///
    /// - at most `max_rolls` rolls, each a legal value
    /// - the sum does not exceed `max_score`
    /// - a third roll was earned by a strike on roll one or a spare
    pub fn is_valid(&self, rolls: &[u8]) -> bool {
        if rolls.len() > self.max_rolls() {
            return false;
        }
        if !rolls.iter().all(|&roll| Self::is_valid_value(roll)) {
            return false;
        }
        if sum(rolls) > self.max_score() {
            return false;
        }
        if rolls.len() == TENTH_FRAME_MAX_ROLLS {
            return rolls[0] == PIN_COUNT || rolls[0] + rolls[1] == PIN_COUNT;
        }
        true
    }

    fn commit(&mut self, candidate: Rolls) -> Result<()> {
        if !self.is_valid(&candidate) {
            return Err(self.invalid(&candidate));
        }
        self.rolls = candidate;
        Ok(())
    }

    fn invalid(&self, rolls: &[u8]) -> BowlingError {
        BowlingError::InvalidFrame {
            index: self.index,
            rolls: rolls.to_vec(),
        }
    }

    fn scan(&self) -> RackScan {
        scan_rolls(&self.rolls, |_| {})
    }
}

fn sum(rolls: &[u8]) -> u16 {
    rolls.iter().map(|&roll| u16::from(roll)).sum()
}

/// Walk the rolls rack by rack, reporting the mark of every ball.
fn scan_rolls(rolls: &[u8], mut on_mark: impl FnMut(RollMark)) -> RackScan {
    let mut scan = RackScan {
        strike: false,
        spare: false,
        standing: PIN_COUNT,
    };
    // First ball of the rack in play, if one was thrown at it.
    let mut first_ball: Option<u8> = None;

    for &roll in rolls {
        match first_ball {
            None if roll == PIN_COUNT => {
                scan.strike = true;
                scan.standing = 0;
                on_mark(RollMark::Strike);
            }
            None => {
                first_ball = Some(roll);
                scan.standing = PIN_COUNT - roll;
                on_mark(pin_mark(roll));
            }
            Some(first) => {
                first_ball = None;
                if first + roll == PIN_COUNT {
                    scan.spare = true;
                    scan.standing = 0;
                    on_mark(RollMark::Spare);
                } else {
                    scan.standing = PIN_COUNT.saturating_sub(first + roll);
                    on_mark(pin_mark(roll));
                }
            }
        }
    }

    scan
}

fn pin_mark(roll: u8) -> RollMark {
    match roll {
        0 => RollMark::Gutter,
        // Ten counted against a partial rack still reads as all pins down.
        PIN_COUNT => RollMark::Strike,
        n => RollMark::Pins(n),
    }
}

//! Game module - ten frames plus the cursor of the next frame to fill
//!
//! Frames are filled strictly in order, either a whole roll group at a time
//! ([`Game::set_next_frame`]) or ball by ball ([`Game::roll`]). Scoring reads
//! per-frame facts from [`Frame`] and performs the cross-frame lookahead for
//! strike and spare bonuses itself.

use log::{debug, trace};

use crate::error::{BowlingError, Result};
use crate::frame::Frame;
use crate::snapshot::GameSnapshot;
use crate::types::{FRAME_COUNT, PIN_COUNT, TENTH_FRAME_INDEX};

const CLEAN_RACK: u16 = PIN_COUNT as u16;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    frames: [Frame; FRAME_COUNT],
    /// Next frame to fill; `FRAME_COUNT` once the game is complete.
    current_frame: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game with ten empty frames
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(Frame::blank),
            current_frame: 0,
        }
    }

    /// Create a game pre-seeded with the rolls of `frames`.
    ///
    /// Copying stops at the first empty frame. Every copied roll group is
    /// validated against the frame it lands in.
    pub fn from_frames(frames: &[Frame]) -> Result<Self> {
        let mut game = Self::new();
        for frame in frames {
            if frame.is_empty() {
                break;
            }
            game.set_next_frame(frame.rolls())?;
        }
        Ok(game)
    }

    /// Copy of the non-empty prefix of `frames`, which came from a game and
    /// therefore already sit at their own indices.
    fn seeded(frames: &[Frame; FRAME_COUNT]) -> Self {
        let mut game = Self::new();
        for (slot, frame) in game.frames.iter_mut().zip(frames.iter()) {
            if frame.is_empty() {
                break;
            }
            slot.clone_from(frame);
            game.current_frame += 1;
        }
        game
    }

    pub fn frame(&self, index: usize) -> Result<&Frame> {
        self.frames
            .get(index)
            .ok_or(BowlingError::InvalidFrameIndex { index })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_complete(&self) -> bool {
        self.current_frame >= FRAME_COUNT
    }

    /// Frame the next ball goes to (the tenth frame once the game is over).
    pub fn active_frame(&self) -> &Frame {
        &self.frames[self.current_frame.min(TENTH_FRAME_INDEX)]
    }

    /// Assign a full roll group to the frame under the cursor and advance.
    pub fn set_next_frame(&mut self, rolls: &[u8]) -> Result<()> {
        if self.is_complete() {
            return Err(BowlingError::GameComplete);
        }
        let index = self.current_frame;
        if rolls.is_empty() {
            return Err(BowlingError::InvalidFrame {
                index,
                rolls: Vec::new(),
            });
        }

        self.frames[index].set_rolls(rolls)?;
        self.current_frame += 1;
        debug!("frame {} set to {:?}", index, rolls);
        Ok(())
    }

    /// Record a single ball, advancing the cursor once its frame is finished.
    ///
    /// Unlike [`Frame::set_roll_at_position`], this also refuses to knock
    /// down more pins than the rack in play holds.
    pub fn roll(&mut self, pins: u8) -> Result<()> {
        if self.is_complete() {
            return Err(BowlingError::GameComplete);
        }
        if !Frame::is_valid_value(pins) {
            return Err(BowlingError::InvalidRollValue { value: pins });
        }

        let index = self.current_frame;
        let frame = &mut self.frames[index];
        if pins > frame.pins_available() {
            let mut rolls = frame.rolls().to_vec();
            rolls.push(pins);
            return Err(BowlingError::InvalidFrame { index, rolls });
        }

        let position = frame.len();
        frame.set_roll_at_position(pins, position)?;
        debug!("frame {} roll {} = {}", index, position, pins);

        if frame.is_finished() {
            self.current_frame += 1;
        }
        Ok(())
    }

    /// Score of frame `index` including strike/spare bonuses.
    ///
    /// Returns `Ok(None)` when bonus rolls are still missing, unless
    /// `include_incomplete` is set, in which case missing rolls count as 0.
    pub fn calculate_frame(&self, index: usize, include_incomplete: bool) -> Result<Option<u16>> {
        self.frame(index)?;
        Ok(self.score_frame(index, include_incomplete))
    }

    fn score_frame(&self, index: usize, include_incomplete: bool) -> Option<u16> {
        let frame = &self.frames[index];
        if frame.is_tenth() {
            return frame.total(include_incomplete);
        }

        let next = &self.frames[index + 1];

        if frame.has_strike() {
            let Some(first) = next.roll_at(0) else {
                return include_incomplete.then_some(CLEAN_RACK);
            };
            let second = match next.roll_at(1) {
                Some(roll) => Some(roll),
                // Back-to-back strikes borrow from the frame after next.
                None if next.has_strike() && !next.is_tenth() => self.frames[index + 2].roll_at(0),
                None => None,
            };
            let second = match second {
                Some(roll) => roll,
                None if include_incomplete => 0,
                None => return None,
            };
            return Some(CLEAN_RACK + u16::from(first) + u16::from(second));
        }

        if frame.has_spare() {
            return match next.roll_at(0) {
                Some(roll) => Some(CLEAN_RACK + u16::from(roll)),
                None => include_incomplete.then_some(CLEAN_RACK),
            };
        }

        frame.total(include_incomplete)
    }

    /// Score of the frames behind the cursor, counting missing bonus rolls
    /// as 0. A frame still being rolled does not count yet.
    pub fn current_score(&self) -> u16 {
        (0..self.current_frame.min(FRAME_COUNT))
            .filter_map(|index| self.score_frame(index, true))
            .sum()
    }

    /// Cumulative score per frame, as printed on a scoreboard.
    ///
    /// An entry is `Some` only while every frame up to and including it is
    /// finished and has all of its bonus rolls.
    pub fn running_totals(&self) -> [Option<u16>; FRAME_COUNT] {
        let mut totals = [None; FRAME_COUNT];
        let mut running = 0u16;
        for (index, frame) in self.frames.iter().enumerate() {
            if !frame.is_finished() {
                break;
            }
            let Some(score) = self.score_frame(index, false) else {
                break;
            };
            running += score;
            totals[index] = Some(running);
        }
        totals
    }

    /// Highest score this game can still reach.
    ///
    /// Simulates the rest of the game on a scratch copy where every
    /// remaining ball knocks down all the pins available to it.
    pub fn max_possible_score(&self) -> u16 {
        let mut scratch = Self::seeded(&self.frames);
        let start = self.current_frame.min(FRAME_COUNT);
        for frame in &mut scratch.frames[start..] {
            *frame = frame.maximized();
        }
        scratch.current_frame = FRAME_COUNT;

        let max = scratch.current_score();
        trace!("max possible score from frame {}: {}", start, max);
        max
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_of(frames: &[&[u8]]) -> Game {
        let mut game = Game::new();
        for rolls in frames {
            game.set_next_frame(rolls).unwrap();
        }
        game
    }

    fn gutter_frames(count: usize) -> Game {
        let mut game = Game::new();
        for _ in 0..count {
            game.set_next_frame(&[0, 0]).unwrap();
        }
        game
    }

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::new();
        assert_eq!(game.current_frame(), 0);
        assert!(!game.is_complete());
        assert!(game.frames().iter().all(Frame::is_empty));
        assert_eq!(game.current_score(), 0);
    }

    #[test]
    fn test_frame_index_bounds() {
        let game = Game::new();
        assert_eq!(game.frame(9).unwrap().index(), 9);
        assert_eq!(
            game.frame(10).unwrap_err(),
            BowlingError::InvalidFrameIndex { index: 10 }
        );
    }

    #[test]
    fn test_set_next_frame_advances_until_complete() {
        let mut game = Game::new();
        for _ in 0..9 {
            game.set_next_frame(&[1, 1]).unwrap();
        }
        assert_eq!(game.current_frame(), 9);
        game.set_next_frame(&[1, 1]).unwrap();
        assert!(game.is_complete());
        assert_eq!(game.set_next_frame(&[1]), Err(BowlingError::GameComplete));
    }

    #[test]
    fn test_invalid_group_does_not_advance() {
        let mut game = Game::new();
        assert!(game.set_next_frame(&[7, 7]).is_err());
        assert!(game.set_next_frame(&[]).is_err());
        assert_eq!(game.current_frame(), 0);
        assert!(game.frame(0).unwrap().is_empty());
    }

    #[test]
    fn test_spare_bonus() {
        let game = game_of(&[&[5, 5], &[3, 0]]);
        assert_eq!(game.calculate_frame(0, false), Ok(Some(13)));
        assert_eq!(game.calculate_frame(1, false), Ok(Some(3)));
    }

    #[test]
    fn test_spare_bonus_of_gutter_ball_is_determinate() {
        let game = game_of(&[&[5, 5], &[0, 4]]);
        assert_eq!(game.calculate_frame(0, false), Ok(Some(10)));
    }

    #[test]
    fn test_strike_chain() {
        let game = game_of(&[&[10], &[10], &[5, 2]]);
        assert_eq!(game.calculate_frame(0, false), Ok(Some(25)));
        assert_eq!(game.calculate_frame(1, false), Ok(Some(17)));
        assert_eq!(game.calculate_frame(2, false), Ok(Some(7)));
        assert_eq!(game.current_score(), 49);
    }

    #[test]
    fn test_incomplete_lookahead() {
        let game = game_of(&[&[10]]);
        assert_eq!(game.calculate_frame(0, false), Ok(None));
        assert_eq!(game.calculate_frame(0, true), Ok(Some(10)));

        let game = game_of(&[&[10], &[10]]);
        assert_eq!(game.calculate_frame(0, false), Ok(None));
        assert_eq!(game.calculate_frame(0, true), Ok(Some(20)));
        assert_eq!(game.current_score(), 30);

        let game = game_of(&[&[4, 6]]);
        assert_eq!(game.calculate_frame(0, false), Ok(None));
        assert_eq!(game.calculate_frame(0, true), Ok(Some(10)));
    }

    #[test]
    fn test_strike_into_tenth_frame_uses_its_second_roll() {
        let mut game = gutter_frames(8);
        game.set_next_frame(&[10]).unwrap();
        game.set_next_frame(&[10, 10, 10]).unwrap();
        assert_eq!(game.calculate_frame(8, false), Ok(Some(30)));
        assert_eq!(game.calculate_frame(9, false), Ok(Some(30)));
        assert_eq!(game.current_score(), 60);
    }

    #[test]
    fn test_roll_by_roll() {
        let mut game = Game::new();
        game.roll(7).unwrap();
        assert_eq!(game.current_frame(), 0);
        assert_eq!(game.active_frame().pins_standing(), 3);
        game.roll(3).unwrap();
        assert_eq!(game.current_frame(), 1);
        game.roll(10).unwrap();
        assert_eq!(game.current_frame(), 2);
        assert_eq!(game.current_score(), 30);
    }

    #[test]
    fn test_current_score_skips_frame_under_cursor() {
        let mut game = game_of(&[&[10]]);
        game.roll(3).unwrap();
        assert_eq!(game.current_frame(), 1);
        assert_eq!(game.current_score(), 13);

        game.roll(4).unwrap();
        assert_eq!(game.current_score(), 24);
    }

    #[test]
    fn test_roll_rejects_more_pins_than_standing() {
        let mut game = gutter_frames(9);
        game.roll(10).unwrap();
        game.roll(4).unwrap();
        assert_eq!(
            game.roll(7),
            Err(BowlingError::InvalidFrame {
                index: 9,
                rolls: vec![10, 4, 7]
            })
        );
        game.roll(6).unwrap();
        assert!(game.is_complete());
        assert_eq!(game.roll(0), Err(BowlingError::GameComplete));
        assert_eq!(game.current_score(), 20);
    }

    #[test]
    fn test_running_totals_stop_at_indeterminate_frame() {
        let game = game_of(&[&[3, 4], &[10], &[2]]);
        let totals = game.running_totals();
        assert_eq!(totals[0], Some(7));
        assert_eq!(totals[1], None);
        assert_eq!(totals[2], None);
    }

    #[test]
    fn test_max_possible_score() {
        assert_eq!(Game::new().max_possible_score(), 300);

        let game = game_of(&[&[0, 0]]);
        assert_eq!(game.max_possible_score(), 270);

        let mut game = Game::new();
        game.roll(9).unwrap();
        // 9/ then nine strikes: 20 + 270.
        assert_eq!(game.max_possible_score(), 290);
    }

    #[test]
    fn test_max_possible_score_does_not_mutate() {
        let game = game_of(&[&[10], &[3, 4]]);
        let before = game.clone();
        let _ = game.max_possible_score();
        assert_eq!(game, before);
    }
}

//! Serializable view of a game, for scoreboards and JSON output.

use serde::Serialize;

use crate::game::Game;
use crate::types::RollMark;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FrameSnapshot {
    pub index: usize,
    pub rolls: Vec<u8>,
    pub marks: Vec<RollMark>,
    pub finished: bool,
    /// Frame score with bonuses, once every bonus roll is known.
    pub score: Option<u16>,
    pub running_total: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub frames: Vec<FrameSnapshot>,
    pub current_frame: usize,
    pub complete: bool,
    pub current_score: u16,
    pub max_possible_score: u16,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let totals = game.running_totals();
        let frames = game
            .frames()
            .iter()
            .zip(totals)
            .map(|(frame, running_total)| FrameSnapshot {
                index: frame.index(),
                rolls: frame.rolls().to_vec(),
                marks: frame.marks().to_vec(),
                finished: frame.is_finished(),
                score: game.calculate_frame(frame.index(), false).ok().flatten(),
                running_total,
            })
            .collect();

        Self {
            frames,
            current_frame: game.current_frame(),
            complete: game.is_complete(),
            current_score: game.current_score(),
            max_possible_score: game.max_possible_score(),
        }
    }
}

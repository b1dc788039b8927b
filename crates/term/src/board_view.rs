//! BoardView: the bowling board content providers.
//!
//! Every provider is a pure function of `(&Game, row within its region)`
//! returning exactly one region-wide row of text. [`BoardView::register`]
//! claims the layout below on a [`RenderGrid`]:
//!
//! | Region | Columns | Rows |
//! |--------|---------|------|
//! | Top border | 0-89 | 0 |
//! | Bottom border | 0-89 | 47 |
//! | Left border (distance labels) | 0-2 | 1-46 |
//! | Right border | 88-89 | 1-46 |
//! | Pin deck | 3-43 | 1-12 |
//! | Lane | 3-43 | 13-46 |
//! | Scoreboard | 47-87 | 1-6 |
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Frame, Game};
use crate::grid::{GridError, Rect, RenderGrid};
use crate::sink::LineBuffer;
use crate::types::{
    RollMark, BOARD_HEIGHT, BOARD_WIDTH, FRAME_COUNT, LANE_WIDTH, PIN_COUNT, PIN_WIDTH,
};

pub const TOP_BORDER: Rect = Rect::new(0, BOARD_WIDTH, 0, 0);
pub const BOTTOM_BORDER: Rect = Rect::new(0, BOARD_WIDTH, BOARD_HEIGHT, BOARD_HEIGHT);
pub const LEFT_BORDER: Rect = Rect::new(0, 2, 1, BOARD_HEIGHT - 1);
pub const RIGHT_BORDER: Rect = Rect::new(BOARD_WIDTH - 1, BOARD_WIDTH, 1, BOARD_HEIGHT - 1);
pub const PIN_DECK: Rect = Rect::new(3, 43, 1, 12);
pub const LANE: Rect = Rect::new(3, 43, 13, BOARD_HEIGHT - 1);
pub const SCOREBOARD: Rect = Rect::new(47, 87, 1, 6);

/// Pin numbers per deck row, back row first.
const PIN_ROWS: [&[u8]; 4] = [&[7, 8, 9, 10], &[4, 5, 6], &[2, 3], &[1]];

/// Text lines per drawn pin.
const PIN_HEIGHT: u16 = 3;

/// Lane rows carrying the aiming arrows, and the arrow centers with the row
/// each arrow tip sits on.
const ARROW_TIPS: [(usize, u16); 7] = [
    (4, 23),
    (9, 22),
    (14, 21),
    (19, 20),
    (24, 21),
    (29, 22),
    (34, 23),
];

/// Lane row with the approach dots.
const DOT_ROW: u16 = 28;
const DOT_COLUMNS: [usize; 10] = [2, 5, 8, 11, 14, 24, 27, 30, 33, 36];

/// Scoreboard cell width per frame.
const SCORE_CELL: usize = 3;

/// Registers the bowling board on a render grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    show_pins: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self { show_pins: true }
    }
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave the pin deck unclaimed (drawn blank).
    pub fn without_pins(mut self) -> Self {
        self.show_pins = false;
        self
    }

    /// Claim every board region on `grid`.
    pub fn register(&self, grid: &mut RenderGrid<Game>) -> Result<(), GridError> {
        claim(grid, TOP_BORDER, horizontal_border)?;
        claim(grid, BOTTOM_BORDER, horizontal_border)?;
        claim(grid, LEFT_BORDER, left_border)?;
        claim(grid, RIGHT_BORDER, right_border)?;
        if self.show_pins {
            claim(grid, PIN_DECK, pin_deck)?;
        }
        claim(grid, LANE, lane)?;
        claim(grid, SCOREBOARD, scoreboard)?;
        Ok(())
    }

    /// A board-sized grid with every region claimed.
    pub fn grid(&self) -> Result<RenderGrid<Game>, GridError> {
        let mut grid = RenderGrid::new(BOARD_WIDTH, BOARD_HEIGHT);
        self.register(&mut grid)?;
        Ok(grid)
    }

    /// Convenience helper that builds a grid and renders `game` once.
    pub fn render(&self, game: &Game) -> Result<LineBuffer, GridError> {
        Ok(self.grid()?.render(game))
    }
}

fn claim(
    grid: &mut RenderGrid<Game>,
    rect: Rect,
    draw: fn(&Game, u16) -> String,
) -> Result<(), GridError> {
    grid.register_region(
        draw,
        rect.start_column,
        rect.end_column,
        rect.start_row,
        rect.end_row,
    )?;
    Ok(())
}

pub fn horizontal_border(_game: &Game, _line: u16) -> String {
    let mut s = String::with_capacity(TOP_BORDER.width());
    s.push('+');
    s.extend(std::iter::repeat('-').take(TOP_BORDER.width() - 2));
    s.push('+');
    s
}

/// Left wall with distances from the foul line in feet.
pub fn left_border(_game: &Game, line: u16) -> String {
    match line {
        0 => "|ft",
        12 => "|60",
        36 => "|10",
        40 => "| 5",
        _ => "|  ",
    }
    .to_string()
}

pub fn right_border(_game: &Game, _line: u16) -> String {
    " |".to_string()
}

pub fn lane(_game: &Game, line: u16) -> String {
    let mut inner = [' '; LANE_WIDTH];

    for &(center, tip) in &ARROW_TIPS {
        if line == tip {
            inner[center] = '_';
        } else if line == tip + 1 {
            inner[center - 1] = '/';
            inner[center] = '_';
            inner[center + 1] = '\\';
        }
    }
    if line == DOT_ROW {
        for &column in &DOT_COLUMNS {
            inner[column] = '*';
        }
    }

    walled(inner.iter().copied())
}

/// Pins still standing in the active frame. Pins fall head pin first.
pub fn pin_deck(game: &Game, line: u16) -> String {
    let knocked = PIN_COUNT - game.active_frame().pins_standing();
    let pins = PIN_ROWS[usize::from(line / PIN_HEIGHT) % PIN_ROWS.len()];

    // Pins and the gaps between them are both PIN_WIDTH wide.
    let used = (2 * pins.len() - 1) * PIN_WIDTH;
    let outer = (LANE_WIDTH - used) / 2;

    let mut inner = String::with_capacity(LANE_WIDTH);
    inner.extend(std::iter::repeat(' ').take(outer));
    for (i, &pin) in pins.iter().enumerate() {
        if i > 0 {
            inner.extend(std::iter::repeat(' ').take(PIN_WIDTH));
        }
        if pin <= knocked {
            inner.extend(std::iter::repeat(' ').take(PIN_WIDTH));
            continue;
        }
        match line % PIN_HEIGHT {
            0 => inner.push_str(" ___ "),
            1 if pin < 10 => inner.push_str(&format!("/ {pin} \\")),
            1 => inner.push_str(&format!("/ {pin}\\")),
            _ => inner.push_str("\\___/"),
        }
    }
    inner.extend(std::iter::repeat(' ').take(LANE_WIDTH - used - outer));

    walled(inner.chars())
}

/// Ten-frame scoresheet with the projected maximum underneath.
pub fn scoreboard(game: &Game, line: u16) -> String {
    let width = SCOREBOARD.width();
    match line {
        0 | 3 => {
            let mut s = String::with_capacity(width);
            s.push('+');
            for _ in 0..FRAME_COUNT {
                s.push_str("---+");
            }
            s
        }
        1 => {
            let mut s = String::from("|");
            for frame in game.frames() {
                s.push_str(&frame_marks(frame));
                s.push('|');
            }
            s
        }
        2 => {
            let mut s = String::from("|");
            for total in game.running_totals() {
                match total {
                    Some(total) => s.push_str(&format!("{total:>3}")),
                    None => s.push_str(&" ".repeat(SCORE_CELL)),
                }
                s.push('|');
            }
            s
        }
        4 => format!(
            "{:<width$}",
            format!("|Max score: {:>3} |", game.max_possible_score())
        ),
        _ => format!("{:<width$}", "+---------------+"),
    }
}

/// Three-character scoresheet cell for one frame.
///
/// Frames 1-9 show `a|b` with a strike in the second box (` |X`); the tenth
/// frame shows up to three marks side by side.
pub fn frame_marks(frame: &Frame) -> String {
    let marks = frame.marks();
    let mark = |i: usize| marks.get(i).map(RollMark::as_char).unwrap_or(' ');

    if frame.is_tenth() {
        return (0..SCORE_CELL).map(mark).collect();
    }
    if marks.first() == Some(&RollMark::Strike) {
        return " |X".to_string();
    }
    format!("{}|{}", mark(0), mark(1))
}

fn walled(inner: impl Iterator<Item = char>) -> String {
    let mut s = String::with_capacity(LANE_WIDTH + 2);
    s.push('|');
    s.extend(inner);
    s.push('|');
    s
}

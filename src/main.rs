//! Bowling scorer (default binary).
//!
//! Feeds frames and single balls from the command line into a game, then
//! draws the board once (or prints the game summary as JSON).
//!
//! ```text
//! tui-bowling [OPTIONS] [FRAME...]
//!
//!   FRAME            comma-separated rolls of one frame, e.g. `10` or `7,3`
//!   --rolls a,b,...  single balls, applied after the frames
//!   --json           print the game summary as JSON instead of the board
//!   --clear          clear the terminal before drawing
//!   -h, --help       show this help
//! ```

use anyhow::{bail, Context, Result};
use crossterm::tty::IsTty;
use log::{debug, info};

use tui_bowling::core::Game;
use tui_bowling::term::{BoardView, TerminalRenderer};

const USAGE: &str = "\
usage: tui-bowling [--rolls a,b,...] [--json] [--clear] [FRAME...]

  FRAME            comma-separated rolls of one frame, e.g. `10` or `7,3`
  --rolls a,b,...  single balls, applied after the frames
  --json           print the game summary as JSON instead of the board
  --clear          clear the terminal before drawing
  -h, --help       show this help

With no frames or rolls a demo game is shown.";

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    frames: Vec<Vec<u8>>,
    rolls: Vec<u8>,
    json: bool,
    clear: bool,
    help: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = parse_args(std::env::args().skip(1))?;
    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }

    let game = build_game(&opts)?;
    info!(
        "score {} of a possible {}",
        game.current_score(),
        game.max_possible_score()
    );

    if opts.json {
        let json = serde_json::to_string_pretty(&game.snapshot())
            .context("failed to encode game summary")?;
        println!("{json}");
        return Ok(());
    }

    let board = BoardView::new()
        .render(&game)
        .context("failed to lay out the board")?;

    // Escape sequences only make sense on a terminal.
    let clear = opts.clear && std::io::stdout().is_tty();
    TerminalRenderer::new()
        .with_clear_screen(clear)
        .draw(&board)
        .context("failed to draw the board")
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut opts = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => opts.help = true,
            "--json" => opts.json = true,
            "--clear" => opts.clear = true,
            "--rolls" => {
                let list = args.next().context("--rolls needs a value")?;
                opts.rolls.extend(parse_pins(&list)?);
            }
            flag if flag.starts_with('-') => bail!("unknown option `{flag}`\n\n{USAGE}"),
            group => opts.frames.push(parse_pins(group)?),
        }
    }

    Ok(opts)
}

fn parse_pins(list: &str) -> Result<Vec<u8>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u8>()
                .with_context(|| format!("`{s}` is not a pin count"))
        })
        .collect()
}

fn build_game(opts: &Options) -> Result<Game> {
    if opts.frames.is_empty() && opts.rolls.is_empty() {
        debug!("no input, showing the demo game");
        return demo_game();
    }

    let mut game = Game::new();
    for (i, rolls) in opts.frames.iter().enumerate() {
        game.set_next_frame(rolls)
            .with_context(|| format!("frame group {} {:?}", i + 1, rolls))?;
    }
    for &pins in &opts.rolls {
        game.roll(pins)
            .with_context(|| format!("roll of {pins} in frame {}", game.current_frame() + 1))?;
    }
    Ok(game)
}

/// A game in progress: three frames played and a ball into the fourth.
fn demo_game() -> Result<Game> {
    let mut game = Game::new();
    game.set_next_frame(&[0, 0])?;
    game.set_next_frame(&[10])?;
    game.set_next_frame(&[2, 4])?;
    game.roll(7)?;
    Ok(game)
}

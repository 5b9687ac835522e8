use std::{io, time::Duration};

use anyhow::Context;
use app::{App, Glyphs, Settings};
use clap::{Parser, ValueEnum};
use gol::{Board, Pattern};

/// Conway's Game of Life on a 25x25 torus, drawn in the terminal.
#[derive(Debug, Parser)]
#[command(name = "toroidal-life", version)]
struct Cli {
    /// Pattern placed at the centre of the board.
    #[arg(long, value_enum, default_value_t = Seed::Glider)]
    pattern: Seed,

    /// Milliseconds to wait after each frame.
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Stop after this many frames instead of running until interrupted.
    #[arg(long)]
    frames: Option<u64>,

    /// Generations to advance before the first frame is drawn. Zero or
    /// negative draws the seed as placed.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    skip: i64,

    /// Text drawn for a live cell.
    #[arg(long, default_value = "■ ")]
    alive: String,

    /// Text drawn for a dead cell.
    #[arg(long, default_value = "□ ")]
    dead: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Seed {
    Glider,
    Blinker,
    Block,
}

impl Seed {
    fn pattern(self) -> Pattern {
        match self {
            Seed::Glider => Pattern::glider(),
            Seed::Blinker => Pattern::blinker(),
            Seed::Block => Pattern::block(),
        }
    }
}

impl Cli {
    fn board(&self) -> Board {
        let mut board = Board::new();
        board.clear();
        board.place(&self.pattern.pattern(), board.center());
        let skipped = board.compute_n_generations(self.skip);
        if skipped > 0 {
            log::info!("skipped ahead {skipped} generations");
        }
        board
    }

    fn settings(&self) -> Settings {
        Settings {
            delay: Duration::from_millis(self.delay_ms),
            frames: self.frames,
            glyphs: Glyphs {
                alive: self.alive.clone(),
                dead: self.dead.clone(),
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("{cli:?}");
    let mut app = App::new(cli.board(), cli.settings());
    app.run(&mut io::stdout().lock())
        .context("rendering to the terminal failed")
}

use std::io::{self, Write};
use std::process;
use std::thread;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use web_time::Instant;

use othello::display::{CLEAR_SCREEN, render_board, render_scores, render_timing};
use othello::{Config, DisplayMode, Game, GameResult};

#[derive(Parser, Debug)]
#[command(
    name = "othello",
    version,
    about = "Greedy self-play Othello with a parallel move search"
)]
struct Args {
    /// Print nothing but the final score
    #[arg(short, long)]
    silent: bool,

    /// Colorize discs in board frames
    #[arg(short = 'c', long = "color")]
    colorize: bool,

    /// Print a single timing line at the end
    #[arg(short, long)]
    timing: bool,

    /// Redraw frames in place
    #[arg(short, long)]
    animate: bool,

    /// Pause between turns, in milliseconds
    #[arg(short, long, value_name = "MS", default_value_t = 0)]
    delay: u64,

    /// Board width and height
    #[arg(short, long, value_name = "N", default_value_t = othello::config::DEFAULT_BOARD_SIZE)]
    board_size: usize,

    /// Search worker threads
    #[arg(short = 'n', long = "workers", value_name = "N", default_value_t = 1)]
    workers: usize,

    /// Emit the final report as one JSON line
    #[arg(long)]
    json: bool,
}

impl Args {
    fn display_mode(&self) -> DisplayMode {
        if self.timing {
            DisplayMode::Timing
        } else if self.silent {
            DisplayMode::Silent
        } else if self.colorize {
            DisplayMode::Colorized
        } else {
            DisplayMode::Normal
        }
    }

    fn to_config(&self) -> Config {
        Config {
            board_size: self.board_size,
            worker_count: self.workers,
            delay_ms: self.delay,
            display_mode: self.display_mode(),
            animate: self.animate,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a Config,
    result: GameResult,
    elapsed_ms: u128,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.to_config();

    let mut game = match Game::from_config(&config) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{}", Args::command().render_usage());
            process::exit(1);
        }
    };
    tracing::debug!(?config, "starting game");

    let mut stdout = io::stdout().lock();
    if config.animate {
        write!(stdout, "{CLEAR_SCREEN}")?;
    }

    while !game.is_finished() {
        if let Some(frame) = render_board(game.board(), config.display_mode, config.animate) {
            write!(stdout, "{frame}")?;
            stdout.flush()?;
        }
        game.step();
        if config.delay_ms > 0 {
            thread::sleep(Duration::from_millis(config.delay_ms));
        }
    }

    let result = game.result();
    let elapsed_ms = start.elapsed().as_millis();

    if args.json {
        let report = Report {
            config: &config,
            result,
            elapsed_ms,
        };
        writeln!(stdout, "{}", serde_json::to_string(&report)?)?;
        return Ok(());
    }

    match config.display_mode {
        DisplayMode::Timing => {
            writeln!(
                stdout,
                "{}",
                render_timing(config.board_size, game.worker_count(), elapsed_ms, &result)
            )?;
        }
        mode => {
            if let Some(frame) = render_board(game.board(), mode, config.animate) {
                write!(stdout, "{frame}")?;
            }
            writeln!(stdout, "{}", render_scores(&result))?;
        }
    }

    Ok(())
}

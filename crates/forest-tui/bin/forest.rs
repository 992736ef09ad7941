//! Forest grid exploration game
//!
//! Main entry point: parse arguments, set up logging, play one session.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use crossterm::tty::IsTty;

use forest_core::{DEFAULT_HEIGHT, DEFAULT_WIDTH, GameConfig, Session, Stats};
use forest_tui::{DirectionPrompt, Ending, KeyPrompt, LinePrompt, TuiError, run};

/// Walk out of the forest without getting eaten
#[derive(Parser, Debug)]
#[command(name = "forest")]
#[command(author, version, about = "Find your way out of the forest!", long_about = None)]
struct Args {
    /// Grid width
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Grid height
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Starting column (defaults to the left edge)
    #[arg(long = "start-x")]
    start_x: Option<usize>,

    /// Starting row (defaults to the bottom edge)
    #[arg(long = "start-y")]
    start_y: Option<usize>,

    /// RNG seed, for replaying the same forest
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Player name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Read typed answers line by line instead of single keypresses
    #[arg(long)]
    line: bool,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn to_config(&self) -> GameConfig {
        let mut config = GameConfig::new(self.width, self.height);
        if self.start_x.is_some() || self.start_y.is_some() {
            let default = config.start_position();
            config = config.with_start(
                self.start_x.unwrap_or(default.x),
                self.start_y.unwrap_or(default.y),
            );
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(ref name) = self.name {
            let base = Stats::player();
            config = config.with_player(Stats::new(name.as_str(), base.attack, base.defense, base.hp));
        }
        config
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match play(&args) {
        Ok(ending) => {
            log::info!("session ended: {ending:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("forest: {err}");
            ExitCode::FAILURE
        }
    }
}

fn play(args: &Args) -> Result<Ending, TuiError> {
    let mut session = Session::from_config(args.to_config())?;
    log::info!("seed {}", session.seed());

    let mut prompt: Box<dyn DirectionPrompt> = if args.line || !io::stdin().is_tty() {
        Box::new(LinePrompt::new(io::stdin().lock(), io::stdout()))
    } else {
        Box::new(KeyPrompt::new())
    };

    let mut out = io::stdout();
    let ending = run(&mut session, prompt.as_mut(), &mut out)?;
    if ending == Ending::Abandoned {
        writeln!(out, "You sit down among the trees. Maybe another day.")?;
    }
    Ok(ending)
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    // RUST_LOG still wins for anyone who wants per-module filters.
    builder.parse_env("RUST_LOG");
    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    let _ = builder.try_init();
}

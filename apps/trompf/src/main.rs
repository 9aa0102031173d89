//! Trompf console game.
//!
//! Without `--player` flags the four players are registered interactively.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use trompf::config::{parse_bid_script, GameConfig, OutputFormat, PlayerSpec};
use trompf::console::{run_session, Prompter};
use trompf::telemetry::init_tracing;
use trompf::AppError;

#[derive(Parser)]
#[command(name = "trompf")]
#[command(about = "Four-player Trompf card game engine")]
struct Args {
    /// Base seed for a reproducible game (env: TROMPF_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Deal the deck that gives every player a shout (env: TROMPF_GUARANTEE_SHOUTS)
    #[arg(long, conflicts_with = "random_deck")]
    guarantee_shouts: bool,

    /// Always deal a shuffled deck, without asking
    #[arg(long)]
    random_deck: bool,

    /// Player as NAME:TEAM; give exactly four
    #[arg(long = "player", value_name = "NAME:TEAM")]
    players: Vec<PlayerSpec>,

    /// Scripted bids in speaking order, e.g. 2,0,4,4
    #[arg(long, value_name = "LIST")]
    bids: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<GameConfig, AppError> {
        let guarantee_shouts = match (self.guarantee_shouts, self.random_deck) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        let config = GameConfig {
            seed: self.seed,
            guarantee_shouts,
            players: self.players,
            bids: self.bids.as_deref().map(parse_bid_script),
            output: self.format,
        };
        Ok(config.with_env_fallbacks()?)
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = args.into_config()?;

    // Keep stdout clean for the event stream in JSON mode.
    let prompts: Box<dyn Write> = match config.output {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Jsonl => Box::new(io::stderr()),
    };
    let mut prompter = Prompter::new(io::stdin().lock(), prompts);
    run_session(&config, &mut prompter, io::stdout())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "game aborted");
            eprintln!("\n[{}] {}", err.label(), err);
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

//! One complete console game: roster, options, bids and rendering.

use std::io::{BufRead, Write};

use tracing::info;

use crate::config::{GameConfig, OutputFormat};
use crate::console::registration::{ask_guarantee_shouts, display_teams, register_players};
use crate::console::{io_fatal, ConsoleBidSource, JsonLinesSink, Prompter, TextRenderer};
use crate::domain::{BidSource, EventSink, Game, GameOptions, GameOutcome, ScriptedBids};
use crate::error::AppError;

/// Play one game as described by `config`.
///
/// Questions go through `prompter`; the transcript or event stream goes to `out`.
pub fn run_session<R, W, O>(
    config: &GameConfig,
    prompter: &mut Prompter<R, W>,
    out: O,
) -> Result<GameOutcome, AppError>
where
    R: BufRead,
    W: Write,
    O: Write,
{
    let (players, guarantee_shouts) = if config.players.is_empty() {
        let players = register_players(prompter)?;
        display_teams(prompter.output(), &players).map_err(io_fatal)?;
        let guarantee = match config.guarantee_shouts {
            Some(g) => g,
            None => ask_guarantee_shouts(prompter)?,
        };
        (players, guarantee)
    } else {
        (config.roster(), config.guarantee_shouts.unwrap_or(false))
    };

    let options = GameOptions {
        guarantee_shouts,
        ..config.options()
    };
    let mut game = Game::new(players, options)?;
    info!(seed = game.seed(), mode = ?game.mode(), "starting game");

    let mut scripted;
    let mut console;
    let bids: &mut dyn BidSource = match &config.bids {
        Some(script) => {
            scripted = ScriptedBids::new(script.iter().cloned());
            &mut scripted
        }
        None => {
            console = ConsoleBidSource::new(prompter);
            &mut console
        }
    };

    let mut text;
    let mut jsonl;
    let sink: &mut dyn EventSink = match config.output {
        OutputFormat::Text => {
            text = TextRenderer::new(out);
            &mut text
        }
        OutputFormat::Jsonl => {
            jsonl = JsonLinesSink::new(out);
            &mut jsonl
        }
    };

    Ok(game.play(bids, sink)?)
}

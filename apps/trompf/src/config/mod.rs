//! Game configuration: command-line values with environment fallbacks.
//!
//! Environment variables (used only when the flag is absent):
//! - `TROMPF_SEED`: base seed, unsigned 64-bit.
//! - `TROMPF_GUARANTEE_SHOUTS`: `1/true/yes/y` or `0/false/no/n`.

use std::env;
use std::str::FromStr;

use clap::ValueEnum;

use crate::domain::{GameOptions, Player, Team};
use crate::errors::domain::{ConfigKind, DomainError};

pub const SEED_ENV: &str = "TROMPF_SEED";
pub const GUARANTEE_SHOUTS_ENV: &str = "TROMPF_GUARANTEE_SHOUTS";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable transcript.
    #[default]
    Text,
    /// One JSON object per game event.
    Jsonl,
}

/// `NAME:TEAM` from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    pub name: String,
    pub team: Team,
}

impl PlayerSpec {
    pub fn into_player(self) -> Player {
        Player::new(self.name, self.team)
    }
}

impl FromStr for PlayerSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            DomainError::config(
                ConfigKind::PlayerSpec,
                format!("expected NAME:TEAM, got '{s}'"),
            )
        };
        let (name, team) = s.rsplit_once(':').ok_or_else(malformed)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::config(
                ConfigKind::BlankName,
                format!("player name is empty in '{s}'"),
            ));
        }
        let team: u8 = team.trim().parse().map_err(|_| malformed())?;
        Ok(Self {
            name: name.to_string(),
            team: Team::try_from(team)?,
        })
    }
}

/// Split `2,0,4,4` into raw answers; the engine validates each one.
pub fn parse_bid_script(s: &str) -> Vec<String> {
    s.split(',').map(|b| b.trim().to_string()).collect()
}

fn parse_flag(var: &str, raw: &str) -> Result<bool, DomainError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Ok(true),
        "0" | "false" | "no" | "n" => Ok(false),
        other => Err(DomainError::config(
            ConfigKind::Flag,
            format!("{var} must be a yes/no value, got '{other}'"),
        )),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u64>,
    /// `None` means ask the user.
    pub guarantee_shouts: Option<bool>,
    /// Empty means register players interactively.
    pub players: Vec<PlayerSpec>,
    /// Scripted bids; `None` reads them from stdin.
    pub bids: Option<Vec<String>>,
    pub output: OutputFormat,
}

impl GameConfig {
    /// Fill unset values from the process environment.
    pub fn with_env_fallbacks(self) -> Result<Self, DomainError> {
        self.with_fallbacks_from(|key| env::var(key).ok())
    }

    /// Fill unset values from `lookup`.
    pub fn with_fallbacks_from<F>(mut self, lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.seed.is_none() {
            if let Some(raw) = lookup(SEED_ENV) {
                let seed = raw.trim().parse::<u64>().map_err(|_| {
                    DomainError::config(
                        ConfigKind::Seed,
                        format!("{SEED_ENV} must be an unsigned integer, got '{raw}'"),
                    )
                })?;
                self.seed = Some(seed);
            }
        }
        if self.guarantee_shouts.is_none() {
            if let Some(raw) = lookup(GUARANTEE_SHOUTS_ENV) {
                self.guarantee_shouts = Some(parse_flag(GUARANTEE_SHOUTS_ENV, &raw)?);
            }
        }
        Ok(self)
    }

    pub fn options(&self) -> GameOptions {
        GameOptions {
            seed: self.seed,
            guarantee_shouts: self.guarantee_shouts.unwrap_or(false),
        }
    }

    pub fn roster(&self) -> Vec<Player> {
        self.players.iter().cloned().map(PlayerSpec::into_player).collect()
    }
}

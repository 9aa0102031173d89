//! Interactive roster entry.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::console::Prompter;
use crate::domain::rules::{PLAYERS, TEAMS};
use crate::domain::{Player, Team};
use crate::errors::domain::DomainError;

fn ask_name<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    index: usize,
) -> Result<String, DomainError> {
    loop {
        let name = prompter.ask(&format!("Player {} name: ", index + 1))?;
        let name = name.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        prompter.say("Name cannot be empty. Please try again!\n")?;
    }
}

fn ask_team<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    name: &str,
) -> Result<Team, DomainError> {
    loop {
        let raw = prompter.ask(&format!("{name}, which team (1 or 2)? "))?;
        if let Some(team) = raw.trim().parse::<u8>().ok().and_then(|t| Team::try_from(t).ok()) {
            return Ok(team);
        }
        prompter.say("Please enter 1 or 2!\n")?;
    }
}

/// Ask for four players; start over until the teams split 2/2.
pub fn register_players<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<Player>, DomainError> {
    prompter.say("Player Registration:\n")?;
    loop {
        let mut players = Vec::with_capacity(PLAYERS);
        for i in 0..PLAYERS {
            let name = ask_name(prompter, i)?;
            let team = ask_team(prompter, &name)?;
            players.push(Player::new(name, team));
            prompter.say("")?;
        }

        let team_one = players.iter().filter(|p| p.team() == Team::One).count();
        let team_two = PLAYERS - team_one;
        if team_one == PLAYERS / TEAMS {
            return Ok(players);
        }
        warn!(team_one, team_two, "uneven teams, re-registering");
        prompter.say("ERROR: Each team must have exactly 2 players!")?;
        prompter.say(&format!(
            "Team 1: {team_one} players, Team 2: {team_two} players\n"
        ))?;
        prompter.say("Please enter the teams again:\n")?;
    }
}

/// List the players of each team.
pub fn display_teams<W: Write>(out: &mut W, players: &[Player]) -> std::io::Result<()> {
    writeln!(out, "\nTeams: ")?;
    for team in Team::ALL {
        writeln!(out, "{team}:")?;
        for p in players.iter().filter(|p| p.team() == team) {
            writeln!(out, " - {}", p.name())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Only an explicit `y` turns the guaranteed deck on.
pub fn ask_guarantee_shouts<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<bool, DomainError> {
    let answer = prompter.ask("\nDo you want cards with guaranteed shouts? (y/n): ")?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

//! End-of-game tally: card points, shout points and the bid verdict.

use serde::Serialize;

use crate::domain::cards_logic::small_points;
use crate::domain::player::{Player, Team};
use crate::domain::rules::{big_points, TEAMS};
use crate::domain::seats::Seat;
use crate::domain::Card;
use crate::errors::domain::{DomainError, InvariantKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamScore {
    pub team: Team,
    pub card_points: u16,
    pub shout_points: u16,
    pub total: u16,
    pub big_points: u16,
}

impl TeamScore {
    pub fn new(team: Team, card_points: u16, shout_points: u16) -> Self {
        let total = card_points + shout_points;
        Self {
            team,
            card_points,
            shout_points,
            total,
            big_points: big_points(total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalScore {
    pub teams: [TeamScore; TEAMS],
    pub declarer: Seat,
    pub declarer_team: Team,
    pub bid: u8,
    pub made: bool,
}

impl FinalScore {
    pub fn team(&self, team: Team) -> &TeamScore {
        &self.teams[team.index()]
    }

    /// `+bid` when the declarer's team made it, `-bid` otherwise.
    pub fn bid_delta(&self) -> i16 {
        if self.made {
            i16::from(self.bid)
        } else {
            -i16::from(self.bid)
        }
    }
}

/// Score both teams from their won piles and the players' declared shouts.
///
/// `won[t]` holds every card collected by the team with index `t`.
pub fn score_game(
    players: &[Player],
    won: &[Vec<Card>; TEAMS],
    declarer: Seat,
    bid: u8,
) -> Result<FinalScore, DomainError> {
    let declarer_team = players
        .get(usize::from(declarer))
        .map(Player::team)
        .ok_or_else(|| {
            DomainError::invariant(
                InvariantKind::DeclarerUnset,
                format!("declarer seat {declarer} has no player"),
            )
        })?;

    let teams = Team::ALL.map(|team| {
        let shouts: u16 = players
            .iter()
            .filter(|p| p.team() == team)
            .map(Player::shout_points)
            .sum();
        TeamScore::new(team, small_points(&won[team.index()]), shouts)
    });

    let made = teams[declarer_team.index()].big_points >= u16::from(bid);
    Ok(FinalScore {
        teams,
        declarer,
        declarer_team,
        bid,
        made,
    })
}

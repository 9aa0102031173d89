//! The game engine: one deal, one bidding round, six tricks, one score.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::bidding::{run_bidding, BidSource, BiddingOutcome};
use crate::domain::cards_logic::small_points;
use crate::domain::dealing::{deal_hands, Deck, DeckMode};
use crate::domain::events::{EventSink, GameEvent, SeatHand};
use crate::domain::play_policy::choose_card;
use crate::domain::player::{Player, Team};
use crate::domain::rules::{DECK_SIZE, PLAYERS, TEAMS, TRICKS_PER_GAME};
use crate::domain::scoring::{score_game, FinalScore};
use crate::domain::seats::{seat_order, Seat};
use crate::domain::seed_derivation::{
    derive_bidding_seed, derive_shuffle_seed, resolve_game_seed, rng_from_seed,
};
use crate::domain::tricks::{resolve_trick, Play, Trick};
use crate::domain::{Card, Suit};
use crate::errors::domain::{ConfigKind, DomainError, InvariantKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameOptions {
    /// Base seed; drawn from OS entropy when absent.
    pub seed: Option<u64>,
    pub guarantee_shouts: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Init,
    Dealt,
    Bidding,
    Trick { number: u8 },
    Scoring,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickRecord {
    pub number: u8,
    pub leader: Seat,
    pub plays: Vec<Play>,
    pub winner: Seat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    pub seed: u64,
    pub trump: Suit,
    pub declarer: Seat,
    pub bid: u8,
    pub tricks: Vec<TrickRecord>,
    pub score: FinalScore,
}

#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    seed: u64,
    mode: DeckMode,
    deck: Deck,
    won: [Vec<Card>; TEAMS],
    trump: Option<Suit>,
    lead_seat: Seat,
    declarer: Option<(Seat, u8)>,
    phase: Phase,
    tricks: Vec<TrickRecord>,
}

fn validate_roster(players: &[Player]) -> Result<(), DomainError> {
    if players.len() != PLAYERS {
        return Err(DomainError::config(
            ConfigKind::PlayerCount,
            format!(
                "The game must have exactly {PLAYERS} players! Current count: {}",
                players.len()
            ),
        ));
    }
    if players.iter().any(|p| p.name().trim().is_empty()) {
        return Err(DomainError::config(
            ConfigKind::BlankName,
            "All players must have valid names!",
        ));
    }
    let team_one = players.iter().filter(|p| p.team() == Team::One).count();
    if team_one != PLAYERS / TEAMS {
        return Err(DomainError::config(
            ConfigKind::TeamSplit,
            format!(
                "Each team must have exactly 2 players! Team 1: {team_one}, Team 2: {}",
                PLAYERS - team_one
            ),
        ));
    }
    Ok(())
}

impl Game {
    /// Validate the roster and set up an undealt game.
    pub fn new(mut players: Vec<Player>, options: GameOptions) -> Result<Self, DomainError> {
        validate_roster(&players)?;
        players.iter_mut().for_each(Player::reset);
        let mode = if options.guarantee_shouts {
            DeckMode::ShoutGuaranteed
        } else {
            DeckMode::Random
        };
        Ok(Self {
            players,
            seed: resolve_game_seed(options.seed),
            mode,
            deck: Deck::default(),
            won: Default::default(),
            trump: None,
            lead_seat: 0,
            declarer: None,
            phase: Phase::Init,
            tricks: Vec::new(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mode(&self) -> DeckMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn lead_seat(&self) -> Seat {
        self.lead_seat
    }

    /// Declarer seat and bid once bidding is over.
    pub fn declarer(&self) -> Option<(Seat, u8)> {
        self.declarer
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn won_cards(&self, team: Team) -> &[Card] {
        &self.won[team.index()]
    }

    pub fn tricks(&self) -> &[TrickRecord] {
        &self.tricks
    }

    fn require_phase(&self, expected: Phase) -> Result<(), DomainError> {
        if self.phase != expected {
            return Err(DomainError::invariant(
                InvariantKind::PhaseMismatch,
                format!("expected phase {expected:?}, game is in {:?}", self.phase),
            ));
        }
        Ok(())
    }

    fn require_trump(&self) -> Result<Suit, DomainError> {
        self.trump
            .ok_or_else(|| DomainError::invariant(InvariantKind::TrumpUnset, "trump is not set"))
    }

    fn require_declarer(&self) -> Result<(Seat, u8), DomainError> {
        self.declarer.ok_or_else(|| {
            DomainError::invariant(
                InvariantKind::DeclarerUnset,
                "Bidding has not been established yet!",
            )
        })
    }

    /// deck + hands + won piles must always account for every card.
    fn check_conservation(&self) -> Result<(), DomainError> {
        let in_hands: usize = self.players.iter().map(|p| p.hand().len()).sum();
        let in_piles: usize = self.won.iter().map(Vec::len).sum();
        let total = self.deck.len() + in_hands + in_piles;
        if total != DECK_SIZE {
            return Err(DomainError::invariant(
                InvariantKind::CardConservation,
                format!(
                    "{total} cards accounted for (deck {}, hands {in_hands}, won {in_piles})",
                    self.deck.len()
                ),
            ));
        }
        Ok(())
    }

    /// Build the deck for the configured mode and deal six cards to every seat.
    pub fn prepare_and_deal(&mut self, sink: &mut dyn EventSink) -> Result<(), DomainError> {
        self.require_phase(Phase::Init)?;

        let mut rng = rng_from_seed(derive_shuffle_seed(self.seed));
        self.deck = Deck::build(self.mode, &mut rng)?;
        info!(mode = ?self.mode, seed = self.seed, "deck prepared");
        sink.emit(&GameEvent::DeckPrepared {
            mode: self.mode,
            seed: self.seed,
        })?;

        let hands = deal_hands(&mut self.deck)?;
        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.take_hand(hand);
        }
        self.check_conservation()?;
        self.phase = Phase::Dealt;

        let hands = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, p)| SeatHand {
                seat: seat as Seat,
                name: p.name().to_string(),
                team: p.team(),
                cards: p.hand().to_vec(),
            })
            .collect();
        sink.emit(&GameEvent::CardsDealt { hands })?;
        Ok(())
    }

    /// Collect bids from `source`, starting at a seeded random seat.
    pub fn run_bidding(
        &mut self,
        source: &mut dyn BidSource,
        sink: &mut dyn EventSink,
    ) -> Result<BiddingOutcome, DomainError> {
        self.require_phase(Phase::Dealt)?;
        self.phase = Phase::Bidding;

        let mut rng = rng_from_seed(derive_bidding_seed(self.seed));
        let start: Seat = rng.random_range(0..PLAYERS as Seat);
        let outcome = run_bidding(&mut self.players, start, source, sink)?;

        let declarer = outcome.declarer;
        let bid = outcome.bid.value();
        let team = self.players[usize::from(declarer)].team();
        self.declarer = Some((declarer, bid));
        self.lead_seat = match self.mode {
            DeckMode::ShoutGuaranteed => 0,
            DeckMode::Random => declarer,
        };
        info!(declarer, %team, bid, lead = self.lead_seat, "declarer chosen");
        sink.emit(&GameEvent::DeclarerChosen {
            seat: declarer,
            team,
            bid,
        })?;

        self.phase = Phase::Trick { number: 1 };
        Ok(outcome)
    }

    /// Play the current trick to completion and hand the lead to its winner.
    pub fn play_trick(&mut self, sink: &mut dyn EventSink) -> Result<TrickRecord, DomainError> {
        let number = match self.phase {
            Phase::Trick { number } => number,
            other => {
                return Err(DomainError::invariant(
                    InvariantKind::PhaseMismatch,
                    format!("no trick to play in phase {other:?}"),
                ))
            }
        };
        let leader = self.lead_seat;
        sink.emit(&GameEvent::TrickStarted { number, leader })?;

        let mut trick = Trick::new();
        for seat in seat_order(leader) {
            let player = &mut self.players[usize::from(seat)];
            if player.hand().is_empty() {
                return Err(DomainError::invariant(
                    InvariantKind::HandSize,
                    format!("{} has no cards to play in trick {number}!", player.name()),
                ));
            }

            if trick.is_empty() {
                if let Some(trump) = self.trump {
                    for shout in player.declare_shouts(seat, trump) {
                        info!(seat, suit = ?shout.suit, points = shout.points(), "shout");
                        sink.emit(&GameEvent::ShoutDetected { shout })?;
                    }
                }
            }

            let card = choose_card(player.hand(), &trick, self.trump)?;
            player.remove_card(card)?;
            trick.add_play(seat, card)?;
            debug!(trick = number, seat, %card, "card played");
            sink.emit(&GameEvent::CardPlayed {
                trick: number,
                seat,
                card,
            })?;

            if self.trump.is_none() {
                self.trump = Some(card.suit);
                info!(suit = ?card.suit, "trump established");
                sink.emit(&GameEvent::TrumpEstablished { suit: card.suit })?;
            }
        }

        let trump = self.require_trump()?;
        let winner = resolve_trick(&trick, trump)?;
        let team = self.players[usize::from(winner.seat)].team();
        let cards = trick.cards();
        let points = small_points(&cards);
        self.won[team.index()].extend(cards);
        self.lead_seat = winner.seat;
        self.check_conservation()?;

        info!(trick = number, seat = winner.seat, %team, points, "trick won");
        sink.emit(&GameEvent::TrickWon {
            trick: number,
            seat: winner.seat,
            team,
            points,
        })?;

        let record = TrickRecord {
            number,
            leader,
            plays: trick.plays().to_vec(),
            winner: winner.seat,
        };
        self.tricks.push(record.clone());
        self.phase = if number >= TRICKS_PER_GAME {
            Phase::Scoring
        } else {
            Phase::Trick { number: number + 1 }
        };
        Ok(record)
    }

    /// Play every remaining trick.
    pub fn play_tricks(&mut self, sink: &mut dyn EventSink) -> Result<(), DomainError> {
        while matches!(self.phase, Phase::Trick { .. }) {
            self.play_trick(sink)?;
        }
        self.require_phase(Phase::Scoring)?;
        if let Some(p) = self.players.iter().find(|p| !p.hand().is_empty()) {
            return Err(DomainError::invariant(
                InvariantKind::HandSize,
                format!("{} still holds {} cards", p.name(), p.hand().len()),
            ));
        }
        Ok(())
    }

    /// Tally both teams and judge the declarer's bid.
    pub fn score(&mut self, sink: &mut dyn EventSink) -> Result<FinalScore, DomainError> {
        self.require_phase(Phase::Scoring)?;
        let (declarer, bid) = self.require_declarer()?;
        let score = score_game(&self.players, &self.won, declarer, bid)?;
        info!(
            team = %score.declarer_team,
            bid,
            made = score.made,
            "final score"
        );
        sink.emit(&GameEvent::FinalScore {
            score: score.clone(),
        })?;
        self.phase = Phase::Complete;
        Ok(score)
    }

    /// Run the whole game from deal to score.
    pub fn play(
        &mut self,
        bids: &mut dyn BidSource,
        sink: &mut dyn EventSink,
    ) -> Result<GameOutcome, DomainError> {
        self.prepare_and_deal(sink)?;
        self.run_bidding(bids, sink)?;
        self.play_tricks(sink)?;
        let score = self.score(sink)?;
        let (declarer, bid) = self.require_declarer()?;
        Ok(GameOutcome {
            seed: self.seed,
            trump: self.require_trump()?,
            declarer,
            bid,
            tricks: self.tricks.clone(),
            score,
        })
    }
}

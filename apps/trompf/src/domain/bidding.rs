//! Bidding: one bid per seat, bounded re-asks on bad input, declarer choice.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::domain::events::{EventSink, GameEvent};
use crate::domain::player::Player;
use crate::domain::rules::{valid_bid_range, MAX_BID, MAX_BID_ATTEMPTS, PLAYERS};
use crate::domain::seats::{seat_order, Seat};
use crate::errors::domain::{DomainError, FatalKind, InputKind, InvariantKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Bid(pub u8);

impl Bid {
    pub fn value(self) -> u8 {
        self.0
    }
}

/// What the engine asks the collaborator for.
#[derive(Debug, Clone, Copy)]
pub struct BidRequest<'a> {
    pub seat: Seat,
    pub name: &'a str,
    /// 1-based.
    pub attempt: u8,
    pub max_attempts: u8,
}

/// Supplier of raw bid text (console, script, test double).
pub trait BidSource {
    fn next_bid(&mut self, request: &BidRequest<'_>) -> Result<String, DomainError>;
}

/// Pre-recorded answers consumed in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBids {
    answers: VecDeque<String>,
}

impl ScriptedBids {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl BidSource for ScriptedBids {
    fn next_bid(&mut self, request: &BidRequest<'_>) -> Result<String, DomainError> {
        self.answers.pop_front().ok_or_else(|| {
            DomainError::fatal(
                FatalKind::InputClosed,
                format!("No bid available for {}", request.name),
            )
        })
    }
}

/// Parse one answer into a bid in `0..=4`.
pub fn parse_bid(raw: &str) -> Result<Bid, DomainError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        DomainError::input(
            InputKind::BidUnparsable,
            format!("'{trimmed}' is not a number"),
        )
    })?;
    let range = valid_bid_range();
    match u8::try_from(value) {
        Ok(v) if range.contains(&v) => Ok(Bid(v)),
        _ => Err(DomainError::input(
            InputKind::BidOutOfRange,
            format!("Bid must be between 0 and {MAX_BID}, got {value}"),
        )),
    }
}

/// Ask `source` until it yields a valid bid, at most `MAX_BID_ATTEMPTS` times.
pub fn request_bid(
    seat: Seat,
    name: &str,
    source: &mut dyn BidSource,
    sink: &mut dyn EventSink,
) -> Result<Bid, DomainError> {
    for attempt in 1..=MAX_BID_ATTEMPTS {
        let request = BidRequest {
            seat,
            name,
            attempt,
            max_attempts: MAX_BID_ATTEMPTS,
        };
        let raw = source.next_bid(&request)?;
        match parse_bid(&raw) {
            Ok(bid) => return Ok(bid),
            Err(err) if err.is_retryable() => {
                warn!(seat, attempt, error = %err, "bid rejected");
                sink.emit(&GameEvent::BidRejected {
                    seat,
                    attempt,
                    reason: err.to_string(),
                })?;
            }
            Err(err) => return Err(err),
        }
    }
    Err(DomainError::fatal(
        FatalKind::BidAttemptsExhausted,
        format!("Failed to get valid bid from {name} after {MAX_BID_ATTEMPTS} attempts."),
    ))
}

/// First seat, in speaking order, whose bid equals the maximum.
pub fn determine_declarer(bids: &[(Seat, Bid)]) -> Option<(Seat, Bid)> {
    let mut best: Option<(Seat, Bid)> = None;
    for &(seat, bid) in bids {
        match best {
            Some((_, b)) if bid.0 <= b.0 => {}
            _ => best = Some((seat, bid)),
        }
    }
    best
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiddingOutcome {
    pub start: Seat,
    /// In speaking order.
    pub bids: Vec<(Seat, Bid)>,
    pub declarer: Seat,
    pub bid: Bid,
}

/// Collect one bid per seat starting at `start` and pick the declarer.
pub fn run_bidding(
    players: &mut [Player],
    start: Seat,
    source: &mut dyn BidSource,
    sink: &mut dyn EventSink,
) -> Result<BiddingOutcome, DomainError> {
    if players.len() != PLAYERS {
        return Err(DomainError::invariant_other(format!(
            "bidding needs {PLAYERS} players, got {}",
            players.len()
        )));
    }
    sink.emit(&GameEvent::BiddingStarted { start })?;

    let mut bids = Vec::with_capacity(PLAYERS);
    for seat in seat_order(start) {
        let player = &mut players[usize::from(seat)];
        let bid = request_bid(seat, player.name(), source, sink)?;
        player.set_bid(bid.0);
        debug!(seat, bid = bid.0, "bid placed");
        sink.emit(&GameEvent::BidPlaced { seat, bid: bid.0 })?;
        bids.push((seat, bid));
    }

    let (declarer, bid) = determine_declarer(&bids).ok_or_else(|| {
        DomainError::invariant(
            InvariantKind::DeclarerUnset,
            "Bidding winner could not be determined!",
        )
    })?;
    Ok(BiddingOutcome {
        start,
        bids,
        declarer,
        bid,
    })
}

//! Human-readable game transcript.

use std::io::{self, Write};

use crate::console::io_fatal;
use crate::domain::dealing::DeckMode;
use crate::domain::{EventSink, FinalScore, GameEvent, Seat, Team};
use crate::errors::domain::DomainError;

/// Writes each event as transcript lines.
///
/// Seat names and teams are learned from the `CardsDealt` event.
pub struct TextRenderer<W> {
    out: W,
    seats: Vec<(String, Team)>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seats: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn who(&self, seat: Seat) -> String {
        match self.seats.get(usize::from(seat)) {
            Some((name, team)) => format!("{name} ({team})"),
            None => format!("Seat {seat}"),
        }
    }

    fn name(&self, seat: Seat) -> String {
        match self.seats.get(usize::from(seat)) {
            Some((name, _)) => name.clone(),
            None => format!("Seat {seat}"),
        }
    }

    fn write_score(&mut self, score: &FinalScore) -> io::Result<()> {
        writeln!(self.out, "\nFINAL SCORE:")?;
        for sheet in &score.teams {
            let team = sheet.team;
            writeln!(self.out, "{team} small points from cards: {}", sheet.card_points)?;
            writeln!(self.out, "{team} shout points: {}", sheet.shout_points)?;
            writeln!(
                self.out,
                "{team} total small points: {} (big points: {})",
                sheet.total, sheet.big_points
            )?;
            writeln!(self.out)?;
        }
        let verdict = if score.made { "made" } else { "failed" };
        let sign = if score.made { '+' } else { '-' };
        writeln!(
            self.out,
            "{} {verdict} the bid! {sign}{}",
            score.declarer_team, score.bid
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "             GAME COMPLETED SUCCESSFULLY!                ")?;
        writeln!(self.out)
    }

    fn write_event(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::DeckPrepared { mode, seed } => {
                writeln!(self.out)?;
                writeln!(self.out, "             WELCOME TO TROMPF GAME              ")?;
                writeln!(self.out, "             6 rounds of card play               ")?;
                writeln!(self.out)?;
                let deck = match mode {
                    DeckMode::Random => "shuffled",
                    DeckMode::ShoutGuaranteed => "guaranteed shouts",
                };
                writeln!(self.out, "Deck: {deck} (seed {seed})")?;
            }
            GameEvent::CardsDealt { hands } => {
                self.seats = hands.iter().map(|h| (h.name.clone(), h.team)).collect();
                writeln!(self.out, "Cards shared!\n")?;
                for hand in hands {
                    writeln!(self.out, "{}:", hand.name)?;
                    for card in &hand.cards {
                        writeln!(self.out, " {card}")?;
                    }
                    writeln!(self.out)?;
                }
            }
            GameEvent::BiddingStarted { start } => {
                writeln!(self.out, "\nBIDDING PHASE:")?;
                let name = self.name(*start);
                writeln!(self.out, "{name} bids first.")?;
            }
            GameEvent::BidRejected { reason, .. } => {
                writeln!(self.out, "Invalid bid: {reason}")?;
            }
            GameEvent::BidPlaced { seat, bid } => {
                let name = self.name(*seat);
                writeln!(self.out, "{name} bids {bid}")?;
            }
            GameEvent::DeclarerChosen { seat, bid, .. } => {
                let who = self.who(*seat);
                writeln!(self.out, "\n{who} wins bidding with {bid} points!\n")?;
                writeln!(self.out, "\nGAME PLAY\n")?;
            }
            GameEvent::TrickStarted { number, .. } => {
                writeln!(self.out, "\nROUND {number}:")?;
            }
            GameEvent::ShoutDetected { shout } => {
                let name = self.name(shout.seat);
                writeln!(self.out, "\nDETECTED SHOUTS:")?;
                writeln!(self.out, "{name} - {shout}\n")?;
            }
            GameEvent::CardPlayed { seat, card, .. } => {
                let who = self.who(*seat);
                writeln!(self.out, "{who} plays: {card}")?;
            }
            GameEvent::TrumpEstablished { suit } => {
                writeln!(self.out, "TRUMP SUIT ESTABLISHED: {suit}")?;
            }
            GameEvent::TrickWon { seat, .. } => {
                let who = self.who(*seat);
                writeln!(self.out, "\nRound winner: {who}")?;
            }
            GameEvent::FinalScore { score } => self.write_score(score)?,
        }
        Ok(())
    }
}

impl<W: Write> EventSink for TextRenderer<W> {
    fn emit(&mut self, event: &GameEvent) -> Result<(), DomainError> {
        self.write_event(event).map_err(io_fatal)?;
        self.out.flush().map_err(io_fatal)
    }
}

use crate::domain::bidding::ScriptedBids;
use crate::domain::cards_logic::small_points;
use crate::domain::events::GameEvent;
use crate::domain::game::{Game, GameOptions, Phase};
use crate::domain::player::{Player, Team};
use crate::domain::rules::{big_points, TRICKS_PER_GAME};
use crate::domain::shouts::ShoutKind;
use crate::domain::{Card, Suit};
use crate::errors::domain::{ConfigKind, DomainError, InvariantKind};

fn roster() -> Vec<Player> {
    vec![
        Player::new("P1", Team::One),
        Player::new("P2", Team::One),
        Player::new("P3", Team::Two),
        Player::new("P4", Team::Two),
    ]
}

fn seeded(seed: u64, guarantee_shouts: bool) -> Game {
    Game::new(
        roster(),
        GameOptions {
            seed: Some(seed),
            guarantee_shouts,
        },
    )
    .unwrap()
}

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

#[test]
fn construction_rejects_wrong_player_count() {
    let mut players = roster();
    players.pop();
    let err = Game::new(players, GameOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Configuration(ConfigKind::PlayerCount, _)
    ));
    assert_eq!(err.label(), "CONFIGURATION ERROR");
}

#[test]
fn construction_rejects_blank_names() {
    let mut players = roster();
    players[1] = Player::new("   ", Team::One);
    assert!(matches!(
        Game::new(players, GameOptions::default()),
        Err(DomainError::Configuration(ConfigKind::BlankName, _))
    ));
}

#[test]
fn construction_rejects_uneven_teams() {
    let mut players = roster();
    players[2] = Player::new("P3", Team::One);
    assert!(matches!(
        Game::new(players, GameOptions::default()),
        Err(DomainError::Configuration(ConfigKind::TeamSplit, _))
    ));
}

#[test]
fn steps_out_of_order_are_phase_mismatches() {
    let mut game = seeded(1, false);
    let mut events: Vec<GameEvent> = Vec::new();

    let err = game.play_trick(&mut events).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invariant(InvariantKind::PhaseMismatch, _)
    ));
    assert!(game.score(&mut events).is_err());

    game.prepare_and_deal(&mut events).unwrap();
    assert_eq!(game.phase(), Phase::Dealt);
    assert!(matches!(
        game.prepare_and_deal(&mut events),
        Err(DomainError::Invariant(InvariantKind::PhaseMismatch, _))
    ));
}

#[test]
fn dealing_accounts_for_every_card() {
    let mut game = seeded(9, false);
    let mut events: Vec<GameEvent> = Vec::new();
    game.prepare_and_deal(&mut events).unwrap();
    assert_eq!(game.deck_len(), 0);
    assert!(game.players().iter().all(|p| p.hand().len() == 6));
    assert!(matches!(
        events.as_slice(),
        [GameEvent::DeckPrepared { seed: 9, .. }, GameEvent::CardsDealt { .. }]
    ));
}

#[test]
fn seed_42_full_game_runs_six_tricks() {
    let mut game = seeded(42, false);
    let mut bids = ScriptedBids::new(["2", "0", "4", "4"]);
    let mut events: Vec<GameEvent> = Vec::new();

    let outcome = game.play(&mut bids, &mut events).unwrap();

    assert_eq!(game.phase(), Phase::Complete);
    assert_eq!(outcome.tricks.len(), usize::from(TRICKS_PER_GAME));
    assert!(game.players().iter().all(|p| p.hand().is_empty()));
    assert_eq!(outcome.bid, 4);

    // Trump is the very first card of the game; the declarer leads it.
    let first = outcome.tricks[0].plays[0];
    assert_eq!(first.seat, outcome.declarer);
    assert_eq!(outcome.trump, first.card.suit);

    // Each winner leads the next trick.
    for pair in outcome.tricks.windows(2) {
        assert_eq!(pair[1].leader, pair[0].winner);
    }

    // Score sheet agrees with the won piles and shouts.
    let mut card_total = 0;
    for team in Team::ALL {
        let sheet = outcome.score.team(team);
        assert_eq!(sheet.card_points, small_points(game.won_cards(team)));
        let shouts: u16 = game
            .players()
            .iter()
            .filter(|p| p.team() == team)
            .map(Player::shout_points)
            .sum();
        assert_eq!(sheet.shout_points, shouts);
        assert_eq!(sheet.big_points, big_points(sheet.card_points + shouts));
        card_total += sheet.card_points;
    }
    assert_eq!(card_total, 120);

    let plays = events
        .iter()
        .filter(|e| matches!(e, GameEvent::CardPlayed { .. }))
        .count();
    assert_eq!(plays, 24);
    assert!(matches!(events.last(), Some(GameEvent::FinalScore { .. })));
}

#[test]
fn same_seed_replays_identically() {
    let run = || {
        let mut game = seeded(42, false);
        let mut bids = ScriptedBids::new(["1", "3", "2", "0"]);
        let mut events: Vec<GameEvent> = Vec::new();
        let outcome = game.play(&mut bids, &mut events).unwrap();
        (outcome, events)
    };
    let (a, a_events) = run();
    let (b, b_events) = run();
    assert_eq!(a, b);
    assert_eq!(a_events, b_events);
}

#[test]
fn trump_is_announced_right_after_the_first_play() {
    let mut game = seeded(7, false);
    let mut bids = ScriptedBids::new(["0", "0", "0", "0"]);
    let mut events: Vec<GameEvent> = Vec::new();
    game.play(&mut bids, &mut events).unwrap();

    let first_play = events
        .iter()
        .position(|e| matches!(e, GameEvent::CardPlayed { .. }))
        .unwrap();
    assert!(matches!(
        events[first_play + 1],
        GameEvent::TrumpEstablished { .. }
    ));
    let announcements = events
        .iter()
        .filter(|e| matches!(e, GameEvent::TrumpEstablished { .. }))
        .count();
    assert_eq!(announcements, 1);
}

#[test]
fn guaranteed_shouts_seat_zero_leads_and_shouts_big() {
    let mut game = seeded(42, true);
    let mut bids = ScriptedBids::new(["4", "4", "4", "4"]);
    let mut events: Vec<GameEvent> = Vec::new();

    let outcome = game.play(&mut bids, &mut events).unwrap();

    // Seat 0 opens with its Ace of Red, fixing Red as trump.
    let opening = outcome.tricks[0].plays[0];
    assert_eq!(opening.seat, 0);
    assert_eq!(opening.card, card("AR"));
    assert_eq!(outcome.trump, Suit::Red);
    assert_eq!(outcome.tricks[0].winner, 0);

    // Leading trick 2, seat 0 still holds Three and Four of trump.
    let shouts: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::ShoutDetected { shout } => Some(shout.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(shouts.len(), 1);
    assert_eq!(shouts[0].seat, 0);
    assert_eq!(shouts[0].kind, ShoutKind::Big);
    assert_eq!(shouts[0].suit, Suit::Red);
    assert_eq!(game.players()[0].shout_points(), 40);

    let winners: Vec<_> = outcome.tricks.iter().map(|t| t.winner).collect();
    assert_eq!(winners, vec![0, 0, 0, 2, 0, 1]);

    let one = outcome.score.team(Team::One);
    let two = outcome.score.team(Team::Two);
    assert_eq!((one.card_points, one.shout_points), (95, 40));
    assert_eq!(one.big_points, 4);
    assert_eq!((two.card_points, two.shout_points), (25, 0));
    assert_eq!(two.big_points, 0);
    assert_eq!(outcome.score.made, outcome.score.declarer_team == Team::One);
}

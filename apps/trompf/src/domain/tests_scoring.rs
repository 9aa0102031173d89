use crate::domain::cards_logic::small_points;
use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::dealing::full_deck;
use crate::domain::player::{Player, Team};
use crate::domain::scoring::{score_game, TeamScore};
use crate::domain::Suit;
use crate::errors::domain::{DomainError, InvariantKind};

fn roster() -> Vec<Player> {
    vec![
        Player::new("P1", Team::One),
        Player::new("P2", Team::One),
        Player::new("P3", Team::Two),
        Player::new("P4", Team::Two),
    ]
}

#[test]
fn whole_deck_is_worth_120_small_points() {
    assert_eq!(small_points(&full_deck()), 120);
}

#[test]
fn big_points_truncate() {
    assert_eq!(TeamScore::new(Team::One, 32, 0).big_points, 0);
    assert_eq!(TeamScore::new(Team::One, 13, 20).big_points, 1);
    assert_eq!(TeamScore::new(Team::Two, 65, 40).big_points, 3);
    assert_eq!(TeamScore::new(Team::Two, 65, 40).total, 105);
}

#[test]
fn shouts_count_only_for_their_team() {
    let mut players = roster();
    players[2].take_hand(try_parse_cards(["3G", "4G"]).unwrap());
    players[2].declare_shouts(2, Suit::Red);
    players[2].take_hand(Vec::new());

    let won = [full_deck(), Vec::new()];
    let score = score_game(&players, &won, 0, 4).unwrap();

    let one = score.team(Team::One);
    assert_eq!((one.card_points, one.shout_points, one.total), (120, 0, 120));
    assert_eq!(one.big_points, 3);
    let two = score.team(Team::Two);
    assert_eq!((two.card_points, two.shout_points, two.total), (0, 20, 20));
    assert_eq!(two.big_points, 0);

    assert_eq!(score.declarer_team, Team::One);
    assert!(!score.made);
    assert_eq!(score.bid_delta(), -4);
}

#[test]
fn bid_is_made_at_exactly_the_bid() {
    let players = roster();
    let won = [Vec::new(), full_deck()];
    let score = score_game(&players, &won, 3, 3).unwrap();
    assert_eq!(score.declarer_team, Team::Two);
    assert!(score.made);
    assert_eq!(score.bid_delta(), 3);
}

#[test]
fn zero_bid_is_always_made() {
    let players = roster();
    let won = [full_deck(), Vec::new()];
    let score = score_game(&players, &won, 1, 0).unwrap();
    assert!(score.made);
}

#[test]
fn unknown_declarer_seat_is_an_invariant_violation() {
    let players = roster();
    let won = [Vec::new(), Vec::new()];
    let err = score_game(&players, &won, 7, 1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invariant(InvariantKind::DeclarerUnset, _)
    ));
}

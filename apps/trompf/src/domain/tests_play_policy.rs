use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::play_policy::{choose_card, choose_follow_card, choose_lead_card};
use crate::domain::tricks::Trick;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, InvariantKind};

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens.iter().copied()).unwrap()
}

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

fn trick_of(tokens: &[&str]) -> Trick {
    let mut trick = Trick::new();
    for (seat, c) in cards(tokens).into_iter().enumerate() {
        trick.add_play(seat as u8, c).unwrap();
    }
    trick
}

#[test]
fn lead_prefers_longest_suit_and_plays_its_top() {
    let hand = cards(&["2R", "9H", "TR", "AH", "4G", "3R"]);
    assert_eq!(choose_lead_card(&hand).unwrap(), card("TR"));
}

#[test]
fn lead_breaks_length_ties_on_points() {
    let hand = cards(&["TR", "9R", "AH", "9H"]);
    assert_eq!(choose_lead_card(&hand).unwrap(), card("AH"));
}

#[test]
fn lead_full_tie_keeps_first_seen_suit() {
    assert_eq!(choose_lead_card(&cards(&["9G", "9H"])).unwrap(), card("9G"));
    assert_eq!(choose_lead_card(&cards(&["2H", "2G"])).unwrap(), card("2H"));
}

#[test]
fn follower_plays_cheapest_winning_card_of_lead_suit() {
    let trick = trick_of(&["9H"]);
    let hand = cards(&["AH", "2H", "TH", "AR"]);
    assert_eq!(
        choose_follow_card(&hand, &trick, Suit::Red).unwrap(),
        card("TH")
    );
}

#[test]
fn follower_who_cannot_win_plays_lowest_of_lead_suit() {
    let trick = trick_of(&["AH"]);
    let hand = cards(&["TH", "2H", "AR"]);
    assert_eq!(
        choose_follow_card(&hand, &trick, Suit::Red).unwrap(),
        card("2H")
    );
}

#[test]
fn lead_suit_cannot_beat_a_trumped_trick() {
    let trick = trick_of(&["TH", "2R"]);
    let hand = cards(&["AH", "3H"]);
    assert_eq!(
        choose_follow_card(&hand, &trick, Suit::Red).unwrap(),
        card("3H")
    );
}

#[test]
fn void_follower_trumps_with_cheapest_winner() {
    let trick = trick_of(&["AH", "4R"]);
    let hand = cards(&["TR", "2R", "AG"]);
    assert_eq!(
        choose_follow_card(&hand, &trick, Suit::Red).unwrap(),
        card("TR")
    );
}

#[test]
fn void_follower_who_cannot_overtrump_plays_lowest_trump() {
    let trick = trick_of(&["AH", "AR"]);
    let hand = cards(&["9G", "TR", "2R"]);
    assert_eq!(
        choose_follow_card(&hand, &trick, Suit::Red).unwrap(),
        card("2R")
    );
}

#[test]
fn follower_without_lead_or_trump_discards_first_lowest() {
    let trick = trick_of(&["AH"]);
    let hand = cards(&["TG", "9A", "9G", "2A"]);
    assert_eq!(
        choose_follow_card(&hand, &trick, Suit::Red).unwrap(),
        card("2A")
    );
    let hand = cards(&["TG", "9A", "9G"]);
    assert_eq!(
        choose_follow_card(&hand, &trick, Suit::Red).unwrap(),
        card("9A")
    );
}

#[test]
fn first_card_of_game_is_a_lead_without_trump() {
    let hand = cards(&["AR", "3R", "4R", "2H"]);
    assert_eq!(
        choose_card(&hand, &Trick::new(), None).unwrap(),
        card("AR")
    );
}

#[test]
fn following_without_trump_is_an_invariant_violation() {
    let trick = trick_of(&["AH"]);
    let err = choose_card(&cards(&["2H"]), &trick, None).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invariant(InvariantKind::TrumpUnset, _)
    ));
}

#[test]
fn empty_hand_cannot_choose() {
    let err = choose_lead_card(&[]).unwrap_err();
    assert!(matches!(err, DomainError::Invariant(InvariantKind::HandSize, _)));
}

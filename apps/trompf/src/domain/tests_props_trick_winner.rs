use proptest::prelude::*;

use crate::domain::domain_prop_helpers::oracle_trick_winner;
use crate::domain::tricks::{trick_winner_index, Trick};
use crate::domain::{card_beats, test_gens, test_prelude};

fn build_trick(plays: &[(u8, crate::domain::Card)]) -> Trick {
    let mut trick = Trick::new();
    for &(seat, card) in plays {
        trick.add_play(seat, card).unwrap();
    }
    trick
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: no card beats itself.
    #[test]
    fn prop_beats_is_irreflexive(
        card in test_gens::card(),
        lead in test_gens::suit(),
        trump in test_gens::suit(),
    ) {
        prop_assert!(!card_beats(card, card, lead, trump));
    }

    /// Property: for two distinct cards at most one beats the other.
    #[test]
    fn prop_beats_is_antisymmetric(
        pair in test_gens::unique_cards(2),
        lead in test_gens::suit(),
        trump in test_gens::suit(),
    ) {
        let (a, b) = (pair[0], pair[1]);
        prop_assert!(
            !(card_beats(a, b, lead, trump) && card_beats(b, a, lead, trump)),
            "{:?} and {:?} beat each other (lead {:?}, trump {:?})", a, b, lead, trump
        );
    }

    /// Property: the incremental left-to-right winner matches an independent oracle.
    #[test]
    fn prop_incremental_winner_matches_oracle(
        (_leader, plays, trump) in test_gens::complete_trick(),
    ) {
        let trick = build_trick(&plays);
        let idx = trick_winner_index(&trick, trump).unwrap();
        prop_assert_eq!(idx, oracle_trick_winner(&plays, trump));
    }

    /// Property: the winner is always one of the four plays and no other play beats it.
    #[test]
    fn prop_winner_index_in_range_and_unbeaten(
        (_leader, plays, trump) in test_gens::complete_trick(),
    ) {
        let trick = build_trick(&plays);
        let lead = plays[0].1.suit;
        let idx = trick_winner_index(&trick, trump).unwrap();
        prop_assert!(idx <= 3);
        let winner = plays[idx].1;
        for (i, &(_, other)) in plays.iter().enumerate() {
            if i != idx {
                prop_assert!(
                    !card_beats(other, winner, lead, trump),
                    "{:?} beats winner {:?}", other, winner
                );
            }
        }
    }

    /// Property: when any trump is played, a trump wins.
    #[test]
    fn prop_trump_in_trick_wins(
        (_leader, plays, trump) in test_gens::complete_trick(),
    ) {
        let trick = build_trick(&plays);
        let idx = trick_winner_index(&trick, trump).unwrap();
        if plays.iter().any(|(_, c)| c.suit == trump) {
            prop_assert_eq!(plays[idx].1.suit, trump);
        } else {
            prop_assert_eq!(plays[idx].1.suit, plays[0].1.suit);
        }
    }
}

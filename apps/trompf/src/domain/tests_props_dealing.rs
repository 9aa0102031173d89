use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::dealing::{deal_hands, Deck, DeckMode};
use crate::domain::rules::{DECK_SIZE, HAND_SIZE};
use crate::domain::seed_derivation::rng_from_seed;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every shuffle is a permutation of the 24-card deck.
    #[test]
    fn prop_shuffle_is_a_permutation(seed in any::<u64>()) {
        let deck = Deck::build(DeckMode::Random, &mut rng_from_seed(seed)).unwrap();
        let unique: HashSet<_> = deck.cards().iter().copied().collect();
        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(unique.len(), DECK_SIZE);
    }

    /// Property: the same seed reproduces the same order.
    #[test]
    fn prop_shuffle_is_deterministic(seed in any::<u64>()) {
        let a = Deck::build(DeckMode::Random, &mut rng_from_seed(seed)).unwrap();
        let b = Deck::build(DeckMode::Random, &mut rng_from_seed(seed)).unwrap();
        prop_assert_eq!(a.cards(), b.cards());
    }

    /// Property: dealing empties the deck into four hands of six.
    #[test]
    fn prop_deal_consumes_whole_deck(seed in any::<u64>(), guaranteed in any::<bool>()) {
        let mode = if guaranteed { DeckMode::ShoutGuaranteed } else { DeckMode::Random };
        let mut deck = Deck::build(mode, &mut rng_from_seed(seed)).unwrap();
        let hands = deal_hands(&mut deck).unwrap();
        prop_assert!(deck.is_empty());
        prop_assert!(hands.iter().all(|h| h.len() == HAND_SIZE));
        let dealt: HashSet<_> = hands.iter().flatten().copied().collect();
        prop_assert_eq!(dealt.len(), DECK_SIZE);
    }
}

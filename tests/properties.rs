//! Property-based tests for the rule engine.

use proptest::prelude::*;
use proptest::sample::subsequence;

use tienlen::{
    Card, Hand, Rank, Shape, can_beat, classify, identify_combination, is_valid_set,
    try_detect_chop,
};

fn full_deck() -> Vec<Card> {
    (0..52).map(|power| Card::from_power(power).unwrap()).collect()
}

/// Unique cards, up to a full hand.
fn hand_cards() -> impl Strategy<Value = Vec<Card>> {
    subsequence(full_deck(), 0..=13).prop_shuffle()
}

/// Small sets, where legal shapes are common.
fn play_cards() -> impl Strategy<Value = Vec<Card>> {
    subsequence(full_deck(), 1..=6).prop_shuffle()
}

/// A run of consecutive pairs below Two, with random suits.
fn pine(pairs: usize) -> impl Strategy<Value = Vec<Card>> {
    let last_start = Rank::Two.index() as usize - pairs;
    (0..=last_start, prop::collection::vec(subsequence(vec![0u8, 1, 2, 3], 2), pairs)).prop_map(
        |(start, suits)| {
            suits
                .iter()
                .enumerate()
                .flat_map(|(offset, pair)| {
                    let rank = (start + offset) as u8 * 4;
                    pair.iter()
                        .map(move |suit| Card::from_power(rank + suit).unwrap())
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn classification_is_idempotent(cards in hand_cards()) {
        let combination = identify_combination(&cards);
        prop_assert_eq!(combination.is_valid(), is_valid_set(&cards));
        if combination.is_valid() {
            let again = identify_combination(&combination.cards);
            prop_assert_eq!(again, combination);
        }
    }

    #[test]
    fn twos_only_appear_in_same_rank_sets(cards in play_cards()) {
        if cards.iter().any(|card| card.is_two()) {
            let shape = classify(&cards);
            prop_assert!(matches!(
                shape,
                None | Some(Shape::Single | Shape::Pair | Shape::Triple | Shape::Quad)
            ));
        }
    }

    #[test]
    fn no_set_beats_itself(cards in play_cards()) {
        prop_assert!(!can_beat(&cards, &cards));
        prop_assert_eq!(try_detect_chop(&cards, &cards), None);
    }

    #[test]
    fn beats_are_antisymmetric(a in play_cards(), b in play_cards()) {
        prop_assert!(!(can_beat(&a, &b) && can_beat(&b, &a)));
    }

    #[test]
    fn chop_implies_beat(prev in play_cards(), new in play_cards()) {
        if try_detect_chop(&prev, &new).is_some() {
            prop_assert!(can_beat(&prev, &new));
        }
    }

    #[test]
    fn three_pines_order_by_top_card(a in pine(3), b in pine(3)) {
        prop_assert_eq!(classify(&a), Some(Shape::Pine(3)));
        let top = |cards: &[Card]| cards.iter().max().copied().unwrap();
        prop_assert_eq!(can_beat(&a, &b), top(&b) > top(&a));
    }

    #[test]
    fn longer_pines_chop_shorter(short in pine(3), long in pine(4)) {
        prop_assert!(can_beat(&short, &long));
        prop_assert!(!can_beat(&long, &short));
        prop_assert!(try_detect_chop(&short, &long).is_some());
    }

    #[test]
    fn remove_undoes_add(held in hand_cards(), split in 0usize..=13) {
        let split = split.min(held.len());
        let (kept, played) = held.split_at(split);

        let mut hand = Hand::from_cards(kept);
        hand.add_cards(played);
        prop_assert!(hand.has_cards(&held));
        prop_assert!(hand.cards().windows(2).all(|w| w[0] < w[1]));

        hand.remove_cards(played).unwrap();
        prop_assert_eq!(hand, Hand::from_cards(kept));
    }
}

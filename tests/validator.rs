//! Play validation tests.

use tienlen::{
    Card, ChopKind, Hand, PlayValidationResult, RejectReason, can_pass, has_playable_move,
    parse_cards, try_detect_chop, validate_play,
};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

fn reason(hand: &str, selected: &str, board: &str) -> RejectReason {
    validate_play(&cards(hand), &cards(selected), &cards(board)).reason
}

#[test]
fn rejection_reasons_in_check_order() {
    assert_eq!(reason("3S 4S", "", ""), RejectReason::NoSelection);
    assert_eq!(reason("", "", "9S"), RejectReason::NoSelection);
    assert_eq!(reason("", "3S", ""), RejectReason::CardsNotInHand);
    assert_eq!(reason("3S 4S", "5S", ""), RejectReason::CardsNotInHand);
    assert_eq!(reason("3S 4S", "3S 3S", ""), RejectReason::CardsNotInHand);
    assert_eq!(reason("3S 5C", "3S 5C", ""), RejectReason::InvalidCombination);
    assert_eq!(reason("3S 5C", "3S 5C", "9S"), RejectReason::InvalidCombination);
    assert_eq!(reason("4S 9H", "4S", "5S"), RejectReason::CannotBeat);
    assert_eq!(reason("4S 4C", "4S 4C", "5S"), RejectReason::CannotBeat);
}

#[test]
fn missing_card_wins_over_valid_shape() {
    assert_eq!(reason("9S 9C", "9S 9H", ""), RejectReason::CardsNotInHand);
}

#[test]
fn any_legal_combination_may_lead() {
    let hand = cards("3S 3C 4C 4D 4H 5D 5H");
    for selected in ["3S", "3S 3C", "4C 4D 4H", "3S 4C 5D", "3S 3C 4D 4H 5D 5H"] {
        let result = validate_play(&hand, &cards(selected), &[]);
        assert_eq!(result, PlayValidationResult::valid(), "{selected}");
    }
}

#[test]
fn quad_chops_single_two() {
    let hand = cards("3S 3C 3D 3H");
    let board = cards("2H");

    let result = validate_play(&hand, &hand, &board);
    assert!(result.is_valid);
    assert_eq!(result.reason, RejectReason::None);
    assert_eq!(try_detect_chop(&board, &hand), Some(ChopKind::Quad));
}

#[test]
fn higher_three_pine_beats_three_pine() {
    let hand = cards("4S 4C 5S 5C 6S 6C");
    let board = cards("3S 3C 4D 4H 5D 5H");

    assert!(validate_play(&hand, &hand, &board).is_valid);
    assert_eq!(try_detect_chop(&board, &hand), Some(ChopKind::ThreePine));
}

#[test]
fn validation_then_removal() {
    let mut hand = Hand::from_cards(&cards("3S 7C 8D 9H KS"));
    let selected = cards("9H 7C 8D");
    let board = cards("4S 5S 6S");

    assert!(validate_play(hand.cards(), &selected, &board).is_valid);
    hand.remove_cards(&selected).unwrap();
    assert_eq!(hand.cards(), cards("3S KS").as_slice());
}

#[test]
fn pass_only_allowed_on_a_live_board() {
    assert!(!can_pass(&[]));
    assert!(can_pass(&cards("3S")));
}

#[test]
fn no_playable_move_on_empty_board() {
    assert!(!has_playable_move(&cards("3S 3C 3D 3H 2H"), &[]));
    assert!(!has_playable_move(&[], &cards("3S")));
}

#[test]
fn playable_move_same_shape() {
    assert!(has_playable_move(&cards("3C TS"), &cards("9S")));
    assert!(!has_playable_move(&cards("3S 4S 5S"), &cards("AS")));
    assert!(has_playable_move(&cards("3S 9S 9H"), &cards("8S 8C")));
    assert!(!has_playable_move(&cards("9S 9H"), &cards("TS TC")));
    assert!(has_playable_move(&cards("4S 5S 6S 9H"), &cards("3S 4C 5D")));
    assert!(!has_playable_move(&cards("4S 5S 6S"), &cards("9S TC JD")));
    assert!(has_playable_move(&cards("5S 6S 7S 8D"), &cards("4S 5C 6D 7H")));
    assert!(has_playable_move(&cards("JS JC JH"), &cards("TS TC TD")));
}

#[test]
fn playable_move_uses_strongest_cards_of_a_rank() {
    assert!(has_playable_move(&cards("9S 9C 9H"), &cards("9D")));
    assert!(!has_playable_move(&cards("9S 9C"), &cards("9D")));
    assert!(has_playable_move(&cards("9S 9C 9H"), &cards("8S 8C 8D")));
}

#[test]
fn single_two_on_board_needs_a_bomb() {
    let board = cards("2S");
    assert!(!has_playable_move(&cards("2H AS AC"), &board));
    assert!(has_playable_move(&cards("3S 3C 3D 3H"), &board));
    assert!(has_playable_move(&cards("5S 5C 6D 6H 7S 7C"), &board));
    assert!(!has_playable_move(&cards("5S 5C 6D 6H 8S 8C"), &board));
}

#[test]
fn pair_of_twos_on_board() {
    let board = cards("2S 2C");
    assert!(has_playable_move(&cards("2D 2H"), &board));
    assert!(!has_playable_move(&cards("5S 5C 6D 6H 7S 7C"), &board));
    assert!(has_playable_move(&cards("5S 5C 6D 6H 7S 7C 8D 8H"), &board));
    assert!(has_playable_move(&cards("KS KC KD KH"), &board));
}

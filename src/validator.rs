//! Play validation against a hand and the current board.
//!
//! An empty board means a fresh round: any legal combination may lead, and
//! passing is not allowed.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::combination::Shape;
use crate::hand::contains_all;
use crate::result::{PlayValidationResult, RejectReason};
use crate::rules::{can_beat, classify, is_valid_set};

/// Validates that `selected` can be played from `hand` onto `board`.
///
/// Checks run in order and the first failure is reported: empty selection,
/// cards missing from the hand, illegal shape, then failure to beat a
/// non-empty board.
///
/// # Example
///
/// ```
/// use tienlen::{RejectReason, parse_cards, validate_play};
///
/// let hand = parse_cards("3S 3C 3D 3H 9H").unwrap();
/// let board = parse_cards("2H").unwrap();
///
/// assert!(validate_play(&hand, &hand[..4], &board).is_valid);
/// assert_eq!(
///     validate_play(&hand, &hand[4..], &board).reason,
///     RejectReason::CannotBeat,
/// );
/// ```
#[must_use]
pub fn validate_play(hand: &[Card], selected: &[Card], board: &[Card]) -> PlayValidationResult {
    let reason = if selected.is_empty() {
        RejectReason::NoSelection
    } else if hand.is_empty() || !contains_all(hand, selected) {
        RejectReason::CardsNotInHand
    } else if !is_valid_set(selected) {
        RejectReason::InvalidCombination
    } else if !board.is_empty() && !can_beat(board, selected) {
        RejectReason::CannotBeat
    } else {
        return PlayValidationResult::valid();
    };

    tracing::debug!(
        ?reason,
        selected = selected.len(),
        hand = hand.len(),
        board = board.len(),
        "play rejected"
    );
    PlayValidationResult::rejected(reason)
}

/// Returns whether the player may pass. Leading a fresh round is mandatory.
#[must_use]
pub const fn can_pass(board: &[Card]) -> bool {
    !board.is_empty()
}

/// Returns whether any combination from `hand` beats `board`.
///
/// Always false on an empty board. A lone Two can only be answered with a
/// bomb, never with another single.
#[must_use]
pub fn has_playable_move(hand: &[Card], board: &[Card]) -> bool {
    if board.is_empty() || hand.is_empty() {
        return false;
    }

    let board_is_single_two = board.len() == 1 && board[0].rank == Rank::Two;

    candidates(hand).iter().any(|play| {
        if board_is_single_two
            && !matches!(classify(play), Some(Shape::Quad | Shape::Pine(3..=5)))
        {
            return false;
        }
        can_beat(board, play)
    })
}

/// Builds the strongest play of every shape the hand can form.
///
/// Beats only compare shape, card count, and top card, so for each rank
/// group or rank window only the variant with the highest cards is needed.
fn candidates(hand: &[Card]) -> Vec<Vec<Card>> {
    let mut by_rank: [Vec<Card>; 13] = core::array::from_fn(|_| Vec::new());
    for &card in hand {
        by_rank[card.rank.index() as usize].push(card);
    }
    for group in &mut by_rank {
        group.sort_unstable();
    }

    let mut plays: Vec<Vec<Card>> = hand.iter().map(|&card| alloc::vec![card]).collect();

    for group in &by_rank {
        for size in 2..=group.len().min(4) {
            plays.push(group[group.len() - size..].to_vec());
        }
    }

    // Twos sit at index 12 and never join a run.
    let runs = &by_rank[..Rank::Two.index() as usize];
    for start in 0..runs.len() {
        let mut straight = Vec::new();
        for group in runs[start..].iter().take_while(|group| !group.is_empty()) {
            straight.extend(group.last().copied());
            if straight.len() >= 3 {
                plays.push(straight.clone());
            }
        }

        let mut pine = Vec::new();
        for group in runs[start..].iter().take_while(|group| group.len() >= 2) {
            pine.extend_from_slice(&group[group.len() - 2..]);
            if pine.len() >= 6 {
                plays.push(pine.clone());
            }
        }
    }

    plays
}

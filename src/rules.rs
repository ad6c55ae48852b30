//! Combination rules: shape validation, beat precedence, and chop detection.
//!
//! Every function here is pure. Inputs may be in any order; an empty slice
//! stands for "no cards" and never classifies or beats anything.
//!
//! These rules must agree exactly with the match server, so beat order is
//! fixed by the bomb ladder below rather than derived from [`Shape`] alone.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::combination::{ChopKind, Combination, Shape};

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Classifies cards into an exact [`Shape`], or `None` if they form no
/// legal combination.
#[must_use]
pub fn classify(cards: &[Card]) -> Option<Shape> {
    Shape::of_sorted(&sorted(cards))
}

/// Returns whether the cards form a legal combination.
///
/// Legal shapes are a single card, two to four cards of one rank, a
/// straight of three or more consecutive ranks, or three or more consecutive
/// pairs. Twos never take part in a straight or in consecutive pairs.
///
/// # Example
///
/// ```
/// use tienlen::{is_valid_set, parse_cards};
///
/// assert!(is_valid_set(&parse_cards("3S 4C 5D").unwrap()));
/// assert!(!is_valid_set(&parse_cards("KS AC 2D").unwrap()));
/// ```
#[must_use]
pub fn is_valid_set(cards: &[Card]) -> bool {
    classify(cards).is_some()
}

/// Classifies the cards, returning [`Combination::invalid`] for illegal sets.
#[must_use]
pub fn identify_combination(cards: &[Card]) -> Combination {
    let cards = sorted(cards);
    let Some(shape) = Shape::of_sorted(&cards) else {
        return Combination::invalid();
    };
    let value = cards.last().map_or(0, |card| card.power());

    Combination {
        kind: shape.combination_type(),
        cards,
        value,
    }
}

/// Position of a card set on the bomb ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Plain,
    SingleTwo,
    PairTwo,
    Quad,
    ThreePine,
    FourPine,
    FivePine,
}

#[derive(Debug, Clone, Copy)]
struct Play {
    tier: Tier,
    len: usize,
    high: Card,
}

impl Play {
    fn of(cards: &[Card]) -> Option<Self> {
        let cards = sorted(cards);
        let high = *cards.last()?;
        let tier = match Shape::of_sorted(&cards) {
            Some(Shape::Single) if high.rank == Rank::Two => Tier::SingleTwo,
            Some(Shape::Pair) if high.rank == Rank::Two => Tier::PairTwo,
            Some(Shape::Quad) => Tier::Quad,
            Some(Shape::Pine(3)) => Tier::ThreePine,
            Some(Shape::Pine(4)) => Tier::FourPine,
            Some(Shape::Pine(5)) => Tier::FivePine,
            _ => Tier::Plain,
        };

        Some(Self {
            tier,
            len: cards.len(),
            high,
        })
    }

    const fn outranks(self, other: Self) -> bool {
        self.high.power() > other.high.power()
    }
}

/// Returns whether `new` legally beats `prev`.
///
/// Bombs are checked first, highest tier first:
///
/// - 5-pine beats a single Two, a pair of Twos, a quad, a 4-pine, or a
///   3-pine; it beats another 5-pine only with a higher top card.
/// - 4-pine beats a single Two, a pair of Twos, a quad, or a 3-pine; it
///   beats another 4-pine only with a higher top card.
/// - Quad beats a single Two, a pair of Twos, or a 3-pine; it beats another
///   quad only with a higher rank.
/// - 3-pine beats a single Two; it beats another 3-pine only with a higher
///   top card.
///
/// Otherwise both sets must hold the same number of cards and `new` must
/// have the higher top card.
///
/// # Example
///
/// ```
/// use tienlen::{can_beat, parse_cards};
///
/// let two = parse_cards("2H").unwrap();
/// let quad = parse_cards("3S 3C 3D 3H").unwrap();
/// assert!(can_beat(&two, &quad));
/// assert!(!can_beat(&quad, &two));
/// ```
#[must_use]
pub fn can_beat(prev: &[Card], new: &[Card]) -> bool {
    let (Some(prev), Some(new)) = (Play::of(prev), Play::of(new)) else {
        return false;
    };

    match (new.tier, prev.tier) {
        (
            Tier::FivePine,
            Tier::SingleTwo | Tier::PairTwo | Tier::Quad | Tier::FourPine | Tier::ThreePine,
        )
        | (Tier::FourPine, Tier::SingleTwo | Tier::PairTwo | Tier::Quad | Tier::ThreePine)
        | (Tier::Quad, Tier::SingleTwo | Tier::PairTwo | Tier::ThreePine)
        | (Tier::ThreePine, Tier::SingleTwo) => true,
        (Tier::FivePine, Tier::FivePine)
        | (Tier::FourPine, Tier::FourPine)
        | (Tier::ThreePine, Tier::ThreePine) => new.outranks(prev),
        (Tier::Quad, Tier::Quad) => new.high.rank > prev.high.rank,
        _ => new.len == prev.len && new.outranks(prev),
    }
}

/// Detects whether `new` chops `prev`, returning the bomb tier used.
///
/// A chop is a bomb beat; an ordinary higher play of the same shape is a
/// beat but not a chop. Returns `None` whenever [`can_beat`] is false.
///
/// Labels are checked in this order: 3-pine, quad, 4-pine, 5-pine.
///
/// # Example
///
/// ```
/// use tienlen::{ChopKind, parse_cards, try_detect_chop};
///
/// let two = parse_cards("2H").unwrap();
/// let quad = parse_cards("3S 3C 3D 3H").unwrap();
/// assert_eq!(try_detect_chop(&two, &quad), Some(ChopKind::Quad));
/// ```
#[must_use]
pub fn try_detect_chop(prev: &[Card], new: &[Card]) -> Option<ChopKind> {
    if !can_beat(prev, new) {
        return None;
    }
    let (prev_play, new_play) = (Play::of(prev)?, Play::of(new)?);

    let chop = match (new_play.tier, prev_play.tier) {
        (Tier::ThreePine, Tier::SingleTwo | Tier::ThreePine) => ChopKind::ThreePine,
        (Tier::Quad, Tier::SingleTwo | Tier::PairTwo | Tier::ThreePine | Tier::Quad) => {
            ChopKind::Quad
        }
        (
            Tier::FourPine,
            Tier::SingleTwo | Tier::PairTwo | Tier::Quad | Tier::ThreePine | Tier::FourPine,
        ) => ChopKind::FourPine,
        (Tier::FivePine, _) => ChopKind::FivePine,
        _ => return None,
    };

    tracing::trace!(%chop, prev = prev.len(), new = new.len(), "chop detected");
    Some(chop)
}

//! Combination shapes and classification results.

extern crate alloc;

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;

/// Public classification of a set of cards.
///
/// Quads and every pine length are reported as [`CombinationType::Bomb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinationType {
    /// Not a legal combination.
    Invalid,
    /// One card.
    Single,
    /// Two cards of one rank.
    Pair,
    /// Three cards of one rank.
    Triple,
    /// Four of a kind, or three or more consecutive pairs.
    Bomb,
    /// Three or more consecutive ranks, no Two.
    Straight,
}

/// The exact shape of a legal combination.
///
/// Unlike [`CombinationType`], pine lengths stay distinct here because they
/// rank differently when beating other plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One card.
    Single,
    /// Two cards of one rank.
    Pair,
    /// Three cards of one rank.
    Triple,
    /// Four cards of one rank.
    Quad,
    /// Run of distinct consecutive ranks; holds the card count.
    Straight(usize),
    /// Run of consecutive pairs; holds the number of pairs.
    Pine(usize),
}

impl Shape {
    /// Classifies cards sorted by ascending power.
    pub(crate) fn of_sorted(cards: &[Card]) -> Option<Self> {
        let (first, last) = (cards.first()?, cards.last()?);

        if cards.len() == 1 {
            return Some(Self::Single);
        }

        if first.rank == last.rank {
            return match cards.len() {
                2 => Some(Self::Pair),
                3 => Some(Self::Triple),
                4 => Some(Self::Quad),
                _ => None,
            };
        }

        if is_straight(cards) {
            return Some(Self::Straight(cards.len()));
        }

        if is_consecutive_pairs(cards) {
            return Some(Self::Pine(cards.len() / 2));
        }

        None
    }

    /// Maps the shape to its public classification.
    #[must_use]
    pub const fn combination_type(self) -> CombinationType {
        match self {
            Self::Single => CombinationType::Single,
            Self::Pair => CombinationType::Pair,
            Self::Triple => CombinationType::Triple,
            Self::Quad | Self::Pine(_) => CombinationType::Bomb,
            Self::Straight(_) => CombinationType::Straight,
        }
    }
}

/// Ranks strictly ascending by one; Twos excluded.
fn is_straight(sorted: &[Card]) -> bool {
    sorted.len() >= 3
        && !sorted.iter().any(|card| card.is_two())
        && sorted
            .windows(2)
            .all(|w| w[1].rank.index() == w[0].rank.index() + 1)
}

/// Pairs of one rank whose ranks ascend by one; Twos excluded.
fn is_consecutive_pairs(sorted: &[Card]) -> bool {
    if sorted.len() < 6 || sorted.len() % 2 != 0 || sorted.iter().any(|card| card.is_two()) {
        return false;
    }

    let pairs: Vec<&[Card]> = sorted.chunks_exact(2).collect();
    pairs.iter().all(|pair| pair[0].rank == pair[1].rank)
        && pairs
            .windows(2)
            .all(|w| w[1][0].rank.index() == w[0][0].rank.index() + 1)
}

/// Result of classifying a set of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    /// The combination type.
    pub kind: CombinationType,
    /// The cards, lowest power first. Empty when invalid.
    pub cards: Vec<Card>,
    /// Power of the highest card, or 0 when invalid.
    pub value: u8,
}

impl Combination {
    /// The invalid sentinel.
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            kind: CombinationType::Invalid,
            cards: Vec::new(),
            value: 0,
        }
    }

    /// Returns whether this is a legal combination.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.kind != CombinationType::Invalid
    }
}

/// Bomb tier reported when a play chops the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChopKind {
    /// Three consecutive pairs.
    ThreePine,
    /// Four of a kind.
    Quad,
    /// Four consecutive pairs.
    FourPine,
    /// Five consecutive pairs.
    FivePine,
}

impl ChopKind {
    /// Returns the display label used by clients.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThreePine => "3-Pine",
            Self::Quad => "Quad",
            Self::FourPine => "4-Pine",
            Self::FivePine => "5-Pine",
        }
    }
}

impl fmt::Display for ChopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

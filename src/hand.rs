//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::error::HandError;

/// Counts occurrences of each card.
fn card_counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::with_capacity(cards.len());
    for &card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    counts
}

/// Returns whether `held` contains every card of `wanted`, counting repeats.
///
/// A card listed twice in `wanted` must also appear twice in `held`.
pub(crate) fn contains_all(held: &[Card], wanted: &[Card]) -> bool {
    let mut available = card_counts(held);
    wanted.iter().all(|card| match available.get_mut(card) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    })
}

/// A player's hand.
///
/// Cards are kept sorted by ascending power after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, lowest power first.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    ///
    /// Repeated cards are kept once.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        hand.add_cards(cards);
        hand
    }

    /// Adds cards to the hand and re-sorts it.
    ///
    /// A card the hand already holds is skipped, since each physical card
    /// exists once in the deck.
    pub fn add_cards(&mut self, cards: &[Card]) {
        for &card in cards {
            if self.cards.contains(&card) {
                tracing::warn!(%card, "card already in hand; skipped");
                continue;
            }
            self.cards.push(card);
        }
        self.cards.sort_unstable();
    }

    /// Removes exactly the given cards from the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotInHand`] if any requested card is missing.
    /// The hand is left unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use tienlen::{Hand, parse_cards};
    ///
    /// let mut hand = Hand::from_cards(&parse_cards("3S 4C 5D").unwrap());
    /// hand.remove_cards(&parse_cards("4C").unwrap()).unwrap();
    /// assert_eq!(hand.len(), 2);
    /// assert!(hand.remove_cards(&parse_cards("4C").unwrap()).is_err());
    /// ```
    pub fn remove_cards(&mut self, cards: &[Card]) -> Result<(), HandError> {
        let mut remaining = self.cards.clone();
        for card in cards {
            let Some(pos) = remaining.iter().position(|held| held == card) else {
                tracing::warn!(%card, held = self.cards.len(), "remove of card not in hand");
                return Err(HandError::CardNotInHand(*card));
            };
            remaining.remove(pos);
        }
        self.cards = remaining;
        Ok(())
    }

    /// Returns whether the hand holds every given card, counting repeats.
    #[must_use]
    pub fn has_cards(&self, cards: &[Card]) -> bool {
        contains_all(&self.cards, cards)
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    /// Returns the cards in the hand, lowest power first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new deal.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

//! The 52-card deck and seeded dealing.

extern crate alloc;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::DealOptions;

/// A deck of cards, dealt from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the deck; the last card is the top.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck in ascending power order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck shuffled with the given seed.
    ///
    /// The same seed always yields the same order, so a deal can be
    /// reproduced on both ends of a match.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::new();
        deck.cards.shuffle(&mut rng);
        deck
    }

    /// Returns the cards remaining, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals one card at a time to each player in turn.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players, the hand size is zero, or
    /// the deck holds fewer cards than the deal needs. The deck is untouched
    /// on error.
    ///
    /// # Example
    ///
    /// ```
    /// use tienlen::{DealOptions, Deck};
    ///
    /// let mut deck = Deck::shuffled(7);
    /// let hands = deck.deal(&DealOptions::default()).unwrap();
    /// assert_eq!(hands.len(), 4);
    /// assert!(hands.iter().all(|hand| hand.len() == 13));
    /// assert!(deck.is_empty());
    /// ```
    pub fn deal(&mut self, options: &DealOptions) -> Result<Vec<Hand>, DealError> {
        if options.players == 0 {
            return Err(DealError::NoPlayers);
        }
        if options.hand_size == 0 {
            return Err(DealError::EmptyHand);
        }
        if self.len() < options.cards_needed() {
            return Err(DealError::NotEnoughCards);
        }

        let mut dealt: Vec<Vec<Card>> = (0..options.players)
            .map(|_| Vec::with_capacity(options.hand_size as usize))
            .collect();
        for _ in 0..options.hand_size {
            for cards in &mut dealt {
                cards.extend(self.draw());
            }
        }

        tracing::debug!(
            players = options.players,
            hand_size = options.hand_size,
            remaining = self.len(),
            "dealt deck"
        );
        Ok(dealt.iter().map(|cards| Hand::from_cards(cards)).collect())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

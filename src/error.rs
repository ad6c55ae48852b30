//! Error types for hand, parsing, and dealing operations.
//!
//! Rejected plays are not errors; see [`crate::PlayValidationResult`].

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when mutating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A card requested for removal is not held.
    ///
    /// Callers are expected to check [`crate::Hand::has_cards`] or
    /// [`crate::validate_play`] first, so this signals a logic error.
    #[error("card {0} is not in the hand")]
    CardNotInHand(Card),
}

/// Errors that can occur when parsing card notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// A card token must be exactly two characters.
    #[error("card token must be a rank followed by a suit")]
    Length,
    /// Unknown rank character.
    #[error("unknown rank `{0}`")]
    Rank(char),
    /// Unknown suit character.
    #[error("unknown suit `{0}`")]
    Suit(char),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// At least one player is required.
    #[error("no players to deal to")]
    NoPlayers,
    /// Hand size is zero.
    #[error("hand size is zero")]
    EmptyHand,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

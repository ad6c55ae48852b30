//! A Tien Len (Thirteen) rule engine with optional `no_std` support.
//!
//! The crate classifies card sets into legal combinations, decides whether
//! one play beats another (including the bomb ladder that chops Twos), and
//! validates a player's selection against their hand and the board.
//!
//! All rule functions are pure and thread-safe. [`Hand`] is the only
//! mutable type and is meant to have a single owner.
//!
//! # Example
//!
//! ```
//! use tienlen::{ChopKind, RejectReason, parse_cards, try_detect_chop, validate_play};
//!
//! let hand = parse_cards("3S 3C 3D 3H").unwrap();
//! let board = parse_cards("2H").unwrap();
//!
//! let result = validate_play(&hand, &hand, &board);
//! assert!(result.is_valid);
//! assert_eq!(result.reason, RejectReason::None);
//! assert_eq!(try_detect_chop(&board, &hand), Some(ChopKind::Quad));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combination;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;
pub mod validator;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, parse_cards};
pub use combination::{ChopKind, Combination, CombinationType, Shape};
pub use deck::Deck;
pub use error::{DealError, HandError, ParseCardError};
pub use hand::Hand;
pub use options::DealOptions;
pub use result::{PlayValidationResult, RejectReason};
pub use rules::{can_beat, classify, identify_combination, is_valid_set, try_detect_chop};
pub use validator::{can_pass, has_playable_move, validate_play};

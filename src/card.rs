//! Card types and text notation.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::error::ParseCardError;

/// Card rank, in game-power order.
///
/// Two is the highest rank in Tien Len, so it sorts after Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Three, the lowest rank.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// Two, the highest rank. Never part of a straight or a pine.
    Two,
}

impl Rank {
    /// All ranks from lowest to highest.
    pub const ALL: [Self; 13] = [
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Two,
    ];

    /// Position of the rank in power order (Three = 0, Two = 12).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the rank at `index` in power order.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
            Self::Two => '2',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            '2' => Some(Self::Two),
            _ => None,
        }
    }
}

/// Card suit, ordered lowest to highest for same-rank tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades, the lowest suit.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts, the highest suit.
    Hearts,
}

impl Suit {
    /// All suits from lowest to highest.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Diamonds, Self::Hearts];

    /// Position of the suit in tie-break order (Spades = 0, Hearts = 3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn symbol(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'S' => Some(Self::Spades),
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            _ => None,
        }
    }
}

/// A playing card.
///
/// Cards order by [`Card::power`], which is rank-major and suit-minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the power value of the card.
    ///
    /// Every one of the 52 cards maps to a distinct value in `0..52`:
    /// `3S` is 0 and `2H` is 51.
    #[must_use]
    pub const fn power(self) -> u8 {
        self.rank.index() * 4 + self.suit.index()
    }

    /// Returns the card with the given power value, if it is in `0..52`.
    #[must_use]
    pub const fn from_power(power: u8) -> Option<Self> {
        match Rank::from_index(power / 4) {
            Some(rank) => Some(Self::new(rank, Suit::ALL[(power % 4) as usize])),
            None => None,
        }
    }

    /// Returns whether the card is a Two.
    #[must_use]
    pub const fn is_two(self) -> bool {
        matches!(self.rank, Rank::Two)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.power().cmp(&other.power())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCardError::Length);
        };

        let rank = Rank::from_symbol(rank_ch).ok_or(ParseCardError::Rank(rank_ch))?;
        let suit = Suit::from_symbol(suit_ch).ok_or(ParseCardError::Suit(suit_ch))?;
        Ok(Self::new(rank, suit))
    }
}

/// Parses a whitespace-separated list of cards such as `"3S 3C 4D"`.
///
/// # Errors
///
/// Returns the first token that is not a valid card.
///
/// # Example
///
/// ```
/// use tienlen::{Card, Rank, Suit, parse_cards};
///
/// let cards = parse_cards("3S 2H").unwrap();
/// assert_eq!(cards, vec![Card::new(Rank::Three, Suit::Spades), Card::new(Rank::Two, Suit::Hearts)]);
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

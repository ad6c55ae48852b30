//! Dealing configuration.

/// Configuration options for dealing a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tienlen::DealOptions;
///
/// let options = DealOptions::default().with_players(3).with_hand_size(10);
/// assert_eq!(options.players, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealOptions {
    /// Number of players dealt in.
    pub players: u8,
    /// Cards dealt to each player.
    pub hand_size: u8,
}

impl Default for DealOptions {
    fn default() -> Self {
        Self {
            players: 4,
            hand_size: 13,
        }
    }
}

impl DealOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use tienlen::DealOptions;
    ///
    /// let options = DealOptions::default().with_players(2);
    /// assert_eq!(options.players, 2);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of cards per hand.
    ///
    /// # Example
    ///
    /// ```
    /// use tienlen::DealOptions;
    ///
    /// let options = DealOptions::default().with_hand_size(6);
    /// assert_eq!(options.hand_size, 6);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Total cards needed for one deal.
    #[must_use]
    pub const fn cards_needed(&self) -> usize {
        self.players as usize * self.hand_size as usize
    }
}

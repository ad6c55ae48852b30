//! Play validation outcome types.

/// Why a play was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RejectReason {
    /// The play is accepted.
    #[default]
    None,
    /// No cards were selected.
    NoSelection,
    /// At least one selected card is not in the hand.
    CardsNotInHand,
    /// The selected cards do not form a legal combination.
    InvalidCombination,
    /// The selected combination does not beat the board.
    CannotBeat,
}

/// Result of validating a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlayValidationResult {
    /// Whether the play may be made.
    pub is_valid: bool,
    /// The rejection reason, [`RejectReason::None`] when valid.
    pub reason: RejectReason,
}

impl PlayValidationResult {
    /// An accepted play.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            reason: RejectReason::None,
        }
    }

    /// A rejected play.
    #[must_use]
    pub const fn rejected(reason: RejectReason) -> Self {
        Self {
            is_valid: false,
            reason,
        }
    }
}

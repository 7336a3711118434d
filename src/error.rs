//! Error types for checked card construction and parsing.

use thiserror::Error;

/// Errors that can occur when building or parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank value outside `1..=13`.
    #[error("invalid rank value {0}, expected 1..=13")]
    InvalidRank(u8),
    /// Suit value outside `0..=4`.
    #[error("invalid suit value {0}, expected 0..=4")]
    InvalidSuit(u8),
    /// Rank name not recognized.
    #[error("unknown rank name")]
    UnknownRank,
    /// Suit name not recognized.
    #[error("unknown suit name")]
    UnknownSuit,
    /// Input is not of the form `<Rank> of <Suit>s` or `Joker`.
    #[error("expected `<Rank> of <Suit>s` or `Joker`")]
    Malformed,
}

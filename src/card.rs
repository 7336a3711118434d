//! Card types and their display names.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
///
/// The four standard suits are listed in deck order. [`Suit::Joker`] is a
/// sentinel used only by joker cards and is never part of [`Suit::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spade = 0,
    /// Diamonds.
    Diamond = 1,
    /// Clubs.
    Club = 2,
    /// Hearts.
    Heart = 3,
    /// Joker sentinel.
    Joker = 4,
}

impl Suit {
    /// The four standard suits in deck order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Position of the suit in deck order (Spade = 0 … Heart = 3, Joker = 4).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Singular name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }

    /// Returns `true` for the four standard suits.
    #[must_use]
    pub const fn is_standard(self) -> bool {
        !matches!(self, Self::Joker)
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Spade),
            1 => Ok(Self::Diamond),
            2 => Ok(Self::Club),
            3 => Ok(Self::Heart),
            4 => Ok(Self::Joker),
            _ => Err(CardError::InvalidSuit(value)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
///
/// Ace is 1 and King is 13; 0 is reserved. Joker cards reuse the rank as a
/// sequential joker index, so the type itself accepts any `u8`. Use
/// [`Rank::new`] when the value must be a standard rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Rank(u8);

impl Rank {
    /// Ace (1).
    pub const ACE: Self = Self(1);
    /// Two.
    pub const TWO: Self = Self(2);
    /// Three.
    pub const THREE: Self = Self(3);
    /// Four.
    pub const FOUR: Self = Self(4);
    /// Five.
    pub const FIVE: Self = Self(5);
    /// Six.
    pub const SIX: Self = Self(6);
    /// Seven.
    pub const SEVEN: Self = Self(7);
    /// Eight.
    pub const EIGHT: Self = Self(8);
    /// Nine.
    pub const NINE: Self = Self(9);
    /// Ten.
    pub const TEN: Self = Self(10);
    /// Jack (11).
    pub const JACK: Self = Self(11);
    /// Queen (12).
    pub const QUEEN: Self = Self(12);
    /// King (13).
    pub const KING: Self = Self(13);

    /// Lowest standard rank.
    pub const MIN: Self = Self::ACE;
    /// Highest standard rank.
    pub const MAX: Self = Self::KING;

    /// All standard ranks, Ace to King.
    pub const ALL: [Self; 13] = [
        Self::ACE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
        Self::SEVEN,
        Self::EIGHT,
        Self::NINE,
        Self::TEN,
        Self::JACK,
        Self::QUEEN,
        Self::KING,
    ];

    /// Creates a standard rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `value` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Rank;
    ///
    /// assert_eq!(Rank::new(12), Ok(Rank::QUEEN));
    /// assert!(Rank::new(0).is_err());
    /// ```
    pub const fn new(value: u8) -> Result<Self, CardError> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(CardError::InvalidRank(value))
        }
    }

    /// Creates a rank without range checks.
    ///
    /// Used for joker indices; values outside `1..=13` display as `Rank(n)`.
    #[must_use]
    pub const fn new_unchecked(value: u8) -> Self {
        Self(value)
    }

    /// Numeric value of the rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Name of the rank, or `None` outside `1..=13`.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            1 => "Ace",
            2 => "Two",
            3 => "Three",
            4 => "Four",
            5 => "Five",
            6 => "Six",
            7 => "Seven",
            8 => "Eight",
            9 => "Nine",
            10 => "Ten",
            11 => "Jack",
            12 => "Queen",
            13 => "King",
            _ => return None,
        })
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Rank({})", self.0),
        }
    }
}

/// A playing card.
///
/// Displays as `"<Rank> of <Suit>s"`, or `"Joker"` for any joker.
///
/// ```
/// use deckrs::{Card, Rank, Suit};
///
/// assert_eq!(Card::new(Suit::Heart, Rank::ACE).to_string(), "Ace of Hearts");
/// assert_eq!(Card::joker(2).to_string(), "Joker");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card, or the joker index for jokers.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Standard decks only
    /// contain ranks `1..=13`; anything else is the caller's responsibility.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a joker carrying the given joker index.
    #[must_use]
    pub const fn joker(index: u8) -> Self {
        Self::new(Suit::Joker, Rank::new_unchecked(index))
    }

    /// Returns `true` if the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str(Suit::Joker.name());
        }
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

fn parse_rank(s: &str) -> Result<Rank, CardError> {
    Rank::ALL
        .into_iter()
        .find(|rank| rank.name().is_some_and(|name| name.eq_ignore_ascii_case(s)))
        .ok_or(CardError::UnknownRank)
}

fn parse_suit(s: &str) -> Result<Suit, CardError> {
    // Plural form only; "Joker" never appears after "of".
    let singular = s
        .strip_suffix('s')
        .or_else(|| s.strip_suffix('S'))
        .ok_or(CardError::UnknownSuit)?;
    Suit::STANDARD
        .into_iter()
        .find(|suit| suit.name().eq_ignore_ascii_case(singular))
        .ok_or(CardError::UnknownSuit)
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the display form of a card, ignoring ASCII case.
    ///
    /// `"Joker"` parses to the joker with index 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(Suit::Joker.name()) {
            return Ok(Self::joker(0));
        }

        let mut parts = s.split_whitespace();
        let (Some(rank), Some(of), Some(suit), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(CardError::Malformed);
        };
        if !of.eq_ignore_ascii_case("of") {
            return Err(CardError::Malformed);
        }

        Ok(Self::new(parse_suit(suit)?, parse_rank(rank)?))
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = Suit::STANDARD.len() * Rank::ALL.len();

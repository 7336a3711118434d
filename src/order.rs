//! Absolute-rank ordering policy.
//!
//! Every standard card maps to `suit_index * 13 + rank`, so all cards of a
//! lower suit sort before any card of a higher suit, and ranks ascend within a
//! suit. Jokers sort after every standard card, ordered by joker index.

use core::cmp::Ordering;

use crate::card::{Card, Rank, Suit};

/// Highest standard rank value.
pub const MAX_RANK: u16 = Rank::MAX.value() as u16;

/// First absolute rank given to jokers; above every standard card.
pub const JOKER_BASE: u16 = Suit::STANDARD.len() as u16 * MAX_RANK + 1;

/// Returns the total-order key of a card.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, order::absolute_rank};
///
/// assert_eq!(absolute_rank(&Card::new(Suit::Spade, Rank::ACE)), 1);
/// assert_eq!(absolute_rank(&Card::new(Suit::Diamond, Rank::FOUR)), 17);
/// assert_eq!(absolute_rank(&Card::joker(0)), 53);
/// ```
#[must_use]
pub const fn absolute_rank(card: &Card) -> u16 {
    let rank = card.rank.value() as u16;
    if card.is_joker() {
        JOKER_BASE + rank
    } else {
        card.suit.index() as u16 * MAX_RANK + rank
    }
}

/// Compares two cards by absolute rank.
#[must_use]
pub fn compare(a: &Card, b: &Card) -> Ordering {
    absolute_rank(a).cmp(&absolute_rank(b))
}

/// Default less-than predicate over indices of `cards`.
///
/// Pass it to [`sort`](crate::transform::sort) to get the default order.
#[must_use]
pub fn less(cards: &[Card], i: usize, j: usize) -> bool {
    absolute_rank(&cards[i]) < absolute_rank(&cards[j])
}

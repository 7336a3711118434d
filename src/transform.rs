//! Composable deck transforms.
//!
//! A transform takes a whole card sequence and returns a new one. Any
//! `FnMut(Vec<Card>) -> Vec<Card>` is a [`Transform`], so plain functions
//! such as [`default_sort`] and the closures returned by [`jokers`],
//! [`filter`] and friends compose freely in [`deck::new`](crate::deck::new).

use core::cmp::Ordering;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::order;
use crate::shuffle::Shuffler;

/// A single pipeline stage over a card sequence.
pub trait Transform {
    /// Consumes `cards` and returns the transformed sequence.
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Transform for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// Sorts by ascending absolute rank.
///
/// The sort is unstable: equal cards (duplicates from [`decks`]) may come out
/// in any relative order. Jokers end up last.
#[must_use]
pub fn default_sort(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_unstable_by(order::compare);
    cards
}

/// Sorts with a less-than predicate over indices of the incoming sequence.
///
/// `less(cards, i, j)` must report whether `cards[i]` goes before `cards[j]`
/// and describe a strict weak order. Like [`default_sort`] the sort is
/// unstable.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, deck, order, transform};
///
/// let cards = deck::new(&mut [&mut transform::sort(order::less)]);
/// assert_eq!(cards[13], Card::new(Suit::Diamond, Rank::ACE));
/// ```
#[must_use]
pub fn sort<L>(mut less: L) -> impl Transform
where
    L: FnMut(&[Card], usize, usize) -> bool,
{
    move |cards: Vec<Card>| -> Vec<Card> {
        let mut indices: Vec<usize> = (0..cards.len()).collect();
        indices.sort_unstable_by(|&i, &j| {
            if less(&cards[..], i, j) {
                Ordering::Less
            } else if less(&cards[..], j, i) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        indices.into_iter().map(|i| cards[i]).collect()
    }
}

/// Sorts with an [`Ordering`] comparator over cards.
///
/// ```
/// use deckrs::{Card, Rank, Suit, deck, order, transform};
///
/// let cards = deck::new(&mut [&mut transform::sort_by(|a, b| order::compare(b, a))]);
/// assert_eq!(cards[0], Card::new(Suit::Heart, Rank::KING));
/// ```
#[must_use]
pub fn sort_by<C>(mut compare: C) -> impl Transform
where
    C: FnMut(&Card, &Card) -> Ordering,
{
    move |mut cards: Vec<Card>| {
        cards.sort_unstable_by(&mut compare);
        cards
    }
}

/// Shuffles with a shared [`Shuffler`].
#[must_use]
pub fn shuffle(shuffler: &Shuffler) -> impl Transform + '_ {
    move |cards: Vec<Card>| shuffler.shuffle(&cards)
}

/// Shuffles with a caller-owned generator.
#[must_use]
pub fn shuffle_with<R>(rng: &mut R) -> impl Transform + '_
where
    R: Rng + ?Sized,
{
    move |mut cards: Vec<Card>| {
        cards.shuffle(&mut *rng);
        cards
    }
}

/// Appends `n` jokers with joker indices `0..n`.
#[must_use]
pub fn jokers(n: u8) -> impl Transform {
    move |mut cards: Vec<Card>| {
        cards.extend((0..n).map(Card::joker));
        cards
    }
}

/// Removes every card matching `predicate`, keeping the order of the rest.
///
/// ```
/// use deckrs::{Rank, deck, transform};
///
/// let cards = deck::new(&mut [&mut transform::filter(|card| card.rank == Rank::ACE)]);
/// assert_eq!(cards.len(), 48);
/// ```
#[must_use]
pub fn filter<P>(mut predicate: P) -> impl Transform
where
    P: FnMut(&Card) -> bool,
{
    move |mut cards: Vec<Card>| {
        cards.retain(|card| !predicate(card));
        cards
    }
}

/// Repeats the sequence `n` times; `n == 0` yields an empty deck.
///
/// # Panics
///
/// Panics if the resulting length overflows `usize`.
#[must_use]
pub fn decks(n: usize) -> impl Transform {
    move |cards: Vec<Card>| cards.repeat(n)
}

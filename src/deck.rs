//! Deck construction and the transform pipeline.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::DerefMut;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::shuffle::Shuffler;
use crate::transform::{self, Transform};

/// Returns the 52 standard cards in suit-major, rank-minor order.
///
/// Suits run Spade, Diamond, Club, Heart; ranks run Ace to King.
#[must_use]
pub fn base() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

fn run<S>(stages: &mut [S]) -> Vec<Card>
where
    S: DerefMut,
    S::Target: Transform,
{
    let count = stages.len();
    let cards = stages
        .iter_mut()
        .enumerate()
        .fold(base(), |cards, (index, stage)| {
            let before = cards.len();
            let cards = (**stage).apply(cards);
            log::trace!("stage {index}: {before} -> {} cards", cards.len());
            cards
        });
    log::debug!("built deck of {} cards through {count} stages", cards.len());
    cards
}

/// Builds the base deck and runs it through `transforms`, left to right.
///
/// # Example
///
/// ```
/// use deckrs::{Suit, deck, transform};
///
/// let cards = deck::new(&mut [&mut transform::jokers(2), &mut transform::decks(2)]);
/// assert_eq!(cards.len(), 108);
/// assert_eq!(cards.iter().filter(|card| card.suit == Suit::Joker).count(), 4);
/// ```
pub fn new(transforms: &mut [&mut dyn Transform]) -> Vec<Card> {
    run(transforms)
}

/// Collects transforms and builds a deck from them.
///
/// Stages run in the order they were added:
///
/// ```
/// use deckrs::{DeckBuilder, Rank};
///
/// let cards = DeckBuilder::new()
///     .with_jokers(2)
///     .with_filter(|card| card.rank == Rank::KING)
///     .with_decks(2)
///     .build();
/// assert_eq!(cards.len(), 2 * (52 + 2 - 4));
/// ```
#[derive(Default)]
pub struct DeckBuilder<'a> {
    stages: Vec<Box<dyn Transform + 'a>>,
}

impl<'a> DeckBuilder<'a> {
    /// Creates a builder with no stages.
    #[must_use]
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Adds an arbitrary transform.
    #[must_use]
    pub fn with<T>(mut self, stage: T) -> Self
    where
        T: Transform + 'a,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Adds [`transform::default_sort`].
    #[must_use]
    pub fn with_default_sort(self) -> Self {
        self.with(transform::default_sort)
    }

    /// Adds [`transform::sort`] with the given index predicate.
    #[must_use]
    pub fn with_sort<L>(self, less: L) -> Self
    where
        L: FnMut(&[Card], usize, usize) -> bool + 'a,
    {
        self.with(transform::sort(less))
    }

    /// Adds [`transform::sort_by`] with the given comparator.
    #[must_use]
    pub fn with_sort_by<C>(self, compare: C) -> Self
    where
        C: FnMut(&Card, &Card) -> Ordering + 'a,
    {
        self.with(transform::sort_by(compare))
    }

    /// Adds [`transform::shuffle`] backed by `shuffler`.
    #[must_use]
    pub fn with_shuffle(self, shuffler: &'a Shuffler) -> Self {
        self.with(transform::shuffle(shuffler))
    }

    /// Adds [`transform::jokers`].
    #[must_use]
    pub fn with_jokers(self, n: u8) -> Self {
        self.with(transform::jokers(n))
    }

    /// Adds [`transform::filter`].
    #[must_use]
    pub fn with_filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Card) -> bool + 'a,
    {
        self.with(transform::filter(predicate))
    }

    /// Adds [`transform::decks`].
    #[must_use]
    pub fn with_decks(self, n: usize) -> Self {
        self.with(transform::decks(n))
    }

    /// Number of stages added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if no stage has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs the base deck through every stage.
    #[must_use]
    pub fn build(mut self) -> Vec<Card> {
        run(&mut self.stages)
    }
}

impl fmt::Debug for DeckBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("stages", &self.stages.len())
            .finish()
    }
}

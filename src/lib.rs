//! A playing-card deck builder with optional `no_std` support.
//!
//! [`deck::new`] builds the standard 52-card deck and runs it through a chain
//! of [`Transform`]s, left to right. The transform library covers sorting,
//! shuffling with an explicit [`Shuffler`], filtering, adding jokers and
//! duplicating the deck.
//!
//! # Example
//!
//! ```
//! use deckrs::{Rank, Shuffler, deck, transform};
//!
//! let shuffler = Shuffler::new(42);
//! let cards = deck::new(&mut [
//!     &mut transform::jokers(2),
//!     &mut transform::filter(|card| card.rank == Rank::TWO),
//!     &mut transform::shuffle(&shuffler),
//! ]);
//! assert_eq!(cards.len(), 52 + 2 - 4);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod order;
pub mod shuffle;
mod sync;
pub mod transform;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::DeckBuilder;
pub use error::CardError;
pub use shuffle::Shuffler;
pub use transform::Transform;

//! Seeded, shareable shuffling.

use core::fmt;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::sync::Mutex;

/// Random source used by the shuffle transform.
///
/// A `Shuffler` is created once and passed to every pipeline that shuffles.
/// The generator sits behind a mutex, so a shared `&Shuffler` can be used
/// from several threads. Two shufflers built from the same seed produce the
/// same sequence of permutations.
///
/// The generator is `ChaCha8Rng::seed_from_u64(seed)`. For seed 0 the first
/// permutation of 52 starts `[27, 8, 6, ...]` and ends with `30`, so a
/// shuffled base deck opens with the Two of Clubs and closes with the Five
/// of Clubs.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Shuffler, Suit, deck};
///
/// let cards = Shuffler::new(0).shuffle(&deck::base());
/// assert_eq!(cards[0], Card::new(Suit::Club, Rank::TWO));
/// assert_eq!(cards[51], Card::new(Suit::Club, Rank::FIVE));
///
/// let a = Shuffler::new(7).shuffle(&deck::base());
/// let b = Shuffler::new(7).shuffle(&deck::base());
/// assert_eq!(a, b);
/// ```
pub struct Shuffler {
    rng: Mutex<ChaCha8Rng>,
}

impl Shuffler {
    /// Creates a shuffler with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a shuffler seeded from the wall clock, in whole seconds.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        log::debug!("seeding shuffler from wall clock ({seed})");
        Self::new(seed)
    }

    /// Replaces the generator state with a fresh one built from `seed`.
    ///
    /// Subsequent shuffles behave exactly like those of `Shuffler::new(seed)`.
    pub fn reseed(&self, seed: u64) {
        log::debug!("reseeding shuffler ({seed})");
        *self.rng.lock() = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Returns a uniformly random permutation of `0..len`.
    #[must_use]
    pub fn permutation(&self, len: usize) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..len).collect();
        perm.shuffle(&mut *self.rng.lock());
        perm
    }

    /// Returns a shuffled copy of `cards`; the input is left as is.
    ///
    /// Position `i` of the result holds `cards[perm[i]]`, where `perm` is the
    /// next [`permutation`](Self::permutation) of the generator.
    #[must_use]
    pub fn shuffle(&self, cards: &[Card]) -> Vec<Card> {
        self.permutation(cards.len())
            .into_iter()
            .map(|j| cards[j])
            .collect()
    }

    /// Consumes the shuffler and returns its generator.
    ///
    /// The generator continues from where the last shuffle left it.
    #[must_use]
    pub fn into_rng(self) -> ChaCha8Rng {
        self.rng.into_inner()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl Default for Shuffler {
    fn default() -> Self {
        Self::from_time()
    }
}

impl fmt::Debug for Shuffler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shuffler").finish_non_exhaustive()
    }
}

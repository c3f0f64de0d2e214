//! The single-deck shoe.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};
use crate::error::ShoeError;

/// A shuffled stack of cards. Draws come off the end of the vector.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
    reshuffles: u32,
}

impl Shoe {
    /// Creates a freshly shuffled 52-card shoe from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::fresh_deck(&mut rng);
        Self {
            cards,
            rng,
            reshuffles: 0,
        }
    }

    /// Builds one full deck and shuffles it (Fisher-Yates via `SliceRandom`).
    fn fresh_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in RANKS {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.shuffle(rng);
        cards
    }

    /// Replaces the shoe with a fresh, shuffled 52-card deck.
    pub fn reshuffle(&mut self) {
        self.cards = Self::fresh_deck(&mut self.rng);
        self.reshuffles += 1;
        log::debug!("shoe reshuffled ({} total)", self.reshuffles);
    }

    /// Reshuffles if fewer than `threshold` cards remain.
    ///
    /// Returns `true` if a reshuffle was performed.
    pub fn reshuffle_if_below(&mut self, threshold: usize) -> bool {
        if self.cards.len() < threshold {
            self.reshuffle();
            true
        } else {
            false
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards remain.
    pub fn try_draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Removes and returns the top card, reshuffling first if the shoe is empty.
    pub fn draw(&mut self) -> Card {
        loop {
            match self.try_draw() {
                Ok(card) => return card,
                Err(ShoeError::Empty) => {
                    log::warn!("shoe exhausted mid-round, reshuffling");
                    self.reshuffle();
                }
            }
        }
    }

    /// Places cards on top of the shoe so that they are drawn in the given order.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards.extend(draws.iter().rev().copied());
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns how many times the shoe has been reshuffled since creation.
    #[must_use]
    pub const fn reshuffles(&self) -> u32 {
        self.reshuffles
    }
}

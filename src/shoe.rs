//! The shoe the simulation deals from.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// A stack of cards built from one or more standard decks.
///
/// The shoe is shuffled once when it is built and then only shrinks. Each
/// deal is checked against a per-rank count of the cards still inside.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards in the shoe. The last element is the top of the stack.
    cards: Vec<Card>,
    /// Remaining cards per rank, indexed by [`Rank::index`].
    remaining: [usize; 13],
    /// Number of cards the shoe started with.
    initial_len: usize,
}

impl Shoe {
    /// Creates and shuffles a shoe with the specified number of decks.
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for rank in Rank::ALL {
                for suit in Suit::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards.shuffle(rng);
        debug!(decks, cards = cards.len(), "built shoe");

        Self::from_stack(cards)
    }

    /// Creates an unshuffled shoe that deals `draws` in order.
    ///
    /// The first card of the slice is the first one dealt.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self::from_stack(cards)
    }

    fn from_stack(cards: Vec<Card>) -> Self {
        let mut remaining = [0; 13];
        for card in &cards {
            remaining[card.rank().index()] += 1;
        }

        Self {
            initial_len: cards.len(),
            cards,
            remaining,
        }
    }

    /// Deals the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::ExhaustedShoe`] if the shoe is empty.
    ///
    /// # Panics
    ///
    /// Panics if the per-rank count disagrees with the cards in the shoe.
    /// That can only happen through a bookkeeping bug.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        let card = self.cards.pop().ok_or(DealError::ExhaustedShoe)?;

        let count = &mut self.remaining[card.rank().index()];
        assert!(*count > 0, "no more {} cards left in the shoe", card.rank());
        *count -= 1;

        Ok(card)
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards the shoe was built with.
    #[must_use]
    pub const fn initial_len(&self) -> usize {
        self.initial_len
    }

    /// Returns the number of cards of `rank` still in the shoe.
    #[must_use]
    pub const fn remaining(&self, rank: Rank) -> usize {
        self.remaining[rank.index()]
    }
}

//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest value a hand can have without busting.
pub const BLACKJACK: u8 = 21;

fn total(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |sum, card| sum.saturating_add(card.value()))
}

/// A hand of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`, with aces already resolved.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self {
            cards: cards.to_vec(),
        };
        hand.resolve();
        hand
    }

    /// Adds a card to the hand and resolves soft aces.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.resolve();
    }

    /// Demotes soft aces until the hand no longer busts or none are left.
    ///
    /// Aces are demoted in the order they were dealt. A demoted ace stays at 1
    /// for the rest of the round. Returns the resulting value.
    pub fn resolve(&mut self) -> u8 {
        let mut value = total(&self.cards);

        while value > BLACKJACK {
            let Some(ace) = self.cards.iter_mut().find(|card| card.is_soft_ace()) else {
                break;
            };
            ace.demote();
            value -= 10;
        }

        value
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand from the current card values.
    #[must_use]
    pub fn value(&self) -> u8 {
        total(&self.cards)
    }

    /// Returns the number of aces still counted as 11.
    #[must_use]
    pub fn soft_aces(&self) -> usize {
        self.cards.iter().filter(|card| card.is_soft_ace()).count()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.soft_aces() > 0
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        Ok(())
    }
}

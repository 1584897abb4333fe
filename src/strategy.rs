//! Fixed drawing strategies for the player and the dealer.
//!
//! Both sides draw from the shared [`Shoe`] until their stopping rule is met.
//! Running out of cards mid-hand stops the drawing instead of failing the
//! round; the caller sees it through [`Stop::ShoeExhausted`].

extern crate alloc;

use alloc::vec::Vec;

use crate::error::DealError;
use crate::hand::{BLACKJACK, Hand};
use crate::shoe::Shoe;

/// Value at which the player stops drawing.
pub const PLAYER_STANDS_ON: u8 = 16;

/// Why a strategy stopped drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// The stopping value was reached.
    Stood,
    /// The hand went over 21.
    Bust,
    /// The shoe ran out while drawing.
    ShoeExhausted,
    /// The dealer had nothing to beat because the player busted.
    NotNeeded,
}

fn hit(hand: &mut Hand, shoe: &mut Shoe) -> Result<(), DealError> {
    let card = shoe.deal()?;
    hand.add_card(card);
    Ok(())
}

/// Draws into `hand` while `keep_drawing` holds.
fn draw_while(hand: &mut Hand, shoe: &mut Shoe, keep_drawing: impl Fn(&Hand) -> bool) -> Stop {
    loop {
        if hand.is_bust() {
            return Stop::Bust;
        }
        if !keep_drawing(hand) {
            return Stop::Stood;
        }
        if hit(hand, shoe).is_err() {
            return Stop::ShoeExhausted;
        }
    }
}

/// The player: hits until the hand is worth at least [`PLAYER_STANDS_ON`].
#[derive(Debug, Clone, Default)]
pub struct Player {
    hands: Vec<Hand>,
}

impl Player {
    /// Creates a player with no hands.
    #[must_use]
    pub const fn new() -> Self {
        Self { hands: Vec::new() }
    }

    /// Replaces the player's hands with a single new hand.
    pub fn set_hands(&mut self, hand: Hand) {
        self.hands.clear();
        self.hands.push(hand);
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Plays every hand the player holds.
    ///
    /// Returns the stop reason of each hand, in order.
    pub fn play(&mut self, shoe: &mut Shoe) -> Vec<Stop> {
        self.hands
            .iter_mut()
            .map(|hand| Self::play_hand(hand, shoe))
            .collect()
    }

    /// Plays a single hand to completion.
    ///
    /// A hand with fewer than two cards is first dealt up to two.
    pub fn play_hand(hand: &mut Hand, shoe: &mut Shoe) -> Stop {
        while hand.len() < 2 {
            if hit(hand, shoe).is_err() {
                return Stop::ShoeExhausted;
            }
        }

        draw_while(hand, shoe, |hand| hand.value() < PLAYER_STANDS_ON)
    }
}

/// The dealer: hits until the hand matches or beats the player's final value.
///
/// This is not the casino draw-to-17 rule. The dealer only draws as far as it
/// needs to reach the player.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Replaces the dealer's hand.
    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Plays the dealer's hand against the player's final value.
    pub fn play(&mut self, shoe: &mut Shoe, target: u8) -> Stop {
        if target > BLACKJACK {
            return Stop::NotNeeded;
        }

        draw_while(&mut self.hand, shoe, |hand| hand.value() < target)
    }
}

//! Round outcome types.

use crate::hand::Hand;

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Loss,
    /// Tie. Counts as neither a win nor a loss.
    Tie,
}

impl Outcome {
    /// Compares a finished player hand against a finished dealer hand.
    ///
    /// A player bust loses even if the dealer also busted.
    #[must_use]
    pub fn resolve(player: &Hand, dealer: &Hand) -> Self {
        if player.is_bust() {
            return Self::Loss;
        }
        if dealer.is_bust() {
            return Self::Win;
        }

        match dealer.value().cmp(&player.value()) {
            core::cmp::Ordering::Less => Self::Win,
            core::cmp::Ordering::Greater => Self::Loss,
            core::cmp::Ordering::Equal => Self::Tie,
        }
    }

    /// Summary line printed after each round.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Win => "Player wins!",
            Self::Loss => "Dealer wins!",
            Self::Tie => "It's a tie...",
        }
    }
}

/// Record of a single completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's final hand.
    pub player_hand: Hand,
    /// The dealer's final hand.
    pub dealer_hand: Hand,
    /// The outcome of the round.
    pub outcome: Outcome,
    /// Whether the shoe ran out while the round was being played.
    pub shoe_exhausted: bool,
}

impl RoundResult {
    /// The player's final hand value.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player_hand.value()
    }

    /// The dealer's final hand value.
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        self.dealer_hand.value()
    }
}

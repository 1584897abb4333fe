//! Aggregate statistics over a simulation run.

extern crate alloc;

use alloc::collections::BTreeMap;
use core::fmt;

use crate::result::Outcome;

/// Winning totals listed in the final report, highest first.
pub const REPORTED_TOTALS: [u8; 6] = [21, 20, 19, 18, 17, 16];

/// Win, loss and tie counters plus a histogram of winning hand values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    rounds: usize,
    wins: usize,
    losses: usize,
    ties: usize,
    /// Winning player hand value -> number of wins with that value.
    winning_hands: BTreeMap<u8, usize>,
}

impl Stats {
    /// Creates empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rounds: 0,
            wins: 0,
            losses: 0,
            ties: 0,
            winning_hands: BTreeMap::new(),
        }
    }

    /// Records one completed round.
    pub fn record(&mut self, outcome: Outcome, player_value: u8) {
        self.rounds += 1;
        match outcome {
            Outcome::Win => {
                self.wins += 1;
                *self.winning_hands.entry(player_value).or_default() += 1;
            }
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Number of rounds played.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Number of rounds the player won.
    #[must_use]
    pub const fn wins(&self) -> usize {
        self.wins
    }

    /// Number of rounds the dealer won.
    #[must_use]
    pub const fn losses(&self) -> usize {
        self.losses
    }

    /// Number of tied rounds.
    #[must_use]
    pub const fn ties(&self) -> usize {
        self.ties
    }

    /// Number of wins achieved with a final hand worth `value`.
    #[must_use]
    pub fn winning_hand_count(&self, value: u8) -> usize {
        self.winning_hands.get(&value).copied().unwrap_or(0)
    }

    /// Iterates over `(value, wins)` pairs in ascending value order.
    pub fn winning_hands(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.winning_hands.iter().map(|(&value, &count)| (value, count))
    }

    /// Percentage of rounds the player won, or 0 if no rounds were played.
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for round counts"
        )]
        let ratio = self.wins as f64 / self.rounds as f64;
        ratio * 100.0
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of games: {}", self.rounds)?;
        writeln!(f)?;
        writeln!(f, "Player Success: {}%", self.win_percentage())?;
        writeln!(f)?;
        writeln!(f, "Player Winning Hand => # of times achieved")?;
        for value in REPORTED_TOTALS {
            writeln!(f, "{value} => {}", self.winning_hand_count(value))?;
        }
        Ok(())
    }
}

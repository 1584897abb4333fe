//! Round orchestration and the simulation loop.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::error::DealError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};
use crate::shoe::Shoe;
use crate::stats::Stats;
use crate::strategy::{Dealer, Player, Stop};

/// A simulation that plays rounds from one shoe until it runs out.
///
/// The game owns the shoe, both participants, and the running statistics.
pub struct Game {
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// Game options.
    pub options: GameOptions,
    player: Player,
    dealer: Dealer,
    stats: Stats,
}

impl Game {
    /// Creates a new game with a shoe shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjsim::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let stats = game.run();
    /// println!("{stats}");
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(options.decks, &mut rng);
        Self::with_shoe(options, shoe)
    }

    /// Creates a new game that deals from a prepared shoe.
    #[must_use]
    pub const fn with_shoe(options: GameOptions, shoe: Shoe) -> Self {
        Self {
            shoe,
            options,
            player: Player::new(),
            dealer: Dealer::new(),
            stats: Stats::new(),
        }
    }

    /// Returns the statistics gathered so far.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Deals the opening cards: two to the player, one to the dealer.
    fn deal_opening(&mut self) -> Result<(Hand, Hand), DealError> {
        let mut player_hand = Hand::new();
        player_hand.add_card(self.shoe.deal()?);
        player_hand.add_card(self.shoe.deal()?);

        let mut dealer_hand = Hand::new();
        dealer_hand.add_card(self.shoe.deal()?);

        Ok((player_hand, dealer_hand))
    }

    /// Plays a single round and records it in the statistics.
    ///
    /// If the shoe runs out while the player or dealer is drawing, the round
    /// is still resolved with the cards already held and
    /// [`RoundResult::shoe_exhausted`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::ExhaustedShoe`] if the opening cards cannot be
    /// dealt. Nothing is recorded in that case.
    pub fn play_round(&mut self) -> Result<RoundResult, DealError> {
        let (player_hand, dealer_hand) = self.deal_opening()?;

        self.player.set_hands(player_hand);
        self.dealer.set_hand(dealer_hand);

        let player_stops = self.player.play(&mut self.shoe);
        let player_hand = self.player.hands().first().cloned().unwrap_or_default();

        let dealer_stop = self.dealer.play(&mut self.shoe, player_hand.value());
        let dealer_hand = self.dealer.hand().clone();

        let shoe_exhausted = dealer_stop == Stop::ShoeExhausted
            || player_stops.contains(&Stop::ShoeExhausted);

        let outcome = Outcome::resolve(&player_hand, &dealer_hand);
        self.stats.record(outcome, player_hand.value());

        trace!(
            player = player_hand.value(),
            dealer = dealer_hand.value(),
            ?outcome,
            "round finished"
        );

        Ok(RoundResult {
            player_hand,
            dealer_hand,
            outcome,
            shoe_exhausted,
        })
    }

    /// Plays rounds until the shoe is exhausted and returns the statistics.
    pub fn run(&mut self) -> &Stats {
        self.run_with(|_| {})
    }

    /// Like [`Game::run`], calling `on_round` after every completed round.
    pub fn run_with(&mut self, mut on_round: impl FnMut(&RoundResult)) -> &Stats {
        while let Ok(round) = self.play_round() {
            on_round(&round);
            if round.shoe_exhausted {
                break;
            }
        }

        debug!(
            rounds = self.stats.rounds(),
            wins = self.stats.wins(),
            losses = self.stats.losses(),
            ties = self.stats.ties(),
            "shoe exhausted"
        );

        &self.stats
    }
}

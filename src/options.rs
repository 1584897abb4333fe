//! Simulation configuration options.

/// Configuration options for a simulation run.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default().with_decks(6);
/// assert_eq!(options.decks, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { decks: 1 }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Number of cards a fresh shoe holds with these options.
    #[must_use]
    pub const fn shoe_size(&self) -> usize {
        self.decks as usize * crate::card::DECK_SIZE
    }
}

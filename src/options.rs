//! Opponent configuration options.

/// Configuration options for the built-in opponent.
///
/// The game rules themselves are fixed; these options only shape how the
/// bot plays. Use the builder pattern to customize them:
///
/// ```
/// use dhumbaal::OpponentOptions;
///
/// let options = OpponentOptions::default().with_jhyap_chance(1.0);
/// assert_eq!(options.jhyap_chance, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OpponentOptions {
    /// Probability of calling Jhyap whenever the hand is within the limit.
    ///
    /// Values at or below 0 never call and values at or above 1 always call.
    pub jhyap_chance: f64,
}

impl Default for OpponentOptions {
    fn default() -> Self {
        Self { jhyap_chance: 0.7 }
    }
}

impl OpponentOptions {
    /// Sets the probability of calling Jhyap.
    ///
    /// # Example
    ///
    /// ```
    /// use dhumbaal::OpponentOptions;
    ///
    /// let options = OpponentOptions::default().with_jhyap_chance(0.25);
    /// assert_eq!(options.jhyap_chance, 0.25);
    /// ```
    #[must_use]
    pub const fn with_jhyap_chance(mut self, chance: f64) -> Self {
        self.jhyap_chance = chance;
        self
    }
}

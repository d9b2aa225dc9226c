//! Round result types for showdown.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
    /// Player has blackjack.
    Blackjack,
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The bet that was riding on the hand (doubled if the player doubled down).
    pub bet: usize,
    /// Chips paid back to the player, stake included.
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// The player's balance after settlement.
    pub balance: usize,
}

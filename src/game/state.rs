//! Game state types.

use core::str::FromStr;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds.
    Idle,
    /// Accepting a bet for the next round.
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be settled.
    RoundOver,
}

/// A decision the player can make on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, draw one card and stand.
    DoubleDown,
}

/// Error returned when a line does not name an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized action {0:?}")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses `h`/`hit`, `s`/`stand` and `d`/`double`/`double down`,
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hit" => Ok(Self::Hit),
            "s" | "stand" => Ok(Self::Stand),
            "d" | "double" | "double down" => Ok(Self::DoubleDown),
            _ => Err(ParseActionError(s.to_owned())),
        }
    }
}

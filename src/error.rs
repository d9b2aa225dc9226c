//! Error types for game operations.

use std::io;

use thiserror::Error;

/// Errors that can occur when building a card from indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit index outside `0..=3`.
    #[error("invalid suit index {0}, expected 0..=3")]
    InvalidSuit(usize),
    /// Rank index outside `1..=13`.
    #[error("invalid rank index {0}, expected 1..=13")]
    InvalidRank(usize),
}

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards left in the deck.
    #[error("deck exhausted: {requested} card(s) requested, {remaining} remaining")]
    Exhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet is below the table minimum.
    #[error("the minimum bet is {minimum} chips")]
    BelowMinimum {
        /// The table minimum.
        minimum: usize,
    },
    /// Bet exceeds the current balance.
    #[error("insufficient funds, your current balance is {balance} chips")]
    InsufficientFunds {
        /// The current balance.
        balance: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// Not enough cards in the deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Double down is only allowed as the first decision.
    #[error("you can only double down on your first decision")]
    CannotDouble,
    /// Insufficient funds for this action.
    #[error("insufficient funds, doubling down needs another {needed} chips")]
    InsufficientFunds {
        /// Chips needed to cover the extra stake.
        needed: usize,
    },
    /// Not enough cards in the deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during the dealer turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// A round is in progress.
    #[error("cannot reshuffle while a round is in progress")]
    InvalidState,
}

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the console failed.
    #[error("console i/o failed")]
    Io(#[from] io::Error),
    /// Input ended while a round was in progress.
    #[error("input closed in the middle of a round")]
    InputClosed,
    /// The deck ran out of cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A bet was rejected outside the betting prompt.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(ActionError),
    /// The dealer turn or showdown failed.
    #[error(transparent)]
    Showdown(ShowdownError),
    /// Reshuffling failed.
    #[error(transparent)]
    Reshuffle(#[from] ReshuffleError),
}

impl From<DealError> for SessionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::Deck(err) => Self::Deck(err),
            err => Self::Deal(err),
        }
    }
}

impl From<ActionError> for SessionError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::Deck(err) => Self::Deck(err),
            err => Self::Action(err),
        }
    }
}

impl From<ShowdownError> for SessionError {
    fn from(err: ShowdownError) -> Self {
        match err {
            ShowdownError::Deck(err) => Self::Deck(err),
            err => Self::Showdown(err),
        }
    }
}

//! A single-player console blackjack table.
//!
//! [`Game`] runs one round at a time as a small state machine (bet, deal,
//! player turn, dealer turn, showdown) and never touches the console.
//! [`Session`] drives a game through any [`Console`], prompting for bets and
//! decisions and narrating every card, until the player leaves or goes broke.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use blackjack::{Game, IoConsole, Session, TableOptions};
//!
//! let game = Game::new(TableOptions::default(), 42);
//! let console = IoConsole::new(Cursor::new(""), Vec::new());
//! let mut session = Session::new(game, console);
//! let summary = session.run().unwrap();
//! assert_eq!(summary.rounds_played, 0);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;
pub mod text;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{Console, IoConsole};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, CardError, DealError, DeckError, ReshuffleError, SessionError,
    ShowdownError,
};
pub use game::{Action, Game, GameState, ParseActionError};
pub use hand::{DealerHand, Hand, HandStatus, WIN_VALUE, hand_value};
pub use options::{RoundingMode, TableOptions};
pub use result::{RoundOutcome, RoundResult};
pub use session::{Session, SessionSummary, Standing};

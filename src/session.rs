//! The console game loop.

use core::cmp::Ordering;
use std::io;

use tracing::{info, warn};

use crate::console::Console;
use crate::error::{ActionError, BetError, SessionError};
use crate::game::{Action, Game, GameState};
use crate::hand::{Hand, hand_value};
use crate::text;

/// Where the player stands when leaving the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    /// Left with more chips than they started with.
    Gain(usize),
    /// Left with fewer chips than they started with.
    Loss(usize),
    /// Left with exactly the starting balance.
    Even,
}

/// Final tally of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Chips at the start of the session.
    pub starting_chips: usize,
    /// Chips when the player left.
    pub final_chips: usize,
    /// Number of rounds played to the end.
    pub rounds_played: usize,
}

impl SessionSummary {
    /// Compares the final balance with the starting balance.
    #[must_use]
    pub fn standing(&self) -> Standing {
        match self.final_chips.cmp(&self.starting_chips) {
            Ordering::Greater => Standing::Gain(self.final_chips - self.starting_chips),
            Ordering::Less => Standing::Loss(self.starting_chips - self.final_chips),
            Ordering::Equal => Standing::Even,
        }
    }
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Plays rounds of a [`Game`] through a [`Console`] until the player leaves
/// or runs out of chips.
///
/// ```
/// use std::io::Cursor;
///
/// use blackjack::{Deck, Game, IoConsole, Session, TableOptions};
///
/// // Leave at the first bet prompt.
/// let game = Game::with_deck(TableOptions::default(), Deck::new(1));
/// let mut session = Session::new(game, IoConsole::new(Cursor::new(""), Vec::new()));
/// let summary = session.run().unwrap();
/// assert_eq!(summary.final_chips, 10_000);
/// assert_eq!(summary.rounds_played, 0);
/// ```
#[derive(Debug)]
pub struct Session<C> {
    game: Game,
    console: C,
    rounds_played: usize,
}

impl<C: Console> Session<C> {
    /// Seats the player at `game`, talking through `console`.
    pub const fn new(game: Game, console: C) -> Self {
        Self {
            game,
            console,
            rounds_played: 0,
        }
    }

    /// Returns the game being played.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning the console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs rounds until the player declines to continue, input ends between
    /// rounds, or the balance can no longer cover the minimum bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, input ends in the middle of a
    /// round, or the deck runs out of cards.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let starting_chips = self.game.chips();
        self.say(&text::starting_balance(starting_chips))?;

        loop {
            if self.game.is_bankrupt() {
                self.say(&text::bankrupt())?;
                break;
            }
            if !self.game.can_cover_min_bet() {
                let line = text::below_min_bet(self.game.chips(), self.game.options.min_bet);
                self.say(&line)?;
                break;
            }

            if self.game.check_and_reshuffle()? {
                self.say(&text::reshuffled())?;
            }

            let Some(bet) = self.prompt_bet()? else {
                info!("input closed at the bet prompt");
                break;
            };
            info!(bet, round = self.rounds_played + 1, "round started");

            self.play_round()?;
            self.rounds_played += 1;

            if self.game.is_bankrupt() || !self.game.can_cover_min_bet() {
                continue;
            }
            if !self.prompt_play_again()? {
                break;
            }
        }

        let summary = SessionSummary {
            starting_chips,
            final_chips: self.game.chips(),
            rounds_played: self.rounds_played,
        };
        self.say_all(text::summary(&summary))?;
        info!(
            rounds = summary.rounds_played,
            chips = summary.final_chips,
            "session over"
        );

        Ok(summary)
    }

    /// Prompts until the game accepts a bet. Returns `None` if input ends.
    fn prompt_bet(&mut self) -> Result<Option<usize>, SessionError> {
        self.game.start_betting();

        loop {
            self.say(&text::bet_prompt(self.game.options.min_bet))?;
            let Some(line) = self.console.read_line()? else {
                self.game.clear_round();
                return Ok(None);
            };

            let Ok(amount) = line.trim().parse::<usize>() else {
                warn!(input = %line, "bet is not a number");
                self.say(&text::bet_not_a_number(&line))?;
                continue;
            };

            match self.game.bet(amount) {
                Ok(()) => return Ok(Some(amount)),
                Err(err @ (BetError::BelowMinimum { .. } | BetError::InsufficientFunds { .. })) => {
                    warn!(amount, %err, "bet rejected");
                    self.say(&text::bet_rejected(&err))?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn play_round(&mut self) -> Result<(), SessionError> {
        self.game.deal()?;

        if let Some(card) = self.game.dealer_hand().up_card().copied() {
            self.say(&text::dealer_up_card(&card))?;
        }
        if let Some(hand) = self.game.hand() {
            let mut lines: Vec<String> = hand.cards().iter().map(text::player_draw).collect();
            lines.push(text::player_total(hand.value()));
            self.say_all(lines)?;
        }

        while self.game.state() == GameState::PlayerTurn {
            self.player_decision()?;
        }

        if self.game.state() == GameState::DealerTurn {
            self.dealer_turn()?;
        }

        let result = self.game.showdown()?;
        self.say_all(text::round_result(&result))?;
        self.game.clear_round();

        Ok(())
    }

    fn player_decision(&mut self) -> Result<(), SessionError> {
        self.say(&text::action_prompt(self.game.can_double()))?;
        let line = self.console.read_line()?.ok_or(SessionError::InputClosed)?;

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(err) => {
                warn!(%err, "unrecognized action");
                self.say(&text::invalid_action(&line))?;
                return Ok(());
            }
        };

        let card = match self.game.act(action) {
            Ok(card) => card,
            Err(err @ (ActionError::CannotDouble | ActionError::InsufficientFunds { .. })) => {
                warn!(%err, "double down refused");
                self.say(&text::action_rejected(&err))?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        if action == Action::DoubleDown {
            if let Some(bet) = self.game.current_bet() {
                self.say(&text::bet_increased(bet))?;
            }
        }
        if let Some(card) = card {
            let value = self.game.hand().map_or(0, Hand::value);
            self.say_all(vec![text::player_draw(&card), text::player_total(value)])?;
        }

        Ok(())
    }

    fn dealer_turn(&mut self) -> Result<(), SessionError> {
        let dealer = self.game.dealer_hand();
        if let Some(card) = dealer.hole_card() {
            let lines = vec![
                text::dealer_hole_card(card),
                text::dealer_total(dealer.value()),
            ];
            self.say_all(lines)?;
        }

        let drawn = self.game.dealer_play()?.len();
        let cards = self.game.dealer_hand().cards().to_vec();
        let first_drawn = cards.len() - drawn;
        for (index, card) in cards.iter().enumerate().skip(first_drawn) {
            let lines = vec![
                text::dealer_draw(card),
                text::dealer_total(hand_value(&cards[..=index])),
            ];
            self.say_all(lines)?;
        }

        Ok(())
    }

    fn prompt_play_again(&mut self) -> Result<bool, SessionError> {
        loop {
            self.say(&text::play_again_prompt())?;
            let Some(line) = self.console.read_line()? else {
                return Ok(false);
            };

            match parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => self.say(&text::invalid_answer())?,
            }
        }
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        self.console.write_line(line)
    }

    fn say_all(&mut self, lines: Vec<String>) -> io::Result<()> {
        lines.iter().try_for_each(|line| self.say(line))
    }
}

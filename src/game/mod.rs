//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{DeckError, ReshuffleError};
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Action, GameState, ParseActionError};

/// A single-player blackjack table.
///
/// The game owns the deck, the player's chips and the round in progress.
/// Each round moves through [`GameState`] one method call at a time; nothing
/// here reads or writes the console.
#[derive(Debug)]
pub struct Game {
    /// Table options.
    pub options: TableOptions,
    deck: Deck,
    state: GameState,
    chips: usize,
    /// Bet staked for the current round, before the hand is dealt.
    bet: Option<usize>,
    /// The player's hand for the current round.
    hand: Option<Hand>,
    dealer_hand: DealerHand,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{Game, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default(), 42);
    /// assert_eq!(game.chips(), 10_000);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(options.decks, &mut rng);
        Self::build(options, deck, rng)
    }

    /// Creates a game that deals from `deck` as given, without shuffling.
    ///
    /// Later reshuffles still build standard shoes from `options`.
    #[must_use]
    pub fn with_deck(options: TableOptions, deck: Deck) -> Self {
        Self::build(options, deck, ChaCha8Rng::seed_from_u64(0))
    }

    fn build(options: TableOptions, deck: Deck, rng: ChaCha8Rng) -> Self {
        Self {
            chips: options.starting_chips,
            options,
            deck,
            state: GameState::Idle,
            bet: None,
            hand: None,
            dealer_hand: DealerHand::new(),
            rng,
        }
    }

    /// Replaces the shoe with a freshly shuffled one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress (not in `Idle` or `Betting` state).
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.state != GameState::Idle && self.state != GameState::Betting {
            return Err(ReshuffleError::InvalidState);
        }

        self.deck = Deck::shuffled(self.options.decks, &mut self.rng);
        debug!(cards = self.deck.len(), "shoe rebuilt");

        Ok(())
    }

    /// Returns whether the shoe needs reshuffling based on penetration.
    ///
    /// Returns `true` if the share of dealt cards reached the penetration
    /// threshold. If penetration is 0, always returns `false`.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        if self.options.penetration <= 0.0 {
            return false;
        }

        let total_cards = self.options.decks as usize * DECK_SIZE;
        if total_cards == 0 {
            return false;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (self.deck.len() as f64 / total_cards as f64);

        used_ratio >= self.options.penetration
    }

    /// Checks penetration and reshuffles if needed.
    ///
    /// Call this between rounds. Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's chips, not counting a bet currently at stake.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns whether the player has no chips left.
    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.chips == 0
    }

    /// Returns whether the player can still cover the minimum bet.
    #[must_use]
    pub const fn can_cover_min_bet(&self) -> bool {
        self.chips >= self.options.min_bet
    }

    /// Returns the bet at stake in the current round.
    #[must_use]
    pub fn current_bet(&self) -> Option<usize> {
        self.hand.as_ref().map(Hand::bet).or(self.bet)
    }

    /// Returns the player's hand, once dealt.
    #[must_use]
    pub const fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Starts the betting phase.
    pub const fn start_betting(&mut self) {
        self.state = GameState::Betting;
    }

    /// Clears the hands and bet (called at the end of a round).
    ///
    /// An unsettled bet is returned to the player. The game goes back to the
    /// `Idle` state.
    pub fn clear_round(&mut self) {
        if let Some(stake) = self.bet.take() {
            self.chips += stake;
        }
        if let Some(hand) = self.hand.take() {
            self.chips += hand.bet();
        }
        self.dealer_hand.clear();
        self.state = GameState::Idle;
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.deck.deal_one()?;
        debug!(%card, remaining = self.deck.len(), "card drawn");
        Ok(card)
    }
}

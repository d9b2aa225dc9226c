use tracing::debug;

use crate::error::{BetError, DealError, DeckError};
use crate::hand::{Hand, HandStatus};

use super::{Game, GameState};

impl Game {
    /// Stakes a bet for the next round.
    ///
    /// Placing a second bet before the deal replaces the first one.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the amount is
    /// below the table minimum, or the player lacks funds.
    pub fn bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if let Some(previous) = self.bet.take() {
            self.chips += previous;
        }

        if amount < self.options.min_bet {
            return Err(BetError::BelowMinimum {
                minimum: self.options.min_bet,
            });
        }

        if amount > self.chips {
            return Err(BetError::InsufficientFunds {
                balance: self.chips,
            });
        }

        self.chips -= amount;
        self.bet = Some(amount);
        debug!(amount, chips = self.chips, "bet placed");

        Ok(())
    }

    /// Deals two cards to the dealer, then two cards to the player.
    ///
    /// The dealer's second card stays concealed. A player total of 21 is a
    /// blackjack and ends the round immediately; otherwise the player's turn
    /// begins.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, no bet has been
    /// placed, or there are not enough cards in the shoe.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        let Some(bet) = self.bet else {
            return Err(DealError::NoBet);
        };

        let remaining = self.deck.len();
        if remaining < 4 {
            return Err(DeckError::Exhausted {
                requested: 4,
                remaining,
            }
            .into());
        }

        self.dealer_hand.clear();
        for card in self.deck.deal(2)? {
            self.dealer_hand.add_card(card);
        }

        let mut hand = Hand::new(bet);
        for card in self.deck.deal(2)? {
            hand.add_card(card);
        }
        self.bet = None;

        debug!(
            player = hand.value(),
            dealer_up = self.dealer_hand.visible_value(),
            "initial deal"
        );

        self.state = if hand.status() == HandStatus::Blackjack {
            GameState::RoundOver
        } else {
            GameState::PlayerTurn
        };
        self.hand = Some(hand);

        Ok(())
    }
}

use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};

use super::{Action, Game, GameState};

impl Game {
    fn active_hand(&mut self) -> Result<&mut Hand, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let hand = self.hand.as_mut().ok_or(ActionError::InvalidState)?;
        if hand.status() != HandStatus::Active {
            return Err(ActionError::InvalidState);
        }

        Ok(hand)
    }

    /// Moves on from the player's turn once the hand is no longer active.
    ///
    /// A busted hand skips the dealer entirely. Otherwise the hole card is
    /// turned over and the dealer plays.
    fn end_turn_if_done(&mut self) {
        let Some(status) = self.hand.as_ref().map(Hand::status) else {
            return;
        };

        match status {
            HandStatus::Active => {}
            HandStatus::Bust => self.state = GameState::RoundOver,
            HandStatus::Stand | HandStatus::Blackjack => {
                self.dealer_hand.reveal_hole();
                self.state = GameState::DealerTurn;
            }
        }
    }

    /// Applies a parsed [`Action`].
    ///
    /// Returns the card drawn, if the action drew one.
    ///
    /// # Errors
    ///
    /// See [`Game::hit`], [`Game::stand`] and [`Game::double_down`].
    pub fn act(&mut self, action: Action) -> Result<Option<Card>, ActionError> {
        match action {
            Action::Hit => self.hit().map(Some),
            Action::Stand => self.stand().map(|()| None),
            Action::DoubleDown => self.double_down().map(Some),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 stands automatically; going over 21 busts.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.active_hand()?;

        let card = self.draw()?;
        let hand = self.active_hand()?;
        hand.add_card(card);
        debug!(value = hand.value(), "player hits");

        self.end_turn_if_done();

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let hand = self.active_hand()?;
        hand.set_status(HandStatus::Stand);
        debug!(value = hand.value(), "player stands");

        self.end_turn_if_done();

        Ok(())
    }

    /// Returns whether the player may double down right now.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.state == GameState::PlayerTurn
            && self.hand.as_ref().is_some_and(|hand| {
                hand.status() == HandStatus::Active
                    && hand.len() == 2
                    && self.chips >= hand.bet()
            })
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, this is not the
    /// player's first decision, the player cannot cover the extra stake, or
    /// the shoe is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        let chips = self.chips;
        let hand = self.active_hand()?;

        // Only on the first decision
        if hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        let bet = hand.bet();
        if chips < bet {
            return Err(ActionError::InsufficientFunds { needed: bet });
        }

        let card = self.draw()?;
        self.chips -= bet;

        let hand = self.active_hand()?;
        hand.double_bet();
        hand.add_card(card);

        // If not bust, set to stand
        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }
        debug!(bet = hand.bet(), value = hand.value(), "player doubles down");

        self.end_turn_if_done();

        Ok(card)
    }
}

use tracing::{debug, info};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::HandStatus;
use crate::options::RoundingMode;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

impl Game {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws while their total is below
    /// [`TableOptions::dealer_stands_on`](crate::TableOptions::dealer_stands_on).
    /// There is no soft-17 distinction.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer_hand.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer_hand.value() < self.options.dealer_stands_on {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
            drawn_cards.push(card);
        }
        debug!(
            value = self.dealer_hand.value(),
            drawn = drawn_cards.len(),
            "dealer stands"
        );

        self.state = GameState::RoundOver;

        Ok(drawn_cards)
    }

    /// Settles the round and pays out the player.
    ///
    /// A busted player loses even if the dealer would have busted too. A
    /// blackjack pays [`TableOptions::blackjack_pays`](crate::TableOptions::blackjack_pays)
    /// on top of the returned stake without looking at the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state or the round
    /// was already settled.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let hand = self.hand.take().ok_or(ShowdownError::InvalidState)?;
        let bet = hand.bet();
        let player_value = hand.value();
        let player_bust = hand.is_bust();
        let dealer_value = self.dealer_hand.value();
        let dealer_bust = self.dealer_hand.is_bust();

        let (outcome, payout) = if hand.status() == HandStatus::Blackjack {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let winnings = (bet as f64) * self.options.blackjack_pays;
            let rounded = round_amount(winnings, self.options.rounding_blackjack);
            (RoundOutcome::Blackjack, bet + rounded)
        } else if player_bust {
            (RoundOutcome::Lose, 0)
        } else if dealer_bust || player_value > dealer_value {
            (RoundOutcome::Win, bet * 2)
        } else if player_value < dealer_value {
            (RoundOutcome::Lose, 0)
        } else {
            (RoundOutcome::Push, bet)
        };

        self.chips += payout;

        #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
        let net = payout as isize - bet as isize;

        info!(?outcome, bet, net, chips = self.chips, "round settled");

        Ok(RoundResult {
            outcome,
            bet,
            payout,
            net,
            player_value,
            dealer_value,
            player_bust,
            dealer_bust,
            balance: self.chips,
        })
    }
}

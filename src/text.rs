//! Narration printed at the table.
//!
//! Every line the session writes is built here, so the wording lives in one
//! place and the round engine stays free of formatting.

use crate::card::Card;
use crate::error::{ActionError, BetError};
use crate::result::{RoundOutcome, RoundResult};
use crate::session::{SessionSummary, Standing};

/// Formats a card with its indefinite article, e.g. `"an Ace of Spades"`.
#[must_use]
pub fn card_phrase(card: &Card) -> String {
    format!("{} {card}", card.rank.article())
}

/// Opening line of a session.
#[must_use]
pub fn starting_balance(chips: usize) -> String {
    format!("You begin with {chips} chips.")
}

/// Asks for a bet.
#[must_use]
pub fn bet_prompt(min_bet: usize) -> String {
    format!("How many chips would you like to bet? The minimum bet is {min_bet} chips.")
}

/// Explains why a bet was refused.
#[must_use]
pub fn bet_rejected(err: &BetError) -> String {
    match err {
        BetError::BelowMinimum { minimum } => format!(
            "Please insert a bet worth more than the minimum bet. The minimum bet is {minimum} chips."
        ),
        BetError::InsufficientFunds { balance } => format!(
            "Please insert a bet worth less than your current balance. Your current balance is {balance} chips."
        ),
        BetError::InvalidState => format!("That bet cannot be placed right now: {err}."),
    }
}

/// Reply to a bet that is not a whole number.
#[must_use]
pub fn bet_not_a_number(input: &str) -> String {
    format!("{:?} is not a number of chips. Please enter a whole number.", input.trim())
}

/// The dealer's face-up card.
#[must_use]
pub fn dealer_up_card(card: &Card) -> String {
    format!("The dealer reveals their first card. It's {}.", card_phrase(card))
}

/// The dealer's hole card being turned over.
#[must_use]
pub fn dealer_hole_card(card: &Card) -> String {
    format!("The dealer reveals their second card. It's {}.", card_phrase(card))
}

/// A card dealt to the player.
#[must_use]
pub fn player_draw(card: &Card) -> String {
    format!("You drew {}.", card_phrase(card))
}

/// A card drawn by the dealer.
#[must_use]
pub fn dealer_draw(card: &Card) -> String {
    format!("The dealer drew {}.", card_phrase(card))
}

/// The player's running total.
#[must_use]
pub fn player_total(value: u8) -> String {
    format!("The total value of your hand is {value}.")
}

/// The dealer's running total.
#[must_use]
pub fn dealer_total(value: u8) -> String {
    format!("The total value of the dealer's hand is {value}.")
}

/// Asks for the player's next decision.
#[must_use]
pub fn action_prompt(can_double: bool) -> String {
    if can_double {
        "Would you like to hit (h) or stand (s)? You may also double down (d).".to_owned()
    } else {
        "Would you like to hit (h) or stand (s)?".to_owned()
    }
}

/// Reply to an unrecognized action.
#[must_use]
pub fn invalid_action(input: &str) -> String {
    format!(
        "{:?} is not a valid choice. Type h to hit, s to stand, or d to double down.",
        input.trim()
    )
}

/// Explains why an action was refused.
#[must_use]
pub fn action_rejected(err: &ActionError) -> String {
    let mut reason = err.to_string();
    if let Some(first) = reason.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    format!("{reason}.")
}

/// The bet after doubling down.
#[must_use]
pub fn bet_increased(bet: usize) -> String {
    format!("Your bet has increased to {bet} chips.")
}

/// Announces how the round ended and the new balance.
#[must_use]
pub fn round_result(result: &RoundResult) -> Vec<String> {
    let headline = match result.outcome {
        RoundOutcome::Blackjack => "Blackjack! The player wins!",
        RoundOutcome::Lose if result.player_bust => "The player busts, and the dealer wins.",
        RoundOutcome::Lose => "The dealer wins.",
        RoundOutcome::Win if result.dealer_bust => "The dealer busts, and the player wins!",
        RoundOutcome::Win => "The player wins.",
        RoundOutcome::Push => "Nobody won, it's a push.",
    };

    let change = match result.net {
        net if net > 0 => format!("You've won {net} chips!"),
        net if net < 0 => format!("You've lost {} chips.", net.unsigned_abs()),
        _ => "Your bet is returned.".to_owned(),
    };

    vec![
        headline.to_owned(),
        change,
        format!("Your current balance is {} chips.", result.balance),
    ]
}

/// Asks whether to play another round.
#[must_use]
pub fn play_again_prompt() -> String {
    "Would you like to play again? Yes (y) or No (n).".to_owned()
}

/// Reply to an unrecognized yes/no answer.
#[must_use]
pub fn invalid_answer() -> String {
    "Please input a valid response: y, yes, n or no.".to_owned()
}

/// The player ran out of chips.
#[must_use]
pub fn bankrupt() -> String {
    "You've lost all your chips.".to_owned()
}

/// The player can no longer cover the table minimum.
#[must_use]
pub fn below_min_bet(chips: usize, min_bet: usize) -> String {
    format!("You have {chips} chips left, which is less than the minimum bet of {min_bet} chips.")
}

/// The shoe was rebuilt between rounds.
#[must_use]
pub fn reshuffled() -> String {
    "The dealer shuffles a fresh deck.".to_owned()
}

/// Closing lines comparing the final balance with the starting one.
#[must_use]
pub fn summary(summary: &SessionSummary) -> Vec<String> {
    let verdict = match summary.standing() {
        Standing::Gain(chips) => format!("You made {chips} chips!"),
        Standing::Loss(chips) => format!("You lost {chips} chips."),
        Standing::Even => "You broke even.".to_owned(),
    };

    vec![
        format!(
            "You leave with {} chips, and started with {}.",
            summary.final_chips, summary.starting_chips
        ),
        verdict,
    ]
}

//! Player and dealer hand representations.

use crate::card::{Card, Rank};

/// Total that wins outright; anything above it is a bust.
pub const WIN_VALUE: u8 = 21;

const ACE_HIGH: u8 = 11;

const fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => ACE_HIGH,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        rank => rank.index(),
    }
}

/// Scores a sequence of cards.
///
/// Cards are counted in order. Ranks 2 to 10 count their face value and
/// face cards count 10. An Ace counts 11 when the total of the cards
/// before it is 10 or less, otherwise 1. Aces are never revalued when later
/// cards arrive, so `[A, 5, 10]` scores 26.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    cards.iter().fold(0u8, |value, card| {
        let points = match card.rank {
            Rank::Ace if value > WIN_VALUE - ACE_HIGH => 1,
            rank => card_value(rank),
        };
        value.saturating_add(points)
    })
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood (or reached 21).
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a blackjack (21 on the first two cards).
    Blackjack,
}

/// The player's hand for one round, along with the bet riding on it.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
    bet: usize,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
        }
    }

    /// Adds a card to the hand and updates its status.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let value = self.value();
        if value > WIN_VALUE {
            self.status = HandStatus::Bust;
        } else if value == WIN_VALUE {
            self.status = if self.cards.len() == 2 {
                HandStatus::Blackjack
            } else {
                HandStatus::Stand
            };
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the bet amount.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
    }

    /// Calculates the value of the hand with [`hand_value`].
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > WIN_VALUE
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
#[derive(Debug, Clone)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the concealed card (second card).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            hand_value(&self.cards[..self.cards.len().min(1)])
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > WIN_VALUE
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}

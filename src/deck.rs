//! The deck the dealer draws from.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered collection of cards dealt from the front.
///
/// Cards that have been dealt never come back; a fresh deck has to be built
/// to replenish it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds an unshuffled deck made of `decks` standard 52-card decks.
    ///
    /// Cards are laid out deck by deck, suit by suit ([`Suit::ALL`] order),
    /// rank by rank (Ace to King).
    #[must_use]
    pub fn new(decks: u8) -> Self {
        let mut cards = VecDeque::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push_back(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Builds a deck of `decks` standard decks and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut deck = Self::new(decks);
        deck.shuffle(rng);
        deck
    }

    /// Builds a deck that deals `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        debug!(cards = self.cards.len(), "deck shuffled");
    }

    /// Removes and returns the first `n` cards, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if fewer than `n` cards remain. The
    /// deck is left untouched in that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::Exhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn deal_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Exhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

//! Card types.

use core::fmt;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Hearts, Self::Diamonds];

    /// Returns the suit at `index` (0 = Spades, 1 = Clubs, 2 = Hearts, 3 = Diamonds).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Spades),
            1 => Some(Self::Clubs),
            2 => Some(Self::Hearts),
            3 => Some(Self::Diamonds),
            _ => None,
        }
    }

    /// Plural English name, e.g. `"Hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
        }
    }
}

/// Card rank, Ace through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in deck construction order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank at `index` (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= 1 && index <= Self::ALL.len() {
            Some(Self::ALL[index - 1])
        } else {
            None
        }
    }

    /// Numeric index of the rank (1 = Ace, 13 = King).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name as printed at the table, e.g. `"Ace"` or `"7"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Indefinite article for the spoken rank name.
    ///
    /// "Ace" and "8" ("eight") start with a vowel sound.
    #[must_use]
    pub const fn article(self) -> &'static str {
        match self {
            Self::Ace | Self::Eight => "an",
            _ => "a",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a card from numeric indices.
    ///
    /// `suit` must be in `0..=3` and `rank` in `1..=13`.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub const fn from_indices(suit: usize, rank: usize) -> Result<Self, CardError> {
        let Some(suit) = Suit::from_index(suit) else {
            return Err(CardError::InvalidSuit(suit));
        };
        let Some(rank) = Rank::from_index(rank) else {
            return Err(CardError::InvalidRank(rank));
        };
        Ok(Self { suit, rank })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

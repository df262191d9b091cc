use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a draw poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    WrongSize(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("card index {0} is out of range 0..5")]
    IndexOutOfRange(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Five cards in deal order. Order is display order, not rank order.
///
/// ```
/// use draw_poker::cards::{Card, Rank, Suit};
/// use draw_poker::hand::Hand;
///
/// let mut hand: Hand = "As Kd 7h 5c 2d".parse().unwrap();
/// let old = hand.replace(4, Card::new(Rank::Ace, Suit::Hearts)).unwrap();
/// assert_eq!(old, Card::new(Rank::Two, Suit::Diamonds));
/// assert_eq!(hand.get(4), Some(Card::new(Rank::Ace, Suit::Hearts)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::WrongSize(slice.len()))?;
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != HAND_SIZE {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Put `card` at `index` and return the card it replaced.
    pub fn replace(&mut self, index: usize, card: Card) -> Result<Card, HandError> {
        let slot = self.cards.get_mut(index).ok_or(HandError::IndexOutOfRange(index))?;
        Ok(std::mem::replace(slot, card))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

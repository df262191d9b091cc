use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: wanted {wanted} card(s), {remaining} left")]
    Exhausted { wanted: usize, remaining: usize },
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// A depletable 52-card deck. Cards are drawn from the end.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards, unshuffled (suit-major, ranks ascending).
    ///
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// A full deck shuffled with the thread-local RNG.
    pub fn new_shuffled() -> Self {
        Self::shuffled_with(&mut rand::rng())
    }

    /// A full deck shuffled with the provided RNG.
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// A full deck shuffled with a seeded RNG for reproducibility.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled_with(&mut rng)
    }

    /// Build a deck that yields `cards` in the given order: `cards[0]` is drawn first.
    ///
    /// ```
    /// use draw_poker::cards::parse_cards;
    /// use draw_poker::deck::Deck;
    ///
    /// let mut deck = Deck::from_draw_order(parse_cards("As Kd").unwrap()).unwrap();
    /// assert_eq!(deck.draw().unwrap().to_string(), "As");
    /// ```
    pub fn from_draw_order(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for &c in &cards {
            if !seen.insert(c) {
                return Err(DeckError::DuplicateCard(c));
            }
        }
        let mut cards = cards;
        cards.reverse();
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Draw one card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted { wanted: 1, remaining: 0 })
    }

    /// Draw `n` cards in draw order. Nothing is consumed when fewer than `n` remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::Exhausted { wanted: n, remaining: self.cards.len() });
        }
        let split = self.cards.len() - n;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        Ok(drawn)
    }
}

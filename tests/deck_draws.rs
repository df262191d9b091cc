use draw_poker::cards::Card;
use draw_poker::deck::{Deck, DeckError};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn fresh_deck_holds_every_card_once() {
    let mut deck = Deck::new_shuffled();
    assert_eq!(deck.len(), 52);
    let cards = deck.draw_n(52).unwrap();
    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);
    assert!(deck.is_empty());
    assert!(matches!(deck.draw(), Err(DeckError::Exhausted { .. })));
}

proptest! {
    #[test]
    fn ten_draws_are_distinct(seed in any::<u64>()) {
        let mut deck = Deck::seeded(seed);
        let mut seen = HashSet::new();
        for _ in 0..10 {
            let card = deck.draw().unwrap();
            prop_assert!(seen.insert(card));
        }
        prop_assert_eq!(deck.len(), 42);
    }
}

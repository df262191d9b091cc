use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use std::fmt;

/// Exact payout multiplier in tenths: `Multiplier::from_tenths(15)` is x1.5.
///
/// Payouts are computed in integer arithmetic so bankroll accounting never drifts.
///
/// ```
/// use draw_poker::evaluator::Multiplier;
///
/// let m = Multiplier::from_tenths(15);
/// assert_eq!(m.apply(100), 150);
/// assert_eq!(m.apply(15), 22); // 22.5 credited as 22
/// assert_eq!(m.to_string(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplier(u32);

impl Multiplier {
    pub const fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    pub const fn tenths(self) -> u32 {
        self.0
    }

    /// `bet * self`, rounded down to whole credits. Saturates at `u64::MAX`.
    pub const fn apply(self, bet: u64) -> u64 {
        let credits = (bet as u128 * self.0 as u128) / 10;
        if credits > u64::MAX as u128 {
            u64::MAX
        } else {
            credits as u64
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Every category, strongest first (pay table order).
    pub const ALL: [Category; 9] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::Pair => "One Pair",
            Category::HighCard => "High Card",
        }
    }

    /// Fixed payout for the category.
    pub const fn multiplier(self) -> Multiplier {
        let tenths = match self {
            Category::StraightFlush => 100,
            Category::FourOfAKind => 50,
            Category::FullHouse => 40,
            Category::Flush => 30,
            Category::Straight => 20,
            Category::ThreeOfAKind => 15,
            Category::TwoPair => 12,
            Category::Pair => 10,
            Category::HighCard => 5,
        };
        Multiplier::from_tenths(tenths)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of scoring one hand against the pay table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub multiplier: Multiplier,
}

impl Evaluation {
    pub const fn of(category: Category) -> Self {
        Self { category, multiplier: category.multiplier() }
    }
}

/// Score a dealt hand.
///
/// ```
/// use draw_poker::evaluator::{evaluate, Category};
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "Ah Ad Ts 9c 2d".parse().unwrap();
/// let eval = evaluate(&hand);
/// assert_eq!(eval.category, Category::Pair);
/// assert_eq!(eval.multiplier.tenths(), 10);
/// ```
pub fn evaluate(hand: &Hand) -> Evaluation {
    evaluate_five(hand.cards())
}

/// Score exactly five cards. Hands are never compared with each other; only the
/// category matters.
///
/// Straights need five distinct ranks spanning exactly four ordinals, so an ace
/// only plays high: A-2-3-4-5 is not a straight.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    let mut rank_counts = [0u8; Rank::ALL.len()];
    let mut suit_counts = [0u8; Suit::ALL.len()];
    for c in cards {
        rank_counts[c.rank().ordinal()] += 1;
        suit_counts[c.suit().index()] += 1;
    }

    let is_flush = suit_counts.iter().any(|&n| n == 5);

    let distinct = rank_counts.iter().filter(|&&n| n > 0).count();
    let lo = cards.iter().map(|c| c.rank().ordinal()).min().unwrap_or(0);
    let hi = cards.iter().map(|c| c.rank().ordinal()).max().unwrap_or(0);
    let is_straight = distinct == 5 && hi - lo == 4;

    let mut counts = rank_counts;
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let category = if is_straight && is_flush {
        Category::StraightFlush
    } else if counts[0] == 4 {
        Category::FourOfAKind
    } else if counts[0] == 3 && counts[1] == 2 {
        Category::FullHouse
    } else if is_flush {
        Category::Flush
    } else if is_straight {
        Category::Straight
    } else if counts[0] == 3 {
        Category::ThreeOfAKind
    } else if counts[0] == 2 && counts[1] == 2 {
        Category::TwoPair
    } else if counts[0] == 2 {
        Category::Pair
    } else {
        Category::HighCard
    };
    Evaluation::of(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> Evaluation {
        let hand: Hand = s.parse().expect("valid hand");
        evaluate(&hand)
    }

    #[test]
    fn pay_table_values() {
        let tenths: Vec<u32> = Category::ALL.iter().map(|c| c.multiplier().tenths()).collect();
        assert_eq!(tenths, vec![100, 50, 40, 30, 20, 15, 12, 10, 5]);
    }

    #[test]
    fn evaluate_five_categories() {
        assert_eq!(eval("As Ks Qs Js Ts").category, Category::StraightFlush);
        assert_eq!(eval("Kc Kd Kh Ks 2s").category, Category::FourOfAKind);
        assert_eq!(eval("Tc Td Th 2s 2h").category, Category::FullHouse);
        assert_eq!(eval("Ah 9h 7h 3h 2h").category, Category::Flush);
        assert_eq!(eval("9c 8d 7h 6s 5c").category, Category::Straight);
        assert_eq!(eval("Qc Qd Qh 9s 2c").category, Category::ThreeOfAKind);
        assert_eq!(eval("Jc Jd 9c 9h 2s").category, Category::TwoPair);
        assert_eq!(eval("Ah Ad Ts 9c 2d").category, Category::Pair);
        assert_eq!(eval("Ah Kd 7s 5c 2d").category, Category::HighCard);
    }

    #[test]
    fn ace_low_run_is_not_a_straight() {
        assert_eq!(eval("Ac 2d 3h 4s 5c").category, Category::HighCard);
        assert_eq!(eval("Ah 2h 3h 4h 5h").category, Category::Flush);
    }

    #[test]
    fn multiplier_display_and_apply() {
        assert_eq!(Category::TwoPair.multiplier().to_string(), "1.2");
        assert_eq!(Category::StraightFlush.multiplier().to_string(), "10");
        assert_eq!(Category::HighCard.multiplier().apply(101), 50);
        assert_eq!(Category::TwoPair.multiplier().apply(100), 120);
        assert_eq!(Multiplier::from_tenths(100).apply(u64::MAX / 2), u64::MAX);
    }
}

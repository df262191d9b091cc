use draw_poker::cards::{Card, Rank, Suit};
use draw_poker::evaluator::{evaluate, evaluate_five, Category};
use draw_poker::hand::Hand;

fn category_of(s: &str) -> Category {
    let hand: Hand = s.parse().expect("valid hand");
    evaluate(&hand).category
}

#[test]
fn category_straight_flush() {
    let sf = [
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Six, Suit::Hearts),
        Card::new(Rank::Five, Suit::Hearts),
    ];
    let e = evaluate_five(&sf);
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.multiplier.tenths(), 100);
}

#[test]
fn ace_high_straight_flush_is_recognized() {
    let royal = [
        Card::new(Rank::Ten, Suit::Clubs),
        Card::new(Rank::Jack, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::King, Suit::Clubs),
        Card::new(Rank::Ace, Suit::Clubs),
    ];
    assert_eq!(evaluate_five(&royal).category, Category::StraightFlush);
}

#[test]
fn category_four_of_a_kind() {
    let xs = [
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Spades),
        Card::new(Rank::Ace, Suit::Clubs),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(e.multiplier.tenths(), 50);
}

#[test]
fn category_full_house() {
    assert_eq!(category_of("3c 3d 3h Js Jc"), Category::FullHouse);
}

#[test]
fn category_flush() {
    assert_eq!(category_of("Kh Th 8h 6h 3h"), Category::Flush);
}

#[test]
fn category_straight() {
    assert_eq!(category_of("Ts 9h 8d 7c 6s"), Category::Straight);
    assert_eq!(category_of("Ad Kc Qh Js Ts"), Category::Straight);
}

#[test]
fn category_three_of_a_kind() {
    assert_eq!(category_of("7c 7d 7h Ks 2c"), Category::ThreeOfAKind);
}

#[test]
fn category_two_pair() {
    assert_eq!(category_of("Kc Kd 4h 4s 9c"), Category::TwoPair);
}

#[test]
fn category_one_pair() {
    assert_eq!(category_of("5c 5d Ah Ks 9c"), Category::Pair);
}

#[test]
fn category_high_card() {
    assert_eq!(category_of("2c 5d 9h Js Kc"), Category::HighCard);
}

#[test]
fn ace_low_run_never_scores_as_straight() {
    // ordinals {12, 0, 1, 2, 3} span 12, not 4
    assert_eq!(category_of("Ac 2d 3h 4s 5c"), Category::HighCard);
    assert_eq!(category_of("Ac Ad 2h 3s 4c"), Category::Pair);
    assert_eq!(category_of("Ad 2d 3d 4d 5d"), Category::Flush);
}

#[test]
fn king_high_wrap_is_not_a_straight() {
    assert_eq!(category_of("Qc Kd Ah 2s 3c"), Category::HighCard);
}

#[test]
fn multipliers_match_pay_table() {
    let cases = [
        ("9h 8h 7h 6h 5h", "10"),
        ("Kc Kd Kh Ks 2s", "5"),
        ("Tc Td Th 2s 2h", "4"),
        ("Ah 9h 7h 3h 2h", "3"),
        ("9c 8d 7h 6s 5c", "2"),
        ("Qc Qd Qh 9s 2c", "1.5"),
        ("Jc Jd 9c 9h 2s", "1.2"),
        ("Ah Ad Ts 9c 2d", "1"),
        ("Ah Kd 7s 5c 2d", "0.5"),
    ];
    for (hand, mult) in cases {
        let h: Hand = hand.parse().unwrap();
        assert_eq!(evaluate(&h).multiplier.to_string(), mult, "{hand}");
    }
}

use draw_poker::config::{ConfigError, SessionConfig};
use draw_poker::session::{Phase, Session};

fn dealt(bankroll: u64) -> Session {
    let mut s = Session::new(SessionConfig::default().with_bankroll(bankroll).with_seed(3)).unwrap();
    s.start_round().unwrap();
    s
}

#[test]
fn negative_bet_clamps_to_zero() {
    let mut s = dealt(1000);
    assert_eq!(s.place_bet(-5).unwrap(), 0);
    assert_eq!(s.bet(), 0);
    assert_eq!(s.bankroll(), 1000);
    assert_eq!(s.phase(), Phase::HandDealt);
}

#[test]
fn oversized_bet_clamps_to_bankroll() {
    let mut s = dealt(1000);
    assert_eq!(s.place_bet(5000).unwrap(), 1000);
    assert_eq!(s.bet(), 1000);
    assert_eq!(s.bankroll(), 0);
    assert_eq!(s.phase(), Phase::BetPlaced);
}

#[test]
fn non_numeric_text_bets_zero() {
    let mut s = dealt(1000);
    assert_eq!(s.place_bet_text("abc").unwrap(), 0);
    assert_eq!(s.bankroll(), 1000);
    assert_eq!(s.place_bet_text(" 250 ").unwrap(), 250);
    assert_eq!(s.bankroll(), 750);
    assert_eq!(s.place_bet_text("").unwrap(), 0);
    assert_eq!(s.bankroll(), 1000);
}

#[test]
fn huge_numeric_text_caps_at_bankroll() {
    let mut s = dealt(1000);
    assert_eq!(s.place_bet_text("99999999999999999999999").unwrap(), 1000);
    assert_eq!(s.bankroll(), 0);
}

#[test]
fn rebet_refunds_previous_escrow() {
    let mut s = dealt(1000);
    s.place_bet(300).unwrap();
    assert_eq!(s.bankroll(), 700);
    s.place_bet(100).unwrap();
    assert_eq!(s.bet(), 100);
    assert_eq!(s.bankroll(), 900);
    // the refund counts toward what can be covered
    assert_eq!(s.place_bet(5000).unwrap(), 1000);
    assert_eq!(s.bankroll(), 0);
    s.place_bet(0).unwrap();
    assert_eq!(s.bankroll(), 1000);
    assert_eq!(s.phase(), Phase::HandDealt);
}

#[test]
fn session_without_bankroll_is_refused() {
    let err = Session::new(SessionConfig::new(1, 0)).unwrap_err();
    assert_eq!(err, ConfigError::NoBankroll);
}

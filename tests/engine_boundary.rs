use draw_poker::config::SessionConfig;
use draw_poker::engine::DrawPokerEngine;
use draw_poker::session::{Phase, Session};

fn play_out(engine: &mut dyn DrawPokerEngine, bet: i64) -> u32 {
    let mut rounds = 0;
    while !engine.is_ended() {
        engine.start_round().unwrap();
        engine.place_bet(bet).unwrap();
        engine.select_card(0).unwrap();
        engine.select_card(4).unwrap();
        engine.deselect_card(4).unwrap();
        assert_eq!(engine.selected(), vec![0]);
        engine.request_exchange().unwrap();
        engine.settle_round().unwrap();
        rounds += 1;
    }
    rounds
}

#[test]
fn trait_object_drives_a_full_session() {
    let mut session = Session::new(SessionConfig::new(4, 500).with_seed(5)).unwrap();
    let engine: &mut dyn DrawPokerEngine = &mut session;
    assert_eq!(engine.phase(), Phase::AwaitingDeal);
    assert_eq!(play_out(engine, 25), 4);
    assert_eq!(engine.round_index(), engine.total_rounds());
    assert_eq!(engine.summary().rounds_played, 4);
    assert_eq!(engine.bet(), 0);
    assert!(engine.evaluation().is_some());

    engine.restart_session().unwrap();
    assert_eq!(engine.bankroll(), 500);
    assert!(engine.hand().is_none());
    engine.quit();
    assert_eq!(engine.phase(), Phase::Closed);
}

#[test]
fn text_bets_go_through_the_boundary() {
    let mut session = Session::new(SessionConfig::new(1, 100).with_seed(1)).unwrap();
    let engine: &mut dyn DrawPokerEngine = &mut session;
    engine.start_round().unwrap();
    assert_eq!(engine.place_bet_text("-20").unwrap(), 0);
    assert_eq!(engine.place_bet_text("40").unwrap(), 40);
    assert_eq!(engine.bankroll(), 60);
}

#[test]
fn one_step_exchange_and_records_through_the_boundary() {
    let mut session = Session::new(SessionConfig::new(2, 1000).with_seed(8)).unwrap();
    let engine: &mut dyn DrawPokerEngine = &mut session;
    engine.start_round().unwrap();
    assert_eq!(engine.deck_remaining(), 47);
    engine.place_bet(100).unwrap();
    assert!(engine.toggle_card(1).unwrap());
    assert!(engine.toggle_card(3).unwrap());
    assert!(!engine.toggle_card(1).unwrap());
    let record = engine.exchange_and_settle().unwrap();
    assert_eq!(engine.deck_remaining(), 46);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.last_outcome(), Some(&record));
    assert_eq!(engine.phase(), Phase::RoundSettled);
}

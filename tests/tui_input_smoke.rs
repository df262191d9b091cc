use crossterm::event::KeyCode;
use draw_poker::config::SessionConfig;
use draw_poker::session::Phase;
use draw_poker::tui::app::{AppState, Scene};
use draw_poker::tui::controller::handle_key;

fn press(app: &mut AppState, keys: &[KeyCode]) {
    for &k in keys {
        assert!(!handle_key(app, k), "{k:?} should not quit");
    }
}

fn table_app() -> AppState {
    let mut app = AppState::new(SessionConfig::default().with_seed(21)).unwrap();
    press(&mut app, &[KeyCode::Enter]);
    app
}

#[test]
fn menu_edits_apply_to_a_new_session() {
    let mut app = AppState::new(SessionConfig::default().with_seed(2)).unwrap();
    assert_eq!(app.scene, Scene::Menu);
    press(&mut app, &[KeyCode::Char('+'), KeyCode::Down, KeyCode::Char('-'), KeyCode::Char('-')]);
    assert_eq!(app.cfg_rounds, 6);
    assert_eq!(app.cfg_bankroll, 800);
    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.scene, Scene::Table);
    assert_eq!(app.session.total_rounds(), 6);
    assert_eq!(app.session.bankroll(), 800);
}

#[test]
fn overlays_toggle_and_close_with_esc() {
    let mut app = table_app();
    press(&mut app, &[KeyCode::Char('?')]);
    assert!(app.help_open());
    press(&mut app, &[KeyCode::Char('h')]);
    assert!(app.history_open());
    assert!(!app.help_open());
    press(&mut app, &[KeyCode::Esc]);
    assert!(!app.history_open());
}

#[test]
fn bet_entry_types_and_submits() {
    let mut app = table_app();
    press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('b')]);
    assert!(app.bet_entry_active());
    press(
        &mut app,
        &[KeyCode::Char('2'), KeyCode::Char('5'), KeyCode::Char('9'), KeyCode::Backspace],
    );
    assert_eq!(app.bet_entry_text(), Some("25"));
    press(&mut app, &[KeyCode::Enter]);
    assert!(!app.bet_entry_active());
    assert_eq!(app.session.bet(), 25);
    assert_eq!(app.session.phase(), Phase::BetPlaced);
}

#[test]
fn non_numeric_bet_leaves_a_notice() {
    let mut app = table_app();
    press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('b')]);
    press(&mut app, &[KeyCode::Char('a'), KeyCode::Char('b'), KeyCode::Char('c'), KeyCode::Enter]);
    assert_eq!(app.session.bet(), 0);
    assert_eq!(app.notice(), Some("'abc' is not a bet; wager is 0"));
}

#[test]
fn numeric_bet_of_zero_is_not_called_invalid() {
    let mut app = table_app();
    press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('b')]);
    press(&mut app, &[KeyCode::Char('-'), KeyCode::Char('5'), KeyCode::Enter]);
    assert_eq!(app.session.bet(), 0);
    assert_eq!(app.notice(), Some("nothing wagered (-5 clamps to 0)"));

    press(&mut app, &[KeyCode::Char('b'), KeyCode::Char('0'), KeyCode::Enter]);
    assert_eq!(app.notice(), Some("nothing wagered (0 clamps to 0)"));
}

#[test]
fn bet_entry_cancel_keeps_the_wager() {
    let mut app = table_app();
    press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('b'), KeyCode::Char('9'), KeyCode::Esc]);
    assert!(!app.bet_entry_active());
    assert_eq!(app.session.bet(), 0);
    // q is text while the entry is open
    press(&mut app, &[KeyCode::Char('b'), KeyCode::Char('q')]);
    assert!(app.bet_entry_active());
}

#[test]
fn cards_toggle_by_number_and_cursor() {
    let mut app = table_app();
    press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('3')]);
    assert_eq!(app.session.selected(), vec![2]);
    press(&mut app, &[KeyCode::Right, KeyCode::Enter]);
    assert_eq!(app.session.selected(), vec![2, 3]);
    press(&mut app, &[KeyCode::Char('3')]);
    assert_eq!(app.session.selected(), vec![3]);
}

#[test]
fn exchange_key_settles_the_round() {
    let mut app = table_app();
    press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('b'), KeyCode::Char('5'), KeyCode::Enter]);
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('e')]);
    assert_eq!(app.session.phase(), Phase::RoundSettled);
    assert_eq!(app.session.history().len(), 1);
}

#[test]
fn q_quits_from_the_table() {
    let mut app = table_app();
    assert!(handle_key(&mut app, KeyCode::Char('q')));
    app.quit();
    assert!(app.session.is_closed());
}

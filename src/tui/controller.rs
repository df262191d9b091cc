use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    app.quit();
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key to an input action. Returns true when the user asked to quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.bet_entry_active() {
        match code {
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::BetCancel);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::BetSubmit);
            }
            KeyCode::Backspace => {
                let _ = app.handle_input(InputAction::BetBackspace);
            }
            KeyCode::Char(c) => {
                let _ = app.handle_input(InputAction::BetChar(c));
            }
            _ => {}
        }
        return false;
    }
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if matches!(code, KeyCode::Char('h') | KeyCode::Char('H')) {
        let _ = app.handle_input(InputAction::ToggleHistory);
        return false;
    }
    if app.help_open() || app.history_open() {
        if matches!(code, KeyCode::Esc) {
            if app.help_open() {
                let _ = app.handle_input(InputAction::ToggleHelp);
            } else {
                let _ = app.handle_input(InputAction::ToggleHistory);
            }
        }
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::MenuCancel);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char(' ') => {
                let _ = app.handle_input(InputAction::NextRound);
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                let _ = app.handle_input(InputAction::BetOpen);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                let _ = app.handle_input(InputAction::Exchange);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let _ = app.handle_input(InputAction::Restart);
            }
            KeyCode::Left => {
                let _ = app.handle_input(InputAction::CursorLeft);
            }
            KeyCode::Right => {
                let _ = app.handle_input(InputAction::CursorRight);
            }
            KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('X') => {
                let _ = app.handle_input(InputAction::ToggleCursorCard);
            }
            KeyCode::Char(c) if ('1'..='5').contains(&c) => {
                let idx = (c as u8 - b'1') as usize;
                let _ = app.handle_input(InputAction::ToggleCard(idx));
            }
            _ => {}
        },
    }
    false
}

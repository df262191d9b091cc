use crate::config::{ConfigError, SessionConfig};
use crate::hand::HAND_SIZE;
use crate::session::{Phase, Session, SessionError};
use std::num::IntErrorKind;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    CursorLeft,
    CursorRight,
    ToggleCursorCard,
    ToggleCard(usize),
    BetOpen,
    BetChar(char),
    BetBackspace,
    BetSubmit,
    BetCancel,
    Exchange,
    NextRound,
    Restart,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Core session; the only owner of deck, hand and bankroll
    pub session: Session,
    // Card under the keyboard cursor
    pub cursor: usize,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_rounds: u32,
    pub cfg_bankroll: u64,
    pub(crate) cfg_seed: Option<u64>,
    help_open: bool,
    history_open: bool,
    bet_entry: Option<String>,
    notice: Option<String>,
    notice_at: Option<Instant>,
}

impl AppState {
    const NOTICE_TTL: Duration = Duration::from_secs(3);
    const BET_ENTRY_MAX: usize = 12;

    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let session = Session::new(config)?;
        Ok(Self {
            scene: Scene::Menu,
            session,
            cursor: 0,
            menu_index: 0,
            cfg_rounds: config.total_rounds,
            cfg_bankroll: config.initial_bankroll,
            cfg_seed: config.seed,
            help_open: false,
            history_open: false,
            bet_entry: None,
            notice: None,
            notice_at: None,
        })
    }

    pub fn bet_entry_active(&self) -> bool {
        self.bet_entry.is_some()
    }

    pub fn bet_entry_text(&self) -> Option<&str> {
        self.bet_entry.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub(crate) fn close_overlays(&mut self) {
        self.help_open = false;
        self.history_open = false;
        self.bet_entry = None;
    }

    fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
        self.notice_at = Some(Instant::now());
    }

    fn clear_notice(&mut self) {
        self.notice = None;
        self.notice_at = None;
    }

    /// Apply a session command, surfacing a rejection as a notice.
    fn run<T>(&mut self, f: impl FnOnce(&mut Session) -> Result<T, SessionError>) -> Option<T> {
        match f(&mut self.session) {
            Ok(v) => {
                self.clear_notice();
                Some(v)
            }
            Err(err) => {
                self.set_notice(err.to_string());
                None
            }
        }
    }

    fn open_bet_entry(&mut self) -> bool {
        if self.scene != Scene::Table
            || !matches!(self.session.phase(), Phase::HandDealt | Phase::BetPlaced)
        {
            return false;
        }
        self.bet_entry = Some(String::new());
        true
    }

    fn bet_entry_push(&mut self, c: char) {
        if let Some(buf) = self.bet_entry.as_mut() {
            if buf.len() < Self::BET_ENTRY_MAX && (c.is_alphanumeric() || c == '-') {
                buf.push(c);
            }
        }
    }

    fn bet_entry_backspace(&mut self) {
        if let Some(buf) = self.bet_entry.as_mut() {
            buf.pop();
        }
    }

    fn bet_entry_submit(&mut self) -> bool {
        let Some(buf) = self.bet_entry.take() else {
            return false;
        };
        let numeric = match buf.trim().parse::<i64>() {
            Ok(_) => true,
            Err(e) => *e.kind() == IntErrorKind::PosOverflow,
        };
        match self.run(|s| s.place_bet_text(&buf)) {
            Some(0) if !numeric => {
                self.set_notice(format!("'{buf}' is not a bet; wager is 0"));
                true
            }
            Some(0) => {
                self.set_notice(format!("nothing wagered ({buf} clamps to 0)"));
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::CursorLeft => {
                self.cursor = (self.cursor + HAND_SIZE - 1) % HAND_SIZE;
                false
            }
            InputAction::CursorRight => {
                self.cursor = (self.cursor + 1) % HAND_SIZE;
                false
            }
            InputAction::ToggleCursorCard => {
                let idx = self.cursor;
                self.toggle_card(idx)
            }
            InputAction::ToggleCard(idx) => {
                if idx < HAND_SIZE {
                    self.cursor = idx;
                }
                self.toggle_card(idx)
            }
            InputAction::BetOpen => self.open_bet_entry(),
            InputAction::BetChar(c) => {
                self.bet_entry_push(c);
                false
            }
            InputAction::BetBackspace => {
                self.bet_entry_backspace();
                false
            }
            InputAction::BetSubmit => self.bet_entry_submit(),
            InputAction::BetCancel => {
                self.bet_entry = None;
                false
            }
            InputAction::Exchange => self.exchange(),
            InputAction::NextRound => self.next_round(),
            InputAction::Restart => self.restart(),
        }
    }

    fn toggle_card(&mut self, idx: usize) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        self.run(|s| s.toggle_card(idx)).is_some()
    }

    /// Exchange the selected cards and settle straight away.
    pub fn exchange(&mut self) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        self.run(Session::exchange_and_settle).is_some()
    }

    pub fn next_round(&mut self) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        if !matches!(self.session.phase(), Phase::AwaitingDeal | Phase::RoundSettled) {
            return false;
        }
        self.cursor = 0;
        self.run(Session::start_round).is_some()
    }

    pub fn restart(&mut self) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        self.close_overlays();
        self.run(Session::restart_session).is_some()
    }

    /// Close the session before the terminal is torn down.
    pub fn quit(&mut self) {
        self.close_overlays();
        self.session.quit();
    }

    pub fn on_tick(&mut self) {
        if let Some(at) = self.notice_at {
            if at.elapsed() >= Self::NOTICE_TTL {
                self.clear_notice();
            }
        }
    }
}

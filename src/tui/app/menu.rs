use crate::config::SessionConfig;
use crate::session::Session;
use log::warn;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Rounds,
    StartingBankroll,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::Rounds, MenuItem::StartingBankroll];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Rounds => format!("Rounds: {}", app.cfg_rounds),
            MenuItem::StartingBankroll => format!("Starting Bankroll: ${}", app.cfg_bankroll),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Rounds => {
                if app.cfg_rounds < 99 {
                    app.cfg_rounds += 1;
                }
            }
            MenuItem::StartingBankroll => {
                app.cfg_bankroll = app.cfg_bankroll.saturating_add(100);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Rounds => {
                if app.cfg_rounds > 1 {
                    app.cfg_rounds -= 1;
                }
            }
            MenuItem::StartingBankroll => {
                app.cfg_bankroll = app.cfg_bankroll.saturating_sub(100).max(100);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_overlays();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_overlays();
        self.menu_index = 0;
        self.cfg_rounds = self.session.total_rounds();
        self.cfg_bankroll = self.session.config().initial_bankroll;
        self.scene = super::Scene::Menu;
    }

    /// Start a new session with the edited settings.
    pub fn apply_menu(&mut self) {
        if self.cfg_rounds == 0 {
            self.cfg_rounds = 1;
        }
        let mut config = SessionConfig::new(self.cfg_rounds, self.cfg_bankroll);
        if let Some(seed) = self.cfg_seed {
            config = config.with_seed(seed);
        }
        match Session::new(config) {
            Ok(session) => {
                self.session.quit();
                self.session = session;
            }
            Err(err) => {
                warn!("menu settings rejected: {err}");
                return;
            }
        }
        self.cursor = 0;
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}

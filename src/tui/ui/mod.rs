mod layout;
mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Table => {
            table::draw_table(f, app);
            // summary sits under the overlays so history stays readable at session end
            if app.session.is_ended() && !app.help_open() && !app.history_open() {
                table::draw_summary(f, app);
            }
        }
    }
}

use crate::evaluator::Category;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(70, 80, size);
    let block = Block::default().title("draw-poker").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let banner = [
        "♠ ♥ ♦ ♣",
        "FIVE CARD DRAW",
        "video poker",
    ];
    let banner_lines: Vec<Line> = banner
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_lines.len() as u16 + 1),
            Constraint::Length(Category::ALL.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(inner_all);

    let banner_para = Paragraph::new(banner_lines).alignment(Alignment::Center);
    f.render_widget(banner_para, rows[0]);

    // Pay table
    let mut pay_lines: Vec<Line> = vec![Line::from(Span::styled(
        "Pays:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for c in Category::ALL {
        pay_lines.push(Line::from(format!("{:<16} x{}", c.name(), c.multiplier())));
    }
    f.render_widget(Paragraph::new(pay_lines).alignment(Alignment::Center), rows[1]);

    // Configuration section (centered text)
    let config_items = app.menu_items_display();
    let hints = [String::from("[Enter] Start  [Q] Quit  [Esc] Cancel  [↑/↓] Move  [+/-] Adjust")];
    let mut cfg_lines: Vec<Line> = Vec::new();
    cfg_lines.push(Line::from(Span::styled(
        "Session:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, it) in config_items.iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it.clone(), style)));
    }
    cfg_lines.push(Line::from(""));
    for hint in hints {
        cfg_lines
            .push(Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::DIM))));
    }
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[2]);
}

use crate::cards::{Card, Rank, Suit};
use crate::evaluator::Category;
use crate::hand::HAND_SIZE;
use crate::session::Phase;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{card_slots, centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let session = &app.session;
    let header_height: u16 = 2 + 2;
    let status_height: u16 = 3 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Length(7),             // hand
            Constraint::Min(3),                // result + pay table
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    // Header
    let header_lines = vec![
        Line::from(format!(
            "Round: {}/{}   Bankroll: ${}   Bet: ${}",
            (session.round_index() + 1).min(session.total_rounds()),
            session.total_rounds(),
            session.bankroll(),
            session.bet(),
        )),
        Line::from(format!("Phase: {}", session.phase())),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("draw-poker").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Hand (5 slots)
    let hand_block = Block::default().title("Hand").borders(Borders::ALL);
    let hand_area = chunks[1];
    let slots = card_slots(inner(hand_area));
    f.render_widget(hand_block, hand_area);
    let can_select = matches!(session.phase(), Phase::HandDealt | Phase::BetPlaced);
    for i in 0..HAND_SIZE {
        let card = session.hand().and_then(|h| h.get(i));
        let border = if session.is_selected(i) {
            Some(Color::Red)
        } else if can_select && i == app.cursor {
            Some(Color::Cyan)
        } else {
            None
        };
        render_card_widget(f, slots[i], i, card, border, session.is_selected(i));
    }

    // Result and pay table
    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    let mut result_lines: Vec<Line> = Vec::new();
    match session.evaluation() {
        Some(eval) => result_lines.push(Line::from(Span::styled(
            format!("Hand: {} (x{})", eval.category, eval.multiplier),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        None => result_lines.push(Line::from("Hand: --")),
    }
    if let Some(rec) = session.last_outcome() {
        result_lines.push(Line::from(format!(
            "Last round: {} on ${} paid ${}",
            rec.evaluation.category, rec.bet, rec.winnings
        )));
    }
    let result = Paragraph::new(result_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Result").borders(Borders::ALL));
    f.render_widget(result, mid[0]);

    let current = session.evaluation().map(|e| e.category);
    let pay_lines: Vec<Line> = Category::ALL
        .iter()
        .map(|&c| {
            let text = format!("{:<16} x{}", c.name(), c.multiplier());
            if Some(c) == current {
                Line::from(Span::styled(text, Style::default().fg(Color::Yellow)))
            } else {
                Line::from(text)
            }
        })
        .collect();
    let pays = Paragraph::new(pay_lines).block(Block::default().title("Pays").borders(Borders::ALL));
    f.render_widget(pays, mid[1]);

    // Status bar
    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(status_inner);

    let mut left_info = match session.phase() {
        Phase::AwaitingDeal => vec![Line::from("Press Space to deal.")],
        Phase::HandDealt => vec![
            Line::from("B to bet. 1-5 or ←/→ + Enter select cards to exchange."),
            Line::from("Exchange unlocks once a bet above 0 is placed."),
        ],
        Phase::BetPlaced => {
            vec![Line::from("Select cards to exchange, then E to exchange and settle.")]
        }
        Phase::RoundSettled | Phase::HandExchanged => {
            vec![Line::from("Round over. Press Space for the next round.")]
        }
        Phase::SessionEnded => vec![Line::from("Session over. Press R to retry, Q to quit.")],
        _ => vec![Line::from("Session closed.")],
    };
    if let Some(notice) = app.notice() {
        left_info.push(Line::from(Span::styled(notice, Style::default().fg(Color::Red))));
    }

    let right_keys = vec![Line::from(""), Line::from("? help • H history • M menu • Q quit")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.bet_entry_active() {
        draw_bet_entry(f, app);
    }
}

pub(super) fn draw_summary(f: &mut Frame, app: &AppState) {
    let summary = app.session.summary();
    let area = centered_rect(50, 40, f.area());
    let net = summary.net();
    let net_style = if net >= 0 {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    let best = summary.best.map(|c| c.name()).unwrap_or("--");
    let lines = vec![
        Line::from(Span::styled(
            format!("Final Bankroll: ${}", summary.final_bankroll),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("Net: {net:+}"), net_style)),
        Line::from(format!("Rounds: {}", summary.rounds_played)),
        Line::from(format!("Best hand: {best}")),
        Line::from(""),
        Line::from(Span::styled(
            "R retry • H history • Q quit",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    let block = Block::default().title("Session Over").borders(Borders::ALL);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let records = app.session.history();
    if records.is_empty() {
        lines.push(Line::from("No rounds settled yet."));
    } else {
        for rec in records {
            lines.push(Line::from(format!(
                "R{} {}  {} x{}  bet {} won {}  bankroll {}",
                rec.round + 1,
                rec.hand,
                rec.evaluation.category,
                rec.evaluation.multiplier,
                rec.bet,
                rec.winnings,
                rec.bankroll_after
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal / next round"),
        Line::from("- B: enter bet"),
        Line::from("- 1-5: select / deselect card"),
        Line::from("- ← / →: move cursor, Enter or X: select card under cursor"),
        Line::from("- E: exchange selected cards and settle"),
        Line::from("- R: retry when the session is over"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Bet Entry:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- type the amount; anything not a number bets 0"),
        Line::from("- Backspace: delete"),
        Line::from("- Enter: submit"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: start new session"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Q quits • Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_bet_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let current = app.bet_entry_text().unwrap_or("");
    let available = app.session.bankroll() + app.session.bet();
    let lines = vec![
        Line::from(format!("Bet: {current}_")),
        Line::from(format!("Max: {available}")),
        Line::from("Amounts above the max are capped; below 0 bet 0"),
        Line::from("Enter submit, Esc cancel"),
    ];
    let block = Block::default().title("Place Bet").borders(Borders::ALL);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn rank_label(r: Rank) -> &'static str {
    match r {
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
        other => other.name(),
    }
}

fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    index: usize,
    card: Option<Card>,
    border: Option<Color>,
    selected: bool,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{}", index + 1))
        .title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let mut content = vec![Line::from("")];
    if let Some(c) = card {
        let (sg, style) = suit_glyph_and_style(c.suit());
        content.push(Line::from(Span::styled(format!("{}{}", rank_label(c.rank()), sg), style)));
    } else {
        content.push(Line::from("[  ]"));
    }
    if selected {
        content.push(Line::from(Span::styled("SWAP", Style::default().fg(Color::Red))));
    }
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}

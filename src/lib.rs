//! draw-poker: five-card draw video poker engine
//!
//! Goals:
//! - Deterministic hand scoring against a fixed pay table
//! - A session state machine that owns deck, hand and bankroll
//! - No panics for caller mistakes; use `Result` for rejected commands
//!
//! ## Quick start: score a hand
//! ```
//! use draw_poker::evaluator::{evaluate, Category};
//! use draw_poker::hand::Hand;
//!
//! let hand: Hand = "Ts Js Qs Ks As".parse().unwrap();
//! let eval = evaluate(&hand);
//! assert_eq!(eval.category, Category::StraightFlush);
//! assert_eq!(eval.multiplier.apply(100), 1000);
//! ```
//!
//! ## Quick start: play a round
//! ```
//! use draw_poker::config::SessionConfig;
//! use draw_poker::session::Session;
//!
//! let mut session = Session::new(SessionConfig::default().with_rounds(1)).unwrap();
//! session.start_round().unwrap();
//! session.place_bet(100).unwrap();
//! session.select_card(0).unwrap();
//! session.select_card(1).unwrap();
//! session.exchange_and_settle().unwrap();
//! assert!(session.is_ended());
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin draw-poker -- --rounds 5 --bankroll 1000
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod hand;
pub mod session;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

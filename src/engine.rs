// Engine boundary for presentation layers. The trait exposes the session's
// commands and queries so UIs and scripted drivers can run rounds without
// depending on `Session` internals. It is implemented for `Session`.

use crate::evaluator::Evaluation;
use crate::hand::Hand;
use crate::session::{Phase, RoundRecord, Session, SessionError, SessionSummary};

pub trait DrawPokerEngine {
    // Round lifecycle
    fn start_round(&mut self) -> Result<(), SessionError>;
    fn request_exchange(&mut self) -> Result<(), SessionError>;
    fn settle_round(&mut self) -> Result<RoundRecord, SessionError>;
    fn exchange_and_settle(&mut self) -> Result<RoundRecord, SessionError>;
    fn restart_session(&mut self) -> Result<(), SessionError>;
    fn quit(&mut self);

    // Player intents
    fn select_card(&mut self, index: usize) -> Result<(), SessionError>;
    fn deselect_card(&mut self, index: usize) -> Result<(), SessionError>;
    fn toggle_card(&mut self, index: usize) -> Result<bool, SessionError>;
    fn place_bet(&mut self, amount: i64) -> Result<u64, SessionError>;
    fn place_bet_text(&mut self, text: &str) -> Result<u64, SessionError>;

    // Queries
    fn hand(&self) -> Option<&Hand>;
    fn selected(&self) -> Vec<usize>;
    fn bet(&self) -> u64;
    fn bankroll(&self) -> u64;
    fn round_index(&self) -> u32;
    fn total_rounds(&self) -> u32;
    fn evaluation(&self) -> Option<Evaluation>;
    fn phase(&self) -> Phase;
    fn is_ended(&self) -> bool;
    fn deck_remaining(&self) -> usize;
    fn history(&self) -> &[RoundRecord];
    fn last_outcome(&self) -> Option<&RoundRecord>;
    fn summary(&self) -> SessionSummary;
}

impl DrawPokerEngine for Session {
    fn start_round(&mut self) -> Result<(), SessionError> {
        self.start_round()
    }
    fn request_exchange(&mut self) -> Result<(), SessionError> {
        self.request_exchange()
    }
    fn settle_round(&mut self) -> Result<RoundRecord, SessionError> {
        self.settle_round()
    }
    fn exchange_and_settle(&mut self) -> Result<RoundRecord, SessionError> {
        self.exchange_and_settle()
    }
    fn restart_session(&mut self) -> Result<(), SessionError> {
        self.restart_session()
    }
    fn quit(&mut self) {
        self.quit()
    }

    fn select_card(&mut self, index: usize) -> Result<(), SessionError> {
        self.select_card(index)
    }
    fn deselect_card(&mut self, index: usize) -> Result<(), SessionError> {
        self.deselect_card(index)
    }
    fn toggle_card(&mut self, index: usize) -> Result<bool, SessionError> {
        self.toggle_card(index)
    }
    fn place_bet(&mut self, amount: i64) -> Result<u64, SessionError> {
        self.place_bet(amount)
    }
    fn place_bet_text(&mut self, text: &str) -> Result<u64, SessionError> {
        self.place_bet_text(text)
    }

    fn hand(&self) -> Option<&Hand> {
        self.hand()
    }
    fn selected(&self) -> Vec<usize> {
        self.selected()
    }
    fn bet(&self) -> u64 {
        self.bet()
    }
    fn bankroll(&self) -> u64 {
        self.bankroll()
    }
    fn round_index(&self) -> u32 {
        self.round_index()
    }
    fn total_rounds(&self) -> u32 {
        self.total_rounds()
    }
    fn evaluation(&self) -> Option<Evaluation> {
        self.evaluation()
    }
    fn phase(&self) -> Phase {
        self.phase()
    }
    fn is_ended(&self) -> bool {
        self.is_ended()
    }
    fn deck_remaining(&self) -> usize {
        self.deck_remaining()
    }
    fn history(&self) -> &[RoundRecord] {
        self.history()
    }
    fn last_outcome(&self) -> Option<&RoundRecord> {
        self.last_outcome()
    }
    fn summary(&self) -> SessionSummary {
        self.summary()
    }
}

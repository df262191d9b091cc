use crate::config::{ConfigError, SessionConfig};
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate, Category, Evaluation};
use crate::hand::{Hand, HandError, HAND_SIZE};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;
use std::fmt;
use std::num::IntErrorKind;

/// Where the session is in its round cycle.
///
/// `BetPlaced` and `HandExchanged` are distinct phases, so the one exchange a
/// round allows is tracked by the phase itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Phase {
    AwaitingDeal,
    HandDealt,
    BetPlaced,
    HandExchanged,
    RoundSettled,
    SessionEnded,
    Closed,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::AwaitingDeal => "awaiting deal",
            Phase::HandDealt => "hand dealt",
            Phase::BetPlaced => "bet placed",
            Phase::HandExchanged => "hand exchanged",
            Phase::RoundSettled => "round settled",
            Phase::SessionEnded => "session ended",
            Phase::Closed => "closed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Commands a caller can issue, used to report rejected transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    StartRound,
    SelectCard,
    PlaceBet,
    Exchange,
    Settle,
    Restart,
}

impl Command {
    pub fn label(self) -> &'static str {
        match self {
            Command::StartRound => "start a round",
            Command::SelectCard => "select a card",
            Command::PlaceBet => "place a bet",
            Command::Exchange => "exchange cards",
            Command::Settle => "settle the round",
            Command::Restart => "restart the session",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot {command} while {phase}")]
    InvalidPhase { command: Command, phase: Phase },
    #[error("card index {0} is out of range 0..5")]
    CardIndex(usize),
    #[error("an exchange needs a bet above zero")]
    NoWager,
    #[error("this round's exchange has already been made")]
    AlreadyExchanged,
    #[error("no round in progress")]
    NoRound,
    #[error("session is closed")]
    Closed,
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// The settled result of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundRecord {
    /// 0-based index of the round within the session.
    pub round: u32,
    pub hand: Hand,
    pub bet: u64,
    pub evaluation: Evaluation,
    pub winnings: u64,
    pub bankroll_after: u64,
}

/// End-of-session totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct SessionSummary {
    pub initial_bankroll: u64,
    pub final_bankroll: u64,
    pub rounds_played: u32,
    pub best: Option<Category>,
}

impl SessionSummary {
    /// Final bankroll minus initial bankroll.
    pub fn net(&self) -> i128 {
        i128::from(self.final_bankroll) - i128::from(self.initial_bankroll)
    }
}

#[derive(Debug, Clone)]
struct Round {
    deck: Deck,
    hand: Hand,
    selected: BTreeSet<usize>,
    bet: u64,
    evaluation: Evaluation,
}

/// A fixed-length run of draw poker rounds sharing one bankroll.
///
/// ```
/// use draw_poker::config::SessionConfig;
/// use draw_poker::session::{Phase, Session};
///
/// let mut session = Session::new(SessionConfig::default().with_seed(1)).unwrap();
/// session.start_round().unwrap();
/// assert_eq!(session.place_bet(100).unwrap(), 100);
/// assert_eq!(session.bankroll(), 900);
/// session.toggle_card(0).unwrap();
/// let outcome = session.exchange_and_settle().unwrap();
/// assert_eq!(session.bankroll(), 900 + outcome.winnings);
/// assert_eq!(session.phase(), Phase::RoundSettled);
/// ```
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    rng: ChaCha8Rng,
    bankroll: u64,
    round_index: u32,
    phase: Phase,
    round: Option<Round>,
    history: Vec<RoundRecord>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        debug!("new session: {config:?}, shuffle seed {seed}");
        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            bankroll: config.initial_bankroll,
            round_index: 0,
            phase: Phase::AwaitingDeal,
            round: None,
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bankroll(&self) -> u64 {
        self.bankroll
    }

    /// Bet escrowed for the current round; 0 when nothing is wagered.
    pub fn bet(&self) -> u64 {
        self.round.as_ref().map(|r| r.bet).unwrap_or(0)
    }

    /// Number of rounds settled so far.
    pub fn round_index(&self) -> u32 {
        self.round_index
    }

    pub fn total_rounds(&self) -> u32 {
        self.config.total_rounds
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.round.as_ref().map(|r| &r.hand)
    }

    /// Selected card indices in ascending order.
    pub fn selected(&self) -> Vec<usize> {
        self.round.as_ref().map(|r| r.selected.iter().copied().collect()).unwrap_or_default()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.round.as_ref().is_some_and(|r| r.selected.contains(&index))
    }

    /// Evaluation of the hand as it stands now.
    pub fn evaluation(&self) -> Option<Evaluation> {
        self.round.as_ref().map(|r| r.evaluation)
    }

    pub fn deck_remaining(&self) -> usize {
        self.round.as_ref().map(|r| r.deck.len()).unwrap_or(0)
    }

    pub fn is_ended(&self) -> bool {
        self.phase == Phase::SessionEnded
    }

    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn last_outcome(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            initial_bankroll: self.config.initial_bankroll,
            final_bankroll: self.bankroll,
            rounds_played: self.round_index,
            best: self.history.iter().map(|r| r.evaluation.category).max(),
        }
    }

    fn ensure_phase(&self, command: Command, allowed: &[Phase]) -> Result<(), SessionError> {
        if self.phase == Phase::Closed {
            return Err(SessionError::Closed);
        }
        if !allowed.contains(&self.phase) {
            warn!("rejected: cannot {command} while {}", self.phase);
            return Err(SessionError::InvalidPhase { command, phase: self.phase });
        }
        Ok(())
    }

    /// Shuffle a fresh deck and deal five cards.
    pub fn start_round(&mut self) -> Result<(), SessionError> {
        self.ensure_phase(Command::StartRound, &[Phase::AwaitingDeal, Phase::RoundSettled])?;
        let deck = Deck::shuffled_with(&mut self.rng);
        self.deal_from(deck)
    }

    /// Deal the next round from a caller-supplied deck, e.g. to replay a round.
    pub fn start_round_with(&mut self, deck: Deck) -> Result<(), SessionError> {
        self.ensure_phase(Command::StartRound, &[Phase::AwaitingDeal, Phase::RoundSettled])?;
        self.deal_from(deck)
    }

    fn deal_from(&mut self, mut deck: Deck) -> Result<(), SessionError> {
        let cards = deck.draw_n(HAND_SIZE)?;
        let hand = Hand::from_slice(&cards)?;
        let evaluation = evaluate(&hand);
        debug!(
            "round {}/{}: dealt {hand} ({})",
            self.round_index + 1,
            self.config.total_rounds,
            evaluation.category
        );
        self.round = Some(Round { deck, hand, selected: BTreeSet::new(), bet: 0, evaluation });
        self.phase = Phase::HandDealt;
        Ok(())
    }

    fn selectable_round(&mut self, index: usize) -> Result<&mut Round, SessionError> {
        self.ensure_phase(Command::SelectCard, &[Phase::HandDealt, Phase::BetPlaced])?;
        if index >= HAND_SIZE {
            return Err(SessionError::CardIndex(index));
        }
        self.round.as_mut().ok_or(SessionError::NoRound)
    }

    /// Mark a card for exchange. Selecting twice is harmless.
    pub fn select_card(&mut self, index: usize) -> Result<(), SessionError> {
        self.selectable_round(index)?.selected.insert(index);
        Ok(())
    }

    pub fn deselect_card(&mut self, index: usize) -> Result<(), SessionError> {
        self.selectable_round(index)?.selected.remove(&index);
        Ok(())
    }

    /// Flip the selection of a card; returns whether it is now selected.
    pub fn toggle_card(&mut self, index: usize) -> Result<bool, SessionError> {
        let round = self.selectable_round(index)?;
        if round.selected.remove(&index) {
            Ok(false)
        } else {
            round.selected.insert(index);
            Ok(true)
        }
    }

    /// Wager `amount`, clamped to what the player can cover, and return the accepted bet.
    ///
    /// The bet is escrowed: it leaves the bankroll immediately. Placing a new bet
    /// in the same round first refunds the previous one.
    pub fn place_bet(&mut self, amount: i64) -> Result<u64, SessionError> {
        self.ensure_phase(Command::PlaceBet, &[Phase::HandDealt, Phase::BetPlaced])?;
        let round = self.round.as_mut().ok_or(SessionError::NoRound)?;
        let available = self.bankroll.saturating_add(round.bet);
        let bet = u64::try_from(amount).unwrap_or(0).min(available);
        self.bankroll = available - bet;
        round.bet = bet;
        self.phase = if bet > 0 { Phase::BetPlaced } else { Phase::HandDealt };
        debug!("bet {bet} (requested {amount}), bankroll {}", self.bankroll);
        Ok(bet)
    }

    /// Wager from free-form text. Anything that is not an integer bets 0.
    pub fn place_bet_text(&mut self, text: &str) -> Result<u64, SessionError> {
        let amount = match text.trim().parse::<i64>() {
            Ok(v) => v,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
            Err(_) => 0,
        };
        self.place_bet(amount)
    }

    /// Replace every selected card with a fresh one from the round's deck.
    ///
    /// An empty selection still uses up the round's exchange.
    pub fn request_exchange(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::BetPlaced => {}
            Phase::HandDealt => return Err(SessionError::NoWager),
            Phase::HandExchanged | Phase::RoundSettled | Phase::SessionEnded
                if self.round.is_some() =>
            {
                return Err(SessionError::AlreadyExchanged)
            }
            _ => self.ensure_phase(Command::Exchange, &[Phase::BetPlaced])?,
        }
        let round = self.round.as_mut().ok_or(SessionError::NoRound)?;
        let picks: Vec<usize> = round.selected.iter().copied().collect();
        let fresh = round.deck.draw_n(picks.len())?;
        for (&i, card) in picks.iter().zip(fresh) {
            round.hand.replace(i, card)?;
        }
        round.selected.clear();
        round.evaluation = evaluate(&round.hand);
        self.phase = Phase::HandExchanged;
        debug!("exchanged {picks:?}: {} ({})", round.hand, round.evaluation.category);
        Ok(())
    }

    /// Pay out the exchanged hand and advance the round counter.
    ///
    /// The session ends after the last round, or early once the bankroll is 0.
    pub fn settle_round(&mut self) -> Result<RoundRecord, SessionError> {
        self.ensure_phase(Command::Settle, &[Phase::HandExchanged])?;
        let round = self.round.as_mut().ok_or(SessionError::NoRound)?;
        let evaluation = round.evaluation;
        let winnings = evaluation.multiplier.apply(round.bet);
        self.bankroll = self.bankroll.saturating_add(winnings);
        let record = RoundRecord {
            round: self.round_index,
            hand: round.hand,
            bet: round.bet,
            evaluation,
            winnings,
            bankroll_after: self.bankroll,
        };
        round.bet = 0;
        self.history.push(record);
        self.round_index += 1;
        info!(
            "round {} settled: {} x{} on {} pays {}, bankroll {}",
            self.round_index,
            evaluation.category,
            evaluation.multiplier,
            record.bet,
            winnings,
            self.bankroll
        );
        // a bankroll of 0 can never stake another round
        if self.round_index < self.config.total_rounds && self.bankroll > 0 {
            self.phase = Phase::RoundSettled;
        } else {
            self.phase = Phase::SessionEnded;
            info!("session ended with bankroll {}", self.bankroll);
        }
        Ok(record)
    }

    /// Exchange then settle in one step.
    pub fn exchange_and_settle(&mut self) -> Result<RoundRecord, SessionError> {
        self.request_exchange()?;
        self.settle_round()
    }

    /// Start over with the initial bankroll. Only valid once the session has ended.
    pub fn restart_session(&mut self) -> Result<(), SessionError> {
        self.ensure_phase(Command::Restart, &[Phase::SessionEnded])?;
        self.bankroll = self.config.initial_bankroll;
        self.round_index = 0;
        self.round = None;
        self.history.clear();
        self.phase = Phase::AwaitingDeal;
        info!("session restarted with bankroll {}", self.bankroll);
        Ok(())
    }

    /// Stop the session from any phase; nothing in progress is kept.
    pub fn quit(&mut self) {
        if self.phase != Phase::Closed {
            info!("session closed at {} with bankroll {}", self.phase, self.bankroll);
        }
        self.round = None;
        self.phase = Phase::Closed;
    }
}

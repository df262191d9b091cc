/// Parameters that stay fixed for the lifetime of a session.
///
/// ```
/// use draw_poker::config::SessionConfig;
///
/// let cfg = SessionConfig::default().with_rounds(3).with_seed(7);
/// assert_eq!(cfg.total_rounds, 3);
/// assert_eq!(cfg.initial_bankroll, 1000);
/// cfg.validate().unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct SessionConfig {
    /// Rounds played before the session ends.
    pub total_rounds: u32,
    /// Bankroll at session start and after every restart.
    pub initial_bankroll: u64,
    /// Seed for the shuffle RNG; `None` seeds from the OS.
    pub seed: Option<u64>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("a session needs at least one round")]
    NoRounds,
    #[error("a session needs a starting bankroll above zero")]
    NoBankroll,
}

impl SessionConfig {
    pub const DEFAULT_ROUNDS: u32 = 5;
    pub const DEFAULT_BANKROLL: u64 = 1000;

    pub fn new(total_rounds: u32, initial_bankroll: u64) -> Self {
        Self { total_rounds, initial_bankroll, seed: None }
    }

    pub fn with_rounds(mut self, total_rounds: u32) -> Self {
        self.total_rounds = total_rounds;
        self
    }

    pub fn with_bankroll(mut self, initial_bankroll: u64) -> Self {
        self.initial_bankroll = initial_bankroll;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.initial_bankroll == 0 {
            return Err(ConfigError::NoBankroll);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROUNDS, Self::DEFAULT_BANKROLL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_session() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.total_rounds, 5);
        assert_eq!(cfg.initial_bankroll, 1000);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let cfg = SessionConfig::default().with_rounds(0);
        assert_eq!(cfg.validate(), Err(ConfigError::NoRounds));
    }

    #[test]
    fn zero_bankroll_is_rejected() {
        let cfg = SessionConfig::default().with_bankroll(0);
        assert_eq!(cfg.validate(), Err(ConfigError::NoBankroll));
        SessionConfig::default().with_bankroll(1).validate().unwrap();
    }
}

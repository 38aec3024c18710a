//! Agent and search configuration.
//!
//! Agents are configured from a whitespace-separated `key=value` string such
//! as `"name=mcts role=black seed=7 N=500"`. The string is parsed once into a
//! typed [`AgentConfig`]; the search only ever sees the derived
//! [`SearchConfig`].

use nogo_core::{Color, ConfigError, Result};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Name used when the arguments do not set one.
pub const DEFAULT_NAME: &str = "mcts";

/// Seed used when the arguments do not set one.
pub const DEFAULT_SEED: u64 = 1;

/// UCB1 exploration constant used when the arguments do not set one.
pub const DEFAULT_EXPLORATION: f32 = 2.0;

/// Characters that may not appear in an agent name.
const RESERVED_NAME_CHARS: &[char] = &['[', ']', '(', ')', ':', ';', ' '];

/// How much work a single decision may spend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Budget {
    /// No search: play the first legal move in shuffled order.
    Immediate,
    /// Run exactly this many search cycles.
    Iterations(u32),
    /// Run search cycles until this much wall-clock time has passed.
    /// At least one cycle always runs.
    Deadline(Duration),
}

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Cycle budget per decision.
    pub budget: Budget,

    /// UCB1 exploration constant `C` in
    /// `value / visits + C * sqrt(2 * ln(N) / visits)`.
    pub exploration: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: Budget::Immediate,
            exploration: DEFAULT_EXPLORATION,
        }
    }
}

impl SearchConfig {
    /// Create a config that runs a fixed number of cycles per decision.
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            budget: Budget::Iterations(iterations),
            ..Default::default()
        }
    }

    /// Create a config that searches until a wall-clock deadline.
    pub fn with_time_limit(limit: Duration) -> Self {
        Self {
            budget: Budget::Deadline(limit),
            ..Default::default()
        }
    }
}

/// Validated agent configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentConfig {
    pub name: String,
    pub role: Color,
    /// RNG seed; [`DEFAULT_SEED`] when absent.
    pub seed: Option<u64>,
    /// `N`: search cycles per decision.
    pub iterations: Option<u32>,
    /// `T`: wall-clock budget per decision.
    pub time_limit: Option<Duration>,
    /// `c`: UCB1 exploration constant.
    pub exploration: f32,
}

impl AgentConfig {
    /// Parse a `key=value` argument string.
    ///
    /// # Errors
    /// - `ConfigError::InvalidName` if the name contains any of `[]():; ` or a space
    /// - `ConfigError::InvalidRole` if `role` is missing or not `black`/`white`
    /// - `ConfigError::InvalidValue` if a numeric option does not parse
    pub fn from_args(args: &str) -> Result<Self> {
        let mut options = Options::default();
        for token in args.split_whitespace() {
            let (key, value) = split_option(token);
            options.apply(key, value)?;
        }
        options.build()
    }

    /// Re-apply a single `key=value` option, keeping the old configuration
    /// if the result does not validate.
    pub fn notify(&mut self, message: &str) -> Result<()> {
        let mut options = Options::from(&*self);
        let (key, value) = split_option(message.trim());
        options.apply(key, value)?;
        *self = options.build()?;
        Ok(())
    }

    /// The search budget implied by `N` and `T`.
    ///
    /// A deadline wins over a cycle count; with neither, the agent plays
    /// immediately.
    pub fn budget(&self) -> Budget {
        match (self.time_limit, self.iterations) {
            (Some(limit), _) => Budget::Deadline(limit),
            (None, Some(iterations)) => Budget::Iterations(iterations),
            (None, None) => Budget::Immediate,
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            budget: self.budget(),
            exploration: self.exploration,
        }
    }
}

impl FromStr for AgentConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_args(s)
    }
}

/// Split `key=value` at the first `=`. A token without `=` is both.
fn split_option(token: &str) -> (&str, &str) {
    token.split_once('=').unwrap_or((token, token))
}

/// Options collected before validation.
#[derive(Debug)]
struct Options {
    name: String,
    role: Option<String>,
    seed: Option<u64>,
    iterations: Option<u32>,
    time_limit: Option<Duration>,
    exploration: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            role: None,
            seed: None,
            iterations: None,
            time_limit: None,
            exploration: DEFAULT_EXPLORATION,
        }
    }
}

impl From<&AgentConfig> for Options {
    fn from(config: &AgentConfig) -> Self {
        Self {
            name: config.name.clone(),
            role: Some(config.role.to_string()),
            seed: config.seed,
            iterations: config.iterations,
            time_limit: config.time_limit,
            exploration: config.exploration,
        }
    }
}

impl Options {
    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "name" => self.name = value.to_string(),
            "role" => self.role = Some(value.to_string()),
            "seed" => self.seed = Some(parse_value(key, value)?),
            "N" => self.iterations = Some(parse_value(key, value)?),
            "T" => self.time_limit = Some(Duration::from_millis(parse_value(key, value)?)),
            "c" => {
                let exploration: f32 = parse_value(key, value)?;
                if !exploration.is_finite() || exploration < 0.0 {
                    return Err(invalid_value(key, value));
                }
                self.exploration = exploration;
            }
            _ => debug!(key, value, "ignoring unknown agent option"),
        }
        Ok(())
    }

    fn build(self) -> Result<AgentConfig> {
        if self.name.contains(RESERVED_NAME_CHARS) {
            return Err(ConfigError::InvalidName(self.name));
        }
        let role: Color = self.role.as_deref().unwrap_or("unknown").parse()?;

        Ok(AgentConfig {
            name: self.name,
            role,
            seed: self.seed,
            iterations: self.iterations,
            time_limit: self.time_limit,
            exploration: self.exploration,
        })
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| invalid_value(key, value))
}

fn invalid_value(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config =
            AgentConfig::from_args("name=alpha role=white seed=7 N=50 T=200 c=1.5").unwrap();
        assert_eq!(config.name, "alpha");
        assert_eq!(config.role, Color::White);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.iterations, Some(50));
        assert_eq!(config.time_limit, Some(Duration::from_millis(200)));
        assert!((config.exploration - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_defaults() {
        let config: AgentConfig = "role=black".parse().unwrap();
        assert_eq!(config.name, DEFAULT_NAME);
        assert_eq!(config.seed, None);
        assert_eq!(config.budget(), Budget::Immediate);
        assert!((config.exploration - DEFAULT_EXPLORATION).abs() < 1e-6);
    }

    #[test]
    fn test_later_keys_override() {
        let config = AgentConfig::from_args("role=black N=10 role=white N=20").unwrap();
        assert_eq!(config.role, Color::White);
        assert_eq!(config.iterations, Some(20));
    }

    #[test]
    fn test_missing_role() {
        assert_eq!(
            AgentConfig::from_args("name=alpha"),
            Err(ConfigError::InvalidRole("unknown".to_string()))
        );
    }

    #[test]
    fn test_invalid_role() {
        assert_eq!(
            AgentConfig::from_args("role=red"),
            Err(ConfigError::InvalidRole("red".to_string()))
        );
    }

    #[test]
    fn test_invalid_names() {
        for name in ["a[b", "a]b", "(x", "x)", "a:b", "a;b"] {
            let args = format!("name={} role=black", name);
            assert_eq!(
                AgentConfig::from_args(&args),
                Err(ConfigError::InvalidName(name.to_string())),
                "name {:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(matches!(
            AgentConfig::from_args("role=black N=many"),
            Err(ConfigError::InvalidValue { key, .. }) if key == "N"
        ));
        assert!(AgentConfig::from_args("role=black T=-5").is_err());
        assert!(AgentConfig::from_args("role=black seed=x").is_err());
        assert!(AgentConfig::from_args("role=black c=-1").is_err());
        assert!(AgentConfig::from_args("role=black c=NaN").is_err());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = AgentConfig::from_args("role=black depth=3 verbose").unwrap();
        assert_eq!(config.role, Color::Black);
    }

    #[test]
    fn test_budget_selection() {
        let count = AgentConfig::from_args("role=black N=100").unwrap();
        assert_eq!(count.budget(), Budget::Iterations(100));

        let time = AgentConfig::from_args("role=black T=250").unwrap();
        assert_eq!(time.budget(), Budget::Deadline(Duration::from_millis(250)));

        // A deadline takes precedence over a cycle count.
        let both = AgentConfig::from_args("role=black N=100 T=250").unwrap();
        assert_eq!(both.budget(), Budget::Deadline(Duration::from_millis(250)));
    }

    #[test]
    fn test_notify() {
        let mut config = AgentConfig::from_args("role=black N=10").unwrap();
        config.notify("N=40").unwrap();
        assert_eq!(config.iterations, Some(40));

        config.notify("role=white").unwrap();
        assert_eq!(config.role, Color::White);
    }

    #[test]
    fn test_notify_rejects_and_keeps_old_config() {
        let mut config = AgentConfig::from_args("name=alpha role=black").unwrap();
        let before = config.clone();

        assert!(config.notify("name=bad;name").is_err());
        assert!(config.notify("role=green").is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn test_search_config_constructors() {
        let config = SearchConfig::with_iterations(64);
        assert_eq!(config.budget, Budget::Iterations(64));

        let config = SearchConfig::with_time_limit(Duration::from_millis(5));
        assert_eq!(config.budget, Budget::Deadline(Duration::from_millis(5)));
        assert_eq!(SearchConfig::default().budget, Budget::Immediate);
    }
}

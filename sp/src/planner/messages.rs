//! Motivational messages attached to each study day

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Built-in motivational messages
pub const DEFAULT_MESSAGES: [&str; 6] = [
    "🔥 Consistency beats intensity, just show up today!",
    "📚 Every small step today builds your future.",
    "⚡ Stay sharp! You're improving faster than you think.",
    "💪 Hard topics don't scare you anymore.",
    "🌱 1% improvement today = 100% growth ahead.",
    "🚀 Believe in your daily effort, it compounds.",
];

/// Supplies one message per opened study day
pub trait MessageSource {
    fn next_message(&mut self) -> String;
}

/// Picks messages uniformly at random from a fixed list
pub struct RandomMessages {
    messages: Vec<String>,
    rng: StdRng,
}

impl RandomMessages {
    /// Random source seeded from the OS
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            messages,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible source for a given seed
    pub fn seeded(messages: Vec<String>, seed: u64) -> Self {
        Self {
            messages,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMessages {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect())
    }
}

impl MessageSource for RandomMessages {
    fn next_message(&mut self) -> String {
        self.messages.choose(&mut self.rng).cloned().unwrap_or_default()
    }
}

/// Always returns the same message
#[derive(Debug, Clone, Default)]
pub struct FixedMessage(pub String);

impl MessageSource for FixedMessage {
    fn next_message(&mut self) -> String {
        self.0.clone()
    }
}

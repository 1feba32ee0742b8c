use rand::seq::SliceRandom;
use rand::thread_rng;

/// Browser signatures the rotating identity draws from.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64)",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)",
    "Mozilla/5.0 (X11; Linux x86_64)",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X)",
];

/// Client identity the HTTP layer consults once per outgoing request.
/// Swappable so tests can pin a deterministic signature.
pub trait ClientIdentity: Send + Sync {
    fn user_agent(&self) -> String;
}

/// Picks a random signature from a pool on every request.
pub struct RotatingIdentity {
    pool: Vec<String>,
}

impl RotatingIdentity {
    pub fn new(pool: Vec<String>) -> Self {
        if pool.is_empty() {
            return Self::default();
        }
        Self { pool }
    }
}

impl Default for RotatingIdentity {
    fn default() -> Self {
        Self {
            pool: USER_AGENTS.iter().map(|ua| ua.to_string()).collect(),
        }
    }
}

impl ClientIdentity for RotatingIdentity {
    fn user_agent(&self) -> String {
        self.pool
            .choose(&mut thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}

/// Always presents the same signature. Used in tests.
pub struct FixedIdentity(String);

impl FixedIdentity {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self(user_agent.into())
    }
}

impl ClientIdentity for FixedIdentity {
    fn user_agent(&self) -> String {
        self.0.clone()
    }
}

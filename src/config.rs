use rand::rngs::StdRng;
use rand::SeedableRng;

/// How round results are written to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Runtime configuration for the verifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Fixed seed for random deals, OS entropy when absent
    pub seed: Option<u64>,
    pub output: OutputFormat,
}

impl VerifierConfig {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup("POKER_SEED").and_then(|s| s.trim().parse().ok());
        let output = lookup("POKER_OUTPUT")
            .and_then(|s| OutputFormat::parse(&s))
            .unwrap_or(OutputFormat::Text);

        Self { seed, output }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

use std::io;
use std::process::ExitCode;

use poker_hand_verifier::{Console, VerifierConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing; logs go to stderr so they never mix with the game output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poker_hand_verifier=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = VerifierConfig::new();
    info!(seed = ?config.seed, output = ?config.output, "Starting poker hand verifier");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config);
    match console.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Verifier stopped");
            ExitCode::FAILURE
        }
    }
}

// Verifies the shares in `output/`: the updated shares of both parties must
// reconstruct to `u + v * (1 - <u, v>)`, where `u` and `v` are reconstructed
// from the initial shares.
//
// Exit status: 0 when the update verifies, 2 when an input is missing or
// malformed or the vector lengths disagree, 3 when some index differs.

use std::{io, process::exit};

use share_verify::{run_from_config, ExitStatus, Reporter, VerifierConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = VerifierConfig::default();
    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock()).with_colors(console::colors_enabled());

    let outcome = run_from_config(&config, &mut reporter);
    if let Err(err) = &outcome {
        tracing::debug!(%err, "verification aborted");
    }
    if let Err(err) = reporter.flush() {
        tracing::error!(%err, "failed to flush stdout");
    }

    exit(ExitStatus::from_outcome(&outcome).code())
}

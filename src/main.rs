//! chihuahua-setup - ChihuahuaOS host setup utility
//!
//! Entry point for the command-line application.

use clap::Parser;

use chihuahua_setup::cli::output::{display_error, OutputConfig};
use chihuahua_setup::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let output_config = OutputConfig::new(cli.quiet, cli.verbose);

    // Logs go to stderr so they never interleave with the prompts on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(output_config.log_level().into())
                .from_env_lossy(),
        )
        .init();

    tracing::debug!(
        "chihuahua-setup {} ({})",
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    );

    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(1);
    }
}

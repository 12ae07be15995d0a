use anyhow::Result;
use clap::Parser;
use neo_keygen::{args::CliArgs, commands, config::KeygenConfig};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let config = KeygenConfig::resolve(&args)?;

    let stdout = std::io::stdout();
    commands::run(args.command(), &config, &mut stdout.lock())
}

// Logs go to stderr; stdout carries only the command output.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

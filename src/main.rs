use clap::Parser;
use tick::cli::commands::Cli;
use tick::cli::handlers;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; quiet by default so the TUI screen stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

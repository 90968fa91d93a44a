use clap::Parser;

mod cli;

use cli::args::Cli;
use cli::commands::{dispatch, exit_codes};

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    init_logging();
    let cli = Cli::parse();
    let code = match dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::CONFIG_ERROR
        }
    };
    std::process::exit(code);
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    // Quiet by default; PERCEPT_LOG=info shows cache hit/miss decisions.
    let filter = EnvFilter::try_from_env("PERCEPT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

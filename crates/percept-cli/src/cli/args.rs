use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "percept",
    version,
    about = "Content-addressed prediction cache for webcam classification"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify a captured frame, serving repeat frames from the cache
    Classify(ClassifyArgs),
    /// Show recent predictions, newest first
    History(HistoryArgs),
    /// Evict every cached prediction (the history log is preserved)
    ClearCache(ClearCacheArgs),
    Version,
}

#[derive(Parser, Clone)]
pub struct ClassifyArgs {
    /// Image file whose bytes are fingerprinted and classified
    pub image: PathBuf,

    /// Optional YAML config; flags and env override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, env = "PERCEPT_DB")]
    pub db: Option<PathBuf>,

    /// prediction endpoint URL
    #[arg(long, env = "PERCEPT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// classifier provider (http|fake)
    #[arg(long, default_value = "http")]
    pub classifier: String,

    /// bypass the cache for this capture (always call the endpoint, store nothing)
    #[arg(long)]
    pub no_cache: bool,

    #[arg(long, env = "PERCEPT_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<u64>,
}

#[derive(Parser, Clone)]
pub struct HistoryArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, env = "PERCEPT_DB")]
    pub db: Option<PathBuf>,

    /// output format (text|json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Parser, Clone)]
pub struct ClearCacheArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, env = "PERCEPT_DB")]
    pub db: Option<PathBuf>,
}

use super::args::*;
use anyhow::Context;
use percept_core::admin::CacheAdmin;
use percept_core::cache::PredictionCache;
use percept_core::classifier::fake::FakeClassifier;
use percept_core::classifier::http::HttpClassifier;
use percept_core::classifier::Classifier;
use percept_core::config::{load_config, AppConfig};
use percept_core::engine::Engine;
use percept_core::errors::ConfigError;
use percept_core::history::HistoryLog;
use percept_core::report;
use percept_core::storage::{SqliteStorage, Storage};
use std::path::Path;
use std::sync::Arc;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const CAPTURE_FAILED: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Classify(args) => cmd_classify(args).await,
        Command::History(args) => cmd_history(args).await,
        Command::ClearCache(args) => cmd_clear_cache(args).await,
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}

async fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<i32> {
    let cfg = match resolve_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let db = args.db.unwrap_or(cfg.db);
    let endpoint = args.endpoint.unwrap_or(cfg.endpoint);
    let timeout_seconds = args.timeout_seconds.unwrap_or(cfg.timeout_seconds);
    let use_cache = cfg.cache && !args.no_cache;

    let image = std::fs::read(&args.image)
        .with_context(|| format!("failed to read image {}", args.image.display()))?;

    let classifier: Arc<dyn Classifier> = match args.classifier.as_str() {
        "http" => Arc::new(HttpClassifier::new(endpoint, cfg.model)),
        "fake" => Arc::new(FakeClassifier::new()),
        other => {
            eprintln!("config error: unknown classifier provider: {}", other);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let storage = open_storage(&db)?;
    let engine = Engine {
        cache: PredictionCache::new(storage.clone()),
        history: HistoryLog::new(storage),
        classifier,
        use_cache,
        timeout_seconds,
    };

    match engine.capture(&image).await {
        Ok(outcome) => {
            report::console::print_outcome(&outcome);
            Ok(exit_codes::OK)
        }
        Err(e) => {
            eprintln!("classification failed: {:#}", e);
            Ok(exit_codes::CAPTURE_FAILED)
        }
    }
}

async fn cmd_history(args: HistoryArgs) -> anyhow::Result<i32> {
    let cfg = match resolve_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let db = args.db.unwrap_or(cfg.db);
    let storage = open_storage(&db)?;
    let entries = HistoryLog::new(storage).list();

    match args.format.as_str() {
        "text" => report::console::print_history(&entries),
        "json" => println!("{}", report::json::render_history(&entries)?),
        other => {
            eprintln!("config error: unknown output format: {}", other);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    }
    Ok(exit_codes::OK)
}

async fn cmd_clear_cache(args: ClearCacheArgs) -> anyhow::Result<i32> {
    let cfg = match resolve_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let db = args.db.unwrap_or(cfg.db);
    let storage = open_storage(&db)?;

    match CacheAdmin::new(storage).evict_all() {
        Ok(removed) => {
            eprintln!("cleared {} cached prediction(s)", removed);
            Ok(exit_codes::OK)
        }
        Err(e) => {
            eprintln!("could not clear the prediction cache: {:#}", e);
            Ok(exit_codes::CAPTURE_FAILED)
        }
    }
}

fn resolve_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(p) => load_config(p),
        None => Ok(AppConfig::default()),
    }
}

fn open_storage(db: &Path) -> anyhow::Result<Arc<dyn Storage>> {
    ensure_parent_dir(db)?;
    Ok(Arc::new(SqliteStorage::open(db)?))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

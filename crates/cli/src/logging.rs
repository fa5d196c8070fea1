use mdcards_core::config::types::ResolvedConfig;
use std::fs::{self, File};
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> = Mutex::new(None);

/// Install stderr logging plus the optional log file from `[logging]`.
pub fn init(cfg: &ResolvedConfig) {
    let stderr_level = parse_level(&cfg.logging.level).unwrap_or(LevelFilter::INFO);
    let stderr_filter =
        EnvFilter::builder().with_default_directive(stderr_level.into()).from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(stderr_filter);

    let registry = tracing_subscriber::registry().with(stderr_layer);

    if let Some(ref path) = cfg.logging.file {
        let file_level_str = cfg.logging.file_level.as_deref().unwrap_or(&cfg.logging.level);
        let file_level = parse_level(file_level_str).unwrap_or(LevelFilter::DEBUG);
        let file_filter =
            EnvFilter::builder().with_default_directive(file_level.into()).from_env_lossy();

        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let file = File::create(path).unwrap_or_else(|e| {
            eprintln!("Failed to create log file {}: {}", path.display(), e);
            std::process::exit(1);
        });

        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        if let Ok(mut g) = LOG_GUARD.lock() {
            *g = Some(guard);
        }

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(file_filter);

        registry.with(file_layer).init();
    } else {
        registry.init();
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

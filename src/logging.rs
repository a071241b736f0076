use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter directive variable; setting it also turns logging on.
pub const LOG_ENV: &str = "TERMPICK_LOG";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Install the file logger when `--log` or `TERMPICK_LOG` asks for it.
///
/// The prompts own stderr while they run, so logs only ever go to a daily
/// file under the cache directory.
pub fn init(enabled: bool) -> Option<LoggingGuard> {
    if !enabled && std::env::var_os(LOG_ENV).is_none() {
        return None;
    }

    let log_dir = ensure_log_dir().ok()?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "termpick.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("termpick=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_thread_names(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}

fn ensure_log_dir() -> io::Result<PathBuf> {
    let base = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    let dir = base.join("termpick").join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub mod config;
pub mod models;
pub mod protocol; // Template catalog + derivation engine
pub mod validation; // Code Jaune completeness check
pub mod suggestion; // External protocol suggestion + merge
pub mod assistant; // Generative service boundary
pub mod history; // Reformulation history
pub mod session; // Report session orchestration

use tracing_subscriber::EnvFilter;

use history::JsonFileHistory;
use session::ReportSession;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins; otherwise the `log_filter` of the loaded config applies.
/// A second call is a no-op.
pub fn init_tracing() {
    let fallback = config::get_config().log_filter.clone();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .try_init();

    tracing::info!("RadioAssist starting v{}", config::APP_VERSION);
}

/// Session backed by the on-disk history log, using the user's defaults.
pub fn open_session() -> ReportSession<JsonFileHistory> {
    let cfg = config::get_config();
    let history = JsonFileHistory::new(config::history_path(), cfg.history_limit);
    ReportSession::new(cfg.default_contrast_agent, history)
}

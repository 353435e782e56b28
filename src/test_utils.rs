#[cfg(test)]
pub mod test_utils {
    use crate::config::AppConfig;
    use crate::router::create_router;
    use axum::Router;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body><div id=\"app\">CRM Pro</div></body></html>";
    pub const BUNDLE_JS: &str = "console.log('crmpro');";

    static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

    /// Fake frontend bundle in a fresh temp directory: `index.html` plus one script.
    pub fn setup_frontend_dist() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "crmpro-dist-{}-{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(&dir).expect("Failed to create frontend dist dir");
        fs::write(dir.join("index.html"), INDEX_HTML).expect("Failed to write index.html");
        fs::write(dir.join("frontend.js"), BUNDLE_JS).expect("Failed to write bundle");
        dir
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing, serving a fake bundle
    pub fn setup_test_app() -> (Router, PathBuf) {
        let dist = setup_frontend_dist();
        let config = AppConfig {
            bind_address: "127.0.0.1:0".to_string(),
            frontend_dist: dist.clone(),
        };
        (create_router(&config), dist)
    }
}

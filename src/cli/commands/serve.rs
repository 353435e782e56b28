use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use crate::config::AppConfig;
use crate::router::create_router;

pub async fn serve(config: AppConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("CRM Pro server starting up");
    debug!("Bind address: {}", config.bind_address);
    debug!("Frontend bundle: {}", config.frontend_dist.display());

    if !config.index_html().is_file() {
        warn!(
            "No index.html in {}; build the frontend with `trunk build` first",
            config.frontend_dist.display()
        );
    }

    trace!("Creating application router");
    let app = create_router(&config);
    debug!("Router created successfully");

    info!("Starting server on {}", config.bind_address);
    trace!("Attempting to bind TCP listener to {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("CRM Pro running on http://{}", config.bind_address);
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}

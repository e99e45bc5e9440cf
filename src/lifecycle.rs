//! Server lifecycle management helpers.
//!
//! Bootstrapping the database and session registry, wiring the HTTP
//! server, and coordinating graceful shutdown live here so `main.rs`
//! stays a thin orchestrator.

use crate::config::ServerConfig;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use lineup_auth::{CookieConfig, SessionStore};
use lineup_store::{Database, QueueStore, UserStore};
use log::{debug, info};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Aggregated application components that need to be shared across the
/// HTTP server and shutdown handling.
pub struct ApplicationComponents {
    pub user_store: Arc<UserStore>,
    pub queue_store: Arc<QueueStore>,
    pub session_store: Arc<SessionStore>,
    pub cookie_config: CookieConfig,
}

/// Initialize SQLite, the stores, and the session registry.
pub async fn bootstrap(config: &ServerConfig) -> Result<ApplicationComponents> {
    // Open the database, creating the data directory on first run
    let phase_start = std::time::Instant::now();
    let db_path = Path::new(&config.database.path);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = Database::open(db_path)?;
    info!(
        "SQLite database ready at {} ({:.2}ms)",
        db_path.display(),
        phase_start.elapsed().as_secs_f64() * 1000.0
    );

    let user_store = Arc::new(UserStore::new(db.clone()));
    let queue_store = Arc::new(QueueStore::new(db));

    // In-memory session registry with a periodic sweep for expired tokens
    let session_store = Arc::new(SessionStore::new(config.session.ttl()));
    spawn_session_purge(session_store.clone(), config.session.purge_interval());
    debug!(
        "Session registry initialized (ttl={}h, purge every {}s)",
        config.session.ttl_hours, config.session.purge_interval_seconds
    );

    let cookie_config = CookieConfig {
        secure: config.session.cookie_secure,
        ..CookieConfig::default()
    };
    if !cookie_config.secure {
        debug!("Session cookie issued without the Secure flag (cookie_secure=false)");
    }

    Ok(ApplicationComponents {
        user_store,
        queue_store,
        session_store,
        cookie_config,
    })
}

/// Periodic sweep of expired session bindings.
fn spawn_session_purge(sessions: Arc<SessionStore>, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let removed = sessions.purge_expired();
            if removed > 0 {
                debug!(
                    "Purged {} expired session(s), {} still active",
                    removed,
                    sessions.active_count()
                );
            }
        }
    });
}

/// Start the HTTP server and manage graceful shutdown.
pub async fn run(config: &ServerConfig, components: ApplicationComponents) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_addr);

    let workers = if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    };
    debug!("Server config: workers={}", workers);

    let user_store = components.user_store.clone();
    let queue_store = components.queue_store.clone();
    let session_store = components.session_store.clone();
    let cookie_config = components.cookie_config.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(user_store.clone()))
            .app_data(web::Data::new(queue_store.clone()))
            .app_data(web::Data::new(session_store.clone()))
            .app_data(web::Data::new(cookie_config.clone()))
            .configure(lineup_api::routes::configure)
    })
    .workers(workers)
    .bind(&bind_addr)?
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        result = server_task => {
            match result {
                Ok(Ok(())) => info!("HTTP server stopped"),
                Ok(Err(e)) => log::error!("HTTP server failed: {}", e),
                Err(e) => log::error!("Server task failed: {}", e),
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, initiating graceful shutdown...");

            // Stop accepting new HTTP connections, let in-flight requests finish
            server_handle.stop(true).await;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

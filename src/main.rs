//! Rallypoint service binary.
//!
//! Wires configuration, the Postgres-backed stores, the webhook notifier,
//! the lifecycle engine, and the HTTP binding.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rallypoint::adapters::http::{interest_routes, session_routes, InterestHandlers, SessionHandlers};
use rallypoint::adapters::postgres::{
    PostgresEventDirectory, PostgresInterestStore, PostgresSessionStore,
};
use rallypoint::adapters::webhook::{WebhookConfig, WebhookNotifier};
use rallypoint::adapters::SystemClock;
use rallypoint::application::engine::{
    DeadlineScheduler, EventLockRegistry, NotificationDispatcher, SessionReconciler,
};
use rallypoint::application::handlers::interest::{
    ListInterestedHandler, RegisterInterestHandler, ToggleConnectionHandler,
    WithdrawInterestHandler,
};
use rallypoint::application::handlers::session::{
    ExtendSessionHandler, JoinSessionHandler, LeaveSessionHandler, SessionStatusHandler,
    StartSessionHandler,
};
use rallypoint::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Ports
    let directory = Arc::new(PostgresEventDirectory::new(pool.clone()));
    let store = Arc::new(PostgresSessionStore::new(pool.clone()));
    let interests = Arc::new(PostgresInterestStore::new(pool.clone()));
    let notifier = Arc::new(WebhookNotifier::new(
        WebhookConfig::new(
            config.notifier.channel_url.clone(),
            config.notifier.direct_message_url.clone(),
        )
        .with_timeout(config.notifier.timeout()),
    )?);

    // Engine
    let clock = Arc::new(SystemClock);
    let locks = Arc::new(EventLockRegistry::new());
    let dispatcher = NotificationDispatcher::new(notifier);
    let reconciler = Arc::new(SessionReconciler::new(
        store.clone(),
        directory.clone(),
        locks.clone(),
        dispatcher.clone(),
        clock.clone(),
        config.session.warning_lead_minutes,
    ));
    let scheduler = Arc::new(DeadlineScheduler::new(
        reconciler,
        clock.clone(),
        config.session.warning_lead_minutes,
    ));

    // Handlers
    let session_handlers = SessionHandlers::new(
        Arc::new(StartSessionHandler::new(
            directory.clone(),
            store.clone(),
            locks.clone(),
            scheduler.clone(),
            dispatcher.clone(),
            clock.clone(),
        )),
        Arc::new(JoinSessionHandler::new(
            store.clone(),
            locks.clone(),
            clock.clone(),
        )),
        Arc::new(LeaveSessionHandler::new(
            store.clone(),
            locks.clone(),
            clock.clone(),
        )),
        Arc::new(ExtendSessionHandler::new(
            directory.clone(),
            store.clone(),
            locks.clone(),
            scheduler.clone(),
            dispatcher.clone(),
        )),
        Arc::new(SessionStatusHandler::new(
            directory.clone(),
            store.clone(),
            clock,
        )),
    );
    let interest_handlers = InterestHandlers::new(
        Arc::new(RegisterInterestHandler::new(
            directory.clone(),
            interests.clone(),
        )),
        Arc::new(ToggleConnectionHandler::new(interests.clone())),
        Arc::new(WithdrawInterestHandler::new(interests.clone())),
        Arc::new(ListInterestedHandler::new(directory, interests)),
    );

    let app = axum::Router::new()
        .nest("/api/events", session_routes(session_handlers))
        .nest("/api/events", interest_routes(interest_handlers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    info!(%addr, "rallypoint listening");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grade_horaria::api::router;
use grade_horaria::config::AppConfig;
use grade_horaria::db;
use grade_horaria::services::ScheduleService;
use grade_horaria::state::AppState;
use grade_horaria::store::SqliteScheduleStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "grade_horaria=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;

    let pool = db::connect(&config.database_url).await?;
    let store = Arc::new(SqliteScheduleStore::new(pool));
    let schedule = Arc::new(ScheduleService::init(store).await?);

    let addr = config.bind_addr;
    let state = AppState {
        schedule,
        config: Arc::new(config),
    };

    let app = router(state);

    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

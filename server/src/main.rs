use server::telemetry::init_tracing;
use server::{AppState, DEFAULT_PAGE_SIZE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let path = dotenv::var("DB_PATH").expect("DB_PATH must be set");
    let pool = db::establish_connection(&path).await?;
    db::run_migrations(&pool).await?;

    let page_size = dotenv::var("QUESTIONS_PER_PAGE")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE);

    server::run_server(AppState { pool, page_size }).await
}

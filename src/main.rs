use std::net::SocketAddr;

use tokio::net::TcpListener;

use salesroi::app;
use salesroi::logging::{self, LoggingConfig};
use salesroi::state::AppState;
use salesroi::store::DataStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(LoggingConfig::from_env())?;

    let data_file =
        std::env::var("DATA_FILE").unwrap_or_else(|_| "salesroi-data.json".to_string());
    let store = DataStore::open(&data_file)?;

    let state = AppState { store };
    let app = app::create_app(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Sales ROI backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

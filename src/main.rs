use holocron::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    match startup::connect_to_database(&config).await {
        Ok(db) => {
            tracing::info!("Favorites schema is up to date");

            if let Err(e) = db.close().await {
                tracing::warn!("Failed to close database connection: {}", e);
            }
        }
        Err(e) => {
            tracing::error!("Failed to apply favorites schema: {}", e);
            std::process::exit(1);
        }
    }
}

mod model;
mod server;

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, spotify::client::SpotifyClient, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(config.log_json);

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let cors = startup::cors_layer(&config)?;

    let spotify = Arc::new(SpotifyClient::new(
        http_client,
        oauth_client.clone(),
        config.spotify_api_url.clone(),
    ));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    let app = router::router()
        .with_state(AppState::new(db, oauth_client, spotify, config))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    axum::serve(listener, app).await?;

    Ok(())
}

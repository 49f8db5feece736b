use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::app::env::Envy;

mod app;
mod images;
mod prompts;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(envy: Envy) -> Self {
        Self {
            envy: Arc::new(envy),
            client: reqwest::Client::new(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // prompts
        .route("/api/expand", post(prompts::controller::expand_prompt))
        // images
        .route("/api/generate", post(images::controller::generate_image))
        // layers
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to read environment: {}", e);
            return;
        }
    };

    let port = envy.port();
    println!();
    println!("{}", "=".repeat(50));
    println!("  SD Prompt Expander");
    println!("{}", "=".repeat(50));
    println!("  Ollama API: {}", envy.ollama_url());
    println!("  SD WebUI:   {}", envy.sd_url());
    println!("{}", "=".repeat(50));
    println!();
    println!("  Open in browser: http://localhost:{}", port);
    println!();

    let app = router(AppState::new(envy));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", e);
    }
}

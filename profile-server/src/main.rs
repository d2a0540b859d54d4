use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use profile_server::profile::ProfileConfig;
use profile_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = AppState::new(ProfileConfig::default());
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Profile scan service listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health   - Health check");
    println!("  POST /profile  - Run a profile scan on a JSON network");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

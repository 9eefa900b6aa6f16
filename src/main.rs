use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "greeting_server=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = greeting_server::resolve_port(std::env::var("PORT").ok());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server is running on port {port}");
    greeting_server::run(listener).await
}

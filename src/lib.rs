use axum::{http::header, response::IntoResponse, Router};
use tokio::net::TcpListener;

/// Body sent for every request, trailing newline included.
pub const GREETING: &str = "Hello Docker\n";

const DEFAULT_PORT: &str = "80";

pub fn app() -> Router {
    Router::new().fallback(greet)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Resolve the listening port from the value of the `PORT` environment
/// variable. Unset or empty falls back to `80`. Anything else passes through
/// unvalidated; an unusable value is rejected by the bind call.
pub fn resolve_port(env_value: Option<String>) -> String {
    match env_value {
        Some(port) if !port.is_empty() => port,
        _ => DEFAULT_PORT.to_string(),
    }
}

async fn greet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_port_defaults_when_unset() {
        assert_eq!(resolve_port(None), "80");
    }

    #[test]
    fn resolve_port_defaults_when_empty() {
        assert_eq!(resolve_port(Some(String::new())), "80");
    }

    #[test]
    fn resolve_port_uses_set_value() {
        assert_eq!(resolve_port(Some("8080".to_string())), "8080");
    }

    #[test]
    fn resolve_port_passes_non_numeric_values_through() {
        assert_eq!(resolve_port(Some("not-a-port".to_string())), "not-a-port");
    }
}

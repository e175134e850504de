use axum::{http::StatusCode, routing::get, Router};

/// Liveness check, no auth and no database round trip
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub fn routes() -> Router {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let server = TestServer::new(routes()).unwrap();

        let response = server.get("/health").await;

        response.assert_status_ok();
    }
}

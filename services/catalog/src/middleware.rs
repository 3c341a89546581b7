//! Request logging middleware

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::info;

/// Log each request line on entry and the response status on exit
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    info!("Request: {} {}", method, uri);

    let response = next.run(req).await;
    info!("Response status: {} for {} {}", response.status(), method, uri);

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, middleware, routing::get};
    use tower::ServiceExt;

    async fn handler() -> &'static str {
        "OK"
    }

    #[tokio::test]
    async fn test_logging_passes_response_through() {
        let app = Router::new()
            .route("/", get(handler))
            .layer(middleware::from_fn(log_requests));

        let req = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// One summary line per request. Handlers log their own timings, so only
/// routing data is recorded here; the query carries the `number` of a delete.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);
    let has_token = request.headers().contains_key("x-auth-token");

    let response = next.run(request).await;
    let status = response.status();

    info!(
        method = %method,
        path = %path,
        query = query.as_deref(),
        status = status.as_u16(),
        "request summary"
    );

    if status.as_u16() == 401 {
        warn!(method = %method, path = %path, has_token, "authentication failure");
    } else if status.is_server_error() {
        warn!(method = %method, path = %path, status = status.as_u16(), "product request failed");
    }

    response
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::{delete, post},
        Router,
    };
    use tower::ServiceExt;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            let bytes = self.0.lock().expect("log buffer lock");
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn app() -> Router {
        Router::new()
            .route("/product", delete(|| async { "deleted" }))
            .route("/product", post(|| async { StatusCode::UNAUTHORIZED }))
            .layer(middleware::from_fn(request_logging_middleware))
    }

    async fn run_logged(request: Request<Body>) -> (StatusCode, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_target(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let response = app().oneshot(request).await.expect("request execution");
        (response.status(), logs.contents())
    }

    #[tokio::test]
    async fn summary_includes_delete_query() {
        let (status, logs) = run_logged(
            Request::builder()
                .uri("/product?number=3")
                .method("DELETE")
                .body(Body::empty())
                .expect("request build"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(logs.contains("request summary"), "{logs}");
        assert!(logs.contains("query=\"number=3\"") || logs.contains("query=number=3"), "{logs}");
        assert!(logs.contains("status=200"), "{logs}");
    }

    #[tokio::test]
    async fn unauthorized_request_is_warned() {
        let (status, logs) = run_logged(
            Request::builder()
                .uri("/product")
                .method("POST")
                .body(Body::empty())
                .expect("request build"),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(logs.contains("authentication failure"), "{logs}");
        assert!(logs.contains("has_token=false"), "{logs}");
        assert!(!logs.contains("query="), "{logs}");
    }
}

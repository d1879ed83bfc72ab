use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod product;
pub mod service;

use service::ProductService;

#[derive(Clone)]
pub struct AppState {
    pub api_token: Arc<str>,
    pub product_service: Arc<dyn ProductService>,
}

impl AppState {
    pub fn new(api_token: String, product_service: Arc<dyn ProductService>) -> Self {
        Self {
            api_token: Arc::<str>::from(api_token),
            product_service,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    // Layered per method so unsupported methods still fall through to 405.
    let protected = post(http::handlers::create_product)
        .put(http::handlers::change_product_name)
        .delete(http::handlers::delete_product)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth_token,
        ));

    Router::new()
        .route("/health", get(http::handlers::health))
        .route(
            "/product",
            get(http::handlers::get_product_list).merge(protected),
        )
        .route("/product/{number}", get(http::handlers::get_product))
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}

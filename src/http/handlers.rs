//! Axum handlers for the product endpoints
//!
//! Each handler forwards to the injected [`ProductService`](crate::service::ProductService)
//! and logs request parameters, response fields and elapsed time.

use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::{
    errors::AppError,
    product::{ChangeProductNameDto, DeleteProductQuery, ProductDto, ProductResponseDto},
    AppState,
};

pub const DELETE_CONFIRMATION: &str = "정상적으로 삭제되었습니다.";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(number): Path<i64>,
) -> Result<Response, AppError> {
    let started_at = Instant::now();
    info!(number, "get_product request");

    let Some(product) = state.product_service.get_product(number).await? else {
        info!(number, "get_product found no product");
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    info!(
        number = product.number,
        content = %product.content,
        filename = %product.filename,
        "get_product response"
    );
    info!(
        duration_ms = started_at.elapsed().as_millis(),
        "get_product response time"
    );

    Ok(Json(product).into_response())
}

pub async fn get_product_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponseDto>>, AppError> {
    let started_at = Instant::now();
    let products = state.product_service.get_product_list().await?;

    info!(
        count = products.len(),
        duration_ms = started_at.elapsed().as_millis(),
        "get_product_list response"
    );
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductDto>,
) -> Result<Json<ProductResponseDto>, AppError> {
    let started_at = Instant::now();
    info!(
        content = %payload.content,
        filename = %payload.filename,
        "create_product request"
    );

    let product = state.product_service.save_product(payload).await?;

    info!(
        number = product.number,
        duration_ms = started_at.elapsed().as_millis(),
        "create_product response"
    );
    Ok(Json(product))
}

pub async fn change_product_name(
    State(state): State<AppState>,
    Json(payload): Json<ChangeProductNameDto>,
) -> Result<Json<ProductResponseDto>, AppError> {
    let started_at = Instant::now();
    info!(
        number = payload.number,
        content = %payload.content,
        "change_product_name request"
    );

    let product = state
        .product_service
        .change_product_content(payload.number, payload.content)
        .await?;

    info!(
        number = product.number,
        content = %product.content,
        filename = %product.filename,
        "change_product_name response"
    );
    info!(
        duration_ms = started_at.elapsed().as_millis(),
        "change_product_name response time"
    );
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Query(query): Query<DeleteProductQuery>,
) -> Result<(StatusCode, &'static str), AppError> {
    let started_at = Instant::now();
    info!(number = query.number, "delete_product request");

    state.product_service.delete_product(query.number).await?;

    info!(
        duration_ms = started_at.elapsed().as_millis(),
        "delete_product response time"
    );
    Ok((StatusCode::OK, DELETE_CONFIRMATION))
}

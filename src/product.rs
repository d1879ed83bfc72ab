//! Product data model
//!
//! `Product` is the stored entity; the `*Dto` types are the request and
//! response shapes exchanged over HTTP.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub number: i64,
    pub content: String,
    pub filename: String,
}

/// Creation payload for `POST /product`. Missing fields default to empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProductDto {
    pub content: String,
    pub filename: String,
}

/// Update payload for `PUT /product`. `content` is the new product name.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChangeProductNameDto {
    pub number: i64,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProductResponseDto {
    pub number: i64,
    pub content: String,
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteProductQuery {
    pub number: i64,
}

impl From<&Product> for ProductResponseDto {
    fn from(product: &Product) -> Self {
        Self {
            number: product.number,
            content: product.content.clone(),
            filename: product.filename.clone(),
        }
    }
}

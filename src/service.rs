use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::AppError,
    product::{Product, ProductDto, ProductResponseDto},
};

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_product(&self, number: i64) -> Result<Option<ProductResponseDto>, AppError>;

    async fn get_product_list(&self) -> Result<Vec<ProductResponseDto>, AppError>;

    async fn save_product(&self, product: ProductDto) -> Result<ProductResponseDto, AppError>;

    async fn change_product_content(
        &self,
        number: i64,
        content: String,
    ) -> Result<ProductResponseDto, AppError>;

    async fn delete_product(&self, number: i64) -> Result<(), AppError>;
}

#[derive(Debug)]
struct ProductStore {
    next_number: i64,
    products: BTreeMap<i64, Product>,
}

/// Process-local product storage.
///
/// Each mutation holds the write guard for its whole duration, so readers
/// only ever see committed state.
#[derive(Debug)]
pub struct InMemoryProductService {
    store: RwLock<ProductStore>,
}

impl InMemoryProductService {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(ProductStore {
                next_number: 1,
                products: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryProductService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductService for InMemoryProductService {
    async fn get_product(&self, number: i64) -> Result<Option<ProductResponseDto>, AppError> {
        let store = self.store.read().await;
        Ok(store.products.get(&number).map(ProductResponseDto::from))
    }

    async fn get_product_list(&self) -> Result<Vec<ProductResponseDto>, AppError> {
        let store = self.store.read().await;
        Ok(store.products.values().map(ProductResponseDto::from).collect())
    }

    async fn save_product(&self, product: ProductDto) -> Result<ProductResponseDto, AppError> {
        let mut store = self.store.write().await;
        let number = store.next_number;
        store.next_number = number
            .checked_add(1)
            .ok_or_else(|| AppError::internal("product number space exhausted"))?;

        let saved = Product {
            number,
            content: product.content,
            filename: product.filename,
        };
        let response = ProductResponseDto::from(&saved);
        store.products.insert(number, saved);
        Ok(response)
    }

    async fn change_product_content(
        &self,
        number: i64,
        content: String,
    ) -> Result<ProductResponseDto, AppError> {
        let mut store = self.store.write().await;
        let product = store
            .products
            .get_mut(&number)
            .ok_or_else(|| AppError::product_not_found(number))?;

        product.content = content;
        Ok(ProductResponseDto::from(&*product))
    }

    async fn delete_product(&self, number: i64) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        store
            .products
            .remove(&number)
            .map(|_| ())
            .ok_or_else(|| AppError::product_not_found(number))
    }
}

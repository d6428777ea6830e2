use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::error::CatalogError;
use crate::models::{CreateProductRequest, Product, ProductPatch};

/// Persistence seam for products. Calls are blocking; handlers run them on
/// actix's blocking pool.
pub trait ProductStore: Send + Sync {
    /// All products in insertion order.
    fn list(&self) -> Result<Vec<Product>, CatalogError>;

    fn get(&self, id: Uuid) -> Result<Product, CatalogError>;

    /// Persists a new row under `id`. Missing or invalid fields are left to the
    /// store's constraints.
    fn insert(&self, id: Uuid, request: CreateProductRequest) -> Result<Product, CatalogError>;

    /// Loads the product, applies `patch` and writes it back once.
    fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Product, CatalogError>;

    fn delete(&self, id: Uuid) -> Result<(), CatalogError>;
}

/// Process-local store. Mirrors the NOT NULL and `price > 0` constraints the
/// database schema carries.
#[derive(Default)]
pub struct MemoryProductStore {
    products: Mutex<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        MemoryProductStore {
            products: Mutex::new(products),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Product>>, CatalogError> {
        self.products
            .lock()
            .map_err(|_| CatalogError::Unavailable("product store lock poisoned".to_string()))
    }
}

impl ProductStore for MemoryProductStore {
    fn list(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: Uuid) -> Result<Product, CatalogError> {
        self.lock()?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    fn insert(&self, id: Uuid, request: CreateProductRequest) -> Result<Product, CatalogError> {
        let name = request
            .name
            .ok_or_else(|| CatalogError::Constraint("products.name not null".to_string()))?;
        let price = request
            .price
            .ok_or_else(|| CatalogError::Constraint("products.price not null".to_string()))?;
        if price.is_nan() || price <= 0.0 {
            return Err(CatalogError::Constraint("products_price_positive".to_string()));
        }
        let product = Product {
            id,
            name,
            description: request.description,
            price,
            image: request.image,
        };
        let mut products = self.lock()?;
        if products.iter().any(|p| p.id == product.id) {
            return Err(CatalogError::Constraint("products_pkey".to_string()));
        }
        products.push(product.clone());
        Ok(product)
    }

    fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Product, CatalogError> {
        let mut products = self.lock()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        patch.apply(product);
        Ok(product.clone())
    }

    fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
        let mut products = self.lock()?;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        products.remove(index);
        Ok(())
    }
}

pub mod client;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod server;
pub mod store;

pub use error::CatalogError;
pub use handlers::AppState;
pub use models::{CreateProductRequest, Product, ProductPatch, ProductResponse};
pub use store::{MemoryProductStore, ProductStore};

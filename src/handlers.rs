use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};
use uuid::Uuid;

use crate::error::CatalogError;
use crate::models::{CreateProductRequest, HealthResponse, ProductPatch, ProductResponse};
use crate::store::ProductStore;

/// Shared handler state. The store is built once in `main` and handed in here.
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub environment: String,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, environment: impl Into<String>) -> Self {
        AppState {
            store,
            environment: environment.into(),
        }
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(healthz))
        .service(
            web::resource("/products")
                .route(web::get().to(list_products))
                .route(web::post().to(create_product)),
        )
        .service(
            web::resource("/products/{id}")
                .route(web::get().to(get_product))
                .route(web::put().to(update_product))
                .route(web::delete().to(delete_product)),
        );
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn healthz(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        env: data.environment.clone(),
    })
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses((status = 200, description = "All products", body = [ProductResponse]))
)]
pub async fn list_products(data: web::Data<AppState>) -> Result<HttpResponse, CatalogError> {
    let store = data.store.clone();
    let products = web::block(move || store.list()).await??;
    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn get_product(
    data: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, CatalogError> {
    let store = data.store.clone();
    let id = id.into_inner();
    let product = web::block(move || store.get(id)).await??;
    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse,
            headers(("Location" = String, description = "Path of the new product")))
    )
)]
pub async fn create_product(
    data: web::Data<AppState>,
    payload: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, CatalogError> {
    let store = data.store.clone();
    let id = Uuid::new_v4();
    let request = payload.into_inner();
    let product = web::block(move || store.insert(id, request)).await??;
    tracing::info!(id = %product.id, "product created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/products/{}", product.id)))
        .json(ProductResponse::from(product)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = Uuid, Path, description = "Product id")),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Updated product", body = ProductResponse),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn update_product(
    data: web::Data<AppState>,
    id: web::Path<Uuid>,
    patch: web::Json<ProductPatch>,
) -> Result<HttpResponse, CatalogError> {
    let store = data.store.clone();
    let id = id.into_inner();
    let patch = patch.into_inner();
    let product = web::block(move || store.update(id, patch)).await??;
    tracing::info!(%id, "product updated");
    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn delete_product(
    data: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, CatalogError> {
    let store = data.store.clone();
    let id = id.into_inner();
    web::block(move || store.delete(id)).await??;
    tracing::info!(%id, "product deleted");
    Ok(HttpResponse::Ok().finish())
}

//! OpenAPI document and the Swagger UI page that renders it.

use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{CreateProductRequest, HealthResponse, ProductPatch, ProductResponse};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Catalog API", description = "Product catalog CRUD service"),
    paths(
        handlers::healthz,
        handlers::list_products,
        handlers::get_product,
        handlers::create_product,
        handlers::update_product,
        handlers::delete_product,
    ),
    components(schemas(ProductResponse, CreateProductRequest, ProductPatch, HealthResponse)),
    tags(
        (name = "products", description = "Product CRUD"),
        (name = "health", description = "Liveness check")
    )
)]
pub struct ApiDoc;

const SWAGGER_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Catalog API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "{{OPENAPI_PATH}}", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

/// The Swagger page pulls `swagger-ui-dist` 5.17.14 from unpkg at load time, so it
/// renders blank without network access; the JSON document is served locally.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route(OPENAPI_PATH, web::get().to(openapi_json))
        .route("/swagger", web::get().to(swagger_ui));
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

async fn swagger_ui() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(SWAGGER_PAGE.replace("{{OPENAPI_PATH}}", OPENAPI_PATH))
}

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use crate::config::Settings;
use crate::db::{self, PgPool, PgProductStore};
use crate::docs;
use crate::handlers::{self, AppState};

/// Unlisted origins are still served, just without `Access-Control-Allow-Origin`.
pub fn cors(settings: &Settings) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .block_on_origin_mismatch(false)
        .max_age(3600);

    if settings.allow_any_origin() {
        return cors.allow_any_origin();
    }
    settings
        .cors
        .origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

/// Schema migration is best effort: failures are logged and the server still starts.
pub fn migrate(settings: &Settings, pool: &PgPool) {
    if settings.database.url.is_none() {
        tracing::warn!("database.url is not set; skipping migrations");
        return;
    }
    match db::run_migrations(pool) {
        Ok(applied) => tracing::info!(applied, "migrations applied"),
        Err(e) => tracing::warn!(error = %e, "migrations failed at startup; continuing without database"),
    }
}

pub async fn run(settings: Settings) -> std::io::Result<()> {
    let pool = db::build_pool(&settings.database);
    let migrate_settings = settings.clone();
    let migrate_pool = pool.clone();
    if let Err(e) = web::block(move || migrate(&migrate_settings, &migrate_pool)).await {
        tracing::warn!(error = %e, "migration task did not complete");
    }

    let state = web::Data::new(AppState::new(
        Arc::new(PgProductStore::new(pool)),
        settings.environment.clone(),
    ));
    let docs_enabled = settings.api_docs_enabled();
    if docs_enabled {
        tracing::info!(path = docs::OPENAPI_PATH, "api docs enabled");
    }

    let (host, port) = settings.bind_address();
    tracing::info!(%host, port, env = %settings.environment, "starting catalog server");

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&settings))
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(handlers::routes)
            .configure(|cfg| {
                if docs_enabled {
                    docs::routes(cfg);
                }
            })
    })
    .bind((host, port))?
    .run()
    .await
}

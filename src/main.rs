use catalog::config::Settings;
use catalog::{logging, server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    logging::init("info");

    let settings = Settings::load().map_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    server::run(settings).await
}

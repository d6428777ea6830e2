use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEVELOPMENT: &str = "Development";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: String,
    pub enable_api_docs: bool,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub url: Option<String>,
    pub pool_size: u32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSettings {
    #[serde(default)]
    pub origins: Vec<String>,
}

impl Settings {
    /// Defaults, then an optional `appsettings.*` file, then `CATALOG__*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("appsettings").required(false))
            .add_source(
                Environment::with_prefix("CATALOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.origins"),
            );
        Self::from_builder(builder)
    }

    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let settings: Settings = builder
            .set_default("environment", "Production")?
            .set_default("enable_api_docs", false)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5171)?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout_seconds", 30)?
            .build()?
            .try_deserialize()?;
        Ok(settings.normalized())
    }

    fn normalized(mut self) -> Self {
        if self.database.url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            self.database.url = None;
        }
        self.cors.origins.retain(|origin| !origin.trim().is_empty());
        self
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case(DEVELOPMENT)
    }

    pub fn api_docs_enabled(&self) -> bool {
        self.is_development() || self.enable_api_docs
    }

    /// Any origin is accepted only in development with no origins configured.
    pub fn allow_any_origin(&self) -> bool {
        self.cors.origins.is_empty() && self.is_development()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

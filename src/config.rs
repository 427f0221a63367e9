use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub url: String,
    pub max_connections: u32,
    pub seed_categories: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Prefix for every trivia route, e.g. `/api/v1`. Empty mounts at the root.
    pub base_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

const DEFAULTS: &str = include_str!("../config/default.toml");

impl Default for AppConfig {
    fn default() -> Self {
        // Fallback: parse the embedded default TOML
        match base_builder().build() {
            Ok(cfg) => match cfg.try_deserialize() {
                Ok(app_cfg) => app_cfg,
                Err(e) => {
                    eprintln!("FATAL: Failed to deserialize default config: {}", e);
                    panic!("Failed to deserialize default config: {}", e);
                }
            },
            Err(e) => {
                eprintln!("FATAL: Failed to parse default config: {}", e);
                panic!("Failed to parse default config: {}", e);
            }
        }
    }
}

impl AppConfig {
    /// Route prefix without a trailing slash.
    pub fn base_path(&self) -> &str {
        self.api.base_path.trim_end_matches('/')
    }
}

fn base_builder() -> ::config::ConfigBuilder<::config::builder::DefaultState> {
    ::config::Config::builder().add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
}

/// Embedded defaults -> trivia.toml -> $TRIVIA_CONFIG -> TRIVIA__* env vars.
pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let mut builder = base_builder()
        // Optional local file: trivia.toml (in CWD)
        .add_source(::config::File::with_name("trivia").required(false));

    if let Ok(custom_path) = std::env::var("TRIVIA_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("TRIVIA").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

/// Embedded defaults overlaid with a single TOML file; environment is ignored.
#[cfg(test)]
pub(crate) fn load_file(path: &Path) -> anyhow::Result<AppConfig> {
    let path = path.to_str().ok_or_else(|| anyhow::anyhow!("config path is not valid UTF-8"))?;
    let cfg = base_builder()
        .add_source(::config::File::new(path, ::config::FileFormat::Toml))
        .build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

pub(crate) fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    // Server
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }

    // Database
    if cfg.database.max_connections == 0 || cfg.database.max_connections > 256 {
        return Err(anyhow::anyhow!("database.max_connections must be in 1..=256"));
    }
    if cfg.database.backend == StorageBackend::Sqlite && cfg.database.url.trim().is_empty() {
        return Err(anyhow::anyhow!("database.url must be set for the sqlite backend"));
    }

    // API prefix
    let base = &cfg.api.base_path;
    if !base.is_empty() && !base.starts_with('/') {
        return Err(anyhow::anyhow!("api.base_path must start with '/': {}", base));
    }
    if base.len() > 1 && base.ends_with('/') {
        return Err(anyhow::anyhow!("api.base_path must not end with '/': {}", base));
    }

    Ok(())
}

/// Non-fatal findings about a valid config, logged once logging is up.
pub fn startup_warnings(cfg: &AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if cfg!(unix) && cfg.server.port < 1024 {
        warnings.push(format!("Using privileged port {} - may require elevated permissions", cfg.server.port));
    }
    if cfg.database.backend == StorageBackend::Memory {
        warnings.push("Using the in-memory store; data is lost on shutdown".to_string());
    }
    warnings
}

pub fn ensure_sqlite_parent_dir(url: &str) -> anyhow::Result<()> {
    if let Some(path) = url.strip_prefix("sqlite://") {
        // sqlite:///C:/... -> C:/...
        #[cfg(windows)]
        let path = {
            let bytes = path.as_bytes();
            if bytes.len() >= 3 && bytes[0] == b'/' && bytes[2] == b':' && bytes[1].is_ascii_alphabetic() {
                &path[1..]
            } else {
                path
            }
        };
        let path = path.split('?').next().unwrap_or(path);
        if path.is_empty() || path == ":memory:" {
            return Ok(());
        }
        let p = Path::new(path);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }
    Ok(())
}

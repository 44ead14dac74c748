//! Server configuration, read once from the environment at startup.

use std::env;
use std::path::PathBuf;

use roost_core::{Error, Result};
use roost_store::StoreConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    pub upload_dir: PathBuf,
    /// Prefix for publicly addressable image URLs, no trailing slash.
    pub public_base_url: String,
    pub admin_code: Option<String>,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Environment variables:
    ///   HOST            - bind address (default: 0.0.0.0)
    ///   PORT            - bind port (default: 8000)
    ///   STORE_BACKEND   - "memory", "file", or "postgres" (default: memory)
    ///   DATA_DIR        - collection directory for the file backend (default: ./data)
    ///   DATABASE_URL    - Postgres URL for the postgres backend
    ///   UPLOAD_DIR      - image storage directory (default: ./uploads)
    ///   PUBLIC_BASE_URL - URL prefix for stored images (default: http://localhost:PORT)
    ///   ADMIN_CODE      - admin gate secret; unset leaves the gate closed
    pub fn from_env() -> Result<Config> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000);

        let backend = env::var("STORE_BACKEND").unwrap_or_else(|_| "memory".to_string());
        let store = match backend.as_str() {
            "memory" => StoreConfig::Memory,
            "file" => StoreConfig::File {
                data_dir: env::var("DATA_DIR")
                    .unwrap_or_else(|_| "./data".to_string())
                    .into(),
            },
            "postgres" => StoreConfig::Postgres {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost/roost".to_string()),
            },
            other => {
                return Err(Error::Config(format!(
                    "unknown STORE_BACKEND '{}' (expected memory, file, or postgres)",
                    other
                )))
            }
        };

        let upload_dir: PathBuf = env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "./uploads".to_string())
            .into();
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port))
            .trim_end_matches('/')
            .to_string();
        let admin_code = env::var("ADMIN_CODE").ok().filter(|c| !c.is_empty());

        Ok(Config {
            host,
            port,
            store,
            upload_dir,
            public_base_url,
            admin_code,
        })
    }
}

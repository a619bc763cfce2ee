/// Server configuration for the admin console backend
///
/// # Environment variables
///
/// Every option can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATA_DIR | /var/lib/console | Working directory for database and logs |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | MEDIA_UPLOAD_URL | (none) | Media host upload endpoint |
/// | MEDIA_UPLOAD_PRESET | shop_uploads | Unsigned upload preset name |
/// | MEDIA_UPLOAD_FOLDER | shop_products | Remote folder for product images |
/// | PAGE_SIZE | 8 | Rows per table page |
///
/// # Example
///
/// ```ignore
/// DATA_DIR=/data/console HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the embedded database and log files
    pub data_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Media host upload endpoint; empty disables image uploads
    pub media_upload_url: String,
    /// Unsigned upload preset sent with each upload
    pub media_upload_preset: String,
    /// Remote folder product images land in
    pub media_upload_folder: String,
    /// Rows per page in the sold-item and sold-ticket tables
    pub page_size: usize,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "/var/lib/console".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            media_upload_url: std::env::var("MEDIA_UPLOAD_URL").unwrap_or_default(),
            media_upload_preset: std::env::var("MEDIA_UPLOAD_PRESET")
                .unwrap_or_else(|_| "shop_uploads".into()),
            media_upload_folder: std::env::var("MEDIA_UPLOAD_FOLDER")
                .unwrap_or_else(|_| "shop_products".into()),
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8),
        }
    }

    /// Override the paths and port, keeping the rest from the environment.
    ///
    /// Mostly for tests.
    pub fn with_overrides(data_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Database file path under the working directory
    pub fn database_path(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.data_dir).join("console.db")
    }

    /// Log directory under the working directory
    pub fn log_dir(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.data_dir).join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

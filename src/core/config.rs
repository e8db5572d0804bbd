use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
    pub swagger: SwaggerConfig,
    pub admin: AdminConfig,
    pub minio: MinIOConfig,
    pub locations: LocationDataConfig,
    pub transliteration: TransliterationConfig,
    pub postal: PostalConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Which document store implementation backs the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Required only for the postgres backend
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Basic auth credentials guarding the admin (deleted records) routes
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// MinIO/S3 storage configuration for program images
#[derive(Debug, Clone)]
pub struct MinIOConfig {
    /// MinIO/S3 endpoint URL
    pub endpoint: String,
    /// Public endpoint URL for publicly accessible files (defaults to endpoint)
    pub public_endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    /// AWS region (for S3 compatibility)
    pub region: String,
    /// Prefix for public files (e.g., "public")
    pub public_prefix: String,
    /// Upper bound for a single upload before it is reported as failed
    pub upload_timeout: Duration,
}

/// Paths of the static location hierarchy files
#[derive(Debug, Clone)]
pub struct LocationDataConfig {
    pub address_data_path: String,
    pub marathi_mapping_path: String,
}

#[derive(Debug, Clone)]
pub struct TransliterationConfig {
    pub base_url: String,
    /// Target script code sent as the `itc` parameter
    pub input_tool: String,
}

#[derive(Debug, Clone)]
pub struct PostalConfig {
    pub base_url: String,
}

/// Labels printed in export banners
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub trust_name: String,
    pub register_title: String,
    pub footer: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            store: StoreConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            admin: AdminConfig::from_env()?,
            minio: MinIOConfig::from_env()?,
            locations: LocationDataConfig::from_env()?,
            transliteration: TransliterationConfig::from_env()?,
            postal: PostalConfig::from_env()?,
            export: ExportConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, String> {
        let backend = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".to_string())
            .to_lowercase()
            .as_str()
        {
            "postgres" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            other => {
                return Err(format!(
                    "STORE_BACKEND must be 'postgres' or 'memory', got '{}'",
                    other
                ))
            }
        };

        let database = match backend {
            StoreBackend::Postgres => Some(DatabaseConfig::from_env()?),
            StoreBackend::Memory => None,
        };

        Ok(Self { backend, database })
    }
}

impl DatabaseConfig {
    // Conservative defaults for a low-traffic administrative tool
    const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Atmapravartak Trust API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Member, collector and program management".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        join_credentials(&self.username, &self.password)
    }
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, String> {
        let username = env::var("ADMIN_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty());
        Ok(Self { username, password })
    }

    pub fn credentials(&self) -> Option<String> {
        join_credentials(&self.username, &self.password)
    }
}

fn join_credentials(username: &Option<String>, password: &Option<String>) -> Option<String> {
    match (username, password) {
        (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
        _ => None,
    }
}

impl MinIOConfig {
    const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 300; // 5 minutes

    pub fn from_env() -> Result<Self, String> {
        let endpoint =
            env::var("MINIO_ENDPOINT").unwrap_or_else(|_| "http://localhost:9000".to_string());

        // Public endpoint defaults to the main endpoint if not specified
        let public_endpoint =
            env::var("MINIO_PUBLIC_ENDPOINT").unwrap_or_else(|_| endpoint.clone());

        let access_key = env::var("MINIO_ACCESS_KEY").unwrap_or_else(|_| "minioadmin".to_string());

        let secret_key = env::var("MINIO_SECRET_KEY").unwrap_or_else(|_| "minioadmin".to_string());

        let bucket = env::var("MINIO_BUCKET").unwrap_or_else(|_| "trust-uploads".to_string());

        let region = env::var("MINIO_REGION").unwrap_or_else(|_| "us-east-1".to_string());

        let public_prefix =
            env::var("MINIO_PUBLIC_PREFIX").unwrap_or_else(|_| "public".to_string());

        let upload_timeout_secs = env::var("UPLOAD_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_UPLOAD_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "UPLOAD_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            endpoint,
            public_endpoint,
            access_key,
            secret_key,
            bucket,
            region,
            public_prefix,
            upload_timeout: Duration::from_secs(upload_timeout_secs),
        })
    }
}

impl LocationDataConfig {
    pub fn from_env() -> Result<Self, String> {
        let address_data_path = env::var("ADDRESS_DATA_PATH")
            .unwrap_or_else(|_| "data/address_data.json".to_string());
        let marathi_mapping_path = env::var("MARATHI_LOCATIONS_PATH")
            .unwrap_or_else(|_| "data/marathi_locations.json".to_string());

        Ok(Self {
            address_data_path,
            marathi_mapping_path,
        })
    }
}

impl TransliterationConfig {
    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("TRANSLITERATION_BASE_URL")
            .unwrap_or_else(|_| "https://inputtools.google.com".to_string());
        let input_tool =
            env::var("TRANSLITERATION_INPUT_TOOL").unwrap_or_else(|_| "mr-t-i0-und".to_string());

        Ok(Self {
            base_url,
            input_tool,
        })
    }
}

impl PostalConfig {
    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("POSTAL_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.postalpincode.in".to_string());
        Ok(Self { base_url })
    }
}

impl ExportConfig {
    pub fn from_env() -> Result<Self, String> {
        let trust_name =
            env::var("EXPORT_TRUST_NAME").unwrap_or_else(|_| "आत्मप्रवर्तक संस्था भुगांव".to_string());
        let register_title = env::var("EXPORT_REGISTER_TITLE")
            .unwrap_or_else(|_| "प्राथमिक सदस्य नोंद ( उपदेशी यादी ) रजिस्टर".to_string());
        let footer = env::var("EXPORT_FOOTER").unwrap_or_else(|_| {
            "This is a computer generated report from Shri Sant Videhi Motiram Baba Atmapravartak Mandal Portal."
                .to_string()
        });

        Ok(Self {
            trust_name,
            register_title,
            footer,
        })
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            trust_name: "आत्मप्रवर्तक संस्था भुगांव".to_string(),
            register_title: "प्राथमिक सदस्य नोंद ( उपदेशी यादी ) रजिस्टर".to_string(),
            footer: "This is a computer generated report from Shri Sant Videhi Motiram Baba Atmapravartak Mandal Portal.".to_string(),
        }
    }
}

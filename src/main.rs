mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::{Config, StoreBackend, StoreConfig};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::admin::{routes as admin_routes, AdminService};
use crate::features::collectors::{routes as collectors_routes, CollectorService};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::exports::{routes as exports_routes, ExportService};
use crate::features::locations::{
    routes as locations_routes, LocationHierarchy, LocationService, MarathiResolver,
};
use crate::features::lookups::{routes as lookups_routes, LookupService};
use crate::features::members::{routes as members_routes, MemberService};
use crate::features::programs::{routes as programs_routes, ImageUploadService, ProgramService};
use crate::modules::document_store::{DocumentStore, InMemoryDocumentStore, PgDocumentStore};
use crate::modules::postal::PostalClient;
use crate::modules::storage::MinIOClient;
use crate::modules::transliteration::{GoogleInputTransliterator, Transliterator};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

/// Open the configured document store, migrating Postgres first
async fn open_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    match (config.backend, &config.database) {
        (StoreBackend::Postgres, Some(database_config)) => {
            let pool = database::create_pool(database_config).await?;
            tracing::info!("Database connection pool created");

            tracing::info!("Running database migrations...");
            database::run_migrations(&pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
            tracing::info!("Database migrations completed successfully");

            Ok(Arc::new(PgDocumentStore::new(pool)))
        }
        (StoreBackend::Postgres, None) => {
            Err(anyhow::anyhow!("Postgres store selected without database settings"))
        }
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using in-memory document store; data is lost on restart");
            Ok(Arc::new(InMemoryDocumentStore::new()))
        }
    }
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    let store = open_store(&config.store).await?;

    // Location data is required; a broken file stops startup
    let hierarchy = Arc::new(
        LocationHierarchy::load(&config.locations)
            .map_err(|e| anyhow::anyhow!("Failed to load location data: {}", e))?,
    );
    tracing::info!(
        "Location data loaded: {} districts",
        hierarchy.districts().len()
    );

    // External collaborators
    let transliterator: Arc<dyn Transliterator> = Arc::new(
        GoogleInputTransliterator::new(&config.transliteration)
            .map_err(|e| anyhow::anyhow!("Failed to create transliteration client: {}", e))?,
    );
    let postal_client = Arc::new(
        PostalClient::new(&config.postal)
            .map_err(|e| anyhow::anyhow!("Failed to create postal client: {}", e))?,
    );
    let minio_client = Arc::new(
        MinIOClient::new(&config.minio)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to initialize MinIO client: {}", e))?,
    );
    tracing::info!("MinIO client initialized (bucket: {})", config.minio.bucket);

    // Initialize services
    let resolver = Arc::new(MarathiResolver::new(
        Arc::clone(&hierarchy),
        Arc::clone(&transliterator),
    ));
    let image_service = Arc::new(ImageUploadService::new(
        minio_client,
        config.minio.upload_timeout,
    ));
    let member_service = Arc::new(MemberService::new(
        Arc::clone(&store),
        Arc::clone(&resolver),
    ));
    let collector_service = Arc::new(CollectorService::new(
        Arc::clone(&store),
        Arc::clone(&resolver),
    ));
    let program_service = Arc::new(ProgramService::new(Arc::clone(&store), image_service));
    let location_service = Arc::new(LocationService::new(Arc::clone(&hierarchy)));
    let lookup_service = Arc::new(LookupService::new(transliterator, postal_client));
    let export_service = Arc::new(ExportService::new(
        Arc::clone(&member_service),
        Arc::clone(&collector_service),
        Arc::clone(&hierarchy),
        config.export.clone(),
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        Arc::clone(&member_service),
        Arc::clone(&program_service),
        Arc::clone(&collector_service),
    ));
    let admin_service = Arc::new(AdminService::new(
        Arc::clone(&member_service),
        Arc::clone(&program_service),
        Arc::clone(&collector_service),
    ));
    tracing::info!("Services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(
                Arc::new(credentials),
                "Swagger UI",
            )))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Deleted items are only served when admin credentials are configured
    let admin = if let Some(credentials) = config.admin.credentials() {
        Router::new().nest(
            "/api/admin",
            admin_routes::routes(admin_service, Arc::new(credentials)),
        )
    } else {
        tracing::warn!("Admin routes disabled (ADMIN_USERNAME/ADMIN_PASSWORD not set)");
        Router::new()
    };

    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let api_routes = Router::new()
        .merge(members_routes::routes(member_service))
        .merge(collectors_routes::routes(collector_service))
        .merge(programs_routes::routes(program_service))
        .merge(locations_routes::routes(location_service))
        .merge(lookups_routes::routes(lookup_service))
        .merge(exports_routes::routes(export_service))
        .merge(dashboard_routes::routes(dashboard_service));

    let app = Router::new()
        .merge(swagger)
        .merge(api_routes)
        .merge(admin)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id()),
        );

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

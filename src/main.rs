use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use etl_tracker::application::ports::{JobRepository, WorkerClient};
use etl_tracker::application::services::JobService;
use etl_tracker::infrastructure::observability::{TracingConfig, init_tracing};
use etl_tracker::infrastructure::persistence::InMemoryJobRepository;
use etl_tracker::infrastructure::worker::HttpWorkerClient;
use etl_tracker::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let tracing_config = TracingConfig::new(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.enable_json,
    );
    init_tracing(&tracing_config, settings.server.port);

    let job_repository: Arc<dyn JobRepository> = Arc::new(InMemoryJobRepository::new());
    let worker_client: Arc<dyn WorkerClient> = Arc::new(
        HttpWorkerClient::new(
            &settings.worker.base_url,
            settings.worker.submit_timeout(),
            settings.worker.status_timeout(),
        )
        .context("Failed to build worker client")?,
    );

    tracing::info!(
        worker_base_url = %settings.worker.base_url,
        status_timeout_ms = settings.worker.status_timeout_ms,
        "Processing service client configured"
    );

    let job_service = Arc::new(JobService::new(
        job_repository,
        worker_client,
        settings.worker.status_timeout(),
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let router = create_router(AppState { job_service });

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

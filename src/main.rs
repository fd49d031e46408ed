use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use folio::application::ports::{FileLoader, FileRepository};
use folio::application::services::{
    ContentExtractor, MetadataScanner, RecordAccessor, SummarizationService,
};
use folio::infrastructure::llm::OpenAiClient;
use folio::infrastructure::observability::{TracingConfig, init_tracing};
use folio::infrastructure::persistence::{PgFileRepository, create_pool, run_migrations};
use folio::infrastructure::text_processing::CompositeFileLoader;
use folio::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load().context("Failed to load settings")?;
    init_tracing(&TracingConfig::from_settings(&settings));

    tracing::info!(environment = %settings.environment, "Starting folio");

    let pool = create_pool(&settings.database.url, settings.database.max_connections)
        .await
        .context("Failed to connect to database")?;
    if settings.database.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let repository: Arc<dyn FileRepository> = Arc::new(PgFileRepository::new(pool));
    let file_loader: Arc<dyn FileLoader> = Arc::new(CompositeFileLoader::with_default_adapters());
    let extractor = Arc::new(ContentExtractor::new(file_loader));

    if settings.llm.api_key.is_empty() {
        tracing::warn!("No LLM API key configured, summary requests will fail");
    }
    let llm_client = Arc::new(
        OpenAiClient::from_settings(&settings.llm).context("Failed to build LLM client")?,
    );

    let summarizer = Arc::new(SummarizationService::new(
        Arc::clone(&repository),
        Arc::clone(&extractor),
        llm_client,
    ));
    let record_accessor = Arc::new(RecordAccessor::new(
        Arc::clone(&repository),
        extractor,
        summarizer,
    ));
    let scanner = Arc::new(MetadataScanner::new(repository));

    let state = AppState {
        scanner,
        record_accessor,
        upload_folder: settings.scan.upload_folder.clone(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        "Listening on {} (upload folder: {})",
        addr,
        settings.scan.upload_folder.display()
    );

    axum::serve(listener, router).await?;

    Ok(())
}

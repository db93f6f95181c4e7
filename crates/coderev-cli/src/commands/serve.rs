use std::path::Path;

use anyhow::{Context, Result};
use coderev_application::{AppServices, ConfigOverrides};
use coderev_web::WebState;

pub async fn run(config_dir: Option<&Path>, bind: Option<String>, model: Option<String>) -> Result<()> {
    let services = AppServices::load(config_dir, ConfigOverrides { model, bind }).await?;

    if !services.secret_service.secret_file_exists().await {
        tracing::info!(
            "[Serve] No secret.json found; GEMINI_API_KEY must be set for reviews to work"
        );
    }

    let state = WebState::from_services(&services).context("Failed to load page template")?;
    coderev_web::serve(state, &services.config.server.bind).await
}

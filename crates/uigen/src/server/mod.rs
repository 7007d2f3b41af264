mod cli;
mod routes;

pub use cli::App;
pub use routes::{router, AppState};

use crate::agent::OpenAiAgent;
use crate::config::WorkflowSettings;
use crate::invoker::Invoker;
use crate::prelude::{eprintln, *};
use std::sync::Arc;

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let settings = WorkflowSettings::from(&app.workflow);
    let agent = Arc::new(OpenAiAgent::new(&app.llm)?);
    let invoker = Arc::new(Invoker::new(agent, settings.pipeline));

    if global.verbose {
        eprintln!("Model: {}", app.llm.model);
        eprintln!("Pipeline: {:?}", settings.pipeline);
        eprintln!("File selection: {:?}", settings.selection);
        eprintln!("Pacing: {:?}", settings.pace);
    }

    let state = Arc::new(AppState { invoker, settings });
    let addr = format!("{}:{}", app.host, app.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{}", addr);
    if global.verbose {
        eprintln!("Generate endpoint: http://{}/generate-code", addr);
        eprintln!("Health endpoint: http://{}/health", addr);
    }

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

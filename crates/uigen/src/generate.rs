use crate::agent::OpenAiAgent;
use crate::config::{LlmConfig, WorkflowOptions, WorkflowSettings};
use crate::invoker::Invoker;
use crate::prelude::{eprintln, *};
use crate::workflow::generate_events;
use futures::StreamExt;
use std::io::Write;
use std::sync::Arc;
use uigen_core::codegen::GenerationRequest;

#[derive(Debug, clap::Parser)]
#[command(name = "generate")]
#[command(about = "Run one generation locally and print the event stream")]
pub struct App {
    /// Natural-language description of the UI to build
    pub description: String,

    #[clap(flatten)]
    pub llm: LlmConfig,

    #[clap(flatten)]
    pub workflow: WorkflowOptions,
}

/// Module entry point
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let request = GenerationRequest::new(app.description).map_err(Error::from)?;
    let settings = WorkflowSettings::from(&app.workflow);

    if global.verbose {
        eprintln!("Model: {}", app.llm.model);
        eprintln!("Base URL: {}", app.llm.base_url);
        eprintln!("Pipeline: {:?}", settings.pipeline);
    }

    let agent = Arc::new(OpenAiAgent::new(&app.llm)?);
    let invoker = Arc::new(Invoker::new(agent, settings.pipeline));

    let events = generate_events(invoker, request, &settings);
    futures::pin_mut!(events);

    let mut stdout = std::io::stdout();
    while let Some(event) = events.next().await {
        let frame = event.to_wire().context("Failed to serialize event")?;
        stdout.write_all(frame.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

use crate::config::{LlmConfig, WorkflowOptions};

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the code generation API over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "UIGEN_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "UIGEN_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[clap(flatten)]
    pub llm: LlmConfig,

    #[clap(flatten)]
    pub workflow: WorkflowOptions,
}

use std::time::Duration;

use uigen_core::codegen::{FileSelection, Pipeline};

/// Connection and sampling settings for the LLM provider.
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone, clap::Args)]
pub struct LlmConfig {
    /// Model identifier sent to the provider
    #[clap(long, env = "MODEL_NAME", default_value = "gpt-4o")]
    pub model: String,

    /// Provider API key. Not checked locally; a missing key fails on the first call.
    #[clap(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of an OpenAI-compatible chat completions API
    #[clap(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub base_url: String,

    /// Sampling temperature
    #[clap(long, env = "UIGEN_TEMPERATURE", default_value = "0.1")]
    pub temperature: f64,

    /// Sampling seed forwarded to the provider
    #[clap(long, env = "UIGEN_SEED", default_value = "42")]
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineArg {
    /// One developer agent (default)
    Developer,
    /// Developer agent followed by a designer agent
    Designer,
}

impl From<PipelineArg> for Pipeline {
    fn from(p: PipelineArg) -> Self {
        match p {
            PipelineArg::Developer => Pipeline::Developer,
            PipelineArg::Designer => Pipeline::Designer,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct WorkflowOptions {
    /// Agent chain used to produce the files
    #[clap(long, value_enum, env = "UIGEN_PIPELINE", default_value = "developer")]
    pub pipeline: PipelineArg,

    /// Only stream the required base files (package.json, tsconfig.json, ...)
    #[clap(long)]
    pub required_files: bool,

    /// Override the required file list; implies --required-files (repeatable)
    #[clap(long = "required-file", value_name = "PATH")]
    pub required_file: Vec<String>,

    /// Delay between file events, in milliseconds
    #[clap(long, env = "UIGEN_PACE_MS", default_value = "100")]
    pub pace_ms: u64,
}

/// Per-request behaviour of the streaming workflow.
#[derive(Debug, Clone, Default)]
pub struct WorkflowSettings {
    pub pipeline: Pipeline,
    pub selection: FileSelection,
    pub pace: Duration,
}

impl From<&WorkflowOptions> for WorkflowSettings {
    fn from(options: &WorkflowOptions) -> Self {
        let selection = if !options.required_file.is_empty() {
            FileSelection::Required(options.required_file.clone())
        } else if options.required_files {
            FileSelection::required_defaults()
        } else {
            FileSelection::All
        };

        Self {
            pipeline: options.pipeline.into(),
            selection,
            pace: Duration::from_millis(options.pace_ms),
        }
    }
}

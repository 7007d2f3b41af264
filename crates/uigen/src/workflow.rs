use crate::config::WorkflowSettings;
use crate::invoker::Invoker;
use chrono::Utc;
use futures::stream::{self, Stream};
use std::sync::Arc;
use std::time::Duration;
use uigen_core::codegen::{extract_files, select_files, FileSelection, GenerationRequest, SseEvent};

/// Where a request is in its lifecycle.
///
/// `Invoking` covers both the agent call and extraction; failures jump
/// straight to `Done` after emitting their status event.
enum Stage {
    Start,
    Invoking,
    Streaming {
        pending: std::vec::IntoIter<(String, String)>,
        sent: usize,
    },
    Done,
}

struct Workflow {
    invoker: Arc<Invoker>,
    request: GenerationRequest,
    selection: FileSelection,
    pace: Duration,
}

/// Stream the protocol events for one generation request.
///
/// The stream is lazy: the agent is only called once the start event has
/// been consumed, and nothing further is produced after it is dropped.
pub fn generate_events(
    invoker: Arc<Invoker>,
    request: GenerationRequest,
    settings: &WorkflowSettings,
) -> impl Stream<Item = SseEvent> + Send + 'static {
    let workflow = Workflow {
        invoker,
        request,
        selection: settings.selection.clone(),
        pace: settings.pace,
    };

    stream::unfold((workflow, Stage::Start), |(workflow, stage)| async move {
        let (event, next) = workflow.step(stage).await?;
        Some((event, (workflow, next)))
    })
}

impl Workflow {
    async fn step(&self, stage: Stage) -> Option<(SseEvent, Stage)> {
        match stage {
            Stage::Start => Some((SseEvent::started(), Stage::Invoking)),
            Stage::Invoking => Some(self.invoke().await),
            Stage::Streaming { mut pending, sent } => match pending.next() {
                Some((path, content)) => {
                    if sent > 0 && !self.pace.is_zero() {
                        tokio::time::sleep(self.pace).await;
                    }
                    Some((
                        SseEvent::file(path, content),
                        Stage::Streaming {
                            pending,
                            sent: sent + 1,
                        },
                    ))
                }
                None => {
                    log::info!("Streamed {} files", sent);
                    Some((SseEvent::complete(), Stage::Done))
                }
            },
            Stage::Done => None,
        }
    }

    async fn invoke(&self) -> (SseEvent, Stage) {
        let response = match self.invoker.invoke(&self.request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Code generation failed: {e:#}");
                return (SseEvent::failure(e), Stage::Done);
            }
        };

        let Some(content) = response.content else {
            return (SseEvent::no_response(), Stage::Done);
        };

        match extract_files(&content) {
            Ok(files) => {
                let pending = select_files(files, &self.selection).into_iter();
                (
                    SseEvent::Ping(Utc::now()),
                    Stage::Streaming { pending, sent: 0 },
                )
            }
            Err(e) => {
                log::warn!("{e} ({} chars of agent output)", content.len());
                (SseEvent::parse_failure(), Stage::Done)
            }
        }
    }
}

use crate::config::WorkflowSettings;
use crate::invoker::Invoker;
use crate::prelude::*;
use crate::workflow::generate_events;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::sse::{Event, Sse},
    routing::{get, post},
    Json, Router,
};
use futures::stream::{Stream, StreamExt};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use uigen_core::codegen::{GenerationRequest, SseEvent};

/// Immutable state shared by every request.
pub struct AppState {
    pub invoker: Arc<Invoker>,
    pub settings: WorkflowSettings,
}

#[derive(Debug, serde::Deserialize)]
struct GenerateCodeBody {
    #[serde(default)]
    description: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/generate-code", post(generate_code))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn generate_code(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateCodeBody>, JsonRejection>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, Error> {
    let Json(body) = body.map_err(|e| Error::InvalidBody(e.body_text()))?;
    let request = GenerationRequest::new(body.description.unwrap_or_default())?;

    log::info!(
        "Generating code for a {} char description",
        request.description().len()
    );

    let events = generate_events(state.invoker.clone(), request, &state.settings).map(to_sse);

    Ok(Sse::new(events))
}

fn to_sse(event: SseEvent) -> Result<Event, axum::Error> {
    match event.payload() {
        Some(payload) => Event::default().json_data(payload),
        None => Ok(Event::default().comment(event.comment().unwrap_or_default())),
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoker::tests::{Reply, ScriptedAgent};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use std::time::Duration;
    use tower::ServiceExt;
    use uigen_core::codegen::{
        drain_blocks, parse_frame, FileSelection, FilePayload, Frame, Pipeline,
    };

    fn app(replies: Vec<Reply>, selection: FileSelection) -> Router {
        let invoker = Arc::new(Invoker::new(
            ScriptedAgent::new(replies),
            Pipeline::Developer,
        ));
        let settings = WorkflowSettings {
            pipeline: Pipeline::Developer,
            selection,
            pace: Duration::ZERO,
        };

        router(Arc::new(AppState { invoker, settings }))
    }

    fn generate_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generate-code")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn frames(body: &str) -> Vec<Frame> {
        let mut buffer = body.to_string();
        drain_blocks(&mut buffer)
            .iter()
            .filter_map(|block| parse_frame(block))
            .collect()
    }

    fn data(code: &str, file: &str) -> Frame {
        Frame::Data(FilePayload {
            code: code.to_string(),
            file: file.to_string(),
        })
    }

    // ============================================================================
    // POST /generate-code
    // ============================================================================

    #[tokio::test]
    async fn test_generate_streams_files_as_sse() {
        let reply = "```json\n{\"package.json\": \"{}\", \"src/App.tsx\": \"export default App;\"}\n```";
        let response = app(vec![Reply::Text(reply)], FileSelection::All)
            .oneshot(generate_request(r#"{"description": "a login form"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/event-stream"
        );

        let body = body_text(response).await;
        assert!(body.starts_with(
            "data: {\"code\":\"Starting code generation...\",\"file\":\"status.log\"}\n\n"
        ));

        let frames = frames(&body);
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0], data("Starting code generation...", "status.log"));
        assert!(matches!(&frames[1], Frame::Comment(text) if text.starts_with("ping - ")));
        assert_eq!(frames[2], data("{}", "package.json"));
        assert_eq!(frames[3], data("export default App;", "src/App.tsx"));
        assert_eq!(frames[4], data("Code generation complete!", "status.log"));
    }

    #[tokio::test]
    async fn test_generate_required_files_only() {
        let reply = "{\"package.json\": \"{}\", \"extra.txt\": \"x\", \"src/App.tsx\": \"export default App;\"}";
        let selection = FileSelection::Required(vec![
            "package.json".to_string(),
            "src/App.tsx".to_string(),
        ]);
        let response = app(vec![Reply::Text(reply)], selection)
            .oneshot(generate_request(r#"{"description": "a login form"}"#))
            .await
            .unwrap();

        let body = body_text(response).await;
        assert!(!body.contains("extra.txt"));
        assert_eq!(frames(&body).len(), 5);
    }

    #[tokio::test]
    async fn test_generate_agent_failure_is_reported_in_stream() {
        let response = app(vec![Reply::Fail("boom")], FileSelection::All)
            .oneshot(generate_request(r#"{"description": "a login form"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            frames(&body_text(response).await),
            vec![
                data("Starting code generation...", "status.log"),
                data("Error: boom", "status.log"),
            ]
        );
    }

    #[tokio::test]
    async fn test_generate_parse_failure_is_reported_in_stream() {
        let response = app(vec![Reply::Text("not json")], FileSelection::All)
            .oneshot(generate_request(r#"{"description": "a login form"}"#))
            .await
            .unwrap();

        assert_eq!(
            frames(&body_text(response).await),
            vec![
                data("Starting code generation...", "status.log"),
                data("Error: Failed to parse generated code", "status.log"),
            ]
        );
    }

    #[tokio::test]
    async fn test_generate_empty_description_is_bad_request() {
        let response = app(vec![], FileSelection::All)
            .oneshot(generate_request(r#"{"description": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["detail"], "Description cannot be empty");
    }

    #[tokio::test]
    async fn test_generate_missing_description_is_bad_request() {
        let response = app(vec![], FileSelection::All)
            .oneshot(generate_request("{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_malformed_body_is_bad_request() {
        let response = app(vec![], FileSelection::All)
            .oneshot(generate_request("{\"description\": "))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("Invalid request body"));
    }

    // ============================================================================
    // GET /health
    // ============================================================================

    #[tokio::test]
    async fn test_health() {
        let response = app(vec![], FileSelection::All)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert_eq!(
            body_text(response).await,
            serde_json::json!({ "status": "healthy" }).to_string()
        );
    }
}

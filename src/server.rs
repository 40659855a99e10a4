//! HTTP surface.
//!
//! Three routes: a health probe, the static chat page, and the chat
//! endpoint itself. Each request runs one independent pipeline; there is
//! no shared mutable state beyond the provider handles.

use crate::error::Result;
use crate::router::Router;
use crate::state::{ConversationState, Intent};
use crate::RouterError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json,
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

const UI_FILE: &str = "templates/index.html";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<Router>,
}

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Response body for `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Always `"explicit"`; kept for wire compatibility.
    pub method: &'static str,
    pub intent: Intent,
    pub answer: String,
    pub city: Option<String>,
    pub topic: Option<String>,
}

impl ChatResponse {
    fn from_state(state: ConversationState) -> Self {
        Self {
            method: "explicit",
            intent: state.intent,
            answer: state
                .final_answer
                .unwrap_or_else(|| "No answer generated.".to_string()),
            city: state.city,
            topic: state.topic,
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<RouterError> for ApiError {
    fn from(err: RouterError) -> Self {
        match err {
            RouterError::EmptyInput => ApiError::BadRequest(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", get(serve_ui))
        .route("/health", get(health))
        .route("/chat", post(chat))
        .with_state(state)
}

/// Bind and serve until the process exits.
pub async fn serve(router: Router, host: &str, port: u16) -> Result<()> {
    let ip: IpAddr = host
        .parse()
        .map_err(|_| RouterError::Config(format!("Invalid host address: {host}")))?;
    let addr = SocketAddr::new(ip, port);

    let state = AppState {
        router: Arc::new(router),
    };
    let app = create_router(state);

    tracing::info!(%addr, "chat-router listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| RouterError::Other(format!("Failed to bind {addr}: {e}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Other(e.to_string()))?;
    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn serve_ui() -> std::result::Result<Html<String>, ApiError> {
    match std::fs::read_to_string(UI_FILE) {
        Ok(page) => Ok(Html(page)),
        Err(_) => Err(ApiError::Internal(format!("UI file not found: {UI_FILE}"))),
    }
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> std::result::Result<Json<ChatResponse>, ApiError> {
    let result = state.router.run(&request.question).await?;
    Ok(Json(ChatResponse::from_state(result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctx::RouterCtx;
    use crate::textgen::MockTextGen;
    use crate::weather::MockWeatherProvider;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app(textgen: MockTextGen) -> axum::Router {
        let ctx = RouterCtx::builder()
            .textgen(Arc::new(textgen))
            .weather(Arc::new(MockWeatherProvider::unavailable("unused")))
            .build();
        create_router(AppState {
            router: Arc::new(Router::new(ctx)),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app(MockTextGen::fixed("unused"));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_ui_page_served() {
        // cargo test runs from the crate root, where templates/index.html exists
        let app = test_app(MockTextGen::fixed("unused"));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("<html"));
    }

    #[tokio::test]
    async fn test_chat_empty_question_is_400() {
        let app = test_app(MockTextGen::fixed("unused"));
        let response = app
            .oneshot(
                Request::post("/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"question": "   "}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Question cannot be empty.");
    }

    #[tokio::test]
    async fn test_chat_joke_happy_path() {
        let app = test_app(MockTextGen::new(vec![
            "INTENT: joke\nCITY: \nTOPIC: cats".into(),
            "Why did the cat nap? To recharge its purr-battery.".into(),
        ]));
        let response = app
            .oneshot(
                Request::post("/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({"question": "tell me a joke about cats"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["method"], "explicit");
        assert_eq!(body["intent"], "joke");
        assert_eq!(body["topic"], "cats");
        assert_eq!(body["city"], Value::Null);
        assert_eq!(
            body["answer"],
            "Why did the cat nap? To recharge its purr-battery."
        );
    }

    #[tokio::test]
    async fn test_chat_provider_error_is_500() {
        // live textgen client pointed at a dead port: transport error
        let ctx = RouterCtx::builder()
            .textgen(Arc::new(
                crate::textgen::OpenAiTextGen::new("sk-x", "gpt-4o-mini")
                    .with_base_url("http://127.0.0.1:1"),
            ))
            .weather(Arc::new(MockWeatherProvider::unavailable("unused")))
            .build();
        let app = create_router(AppState {
            router: Arc::new(Router::new(ctx)),
        });

        let response = app
            .oneshot(
                Request::post("/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"question": "hi"}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! HTTP transport implementation.
//!
//! JSON-RPC over POST at the configured path (default `/mcp`).
//!
//! In stateful mode an `initialize` request composes a server for the new
//! session and returns its id in the `mcp-session-id` header; later requests
//! must carry that header, and `DELETE` on the same path ends the session.
//! In stateless mode every request is served by a freshly composed server.
//!
//! Either way, a `config` query parameter holding base64-encoded JSON
//! overrides is applied to the server being composed.
//!
//! Sessions left idle longer than [`HttpConfig::session_idle_secs`] are
//! evicted by a background sweep, and refused if used after expiry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use rmcp::ServerHandler;
use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::time::{Instant, MissedTickBehavior};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::config::{ConfigError, ConfigOverrides, LoggingLevel};
use crate::core::{McpServer, ServerFactory, ServerOptions};

/// Header carrying the session id in stateful mode.
pub const SESSION_HEADER: &str = "mcp-session-id";

/// JSON-RPC error code for an unknown or expired session.
const SESSION_NOT_FOUND: i32 = -32001;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32600, msg)
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    /// Internal error.
    pub fn internal_error(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32603, msg)
    }
}

/// Query string accepted on the RPC endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RpcQuery {
    /// Base64-encoded JSON [`ConfigOverrides`].
    pub config: Option<String>,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    factory: ServerFactory,
    stateless: bool,
    sessions: SessionStore,
}

/// A session's composed server and when it was last used.
struct Session {
    server: McpServer,
    last_seen: Instant,
}

/// Composed server per live session, keyed by session id.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    pub async fn insert(&self, id: String, server: McpServer) {
        let session = Session {
            server,
            last_seen: Instant::now(),
        };
        self.sessions.write().await.insert(id, session);
    }

    /// The session's server, refreshing its idle timer.
    ///
    /// A session found past its idle timeout is removed instead.
    pub async fn get(&self, id: &str) -> Option<McpServer> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let session = sessions.get_mut(id)?;
        if self.is_idle(session, now) {
            sessions.remove(id);
            debug!("Session {} expired", id);
            return None;
        }
        session.last_seen = now;
        Some(session.server.clone())
    }

    pub async fn remove(&self, id: &str) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop every session idle as of `now`; returns how many were dropped.
    pub async fn evict_idle(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !self.is_idle(session, now));
        before - sessions.len()
    }

    fn is_idle(&self, session: &Session, now: Instant) -> bool {
        now.saturating_duration_since(session.last_seen) >= self.idle_timeout
    }
}

/// Periodically evict idle sessions for as long as the runtime lives.
fn spawn_session_sweeper(sessions: SessionStore) {
    let period = (sessions.idle_timeout / 4).max(Duration::from_secs(1));

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let evicted = sessions.evict_idle(Instant::now()).await;
            if evicted > 0 {
                info!("Evicted {} idle session(s)", evicted);
            }
        }
    });
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router serving `factory`.
    pub fn router(&self, factory: ServerFactory) -> Router {
        self.app(self.state(factory))
    }

    fn state(&self, factory: ServerFactory) -> AppState {
        AppState {
            stateless: factory.config().stateless,
            factory,
            sessions: SessionStore::new(self.config.session_idle_timeout()),
        }
    }

    fn app(&self, state: AppState) -> Router {
        let mut app = Router::new()
            .route(
                &self.config.rpc_path,
                get(method_not_allowed).post(handle_rpc).delete(handle_delete),
            )
            .route("/ping", get(ping))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state);

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .expose_headers([HeaderName::from_static(SESSION_HEADER)]);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, factory: ServerFactory) -> TransportResult<()> {
        let addr = self.address();
        let mode = if factory.config().stateless {
            "stateless"
        } else {
            "stateful"
        };
        let state = self.state(factory);
        if !state.stateless {
            spawn_session_sweeper(state.sessions.clone());
        }
        let app = self.app(state);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, {}, CORS {})",
            addr, mode, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.factory.config();
    Json(serde_json::json!({
        "name": config.server.name,
        "version": config.server.version,
        "transport": "HTTP",
        "mode": if state.stateless { "stateless" } else { "stateful" },
        "endpoints": {
            "rpc": "/mcp",
            "ping": "/ping",
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0"
    }))
}

/// Liveness check.
async fn ping() -> &'static str {
    "pong"
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "sessions": state.sessions.len().await,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(JsonRpcResponse::error(None, -32000, "Method not allowed")),
    )
}

/// End a session.
async fn handle_delete(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(session_id) = session_id(&headers) else {
        return rpc_error(
            StatusCode::BAD_REQUEST,
            JsonRpcResponse::invalid_request(None, "Missing mcp-session-id header"),
        );
    };

    if state.sessions.remove(session_id).await {
        info!("Session {} closed", session_id);
        StatusCode::OK.into_response()
    } else {
        rpc_error(
            StatusCode::NOT_FOUND,
            JsonRpcResponse::error(None, SESSION_NOT_FOUND, "Session not found"),
        )
    }
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Query(query): Query<RpcQuery>,
    headers: HeaderMap,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    if request.jsonrpc != "2.0" {
        return rpc_error(
            StatusCode::BAD_REQUEST,
            JsonRpcResponse::invalid_request(request.id, "Invalid Request"),
        );
    }

    let options = match server_options(&query) {
        Ok(options) => options,
        Err(e) => {
            warn!("Rejecting request with invalid config parameter: {}", e);
            return rpc_error(
                StatusCode::BAD_REQUEST,
                JsonRpcResponse::invalid_params(request.id, e.to_string()),
            );
        }
    };

    if state.stateless {
        let server = state.factory.create(options.as_ref());
        return respond(process_request(&server, request).await);
    }

    if request.method == "initialize" {
        let server = state.factory.create(options.as_ref());

        let session_id = Uuid::new_v4().to_string();
        state.sessions.insert(session_id.clone(), server.clone()).await;
        info!("Session {} started", session_id);

        let mut response = respond(process_request(&server, request).await);
        if let Ok(value) = HeaderValue::from_str(&session_id) {
            response.headers_mut().insert(SESSION_HEADER, value);
        }
        return response;
    }

    let Some(session_id) = session_id(&headers) else {
        return rpc_error(
            StatusCode::BAD_REQUEST,
            JsonRpcResponse::invalid_request(request.id, "No valid session ID provided"),
        );
    };

    match state.sessions.get(session_id).await {
        Some(server) => respond(process_request(&server, request).await),
        None => rpc_error(
            StatusCode::NOT_FOUND,
            JsonRpcResponse::error(request.id, SESSION_NOT_FOUND, "Session not found"),
        ),
    }
}

fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

fn server_options(query: &RpcQuery) -> Result<Option<ServerOptions>, ConfigError> {
    let overrides = query
        .config
        .as_deref()
        .map(ConfigOverrides::from_base64_json)
        .transpose()?;
    Ok(overrides.map(ServerOptions::with_overrides))
}

fn rpc_error(status: StatusCode, response: JsonRpcResponse) -> Response {
    (status, Json(response)).into_response()
}

/// Notifications get `202 Accepted` with no body.
fn respond(response: Option<JsonRpcResponse>) -> Response {
    match response {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Process a JSON-RPC request and return the response, if any.
async fn process_request(server: &McpServer, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    let response = match request.method.as_str() {
        "initialize" => handle_initialize(server, request),
        "ping" => JsonRpcResponse::success(request.id, serde_json::json!({})),
        "tools/list" => handle_tools_list(server, request),
        "tools/call" => handle_tools_call(server, request).await,
        "logging/setLevel" => handle_set_level(request),
        method if method.starts_with("notifications/") => {
            debug!("Received notification: {}", method);
            return None;
        }
        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    };
    Some(response)
}

/// Handle initialize request.
fn handle_initialize(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    match serde_json::to_value(server.get_info()) {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::internal_error(request.id, e.to_string()),
    }
}

/// Handle tools/list request.
fn handle_tools_list(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/list request");

    let result = serde_json::json!({
        "tools": server.list_tools()
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/call request.
async fn handle_tools_call(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/call request");

    let Some(params) = request.params else {
        return JsonRpcResponse::invalid_params(request.id, "Missing params");
    };

    let Some(name) = params.get("name").and_then(|v| v.as_str()) else {
        return JsonRpcResponse::invalid_params(request.id, "Missing tool name");
    };

    let arguments: JsonObject = match params.get("arguments") {
        None | Some(serde_json::Value::Null) => JsonObject::new(),
        Some(serde_json::Value::Object(map)) => map.clone(),
        Some(_) => {
            return JsonRpcResponse::invalid_params(request.id, "arguments must be an object");
        }
    };

    match server.call_tool(name, arguments).await {
        Ok(result) => match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => JsonRpcResponse::internal_error(request.id, e.to_string()),
        },
        Err(e) => JsonRpcResponse::error(request.id, e.code.0, e.message),
    }
}

/// Handle logging/setLevel request.
fn handle_set_level(request: JsonRpcRequest) -> JsonRpcResponse {
    let level = request
        .params
        .as_ref()
        .and_then(|p| p.get("level"))
        .cloned()
        .map(serde_json::from_value::<LoggingLevel>);

    match level {
        Some(Ok(level)) => {
            info!("Client requested logging level {}", level);
            JsonRpcResponse::success(request.id, serde_json::json!({}))
        }
        _ => JsonRpcResponse::invalid_params(
            request.id,
            format!("level must be one of: {}", LoggingLevel::expected()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::tools::ToolRegistry;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::{Value, json};

    async fn spawn(config: Config) -> String {
        spawn_with(config, HttpConfig::default()).await
    }

    async fn spawn_with(config: Config, http: HttpConfig) -> String {
        let factory = ServerFactory::new(config, ToolRegistry::build()).unwrap();
        let app = HttpTransport::new(http).router(factory);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn rpc(id: u64, method: &str, params: Value) -> Value {
        json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params})
    }

    fn initialize() -> Value {
        rpc(
            1,
            "initialize",
            json!({
                "protocolVersion": "2025-06-18",
                "capabilities": {},
                "clientInfo": {"name": "test", "version": "0.0.0"}
            }),
        )
    }

    async fn tool_names(response: reqwest::Response) -> Vec<String> {
        let body: Value = response.json().await.unwrap();
        body["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_stateful_session_lifecycle() {
        let base = spawn(Config::default()).await;
        let client = reqwest::Client::new();
        let url = format!("{}/mcp", base);

        let response = client.post(&url).json(&initialize()).send().await.unwrap();
        assert_eq!(response.status(), 200);
        let session = response
            .headers()
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .expect("session header");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["result"]["serverInfo"]["name"], "brave-search-mcp-server");
        assert_eq!(body["result"]["capabilities"]["tools"]["listChanged"], false);

        let response = client
            .post(&url)
            .header(SESSION_HEADER, &session)
            .json(&rpc(2, "tools/list", json!({})))
            .send()
            .await
            .unwrap();
        assert_eq!(tool_names(response).await.len(), 6);

        let response = client
            .delete(&url)
            .header(SESSION_HEADER, &session)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let response = client
            .post(&url)
            .header(SESSION_HEADER, &session)
            .json(&rpc(3, "tools/list", json!({})))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_stateful_requires_session_header() {
        let base = spawn(Config::default()).await;
        let response = reqwest::Client::new()
            .post(format!("{}/mcp", base))
            .json(&rpc(1, "tools/list", json!({})))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn test_config_parameter_applies_overrides() {
        let base = spawn(Config::default()).await;
        let client = reqwest::Client::new();
        let encoded = URL_SAFE_NO_PAD.encode(r#"{"enabledTools":["brave_news_search"]}"#);
        let url = format!("{}/mcp?config={}", base, encoded);

        let response = client.post(&url).json(&initialize()).send().await.unwrap();
        let session = response.headers()[SESSION_HEADER].to_str().unwrap().to_string();

        let response = client
            .post(format!("{}/mcp", base))
            .header(SESSION_HEADER, &session)
            .json(&rpc(2, "tools/list", json!({})))
            .send()
            .await
            .unwrap();
        assert_eq!(tool_names(response).await, vec!["brave_news_search"]);
    }

    #[tokio::test]
    async fn test_invalid_config_parameter() {
        let base = spawn(Config::default()).await;
        let response = reqwest::Client::new()
            .post(format!("{}/mcp?config=%25%25not-base64", base))
            .json(&initialize())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_stateless_mode() {
        let config = Config {
            stateless: true,
            ..Config::default()
        };
        let base = spawn(config).await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/mcp", base))
            .json(&rpc(1, "tools/list", json!({})))
            .send()
            .await
            .unwrap();
        assert!(response.headers().get(SESSION_HEADER).is_none());
        assert_eq!(tool_names(response).await.len(), 6);

        let response = client
            .post(format!("{}/mcp", base))
            .json(&json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 202);
    }

    #[tokio::test]
    async fn test_tool_call_without_key_reports_error_result() {
        let config = Config {
            stateless: true,
            ..Config::default()
        };
        let base = spawn(config).await;

        let response = reqwest::Client::new()
            .post(format!("{}/mcp", base))
            .json(&rpc(
                1,
                "tools/call",
                json!({"name": "brave_web_search", "arguments": {"query": "rust"}}),
            ))
            .send()
            .await
            .unwrap();
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["result"]["isError"], true);
    }

    #[tokio::test]
    async fn test_ping_and_health() {
        let base = spawn(Config::default()).await;
        let client = reqwest::Client::new();

        let pong = client
            .get(format!("{}/ping", base))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(pong, "pong");

        let health: Value = client
            .get(format!("{}/health", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["status"], "healthy");
    }

    #[tokio::test]
    async fn test_expired_session_is_refused() {
        let http = HttpConfig {
            session_idle_secs: 0,
            ..HttpConfig::default()
        };
        let base = spawn_with(Config::default(), http).await;
        let client = reqwest::Client::new();
        let url = format!("{}/mcp", base);

        let response = client.post(&url).json(&initialize()).send().await.unwrap();
        let session = response.headers()[SESSION_HEADER].to_str().unwrap().to_string();

        let response = client
            .post(&url)
            .header(SESSION_HEADER, &session)
            .json(&rpc(2, "tools/list", json!({})))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 404);

        let health: Value = client
            .get(format!("{}/health", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["sessions"], 0);
    }

    #[tokio::test]
    async fn test_session_store_evicts_idle_sessions() {
        let factory = ServerFactory::new(Config::default(), ToolRegistry::build()).unwrap();
        let store = SessionStore::new(Duration::from_secs(60));
        let start = Instant::now();

        for i in 0..200 {
            store.insert(format!("session-{}", i), factory.create(None)).await;
        }
        assert_eq!(store.len().await, 200);

        assert_eq!(store.evict_idle(start + Duration::from_secs(30)).await, 0);
        assert!(store.get("session-7").await.is_some());

        assert_eq!(store.evict_idle(Instant::now() + Duration::from_secs(61)).await, 200);
        assert_eq!(store.len().await, 0);
        assert!(store.get("session-7").await.is_none());
    }

    #[test]
    fn test_set_level_validation() {
        let ok = handle_set_level(JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "logging/setLevel".to_string(),
            params: Some(json!({"level": "warning"})),
        });
        assert!(ok.error.is_none());

        let bad = handle_set_level(JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(2)),
            method: "logging/setLevel".to_string(),
            params: Some(json!({"level": "verbose"})),
        });
        assert_eq!(bad.error.map(|e| e.code), Some(-32602));
    }
}

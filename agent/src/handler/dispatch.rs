use std::time::Instant;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use filemenu_core::config::FeatureToggles;
use filemenu_core::menu::{FileMenuFilter, MenuAction, Selection};
use filemenu_core::services::User;

use super::snapshot::RequestSnapshot;
use crate::protocol::errors;
use crate::protocol::messages::{JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse};
use crate::protocol::methods::{
    Capabilities, CatalogResult, HealthCheckResult, InitializeParams, InitializeResult,
    MenuFilterParams, MenuFilterResult,
};

/// The agent's protocol version.
const AGENT_PROTOCOL_VERSION: &str = "0.1.0";

/// Methods this agent answers, in the order they are advertised.
const METHODS: [&str; 4] = ["initialize", "menu.catalog", "menu.filter", "health.check"];

/// Routes incoming JSON-RPC requests to their handlers.
pub struct Dispatcher {
    features: FeatureToggles,
    initialized: bool,
    start_time: Instant,
    requests_served: u64,
}

/// The result of dispatching a request: either a success or error response.
pub enum DispatchResult {
    Success(JsonRpcResponse),
    Error(JsonRpcErrorResponse),
}

impl DispatchResult {
    /// Serialize the result to a JSON `Value`.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        match self {
            Self::Success(resp) => serde_json::to_value(resp),
            Self::Error(resp) => serde_json::to_value(resp),
        }
    }

    fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self::Error(JsonRpcErrorResponse::new(id, code, message))
    }

    fn success<T: Serialize>(id: Value, result: &T) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Self::Success(JsonRpcResponse::new(id, value)),
            Err(e) => Self::error(
                id,
                errors::INTERNAL_ERROR,
                format!("Failed to serialize result: {e}"),
            ),
        }
    }
}

impl Dispatcher {
    pub fn new(features: FeatureToggles) -> Self {
        Self {
            features,
            initialized: false,
            start_time: Instant::now(),
            requests_served: 0,
        }
    }

    /// Dispatch a parsed JSON-RPC request to the appropriate handler.
    pub async fn dispatch(&mut self, request: JsonRpcRequest) -> DispatchResult {
        let id = request.id.clone();
        let method = request.method.as_str();
        self.requests_served += 1;

        debug!("Dispatching method: {}", method);

        if method == "initialize" {
            return self.handle_initialize(request);
        }

        if !self.initialized {
            return DispatchResult::error(
                id,
                errors::NOT_INITIALIZED,
                "Agent not initialized, call 'initialize' first",
            );
        }

        match method {
            "menu.catalog" => self.handle_menu_catalog(request),
            "menu.filter" => self.handle_menu_filter(request),
            "health.check" => self.handle_health_check(request),
            _ => {
                warn!("Unknown method: {}", method);
                DispatchResult::error(
                    id,
                    errors::METHOD_NOT_FOUND,
                    format!("Method not found: {method}"),
                )
            }
        }
    }

    fn handle_initialize(&mut self, request: JsonRpcRequest) -> DispatchResult {
        let id = request.id.clone();

        let params: InitializeParams = match serde_json::from_value(request.params) {
            Ok(p) => p,
            Err(e) => {
                return DispatchResult::error(
                    id,
                    errors::INVALID_PARAMS,
                    format!("Invalid initialize params: {e}"),
                );
            }
        };

        let major = params
            .protocol_version
            .split('.')
            .next()
            .and_then(|s| s.parse::<u32>().ok());

        if major != Some(0) {
            return DispatchResult::error(
                id,
                errors::VERSION_NOT_SUPPORTED,
                format!(
                    "Unsupported protocol version: {} (agent supports 0.x)",
                    params.protocol_version
                ),
            );
        }

        debug!(
            "Initialized by {} {} (protocol {})",
            params.client, params.client_version, params.protocol_version
        );
        self.initialized = true;

        let result = InitializeResult {
            protocol_version: AGENT_PROTOCOL_VERSION.to_string(),
            agent_version: env!("CARGO_PKG_VERSION").to_string(),
            capabilities: Capabilities {
                methods: METHODS.iter().map(|m| m.to_string()).collect(),
                actions: MenuAction::ALL.to_vec(),
            },
        };

        DispatchResult::success(id, &result)
    }

    fn handle_menu_catalog(&self, request: JsonRpcRequest) -> DispatchResult {
        let result = CatalogResult {
            actions: MenuAction::ALL.to_vec(),
        };
        DispatchResult::success(request.id, &result)
    }

    fn handle_menu_filter(&self, request: JsonRpcRequest) -> DispatchResult {
        let id = request.id.clone();

        let params: MenuFilterParams = match serde_json::from_value(request.params) {
            Ok(p) => p,
            Err(e) => {
                return DispatchResult::error(
                    id,
                    errors::INVALID_PARAMS,
                    format!("Invalid menu.filter params: {e}"),
                );
            }
        };

        let MenuFilterParams {
            selection,
            user,
            capability,
            context,
            transfers,
            files_by_id,
            editor_mime_types,
        } = params;

        let total_count = selection.total_count.unwrap_or(selection.files.len());
        if total_count < selection.files.len() {
            return DispatchResult::error(
                id,
                errors::INVALID_PARAMS,
                format!(
                    "total_count {} is smaller than the selection ({} files)",
                    total_count,
                    selection.files.len()
                ),
            );
        }

        let snapshot = RequestSnapshot {
            account_name: user.account_name.clone(),
            user_id: user.user_id,
            capability,
            files: files_by_id.into_iter().map(|f| (f.id, f)).collect(),
            editor_mime_types,
            transfers,
            features: &self.features,
        };
        let user = User::new(user.account_name);

        let filter = match FileMenuFilter::new(
            Selection::new(&selection.files, total_count),
            &snapshot,
            context.into(),
            &user,
        ) {
            Ok(f) => f,
            Err(e) => {
                warn!("Menu filter unavailable for {}: {e}", user.account_name);
                return DispatchResult::Error(
                    JsonRpcErrorResponse::new(id, errors::ACCOUNT_UNAVAILABLE, e.to_string())
                        .with_data(json!({"account_name": user.account_name})),
                );
            }
        };

        let visibility = filter.compute_visibility();
        DispatchResult::success(id, &MenuFilterResult::from(&visibility))
    }

    fn handle_health_check(&self, request: JsonRpcRequest) -> DispatchResult {
        let result = HealthCheckResult {
            status: "ok".to_string(),
            uptime_secs: self.start_time.elapsed().as_secs(),
            requests_served: self.requests_served,
        };
        DispatchResult::success(request.id, &result)
    }
}

//! REST API endpoint handlers.
//!
//! Tool calls keep the tool layer's contract: the result text is returned
//! as-is in `content`, and `is_error` is set when it starts with `Error:`.
//! Only an unknown tool or prompt name changes the HTTP status.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use stockroom::orchestrator::{manage_inventory, manage_inventory_definition};
use stockroom::tools::{ERROR_PREFIX, ToolSet, is_error_result, names};
use stockroom::{PromptDef, ToolDef};
use tracing::{debug, warn};

/// Shared application state passed to all handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub tools: Arc<ToolSet>,
    pub info: Arc<ServerInfo>,
}

/// Response body for GET /api/server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub description: String,
    pub version: String,
}

/// Response body for POST /api/tools/{name}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToolResponse {
    /// The tool's result text (JSON for successful calls).
    pub content: String,
    pub is_error: bool,
}

/// Request body for POST /api/prompts/{name}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub query: String,
}

/// Response body for POST /api/prompts/{name}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    pub name: String,
    pub text: String,
}

/// GET /api/server — Server identity.
pub async fn get_server(State(app): State<AppState>) -> Json<ServerInfo> {
    Json(app.info.as_ref().clone())
}

/// GET /api/tools — Tool definitions, ordered by name.
pub async fn list_tools(State(app): State<AppState>) -> Json<Vec<ToolDef>> {
    Json(app.tools.definitions())
}

/// POST /api/tools/{name} — Call a tool.
///
/// The raw body is passed to the tool as its JSON arguments; an empty body
/// means `{}`. Returns 200 for every registered tool, including calls that
/// produce an error result, and 404 for an unknown name.
pub async fn call_tool(
    State(app): State<AppState>,
    Path(name): Path<String>,
    body: String,
) -> (StatusCode, Json<CallToolResponse>) {
    if !app.tools.contains(&name) {
        warn!("Call to unknown tool {name}");
        return (
            StatusCode::NOT_FOUND,
            Json(CallToolResponse {
                content: format!("{ERROR_PREFIX} unknown tool '{name}'"),
                is_error: true,
            }),
        );
    }

    let content = app.tools.execute(&name, &body).await;
    let is_error = is_error_result(&content);
    (StatusCode::OK, Json(CallToolResponse { content, is_error }))
}

/// GET /api/prompts — Prompt definitions.
pub async fn list_prompts() -> Json<Vec<PromptDef>> {
    Json(vec![manage_inventory_definition()])
}

/// POST /api/prompts/{name} — Render a prompt for a query.
///
/// Returns 404 if no prompt has that name.
pub async fn get_prompt(
    Path(name): Path<String>,
    Json(body): Json<PromptRequest>,
) -> Result<Json<PromptResponse>, (StatusCode, String)> {
    if name != names::MANAGE_INVENTORY {
        warn!("Request for unknown prompt {name}");
        return Err((
            StatusCode::NOT_FOUND,
            format!("{ERROR_PREFIX} unknown prompt '{name}'"),
        ));
    }
    debug!("Rendering {name} for {:?}", body.query);
    Ok(Json(PromptResponse {
        text: manage_inventory(&body.query),
        name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom::config::InventoryConfig;

    fn app_state() -> AppState {
        let config = InventoryConfig::default();
        AppState {
            tools: Arc::new(config.build_tool_set(config.build_store())),
            info: Arc::new(ServerInfo {
                name: config.name,
                description: config.description,
                version: "0.0.0".into(),
            }),
        }
    }

    #[tokio::test]
    async fn call_tool_with_empty_body() {
        let (status, Json(resp)) =
            call_tool(State(app_state()), Path("get_latest_id".into()), String::new()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp.content, "5");
        assert!(!resp.is_error);
    }

    #[tokio::test]
    async fn call_unknown_tool_is_not_found() {
        let (status, Json(resp)) =
            call_tool(State(app_state()), Path("delete_item".into()), "{}".into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(resp.is_error);
        assert!(resp.content.contains("delete_item"));
    }

    #[tokio::test]
    async fn invalid_arguments_are_an_error_result_not_a_status() {
        let (status, Json(resp)) = call_tool(
            State(app_state()),
            Path("update_stock".into()),
            r#"{"item_id": 1, "new_stock": -5}"#.into(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(resp.is_error);
    }

    #[tokio::test]
    async fn unknown_prompt_is_not_found() {
        let err = get_prompt(
            Path("restock_everything".into()),
            Json(PromptRequest {
                query: "q".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn prompt_list_has_manage_inventory() {
        let Json(prompts) = list_prompts().await;
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "manage_inventory");
    }

    #[test]
    fn prompt_request_deserializes() {
        let req: PromptRequest = serde_json::from_str(r#"{"query":"list items"}"#).unwrap();
        assert_eq!(req.query, "list items");
    }
}

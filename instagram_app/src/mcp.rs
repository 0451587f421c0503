//! MCP method dispatch on top of the JSON-RPC message types.

use crate::rpc::{RpcError, RpcRequest, RpcResponse};
use instagram_core::tool::ToolResponse;
use instagram_tools::followers::ListFollowers;
use instagram_tools::following::ListFollowing;
use instagram_tools::user_profile::FetchUserProfile;

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "instagram-mcp";

/// Handle one decoded message. Notifications produce no response.
pub async fn handle_request<D>(deps: &D, request: RpcRequest) -> Option<RpcResponse>
where
    D: ListFollowing + ListFollowers + FetchUserProfile,
{
    if request.is_notification() {
        tracing::debug!("ignoring notification: {}", request.method);
        return None;
    }
    let id = request.id.unwrap_or(serde_json::Value::Null);

    let outcome = match request.method.as_str() {
        "initialize" => Ok(initialize_result()),
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => Ok(serde_json::json!({
            "tools": instagram_tools::descriptors(),
        })),
        "tools/call" => call_tool(deps, request.params).await,
        method => Err(RpcError::method_not_found(method)),
    };

    Some(match outcome {
        Ok(result) => RpcResponse::result(id, result),
        Err(error) => RpcResponse::error(id, error),
    })
}

fn initialize_result() -> serde_json::Value {
    serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

#[derive(serde::Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: serde_json::Value,
}

async fn call_tool<D>(
    deps: &D,
    params: Option<serde_json::Value>,
) -> Result<serde_json::Value, RpcError>
where
    D: ListFollowing + ListFollowers + FetchUserProfile,
{
    let params: ToolCallParams =
        serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
            .map_err(|e| RpcError::invalid_params(format!("malformed tool call: {e}")))?;

    let response = match params.name.as_str() {
        "get_following" => deps.list_following(arguments(params.arguments)?).await,
        "get_followers" => deps.list_followers(arguments(params.arguments)?).await,
        "get_user_profile" => deps.fetch_user_profile(arguments(params.arguments)?).await,
        name => return Err(RpcError::invalid_params(format!("unknown tool: {name}"))),
    };

    result_value(response)
}

/// Tool arguments are optional on the wire; absent means "all defaults".
fn arguments<P: serde::de::DeserializeOwned>(arguments: serde_json::Value) -> Result<P, RpcError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
        arguments => arguments,
    };

    serde_json::from_value(arguments)
        .map_err(|e| RpcError::invalid_params(format!("invalid tool arguments: {e}")))
}

fn result_value(response: ToolResponse) -> Result<serde_json::Value, RpcError> {
    serde_json::to_value(response).map_err(|e| RpcError::internal(e.to_string()))
}

use crate::mcp;
use crate::rpc::{RpcRequest, RpcResponse};

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Json;

pub struct McpRoutes<D>(std::marker::PhantomData<D>);

impl<D> McpRoutes<D>
where
    D: instagram_tools::following::ListFollowing
        + instagram_tools::followers::ListFollowers
        + instagram_tools::user_profile::FetchUserProfile
        + Sized
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub fn router() -> axum::Router {
        axum::Router::new().route("/mcp", post(Self::rpc))
    }

    async fn rpc(
        Extension(deps): Extension<D>,
        Json(request): Json<RpcRequest>,
    ) -> axum::response::Response {
        match mcp::handle_request(&deps, request).await {
            Some(response) => Json(response).into_response(),
            // A notification was delivered; there is nothing to answer.
            None => StatusCode::ACCEPTED.into_response(),
        }
    }
}

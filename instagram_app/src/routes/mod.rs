mod mcp_routes;

use crate::app::App;

use axum::routing::Router;
use implementation::Impl;

/// Axum API router for the real app.
pub fn api_router() -> axum::Router {
    Router::new().merge(mcp_routes::McpRoutes::<Impl<App>>::router())
}

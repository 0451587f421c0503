pub mod app;
pub mod config;
pub mod mcp;
pub mod rpc;

mod routes;
mod stdio;

#[cfg(test)]
mod test_util;

use anyhow::Context;
use axum::extract::Extension;

pub use stdio::serve_stdio;

pub async fn serve(app: app::App) -> anyhow::Result<()> {
    let addr = app.config.listen_addr;

    let router = routes::api_router()
        .layer(Extension(implementation::Impl::new(app)))
        .layer(tower_http::trace::TraceLayer::new_for_http());

    tracing::info!("serving mcp on http://{addr}/mcp");

    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .await
        .context("http transport failed")?;

    Ok(())
}

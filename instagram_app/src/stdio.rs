//! Line-delimited JSON-RPC over stdin/stdout.

use crate::app::App;
use crate::mcp;
use crate::rpc::{RpcError, RpcRequest, RpcResponse};

use anyhow::Context;
use implementation::Impl;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub async fn serve_stdio(app: App) -> anyhow::Result<()> {
    let deps = Impl::new(app);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    tracing::info!("serving mcp on stdio");

    while let Some(line) = lines
        .next_line()
        .await
        .context("failed reading from stdin")?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<RpcRequest>(line) {
            Ok(request) => mcp::handle_request(&deps, request).await,
            Err(e) => Some(RpcResponse::error(
                serde_json::Value::Null,
                RpcError::parse_error(e.to_string()),
            )),
        };

        if let Some(response) = response {
            let mut payload =
                serde_json::to_vec(&response).context("failed encoding a response")?;
            payload.push(b'\n');
            stdout
                .write_all(&payload)
                .await
                .context("failed writing to stdout")?;
            stdout.flush().await.context("failed flushing stdout")?;
        }
    }

    Ok(())
}

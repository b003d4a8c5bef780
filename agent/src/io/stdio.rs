use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use filemenu_core::config::FeatureToggles;

use crate::handler::dispatch::Dispatcher;
use crate::protocol::errors;
use crate::protocol::messages::{JsonRpcErrorResponse, JsonRpcRequest, JSONRPC_VERSION};

/// Maximum message size: 1 MiB per NDJSON line.
const MAX_LINE_SIZE: usize = 1_048_576;

/// Run the NDJSON transport over stdin/stdout. Logs go to stderr.
pub async fn run_stdio_loop(features: FeatureToggles) -> anyhow::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    run_loop(reader, writer, Dispatcher::new(features)).await
}

/// Read JSON-RPC messages (one per line) until EOF and write one response
/// line per message.
pub async fn run_loop<R, W>(
    mut reader: R,
    mut writer: W,
    mut dispatcher: Dispatcher,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    info!("Stdio transport loop started, waiting for input");

    loop {
        line.clear();

        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            info!("Stdin closed, shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.len() > MAX_LINE_SIZE {
            warn!("Message exceeds 1 MiB limit ({} bytes)", trimmed.len());
            let err = JsonRpcErrorResponse::new(
                serde_json::Value::Null,
                errors::PARSE_ERROR,
                "Message exceeds 1 MiB size limit",
            );
            write_response(&mut writer, &serde_json::to_value(&err)?).await?;
            continue;
        }

        debug!("Received: {}", trimmed);

        let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(r) => r,
            Err(e) => {
                warn!("Failed to parse JSON-RPC request: {e}");
                let err = JsonRpcErrorResponse::new(
                    serde_json::Value::Null,
                    errors::PARSE_ERROR,
                    format!("Parse error: {e}"),
                );
                write_response(&mut writer, &serde_json::to_value(&err)?).await?;
                continue;
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            let err = JsonRpcErrorResponse::new(
                request.id,
                errors::INVALID_REQUEST,
                "Invalid JSON-RPC version (must be \"2.0\")",
            );
            write_response(&mut writer, &serde_json::to_value(&err)?).await?;
            continue;
        }

        let response_json = dispatcher.dispatch(request).await.to_json()?;

        debug!("Sending: {}", response_json);
        write_response(&mut writer, &response_json).await?;
    }

    Ok(())
}

/// Write a JSON value as an NDJSON line to the writer.
async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    value: &serde_json::Value,
) -> anyhow::Result<()> {
    let mut line = serde_json::to_string(value)?;
    line.push('\n');
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

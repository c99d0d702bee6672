//! Background bridge between the single-threaded shell and the HTTP client.
//!
//! The shell owns no tokio runtime: a dedicated thread runs one, receives
//! requests over a std mpsc channel, and answers each request on its own
//! reply channel. A content surface keeps the receiver it got from
//! [`AiHandle::submit`] and polls it with `try_recv` during its tick.

use std::sync::mpsc;

use deskos_common::{new_request_id, AiError};

use crate::client::GeminiClient;
use crate::config::GeminiConfig;

/// One pending request handed to the bridge thread.
struct AiRequest {
    id: String,
    prompt: String,
    reply_tx: mpsc::Sender<AiReply>,
}

/// The bridge's answer to one request.
#[derive(Debug, Clone)]
pub struct AiReply {
    pub id: String,
    /// Generated text, or a display-ready error line.
    pub result: Result<String, String>,
}

/// Cloneable handle for submitting prompts to the bridge.
#[derive(Clone)]
pub struct AiHandle {
    tx: mpsc::Sender<AiRequest>,
}

impl AiHandle {
    /// Queue a prompt. Returns the request id and the channel the reply will
    /// arrive on.
    pub fn submit(&self, prompt: String) -> Result<(String, mpsc::Receiver<AiReply>), AiError> {
        let id = new_request_id();
        let (reply_tx, reply_rx) = mpsc::channel();
        let request = AiRequest {
            id: id.clone(),
            prompt,
            reply_tx,
        };
        self.tx.send(request).map_err(|_| AiError::BridgeClosed)?;
        Ok((id, reply_rx))
    }
}

/// Start the bridge thread and return a handle to it.
///
/// The thread exits when every handle has been dropped.
pub fn spawn(config: GeminiConfig) -> AiHandle {
    let (tx, rx) = mpsc::channel::<AiRequest>();

    std::thread::Builder::new()
        .name("deskos-ai".into())
        .spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build tokio runtime");
            let client = GeminiClient::new(config);

            while let Ok(request) = rx.recv() {
                tracing::debug!(id = %request.id, "ai request dispatched");
                let result = runtime
                    .block_on(client.generate(&request.prompt))
                    .map_err(|e| e.to_string());
                if let Err(ref e) = result {
                    tracing::warn!(id = %request.id, error = %e, "ai request failed");
                }
                let _ = request.reply_tx.send(AiReply {
                    id: request.id,
                    result,
                });
            }
            tracing::debug!("ai bridge shutting down");
        })
        .expect("failed to spawn ai bridge thread");

    AiHandle { tx }
}

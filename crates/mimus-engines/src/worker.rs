//! The single-slot inference worker.
//!
//! A bounded work queue with one dedicated worker loop: at most one
//! inference runs at any instant system-wide, requests are serviced in
//! FIFO order, and a long-running inference never blocks the event loop —
//! callers suspend on `submit` while newer messages keep being classified.

use crate::{artifact::ArtifactStore, prompt};
use mimus_core::{error::MimusError, traits::Engine};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

struct InferenceJob {
    id: uuid::Uuid,
    text: String,
    reply: oneshot::Sender<Result<String, MimusError>>,
}

/// Handle for submitting work to the inference worker.
#[derive(Clone)]
pub struct InferenceHandle {
    tx: mpsc::Sender<InferenceJob>,
}

impl InferenceHandle {
    /// Submit sanitized text for inference, suspending until the result
    /// is ready. Requests queue FIFO behind any in-flight inference.
    pub async fn submit(&self, id: uuid::Uuid, text: String) -> Result<String, MimusError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(InferenceJob { id, text, reply })
            .await
            .map_err(|_| MimusError::Engine("inference worker is not running".into()))?;
        rx.await
            .map_err(|_| MimusError::Engine("inference worker dropped the request".into()))?
    }
}

/// Spawn the worker loop and return a handle to it.
///
/// The loop wraps each text in the fixed prompt template, runs the engine,
/// and persists the result to the artifact store before resolving the
/// caller. Engine failures resolve the caller with the error and leave the
/// loop intact, so the next queued request is still serviced.
pub fn spawn(engine: Arc<dyn Engine>, artifacts: ArtifactStore) -> InferenceHandle {
    let (tx, mut rx) = mpsc::channel::<InferenceJob>(1);

    tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            let wrapped = prompt::build_prompt(&job.text);
            let outcome = match engine.generate(&wrapped).await {
                Ok(text) => match artifacts.write(job.id, &text).await {
                    Ok(_) => Ok(text),
                    Err(e) => Err(e),
                },
                Err(e) => Err(e),
            };

            if job.reply.send(outcome).is_err() {
                debug!("inference caller for {} went away before completion", job.id);
            }
        }
        info!("inference worker stopped");
    });

    InferenceHandle { tx }
}

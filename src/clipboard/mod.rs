//! Copying export blocks to the system clipboard.

use crate::app::events::{ClipboardEvent, Event};
use crate::export::ExportFormat;
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long a copy control shows its confirmation glyph.
pub const CONFIRM_DURATION: Duration = Duration::from_millis(1500);

pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> anyhow::Result<()>;
}

/// The platform clipboard via `arboard`.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> anyhow::Result<()> {
        let mut cb = arboard::Clipboard::new().context("open clipboard")?;
        cb.set_text(text).context("write clipboard")?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct ClipboardCopier {
    sink: Arc<dyn ClipboardSink>,
}

impl ClipboardCopier {
    pub fn new(sink: Arc<dyn ClipboardSink>) -> Self {
        Self { sink }
    }

    pub fn system() -> Self {
        Self::new(Arc::new(SystemClipboard))
    }

    /// Writes `text` off the UI loop. On success sends `Copied`, then
    /// `Reverted` once [`CONFIRM_DURATION`] has passed. Failures are only
    /// logged. Every call is independent, including its timer.
    pub fn copy(&self, format: ExportFormat, text: String, tx: mpsc::Sender<Event>) {
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            let bytes = text.len();
            match tokio::task::spawn_blocking(move || sink.set_text(&text)).await {
                Ok(Ok(())) => {
                    tracing::debug!(format = format.label(), bytes, "copied to clipboard");
                    if tx
                        .send(Event::Clipboard(ClipboardEvent::Copied(format)))
                        .await
                        .is_err()
                    {
                        return;
                    }
                    tokio::time::sleep(CONFIRM_DURATION).await;
                    let _ = tx
                        .send(Event::Clipboard(ClipboardEvent::Reverted(format)))
                        .await;
                }
                Ok(Err(e)) => {
                    tracing::error!(format = format.label(), "failed to copy: {e:#}");
                }
                Err(e) => {
                    tracing::error!(format = format.label(), "clipboard task failed: {e}");
                }
            }
        });
    }
}

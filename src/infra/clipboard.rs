//! Hands composed prompts to the system clipboard.

use dioxus::prelude::*;
use thiserror::Error;

use crate::domain::ComposedPrompt;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode prompt for the clipboard: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("clipboard write rejected: {0}")]
    Rejected(#[from] document::EvalError),
}

/// Destination for a finished prompt document.
#[allow(async_fn_in_trait)]
pub trait ExportSink {
    async fn export(&self, prompt: &ComposedPrompt) -> Result<(), ExportError>;
}

/// Writes through the webview's async clipboard API.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewClipboard;

impl ExportSink for WebviewClipboard {
    async fn export(&self, prompt: &ComposedPrompt) -> Result<(), ExportError> {
        let script = clipboard_script(prompt)?;
        document::eval(&script).join::<bool>().await?;
        tracing::debug!(chars = prompt.char_count(), "prompt written to clipboard");
        Ok(())
    }
}

/// JS snippet that copies `prompt` verbatim and resolves once the write
/// lands. The text is embedded as a JSON string literal, which is also a
/// valid JS string literal.
pub fn clipboard_script(prompt: &ComposedPrompt) -> Result<String, ExportError> {
    let literal = serde_json::to_string(prompt.as_str())?;
    Ok(format!(
        "await navigator.clipboard.writeText({literal});\nreturn true;"
    ))
}

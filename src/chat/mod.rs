pub mod gemini;
pub mod prompts;

use crate::config::AppConfig;

// ── Types ─────────────────────────────────────────────

#[derive(Debug)]
pub struct ChatError(pub String);

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Public API ────────────────────────────────────────

/// Check if the assistant can run (API key present).
pub fn is_configured(cfg: &AppConfig) -> bool {
    !cfg.gemini_api_key.is_empty()
}

/// Forward one visitor message to the model and return the reply text.
/// The API key stays on the server; the browser only exchanges turns.
pub fn complete(cfg: &AppConfig, message: &str) -> Result<String, ChatError> {
    gemini::call(cfg, message)
}

use serde_json::{json, Value};

use super::{prompts, ChatError};
use crate::config::AppConfig;

/// Build the generateContent payload for one visitor message. The
/// system prompt and the persona-wrapped question travel as a single
/// text part.
pub fn build_payload(message: &str) -> Value {
    json!({
        "contents": [{"parts": [{"text": format!("{}\n\n{}", prompts::system(), prompts::visitor_turn(message))}]}],
        "generationConfig": {
            "maxOutputTokens": 1024,
            "temperature": 0.7
        }
    })
}

/// Pull the reply text out of a generateContent response. Responses
/// with no candidate text collapse to an empty string.
pub fn extract_text(json: &Value) -> String {
    json.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .unwrap_or("")
        .to_string()
}

pub fn call(cfg: &AppConfig, message: &str) -> Result<String, ChatError> {
    if cfg.gemini_api_key.is_empty() {
        return Err(ChatError("Gemini API key not configured".into()));
    }

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        cfg.gemini_model, cfg.gemini_api_key
    );

    let body = build_payload(message);

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .map_err(|e| ChatError(format!("HTTP client error: {}", e)))?;

    let resp = client
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .map_err(|e| ChatError(format!("Gemini request failed: {}", e)))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().unwrap_or_default();
        return Err(ChatError(format!("Gemini returned {}: {}", status, text)));
    }

    let json: Value = resp
        .json()
        .map_err(|e| ChatError(format!("Gemini JSON parse error: {}", e)))?;

    Ok(extract_text(&json))
}

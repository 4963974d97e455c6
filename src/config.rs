use std::collections::HashMap;
use std::env;

/// Destination for contact submissions when CONTACT_EMAIL is unset.
pub const DEFAULT_CONTACT_EMAIL: &str = "saradesigntutorials@gmail.com";

/// Submission port used when SMTP_PORT is unset or unparseable.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Model used by the chat assistant when GEMINI_MODEL is unset.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3.1-pro-preview";

// ── SMTP transport settings ───────────────────────────

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl SmtpConfig {
    /// Delivery is attempted only when both credentials are set.
    /// An empty value counts as unset.
    pub fn credentials_present(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

// ── Application settings ──────────────────────────────

/// Process-wide settings, read once at startup and shared read-only
/// through Rocket managed state. The HTTP socket itself is configured
/// in Rocket.toml.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub contact_email: String,
    pub smtp: SmtpConfig,
    pub gemini_api_key: String,
    pub gemini_model: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let vars: HashMap<String, String> = env::vars().collect();
        Self::from_map(&vars)
    }

    /// Build from a settings map. Tests use this directly so they never
    /// mutate the process environment.
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        AppConfig {
            contact_email: get_or(vars, "CONTACT_EMAIL", DEFAULT_CONTACT_EMAIL),
            smtp: SmtpConfig {
                host: vars.get("SMTP_HOST").cloned().unwrap_or_default(),
                port: vars
                    .get("SMTP_PORT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_SMTP_PORT),
                username: vars.get("SMTP_USER").cloned().unwrap_or_default(),
                password: vars.get("SMTP_PASS").cloned().unwrap_or_default(),
            },
            gemini_api_key: vars.get("GEMINI_API_KEY").cloned().unwrap_or_default(),
            gemini_model: get_or(vars, "GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        }
    }
}

/// Read a value, falling back to a default when unset or empty.
fn get_or(vars: &HashMap<String, String>, key: &str, default: &str) -> String {
    vars.get(key)
        .cloned()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

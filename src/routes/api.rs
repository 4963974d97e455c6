use std::sync::Arc;
use std::time::Duration;

use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::chat;
use crate::config::AppConfig;
use crate::contact::ContactRequest;
use crate::email::Mailer;
use crate::rate_limit::{hash_ip, ClientIp, RateLimiter};
use crate::relay::{self, RelayOutcome};

// ── Contact relay ──────────────────────────────────────

/// Degraded-success advisory returned when credentials are absent.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Request received, but email delivery is not configured on the server.";

#[post("/contact", format = "json", data = "<form>")]
pub fn contact_submit(
    cfg: &State<AppConfig>,
    mailer: &State<Arc<dyn Mailer>>,
    form: Json<ContactRequest>,
) -> status::Custom<Json<Value>> {
    match relay::deliver(cfg, mailer.as_ref(), &form) {
        RelayOutcome::Sent => status::Custom(Status::Ok, Json(json!({"status": "ok"}))),
        RelayOutcome::NotConfigured => status::Custom(
            Status::Ok,
            Json(json!({"status": "ok", "message": NOT_CONFIGURED_MESSAGE})),
        ),
        RelayOutcome::Failed(_) => status::Custom(
            Status::InternalServerError,
            Json(json!({"status": "error", "message": "Failed to send email"})),
        ),
    }
}

// ── Chat assistant ─────────────────────────────────────

/// Messages allowed per client within the window.
const CHAT_MAX_MESSAGES: u64 = 20;
const CHAT_WINDOW: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Deserialize)]
pub struct ChatSubmit {
    pub message: String,
}

#[post("/chat", format = "json", data = "<form>")]
pub fn chat_submit(
    cfg: &State<AppConfig>,
    limiter: &State<RateLimiter>,
    client_ip: ClientIp,
    form: Json<ChatSubmit>,
) -> status::Custom<Json<Value>> {
    // Throttle before anything that costs an upstream call
    let rate_key = format!("chat:{}", hash_ip(&client_ip.0));
    if !limiter.check_and_record(&rate_key, CHAT_MAX_MESSAGES, CHAT_WINDOW) {
        return status::Custom(
            Status::TooManyRequests,
            Json(json!({
                "status": "error",
                "message": "Too many messages. Please wait before sending more."
            })),
        );
    }

    if !chat::is_configured(cfg) {
        return status::Custom(
            Status::ServiceUnavailable,
            Json(json!({
                "status": "error",
                "message": "Chat assistant is not configured on the server."
            })),
        );
    }

    match chat::complete(cfg, form.message.trim()) {
        Ok(reply) => status::Custom(Status::Ok, Json(json!({"status": "ok", "reply": reply}))),
        Err(e) => {
            log::error!("Chat completion failed: {}", e);
            status::Custom(
                Status::BadGateway,
                Json(json!({
                    "status": "error",
                    "message": "Chat assistant is temporarily unavailable."
                })),
            )
        }
    }
}

pub fn routes() -> Vec<rocket::Route> {
    routes![contact_submit, chat_submit]
}

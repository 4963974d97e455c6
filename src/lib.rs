#[macro_use]
extern crate rocket;

pub mod boot;
pub mod chat;
pub mod config;
pub mod contact;
pub mod email;
pub mod form;
pub mod rate_limit;
pub mod relay;
pub mod routes;


use std::sync::Arc;

use rocket::fs::FileServer;
use rocket::serde::json::Json;
use rocket::{Build, Rocket};
use serde_json::{json, Value};

use config::AppConfig;
use email::Mailer;
use rate_limit::RateLimiter;

#[catch(404)]
fn not_found() -> Json<Value> {
    Json(json!({"status": "error", "message": "Not found"}))
}

#[catch(422)]
fn unprocessable() -> Json<Value> {
    Json(json!({"status": "error", "message": "Malformed request body"}))
}

#[catch(500)]
fn server_error() -> Json<Value> {
    Json(json!({"status": "error", "message": "Internal server error"}))
}

/// Assemble the Rocket instance: managed state, mounts, catchers.
/// Split from the launcher so tests can inject a stub mailer.
pub fn build_rocket(cfg: AppConfig, mailer: Arc<dyn Mailer>) -> Rocket<Build> {
    rocket::build()
        .manage(cfg)
        .manage(mailer)
        .manage(RateLimiter::new())
        .mount("/static", FileServer::from("website/static"))
        .mount("/api", routes::api::routes())
        .mount("/", routes::public::routes())
        .register("/", catchers![not_found, unprocessable, server_error])
}

//! The four public endpoints and their response payloads.
//!
//! Every handler is a pure function of process constants and the wall
//! clock; nothing here reads the request beyond accepting it, and nothing
//! is cached between calls.


use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::http::{Request, Response, StatusCode};
use crate::server::{Error, Router};

/// Timestamp format used in the `/api` payload: `YYYY-MM-DD HH:MM:SS`,
/// local time, no timezone suffix.
pub const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Clock format used by `/time`: `Weekday, DD Month YYYY - HH:MM:SS`.
pub const CLOCK_FORMAT: &str = "%A, %d %B %Y - %H:%M:%S";

const WELCOME_TEXT: &str = "Welcome to the Nairobi API! 🇰🇪\n\
    Visit /api for JSON response\n\
    Visit /about for project info\n\
    Visit /time for current time";

const ABOUT_TEXT: &str = "Nairobi API Capstone Project\n\
    Built by: Trina Luseno\n\
    School: Moringa School\n\
    Tech: Rust";

/// Payload returned by the `/api` endpoint.
///
/// All fields except `timestamp` are constants; `timestamp` is read from
/// the wall clock when the payload is built and never cached. Field order
/// matters: serialization must produce the keys `message`, `location`,
/// `status`, `timestamp` in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    pub location: String,
    pub status: String,
    pub timestamp: String,
}

impl ApiResponse {
    /// Build the payload with a fresh timestamp.
    pub fn now() -> Self {
        Self {
            message: "Hello from Nairobi!".to_string(),
            location: "Nairobi, Kenya 🇰🇪".to_string(),
            status: "success".to_string(),
            timestamp: Local::now().format(API_TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// `/` — fixed welcome text pointing at the other routes.
pub async fn home(_request: Request) -> Result<Response, Error> {
    Ok(Response::new(StatusCode::Ok)
        .with_content_type("text/plain")
        .with_body(WELCOME_TEXT))
}

/// `/api` — the JSON payload.
pub async fn api(_request: Request) -> Result<Response, Error> {
    Ok(Response::new(StatusCode::Ok).with_json(&ApiResponse::now())?)
}

/// `/about` — fixed project information.
pub async fn about(_request: Request) -> Result<Response, Error> {
    Ok(Response::new(StatusCode::Ok)
        .with_content_type("text/plain")
        .with_body(ABOUT_TEXT))
}

/// `/time` — the current local time, human-formatted.
pub async fn time(_request: Request) -> Result<Response, Error> {
    let now = Local::now().format(CLOCK_FORMAT);
    Ok(Response::new(StatusCode::Ok)
        .with_content_type("text/plain")
        .with_body(format!("Current Time: {now}")))
}

/// Assemble the route table for the whole API.
pub fn router() -> Router {
    Router::new()
        .route("/", home)
        .route("/api", api)
        .route("/about", about)
        .route("/time", time)
}

//! Common routes: welcome, health, about, greet.

use crate::response::{self, Envelope};
use axum::{extract::Path, routing::get, Json, Router};
use serde::Serialize;

const DISPLAY_NAME: &str = "Product API";

#[derive(Serialize)]
struct WelcomeBody {
    message: String,
    version: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    timestamp: String,
}

#[derive(Serialize)]
struct AboutBody {
    name: &'static str,
    version: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct GreetBody {
    name: String,
}

async fn welcome() -> Json<Envelope<WelcomeBody>> {
    Json(response::basic(
        "Welcome to the API",
        WelcomeBody {
            message: format!("Welcome to the {}", DISPLAY_NAME),
            version: env!("CARGO_PKG_VERSION"),
        },
    ))
}

async fn health() -> Json<Envelope<HealthBody>> {
    Json(response::basic(
        "Server is healthy",
        HealthBody {
            status: "ok",
            timestamp: chrono::Utc::now().to_rfc3339(),
        },
    ))
}

async fn about() -> Json<Envelope<AboutBody>> {
    Json(response::basic(
        "API information",
        AboutBody {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        },
    ))
}

async fn greet(Path(name): Path<String>) -> Json<Envelope<GreetBody>> {
    Json(response::basic(
        format!("Hello, {}! Welcome to the {}.", name, DISPLAY_NAME),
        GreetBody { name },
    ))
}

/// Common routes (no state): GET /, GET /health, GET /about, GET /greet/:name.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/about", get(about))
        .route("/greet/:name", get(greet))
}

pub mod abaqus;
pub mod agent;
pub mod ai;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::http::Method;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::state::SharedState;

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ping", get(ping))
        .route("/generate_script", post(routes::generate::generate_script))
        .route("/debug_log", post(routes::debug::debug_log))
        .route("/abaqus_help", post(routes::assist::abaqus_help))
        .route(
            "/optimize_simulation",
            post(routes::assist::optimize_simulation),
        )
        .route("/run_script", post(routes::run::run_script))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Serialize)]
struct PingResponse {
    message: &'static str,
}

async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "Abaqus assistant is running",
    })
}

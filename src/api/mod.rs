use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

use crate::core::{
    DEFAULT_AMOUNT, DEFAULT_MONTHS, ProjectionSummary, coerce_number, month_count, projection,
};
use crate::error::AppError;

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

/// A field the page may send either as a JSON number or as the raw text of
/// the input box.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiNumber {
    Number(f64),
    Text(String),
}

impl ApiNumber {
    fn coerce(&self) -> f64 {
        match self {
            ApiNumber::Number(value) => *value,
            ApiNumber::Text(text) => coerce_number(text),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionPayload {
    pub amount: Option<ApiNumber>,
    pub months: Option<ApiNumber>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Resolves raw host input into a projection. Absent fields fall back to the
/// page's initial values.
pub fn projection_from_payload(payload: &ProjectionPayload) -> ProjectionSummary {
    let principal = payload
        .amount
        .as_ref()
        .map_or_else(|| coerce_number(DEFAULT_AMOUNT), ApiNumber::coerce);
    let period = payload
        .months
        .as_ref()
        .map_or_else(|| coerce_number(DEFAULT_MONTHS), ApiNumber::coerce);
    projection(principal, month_count(period))
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/projection",
            get(projection_get_handler).post(projection_post_handler),
        )
        .fallback(not_found_handler)
}

pub async fn run_http_server(bind: IpAddr, port: u16) -> Result<(), AppError> {
    let addr = SocketAddr::new(bind, port);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;
    info!("TradingPro simulator listening on http://{addr}");
    info!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, router())
        .await
        .map_err(AppError::Serve)
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn projection_get_handler(Query(payload): Query<ProjectionPayload>) -> Response {
    projection_handler_impl(payload)
}

async fn projection_post_handler(Json(payload): Json<ProjectionPayload>) -> Response {
    projection_handler_impl(payload)
}

fn projection_handler_impl(payload: ProjectionPayload) -> Response {
    let summary = projection_from_payload(&payload);
    debug!(
        "projection principal={} months={} projected={}",
        summary.principal, summary.months, summary.projected_value
    );
    json_response(StatusCode::OK, summary)
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Query, State},
    http::{Response as HttpResponse, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use chrono::Local;
use eatery_protocol::{serialize_json, ResponseStatus};
use eatery_recommend::{parse_time_of_day, RecommendationOutcome, RecommendationService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub service: RecommendationService,
}

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    #[serde(default)]
    pub sentence: Option<String>,
    /// Evaluate "open now" at this HH:MM instead of the local clock.
    #[serde(default)]
    pub at: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthReport<'a> {
    status: &'a str,
    table: &'a str,
    backend: &'a str,
}

pub fn router(service: RecommendationService) -> Router {
    let state = Arc::new(HttpState { service });
    Router::new()
        .route("/recommend", get(http_recommend))
        .route("/health", get(http_health))
        .with_state(state)
}

pub fn http_status(status: ResponseStatus) -> StatusCode {
    match status {
        ResponseStatus::ClientError => StatusCode::BAD_REQUEST,
        ResponseStatus::Recommended | ResponseStatus::NoMatch => StatusCode::OK,
        ResponseStatus::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ResponseStatus::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn http_recommend(
    State(state): State<Arc<HttpState>>,
    query: Result<Query<RecommendQuery>, QueryRejection>,
) -> Result<Response, StatusCode> {
    let Query(params) = match query {
        Ok(query) => query,
        Err(rejection) => {
            let outcome = RecommendationOutcome::client_error(
                "invalid_request",
                format!("Invalid query string: {}", rejection.body_text()),
            );
            return build_response(http_status(outcome.status), &outcome);
        }
    };

    let now = match params.at.as_deref() {
        Some(raw) => match parse_time_of_day(raw) {
            Some(now) => now,
            None => {
                let outcome = RecommendationOutcome::client_error(
                    "invalid_time",
                    format!("Invalid 'at' value '{raw}': expected HH:MM (24-hour)"),
                );
                return build_response(http_status(outcome.status), &outcome);
            }
        },
        None => Local::now().time(),
    };

    let outcome = state
        .service
        .recommend(params.sentence.as_deref(), now)
        .await;
    build_response(http_status(outcome.status), &outcome)
}

async fn http_health(State(state): State<Arc<HttpState>>) -> Result<Response, StatusCode> {
    let report = HealthReport {
        status: "ok",
        table: state.service.table(),
        backend: state.service.backend_name(),
    };
    build_response(StatusCode::OK, &report)
}

pub(crate) fn build_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<Response, StatusCode> {
    let bytes = serialize_json(body)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .into_bytes();

    HttpResponse::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(bytes))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

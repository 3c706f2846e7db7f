use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
    Acknowledgment, CalendarEvent, ContentValue, EventCalendar, EventType, FormSubmission,
    IntakeError, RichDocument, SubmissionSink,
};

const DEFAULT_UPCOMING_LIMIT: usize = 5;

pub type SharedSink = Arc<Mutex<Box<dyn SubmissionSink + Send>>>;

#[derive(Clone)]
pub struct AppState {
    calendar: Arc<EventCalendar>,
    sink: SharedSink,
}

impl AppState {
    pub fn new<S>(calendar: EventCalendar, sink: S) -> Self
    where
        S: SubmissionSink + Send + 'static,
    {
        Self {
            calendar: Arc::new(calendar),
            sink: Arc::new(Mutex::new(Box::new(sink))),
        }
    }

    fn calendar(&self) -> Arc<EventCalendar> {
        self.calendar.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::invalid(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct EventQuery {
    #[serde(rename = "type")]
    event_type: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UpcomingQuery {
    from: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Serialize)]
struct NormalizedContent {
    kind: &'static str,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<RichDocument>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(list_events))
        .route("/events/upcoming", get(upcoming_events))
        .route("/events/:id", get(get_event))
        .route("/content/normalize", post(normalize_content))
        .route("/join", post(join))
        .with_state(state)
}

pub async fn serve<S>(addr: SocketAddr, calendar: EventCalendar, sink: S) -> std::io::Result<()>
where
    S: SubmissionSink + Send + 'static,
{
    let state = AppState::new(calendar, sink);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("club-site HTTP API listening on http://{addr}");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::invalid(format!("{field} must be a YYYY-MM-DD date, got '{raw}'")))
}

async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<EventQuery>, QueryRejection>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let Query(query) = query?;
    let event_type = query
        .event_type
        .as_deref()
        .map(|raw| raw.parse::<EventType>())
        .transpose()
        .map_err(|err| ApiError::invalid(err.to_string()))?;
    let from = query.from.as_deref().map(|raw| parse_date("from", raw)).transpose()?;
    let to = query.to.as_deref().map(|raw| parse_date("to", raw)).transpose()?;

    let calendar = state.calendar();
    let events = calendar
        .chronological()
        .into_iter()
        .filter(|event| event_type.is_none_or(|t| event.event_type == t))
        .filter(|event| from.is_none_or(|d| event.date >= d))
        .filter(|event| to.is_none_or(|d| event.date <= d))
        .cloned()
        .collect();
    Ok(Json(events))
}

async fn upcoming_events(
    State(state): State<AppState>,
    query: Result<Query<UpcomingQuery>, QueryRejection>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let Query(query) = query?;
    let from = match query.from.as_deref() {
        Some(raw) => parse_date("from", raw)?,
        None => chrono::Local::now().date_naive(),
    };
    let limit = match query.limit.as_deref() {
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
            ApiError::invalid(format!("limit must be a non-negative integer, got '{raw}'"))
        })?,
        None => DEFAULT_UPCOMING_LIMIT,
    };
    let calendar = state.calendar();
    let events = calendar.upcoming(from, limit).into_iter().cloned().collect();
    Ok(Json(events))
}

async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<CalendarEvent>, ApiError> {
    let calendar = state.calendar();
    match calendar.find(&event_id) {
        Some(event) => Ok(Json(event.clone())),
        None => Err(ApiError::not_found(format!("event {event_id} not found"))),
    }
}

async fn normalize_content(Json(value): Json<Value>) -> Json<NormalizedContent> {
    let content = ContentValue::from_json(value);
    let normalized = match &content {
        ContentValue::Absent => NormalizedContent {
            kind: "absent",
            text: String::new(),
            document: None,
        },
        ContentValue::RichDocument(document) => NormalizedContent {
            kind: "rich",
            text: document.text_content(),
            document: Some(document.clone()),
        },
        other => NormalizedContent {
            kind: "text",
            text: other.to_plain_text(),
            document: None,
        },
    };
    Json(normalized)
}

async fn join(
    State(state): State<AppState>,
    payload: Result<Json<FormSubmission>, JsonRejection>,
) -> (StatusCode, Json<Acknowledgment>) {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            let message = rejection.body_text();
            log::warn!("rejected join submission: {message}");
            return (StatusCode::BAD_REQUEST, Json(Acknowledgment::error(message)));
        }
    };
    let result = {
        let mut sink = state.sink.lock();
        sink.append(&submission)
    };
    match result {
        Ok(ack) => (StatusCode::CREATED, Json(ack)),
        Err(IntakeError::Invalid(message)) => {
            log::warn!("rejected join submission: {message}");
            (StatusCode::BAD_REQUEST, Json(Acknowledgment::error(message)))
        }
        Err(err) => {
            log::error!("could not record join submission: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Acknowledgment::error(err.to_string())),
            )
        }
    }
}

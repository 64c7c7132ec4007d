pub mod fixtures;

use std::{collections::HashSet, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub use fixtures::Portfolio;

pub const API_PREFIX: &str = "/api/v1";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

pub type Inbox = Arc<RwLock<Vec<ContactMessage>>>;

/// Shared state behind the router: fixture data, resources forced to fail
/// with a 500, and the contact messages received so far.
#[derive(Clone, Default)]
pub struct MockState {
    portfolio: Arc<Portfolio>,
    failing: Arc<HashSet<String>>,
    inbox: Inbox,
}

impl MockState {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
            ..Self::default()
        }
    }

    /// Make every route of `resource` ("profile", "skills", "contact", ...)
    /// answer 500.
    pub fn failing(mut self, resource: &str) -> Self {
        Arc::make_mut(&mut self.failing).insert(resource.to_string());
        self
    }

    pub fn inbox(&self) -> Inbox {
        self.inbox.clone()
    }

    fn check(&self, resource: &str) -> Result<(), StatusCode> {
        if self.failing.contains(resource) {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Ok(())
    }
}

pub fn app() -> Router {
    app_with(MockState::default())
}

pub fn app_with(state: MockState) -> Router {
    let api = Router::new()
        .route("/profile", get(get_profile))
        .route("/experiences", get(list_experiences))
        .route("/experiences/{id}", get(get_experience))
        .route("/education", get(list_education))
        .route("/education/{id}", get(get_education))
        .route("/skills", get(get_skills))
        .route("/projects", get(list_projects))
        .route("/projects/{id}", get(get_project))
        .route("/contact", post(send_contact));
    Router::new().nest(API_PREFIX, api).with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, MockState::default()).await
}

pub async fn run_with(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(state)).await
}

type ApiResult = Result<Json<Value>, StatusCode>;

fn envelope(data: Value) -> Json<Value> {
    Json(json!({ "data": data }))
}

async fn get_profile(State(state): State<MockState>) -> ApiResult {
    state.check("profile")?;
    Ok(envelope(state.portfolio.profile.clone()))
}

async fn list_experiences(State(state): State<MockState>) -> ApiResult {
    state.check("experiences")?;
    Ok(envelope(Value::Array(state.portfolio.experiences.clone())))
}

async fn get_experience(State(state): State<MockState>, Path(id): Path<String>) -> ApiResult {
    state.check("experiences")?;
    fixtures::find_by_id(&state.portfolio.experiences, &id)
        .cloned()
        .map(envelope)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_education(State(state): State<MockState>) -> ApiResult {
    state.check("education")?;
    Ok(envelope(Value::Array(state.portfolio.education.clone())))
}

async fn get_education(State(state): State<MockState>, Path(id): Path<String>) -> ApiResult {
    state.check("education")?;
    fixtures::find_by_id(&state.portfolio.education, &id)
        .cloned()
        .map(envelope)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_skills(State(state): State<MockState>) -> ApiResult {
    state.check("skills")?;
    Ok(envelope(state.portfolio.skills.clone()))
}

async fn list_projects(State(state): State<MockState>) -> ApiResult {
    state.check("projects")?;
    Ok(envelope(Value::Array(state.portfolio.projects.clone())))
}

async fn get_project(State(state): State<MockState>, Path(id): Path<String>) -> ApiResult {
    state.check("projects")?;
    fixtures::find_by_id(&state.portfolio.projects, &id)
        .cloned()
        .map(envelope)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn send_contact(
    State(state): State<MockState>,
    Json(input): Json<ContactMessage>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    state.check("contact")?;
    if [&input.name, &input.email, &input.message]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(StatusCode::BAD_REQUEST);
    }

    let id = Uuid::new_v4();
    info!(%id, email = %input.email, "contact message received");
    state.inbox.write().await.push(input);
    Ok((
        StatusCode::CREATED,
        envelope(json!({ "id": id, "status": "received" })),
    ))
}

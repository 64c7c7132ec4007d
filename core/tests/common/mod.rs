//! Scripted in-memory `Transport` shared by the core test suites.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use portfolio_core::transport::status_text;
use portfolio_core::{ApiConfig, ApiError, HttpRequest, HttpResponse, PortfolioApi, Transport};
use serde_json::{json, Value};
use tokio::sync::Barrier;

pub const BASE_URL: &str = "http://backend.test/api/v1";

/// Canned reply for one endpoint path.
#[derive(Debug, Clone)]
pub enum Reply {
    /// JSON body; the status text is the standard reason phrase for the code.
    Json(u16, Value),
    Raw(u16, &'static str, String),
    NetworkError,
}

pub fn ok(data: Value) -> Reply {
    Reply::Json(200, json!({ "data": data }))
}

/// Answers requests from a path → reply table and records what it was asked.
///
/// With a barrier set, every request parks until `n` requests are in flight,
/// which only happens if the caller issued them concurrently.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: HashMap<String, Reply>,
    barrier: Option<Arc<Barrier>>,
    requests: Mutex<Vec<HttpRequest>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, path: &str, reply: Reply) -> Self {
        self.replies.insert(path.to_string(), reply);
        self
    }

    pub fn rendezvous(mut self, n: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(n)));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let path = request
            .url
            .strip_prefix(BASE_URL)
            .unwrap_or(&request.url)
            .to_string();
        match self.replies.get(&path) {
            Some(Reply::Json(status, body)) => {
                Ok(response(*status, &status_text(*status), body.to_string()))
            }
            Some(Reply::Raw(status, reason, body)) => {
                Ok(response(*status, reason, body.clone()))
            }
            Some(Reply::NetworkError) => Err(ApiError::network("connection refused")),
            None => Ok(response(404, "Not Found", String::new())),
        }
    }
}

fn response(status: u16, status_text: &str, body: String) -> HttpResponse {
    HttpResponse {
        status,
        status_text: status_text.to_string(),
        headers: Vec::new(),
        body,
    }
}

pub fn api(transport: ScriptedTransport) -> PortfolioApi<ScriptedTransport> {
    PortfolioApi::new(ApiConfig::new(BASE_URL), transport)
}

pub fn profile() -> Value {
    json!({
        "name": "Jordan Reyes",
        "title": "Data Analyst",
        "tagline": "Turning messy data into decisions",
        "bio": "Analyst.",
        "email": "jordan@example.com",
        "social": { "github": "https://github.com/jreyes" }
    })
}

pub fn experiences() -> Value {
    json!([
        {
            "id": 2,
            "company": "Northwind",
            "position": "Data Analyst",
            "location": "Austin, TX",
            "startDate": "2022-03",
            "endDate": "Present",
            "description": "Reporting.",
            "technologies": ["SQL", "Python", "Power BI"]
        },
        {
            "id": 1,
            "company": "Contoso",
            "position": "Intern",
            "type": "Internship",
            "location": "Remote",
            "startDate": "2021-06",
            "endDate": "2021-12",
            "description": "Dashboards.",
            "technologies": ["R"]
        }
    ])
}

pub fn skills() -> Value {
    json!({
        "dataSkills": [{ "name": "SQL", "level": 90 }],
        "soft": ["Communication"],
        "tools": ["dbt"]
    })
}

pub fn projects() -> Value {
    json!([
        {
            "id": 5,
            "title": "Churn Early Warning",
            "description": "Model.",
            "technologies": ["Python"],
            "featured": true
        },
        {
            "id": 3,
            "title": "Sales Dashboard",
            "description": "Dashboard.",
            "technologies": ["Power BI"]
        }
    ])
}

/// All four home-page endpoints answering successfully.
pub fn home_page() -> ScriptedTransport {
    ScriptedTransport::new()
        .reply("/profile", ok(profile()))
        .reply("/experiences", ok(experiences()))
        .reply("/skills", ok(skills()))
        .reply("/projects", ok(projects()))
}

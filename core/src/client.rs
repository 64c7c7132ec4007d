//! Stateless HTTP request builder and response parser for the portfolio API.
//!
//! # Design
//! `PortfolioClient` holds only a `base_url` and carries no mutable state
//! between calls. Every resource has a `build_*` method that produces an
//! `HttpRequest`; all responses go through the single `parse_response`,
//! since the API returns the body verbatim and leaves unwrapping to the
//! page loaders. `PortfolioApi` pairs this with a `Transport` to do the I/O.

use crate::error::ApiError;
use crate::http::{
    merge_headers, HttpMethod, HttpRequest, HttpResponse, RequestOptions, APPLICATION_JSON,
    CONTENT_TYPE,
};
use crate::types::ContactMessage;

/// Synchronous, stateless client for the portfolio API.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    base_url: String,
}

impl PortfolioClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `endpoint` (a path starting with `/`).
    ///
    /// Defaults to GET with `Content-Type: application/json`; `options` are
    /// layered on top, caller headers last.
    pub fn build(&self, endpoint: &str, options: RequestOptions) -> HttpRequest {
        let defaults = vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())];
        HttpRequest {
            method: options.method.unwrap_or(HttpMethod::Get),
            url: format!("{}{endpoint}", self.base_url),
            headers: merge_headers(defaults, options.headers),
            body: options.body,
            timeout: options.timeout,
        }
    }

    pub fn build_get_profile(&self) -> HttpRequest {
        self.build("/profile", RequestOptions::default())
    }

    pub fn build_get_experiences(&self) -> HttpRequest {
        self.build("/experiences", RequestOptions::default())
    }

    /// `id` is interpolated as-is; callers must pass a URL-safe value.
    pub fn build_get_experience(&self, id: &str) -> HttpRequest {
        self.build(&format!("/experiences/{id}"), RequestOptions::default())
    }

    pub fn build_get_education_list(&self) -> HttpRequest {
        self.build("/education", RequestOptions::default())
    }

    pub fn build_get_education_detail(&self, id: &str) -> HttpRequest {
        self.build(&format!("/education/{id}"), RequestOptions::default())
    }

    pub fn build_get_skills(&self) -> HttpRequest {
        self.build("/skills", RequestOptions::default())
    }

    pub fn build_get_projects(&self) -> HttpRequest {
        self.build("/projects", RequestOptions::default())
    }

    pub fn build_get_project(&self, id: &str) -> HttpRequest {
        self.build(&format!("/projects/{id}"), RequestOptions::default())
    }

    /// POST `/contact` with `message` as the JSON body. A method or body in
    /// `options` is ignored; headers and timeout are honored.
    pub fn build_send_contact_message(
        &self,
        message: &ContactMessage,
        options: RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(message).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.build(
            "/contact",
            RequestOptions {
                method: Some(HttpMethod::Post),
                body: Some(body),
                ..options
            },
        ))
    }

    /// Turn a response into its JSON body.
    ///
    /// A non-2xx status fails with `ApiError::Transport` carrying the status
    /// text; the body is not looked at. A 2xx body that is not JSON fails
    /// with `ApiError::Parse`. The parsed value is not checked against any
    /// schema.
    pub fn parse_response(&self, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Transport {
        status: Some(response.status),
        message: response.status_text.clone(),
    })
}

//! Page loaders: aggregate API calls into the view-model handed to rendering.
//!
//! # Design
//! The home page needs four independent resources. They are issued together
//! with `futures::join!`, and all four results are folded into one `Result`
//! before anything is decoded, so the renderer sees either every section or
//! none of them. Decoding into typed entities happens here, at the boundary;
//! a payload with the wrong shape is a `Validation` error and degrades the
//! page like any other failure.
//!
//! The `load_*` functions are the recovery point: they log and return the
//! degraded value instead of an error. The `try_*` variants propagate.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::api::PortfolioApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Education, Envelope, Experience, Profile, Project, Skills};

/// Everything the home page renders.
///
/// Either fully populated or fully degraded (`ViewModel::degraded()`); never
/// a mix.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewModel {
    pub profile: Option<Profile>,
    pub experiences: Vec<Experience>,
    pub skills: Option<Skills>,
    pub projects: Vec<Project>,
}

impl ViewModel {
    /// Nothing to render: no profile, no skills, empty lists.
    pub fn degraded() -> Self {
        Self::default()
    }

    pub fn is_degraded(&self) -> bool {
        *self == Self::degraded()
    }
}

/// Fetch profile, experiences, skills and projects concurrently and build
/// the view-model. Any failure fails the whole load.
pub async fn try_load_home_page<T: Transport>(
    api: &PortfolioApi<T>,
) -> Result<ViewModel, ApiError> {
    let (profile, experiences, skills, projects) = futures::join!(
        api.get_profile(),
        api.get_experiences(),
        api.get_skills(),
        api.get_projects(),
    );
    let (profile, experiences, skills, projects) = (profile?, experiences?, skills?, projects?);

    Ok(ViewModel {
        profile: Some(unwrap_data("profile", profile)?),
        experiences: unwrap_data("experiences", experiences)?,
        skills: Some(unwrap_data("skills", skills)?),
        projects: unwrap_data("projects", projects)?,
    })
}

/// Like `try_load_home_page`, but a failure is logged and replaced by
/// `ViewModel::degraded()`.
pub async fn load_home_page<T: Transport>(api: &PortfolioApi<T>) -> ViewModel {
    match try_load_home_page(api).await {
        Ok(view) => view,
        Err(err) => {
            error!(error = %err, "failed to load page data");
            ViewModel::degraded()
        }
    }
}

pub async fn load_experience<T: Transport>(api: &PortfolioApi<T>, id: &str) -> Option<Experience> {
    recover("experience", id, decode(api.get_experience(id).await, "experience"))
}

pub async fn load_education<T: Transport>(api: &PortfolioApi<T>, id: &str) -> Option<Education> {
    recover("education", id, decode(api.get_education_detail(id).await, "education"))
}

pub async fn load_project<T: Transport>(api: &PortfolioApi<T>, id: &str) -> Option<Project> {
    recover("project", id, decode(api.get_project(id).await, "project"))
}

fn decode<D: DeserializeOwned>(
    body: Result<Value, ApiError>,
    resource: &'static str,
) -> Result<D, ApiError> {
    unwrap_data(resource, body?)
}

fn recover<D>(resource: &str, id: &str, result: Result<D, ApiError>) -> Option<D> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            error!(resource, id, error = %err, "failed to load detail page");
            None
        }
    }
}

/// Take the `data` field out of a response envelope and decode it.
pub fn unwrap_data<D: DeserializeOwned>(resource: &'static str, body: Value) -> Result<D, ApiError> {
    let envelope: Envelope<D> =
        serde_json::from_value(body).map_err(|e| ApiError::Validation {
            resource,
            message: e.to_string(),
        })?;
    Ok(envelope.data)
}

//! Async API client core for the portfolio site.
//!
//! # Overview
//! Fetches profile, experience, education, skills and project data from the
//! portfolio REST API, submits contact-form messages, and aggregates the
//! home-page resources into a single `ViewModel`.
//!
//! # Design
//! - `PortfolioClient` is stateless: it builds `HttpRequest` values and
//!   parses `HttpResponse` values without touching the network.
//! - `Transport` is the only I/O seam; `ReqwestTransport` is the real one,
//!   tests script their own.
//! - `PortfolioApi` returns raw JSON bodies; typed decoding happens in the
//!   page loaders, which also own all failure recovery.
//! - Configuration is an explicit `ApiConfig` value, never a global.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod loader;
pub mod transport;
pub mod types;

pub use api::PortfolioApi;
pub use client::PortfolioClient;
pub use config::ApiConfig;
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions, Transport};
pub use loader::{
    load_education, load_experience, load_home_page, load_project, try_load_home_page, ViewModel,
};
pub use transport::ReqwestTransport;
pub use types::{
    ContactMessage, Education, Envelope, Experience, Profile, Project, Skill, Skills, SocialLinks,
};

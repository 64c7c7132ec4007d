//! Async facade over `PortfolioClient` and a `Transport`.
//!
//! One method per resource. Each call issues exactly one request and returns
//! the response body as parsed JSON, envelope included. Failures propagate
//! unchanged; recovery is the page loader's job.

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::PortfolioClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, RequestOptions, Transport};
use crate::types::ContactMessage;

pub struct PortfolioApi<T> {
    client: PortfolioClient,
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> PortfolioApi<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self {
            client: PortfolioClient::new(&config.base_url),
            config,
            transport,
        }
    }

    pub fn client(&self) -> &PortfolioClient {
        &self.client
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get_profile(&self) -> Result<Value, ApiError> {
        self.send(self.client.build_get_profile()).await
    }

    pub async fn get_experiences(&self) -> Result<Value, ApiError> {
        self.send(self.client.build_get_experiences()).await
    }

    pub async fn get_experience(&self, id: &str) -> Result<Value, ApiError> {
        self.send(self.client.build_get_experience(id)).await
    }

    pub async fn get_education_list(&self) -> Result<Value, ApiError> {
        self.send(self.client.build_get_education_list()).await
    }

    pub async fn get_education_detail(&self, id: &str) -> Result<Value, ApiError> {
        self.send(self.client.build_get_education_detail(id)).await
    }

    pub async fn get_skills(&self) -> Result<Value, ApiError> {
        self.send(self.client.build_get_skills()).await
    }

    pub async fn get_projects(&self) -> Result<Value, ApiError> {
        self.send(self.client.build_get_projects()).await
    }

    pub async fn get_project(&self, id: &str) -> Result<Value, ApiError> {
        self.send(self.client.build_get_project(id)).await
    }

    /// POST the message to `/contact` and return the server's ack body.
    pub async fn send_contact_message(&self, message: &ContactMessage) -> Result<Value, ApiError> {
        self.send_contact_message_with(message, RequestOptions::default())
            .await
    }

    pub async fn send_contact_message_with(
        &self,
        message: &ContactMessage,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let request = self.client.build_send_contact_message(message, options)?;
        self.send(request).await
    }

    /// Request an arbitrary endpoint path with caller options.
    pub async fn fetch(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        self.send(self.client.build(endpoint, options)).await
    }

    async fn send(&self, mut request: HttpRequest) -> Result<Value, ApiError> {
        if request.timeout.is_none() {
            request.timeout = self.config.timeout;
        }
        debug!(method = request.method.as_str(), url = %request.url, "issuing request");

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            warn!(status = response.status, status_text = %response.status_text, "request failed");
        }
        self.client.parse_response(response)
    }
}

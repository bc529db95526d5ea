use reqwest::{Client, StatusCode};

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Posts one webinar registration. Any 2xx counts as accepted and the
    /// response body is ignored.
    pub async fn signup_for_webinar(&self, form: &SignupFormData) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{}/webinar-signup", base_url))
            .json(form)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(rejection_error(status, response.json::<ApiError>().await.ok()))
    }
}

fn rejection_error(status: StatusCode, envelope: Option<ApiError>) -> ApiError {
    let message = envelope
        .map(|body| body.error)
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| format!("Sign-up failed with status {}", status.as_u16()));
    ApiError::http_status(status.as_u16(), message)
}

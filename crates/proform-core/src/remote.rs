//! Remote profile service. The core treats fetch and update as opaque
//! asynchronous calls and collapses transport detail to success/failure.

use crate::profile::ProfileForm;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("profile service not reachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("profile service returned status {0}")]
    Status(reqwest::StatusCode),
}

/// The external collaborator holding the stored profile.
///
/// `update_profile` returns the server's copy, which supersedes the local
/// form after a successful submit.
#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn fetch_profile(&self) -> Result<ProfileForm, RemoteError>;
    async fn update_profile(&self, form: &ProfileForm) -> Result<ProfileForm, RemoteError>;
}

pub struct HttpProfileService {
    client: Client,
    base_url: String,
}

impl HttpProfileService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        let mut base_url = base_url.into();
        if !base_url.starts_with("http") {
            base_url = format!("http://{}", base_url);
        }

        Self { client, base_url }
    }

    fn user_url(&self) -> String {
        format!("{}/api/user", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ProfileService for HttpProfileService {
    async fn fetch_profile(&self) -> Result<ProfileForm, RemoteError> {
        let response = self.client.get(self.user_url()).send().await?;

        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    async fn update_profile(&self, form: &ProfileForm) -> Result<ProfileForm, RemoteError> {
        let response = self.client.put(self.user_url()).json(form).send().await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "profile update rejected");
            return Err(RemoteError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_an_http_scheme() {
        let service = HttpProfileService::new("localhost:8080");
        assert_eq!(service.user_url(), "http://localhost:8080/api/user");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let service = HttpProfileService::new("https://api.example.com/");
        assert_eq!(service.user_url(), "https://api.example.com/api/user");
    }
}

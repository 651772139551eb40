//! GitHub API client wrapper using octocrab

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::core::TokenManager;
use crate::error::{Result, SweepError};
use crate::github::error_handler::graphql_error_summary;
use crate::github::gateway::ApiGateway;

/// GitHub API client wrapper
pub struct GitHubClient {
    /// The octocrab instance
    inner: Octocrab,
}

impl GitHubClient {
    /// Create a client from the token found by [`TokenManager::resolve`]
    ///
    /// This is the pre-flight step: it fails with a missing-dependency or
    /// not-authenticated error before any request is sent.
    pub fn from_environment() -> Result<Self> {
        let token = TokenManager::resolve()?;
        Self::with_token(&token)
    }

    /// Create a client with an explicit token
    pub fn with_token(token: &SecretString) -> Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token.expose_secret().to_string())
            .build()?;

        Ok(Self { inner: octocrab })
    }
}

impl ApiGateway for GitHubClient {
    async fn rest_get(&self, route: &str) -> Result<String> {
        tracing::debug!(route, "GET");
        let body: Value = self.inner.get(route, None::<&()>).await?;
        Ok(serde_json::to_string(&body)?)
    }

    async fn graphql(&self, query: &str, variables: Value) -> Result<String> {
        tracing::debug!(%variables, "GraphQL request");
        let payload = json!({ "query": query, "variables": variables });
        let body: Value = self.inner.graphql(&payload).await?;

        if let Some(summary) = graphql_error_summary(&body) {
            tracing::debug!(%summary, "GraphQL errors");
            return Err(SweepError::GitHubApi(summary));
        }

        Ok(serde_json::to_string(&body)?)
    }
}

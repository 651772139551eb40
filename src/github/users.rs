//! User profile lookup

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Result, SweepError};
use crate::github::gateway::ApiGateway;

/// Fields of `GET /users/{username}` shown in the summary report
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

impl UserProfile {
    /// Parse a profile from the raw API response
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Formatted multi-line report
    pub fn report(&self) -> String {
        let rows = [
            ("Name", text_or_na(&self.name)),
            ("Created", self.created_at.format("%Y-%m-%d").to_string()),
            ("Location", text_or_na(&self.location)),
            ("Company", text_or_na(&self.company)),
            ("Bio", text_or_na(&self.bio)),
            ("Public repos", self.public_repos.to_string()),
            ("Followers", self.followers.to_string()),
            ("Following", self.following.to_string()),
        ];

        let mut out = format!("GitHub user: {}\n", self.login);
        for (label, value) in rows {
            out.push_str(&format!("  {:<14}{}\n", format!("{}:", label), value));
        }
        out
    }
}

fn text_or_na(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.replace('\n', " "),
        _ => "N/A".to_string(),
    }
}

/// User operations handler
pub struct UserHandler<'a, G: ApiGateway> {
    gateway: &'a G,
}

impl<'a, G: ApiGateway> UserHandler<'a, G> {
    /// Create a new handler
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Fetch the raw profile JSON for `username`
    pub async fn fetch_raw(&self, username: &str) -> Result<String> {
        // GitHub API: GET /users/{username}
        let encoded: String = url::form_urlencoded::byte_serialize(username.as_bytes()).collect();
        let route = format!("/users/{}", encoded);

        self.gateway.rest_get(&route).await.map_err(|e| match e {
            SweepError::NotFound(_) => SweepError::UserNotFound(username.to_string()),
            other => other,
        })
    }
}

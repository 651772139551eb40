//! Issue operations

use std::fmt;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::core::RepoSlug;
use crate::error::Result;
use crate::github::decoder::NodeIdDecoder;
use crate::github::gateway::ApiGateway;

/// Resolves an issue number to its GraphQL node id
pub const LOOKUP_ISSUE_QUERY: &str = r#"query($owner: String!, $repo: String!, $number: Int!) {
  repository(owner: $owner, name: $repo) {
    issue(number: $number) {
      id
    }
  }
}"#;

/// Deletes an issue by node id (needs admin rights on the repository)
pub const DELETE_ISSUE_MUTATION: &str = r#"mutation($issueId: ID!) {
  deleteIssue(input: { issueId: $issueId }) {
    clientMutationId
  }
}"#;

/// Issue state as reported by the REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueState::Open => write!(f, "OPEN"),
            IssueState::Closed => write!(f, "CLOSED"),
        }
    }
}

/// Information about an issue found by the lister
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
    /// Repository-scoped issue number
    pub number: u64,
    /// Issue title
    pub title: String,
    /// Open or closed
    pub state: IssueState,
}

/// REST issue item; pull requests come back from the same endpoint
#[derive(Debug, Deserialize)]
struct RestIssue {
    number: u64,
    title: String,
    state: IssueState,
    #[serde(default)]
    pull_request: Option<Value>,
}

/// Issue operations handler
pub struct IssueHandler<'a, G: ApiGateway> {
    gateway: &'a G,
    page_size: u8,
}

impl<'a, G: ApiGateway> IssueHandler<'a, G> {
    /// Create a new handler
    pub fn new(gateway: &'a G, page_size: u8) -> Self {
        Self {
            gateway,
            page_size: page_size.max(1),
        }
    }

    /// List every issue, open or closed, created by `author`, oldest first
    pub async fn list_by_author(&self, repo: &RepoSlug, author: &str) -> Result<Vec<IssueSummary>> {
        let mut issues = Vec::new();
        let mut page: u32 = 1;

        loop {
            // GitHub API: GET /repos/{owner}/{repo}/issues
            let route = self.list_route(repo, author, page);
            let body = self.gateway.rest_get(&route).await?;
            let batch: Vec<RestIssue> = serde_json::from_str(&body)?;
            let fetched = batch.len();

            issues.extend(
                batch
                    .into_iter()
                    .filter(|issue| issue.pull_request.is_none())
                    .map(|issue| IssueSummary {
                        number: issue.number,
                        title: issue.title,
                        state: issue.state,
                    }),
            );

            tracing::debug!(page, fetched, total = issues.len(), "fetched issue page");

            if fetched < usize::from(self.page_size) {
                break;
            }
            page += 1;
        }

        Ok(issues)
    }

    /// Look up the node id for an issue number
    ///
    /// `Ok(None)` means GitHub answered but returned no usable id.
    pub async fn resolve_node_id(
        &self,
        repo: &RepoSlug,
        number: u64,
        decoder: &dyn NodeIdDecoder,
    ) -> Result<Option<String>> {
        let variables = json!({
            "owner": repo.owner,
            "repo": repo.name,
            "number": number,
        });
        let body = self.gateway.graphql(LOOKUP_ISSUE_QUERY, variables).await?;
        decoder.node_id(&body)
    }

    /// Delete an issue by node id
    pub async fn delete(&self, node_id: &str) -> Result<()> {
        let variables = json!({ "issueId": node_id });
        self.gateway.graphql(DELETE_ISSUE_MUTATION, variables).await?;
        Ok(())
    }

    fn list_route(&self, repo: &RepoSlug, author: &str, page: u32) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("creator", author)
            .append_pair("state", "all")
            .append_pair("sort", "created")
            .append_pair("direction", "asc")
            .append_pair("per_page", &self.page_size.to_string())
            .append_pair("page", &page.to_string())
            .finish();

        format!("/repos/{}/{}/issues?{}", repo.owner, repo.name, query)
    }
}

//! API gateway seam
//!
//! Everything above this trait works on raw response text, so the issue
//! pipeline can be driven by canned payloads in tests and by
//! [`GitHubClient`](crate::github::GitHubClient) in the binaries.

use serde_json::Value;

use crate::error::Result;

/// Authenticated access to GitHub's REST and GraphQL endpoints
#[allow(async_fn_in_trait)]
pub trait ApiGateway {
    /// `GET` a REST route (path plus optional query string) and return the body
    async fn rest_get(&self, route: &str) -> Result<String>;

    /// Run a GraphQL document and return the response body
    ///
    /// A response carrying an `errors` array is a failure even though GitHub
    /// answers it with HTTP 200.
    async fn graphql(&self, query: &str, variables: Value) -> Result<String>;
}

//! GitHub API error detection and classification
//!
//! Parses octocrab errors and GraphQL error payloads into the matching
//! `SweepError` so the user gets actionable guidance and the right exit code.

use crate::error::SweepError;

/// Classifies an octocrab error into a more specific SweepError if possible
pub fn classify_github_error(err: octocrab::Error) -> SweepError {
    // Debug format carries the status and message (Display only returns "GitHub")
    let error_message = format!("{:?}", err);
    classify_message(error_message)
}

fn classify_message(error_message: String) -> SweepError {
    if is_bad_credentials(&error_message) {
        return SweepError::AuthenticationFailed(
            "Bad credentials. The token is invalid or has been revoked.".to_string(),
        );
    }

    if is_rate_limit_error(&error_message) {
        return SweepError::GitHubApi(
            "API rate limit exceeded. Please wait a few minutes and try again.".to_string(),
        );
    }

    if is_not_found_error(&error_message) {
        return SweepError::NotFound(
            "It may be private, or you may not have access.".to_string(),
        );
    }

    SweepError::GitHubApi(error_message)
}

/// Collect the messages of a GraphQL `errors` array, if the payload has one
///
/// GraphQL reports failures with HTTP 200, so the status code alone is not
/// enough to tell success from failure.
pub fn graphql_error_summary(payload: &serde_json::Value) -> Option<String> {
    let errors = payload.get("errors")?.as_array()?;
    if errors.is_empty() {
        return None;
    }

    let messages: Vec<String> = errors
        .iter()
        .map(|e| {
            e.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| e.to_string())
        })
        .collect();

    Some(messages.join("; "))
}

/// Check if error is a 401 bad credentials error
fn is_bad_credentials(error_message: &str) -> bool {
    error_message.contains("Bad credentials") || error_message.contains("status_code: 401")
}

/// Check if error is a rate limit error
fn is_rate_limit_error(error_message: &str) -> bool {
    error_message.contains("rate limit")
        || (error_message.contains("403") && error_message.contains("limit exceeded"))
}

/// Check if error is a 404 not found
fn is_not_found_error(error_message: &str) -> bool {
    error_message.contains("status_code: 404") || error_message.contains("Not Found")
}

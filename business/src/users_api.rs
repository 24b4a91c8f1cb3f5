//! Users API client.
//!
//! Performs the single network call of the app: GET on the configured users
//! endpoint, returning the decoded array. Callers map the result into a
//! `UserTableAction`; nothing here touches UI state.

use log::{error, info};
use thiserror::Error;

use crate::User;
use crate::http::Client;

/// Why a users fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsersApiError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered outside the 2xx range.
    #[error("API returned status: {0}")]
    Status(u16),

    /// The body was not a JSON array of users.
    #[error("failed to parse users: {0}")]
    Parse(String),
}

/// A typed API result.
pub type ApiResult<T> = Result<T, UsersApiError>;

/// GET `users_url`, expecting a JSON array of [`User`].
pub async fn fetch_users(users_url: &str) -> ApiResult<Vec<User>> {
    info!("Fetching users from {users_url}");

    let response = Client::get(users_url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.message))?;

    if !response.is_success() {
        error!("Users endpoint returned status {}", response.status);
        return Err(UsersApiError::Status(response.status));
    }

    let users: Vec<User> = response.json().map_err(|e| {
        error!(
            "Users body did not decode (content-type: {})",
            response.header("content-type").unwrap_or("none")
        );
        UsersApiError::Parse(e.to_string())
    })?;

    info!("Fetched {} users", users.len());
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UsersApiError::Status(503).to_string(),
            "API returned status: 503"
        );
        assert_eq!(
            UsersApiError::Transport("connection refused".to_owned()).to_string(),
            "request failed: connection refused"
        );
        assert!(
            UsersApiError::Parse("expected a sequence".to_owned())
                .to_string()
                .starts_with("failed to parse users")
        );
    }
}

//! Operator authentication for the sales and admin portals.
//!
//! A fixed credential table and opaque session tokens. This carries no
//! real security contract; it only gates the dashboard endpoints.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::GatewayError;

/// The fixed sales-rep credential table.
const OPERATORS: [(&str, &str); 2] = [("rep1", "password1"), ("rep2", "password2")];

/// Checks a username/password pair against the operator table.
#[must_use]
pub fn authenticate(username: &str, password: &str) -> bool {
    OPERATORS
        .iter()
        .any(|(user, pass)| *user == username && *pass == password)
}

/// In-memory store of active operator sessions.
///
/// Tokens are opaque UUIDs mapped back to the operator's username.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, String>>,
}

impl SessionStore {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new session token for an authenticated operator.
    pub async fn issue(&self, username: &str) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions
            .write()
            .await
            .insert(token, username.to_string());
        token
    }

    /// Resolves a session token to its operator username.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unauthorized`] if the token is unknown.
    pub async fn operator_for(&self, token: Uuid) -> Result<String, GatewayError> {
        self.sessions
            .read()
            .await
            .get(&token)
            .cloned()
            .ok_or(GatewayError::Unauthorized)
    }

    /// Revokes a session token. Unknown tokens are ignored.
    pub async fn revoke(&self, token: Uuid) {
        self.sessions.write().await.remove(&token);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn table_accepts_known_operators() {
        assert!(authenticate("rep1", "password1"));
        assert!(authenticate("rep2", "password2"));
    }

    #[test]
    fn table_rejects_bad_credentials() {
        assert!(!authenticate("rep1", "password2"));
        assert!(!authenticate("rep3", "password3"));
        assert!(!authenticate("", ""));
    }

    #[tokio::test]
    async fn session_round_trip() {
        let sessions = SessionStore::new();
        let token = sessions.issue("rep1").await;

        let Ok(operator) = sessions.operator_for(token).await else {
            panic!("token should resolve");
        };
        assert_eq!(operator, "rep1");

        sessions.revoke(token).await;
        let Err(GatewayError::Unauthorized) = sessions.operator_for(token).await else {
            panic!("revoked token should be rejected");
        };
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let sessions = SessionStore::new();
        let Err(GatewayError::Unauthorized) = sessions.operator_for(Uuid::new_v4()).await else {
            panic!("expected Unauthorized");
        };
    }
}

//! Per-visitor state carried in the tower session.
//!
//! Handlers load a [`VisitorSession`] at the start of each request instead of reading
//! any process-wide flags. The session cookie only carries an opaque id; the flags live
//! server-side in the session store.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::constants::session::VISITOR_KEY;
use crate::db::User;

use super::WebError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorSession {
    pub logged_in: bool,
    pub is_admin: bool,
    pub username: String,
}

impl VisitorSession {
    #[must_use]
    pub fn signed_in(user: &User) -> Self {
        Self {
            logged_in: true,
            is_admin: user.is_admin,
            username: user.username.clone(),
        }
    }

    /// Current visitor, logged out when the session holds nothing yet.
    pub async fn load(session: &Session) -> Result<Self, WebError> {
        Ok(session
            .get::<Self>(VISITOR_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Stores a fresh login under a new session id.
    pub async fn login(session: &Session, user: &User) -> Result<Self, WebError> {
        let visitor = Self::signed_in(user);
        session.cycle_id().await?;
        session.insert(VISITOR_KEY, &visitor).await?;
        Ok(visitor)
    }

    /// Drops everything stored for this visitor.
    pub async fn logout(session: &Session) -> Result<Self, WebError> {
        session.flush().await?;
        Ok(Self::default())
    }
}

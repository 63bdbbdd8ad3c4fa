use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::claims::Claims;

/// Client-side view of a stored token: display identity plus expiry, with
/// explicit init and teardown instead of ambient global state.
///
/// Decoding here skips signature verification on purpose. The identity is
/// display-only; every protected request is re-verified cryptographically
/// by the server, so this object must never be used to authorize anything.
#[derive(Debug, Clone)]
pub struct Session {
    identity: Option<SessionIdentity>,
}

#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user_id: Uuid,
    pub user_name: String,
    pub expires_at: OffsetDateTime,
}

impl Session {
    pub fn empty() -> Self {
        Self { identity: None }
    }

    /// Build a session from a persisted token. Fails on malformed tokens;
    /// an expired token still yields a session so the caller can detect
    /// expiry and force re-login.
    pub fn from_token(token: &str) -> anyhow::Result<Self> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims::<&str>(&[]);

        let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;
        let expires_at = OffsetDateTime::from_unix_timestamp(data.claims.exp as i64)?;
        Ok(Self {
            identity: Some(SessionIdentity {
                user_id: data.claims.sub,
                user_name: data.claims.name,
                expires_at,
            }),
        })
    }

    pub fn identity(&self) -> Option<&SessionIdentity> {
        self.identity.as_ref()
    }

    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        match &self.identity {
            Some(id) => id.expires_at <= now,
            None => true,
        }
    }

    /// Logout: drop the identity.
    pub fn clear(&mut self) {
        self.identity = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::JwtKeys;
    use crate::state::AppState;
    use axum::extract::FromRef;

    fn signed_token(name: &str) -> (Uuid, String) {
        let keys = JwtKeys::from_ref(&AppState::fake());
        let user_id = Uuid::new_v4();
        let token = keys.sign(user_id, name).expect("sign");
        (user_id, token)
    }

    #[tokio::test]
    async fn decodes_identity_without_key() {
        let (user_id, token) = signed_token("alice");
        let session = Session::from_token(&token).expect("decode");
        let identity = session.identity().expect("identity");
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.user_name, "alice");
        assert!(!session.is_expired(OffsetDateTime::now_utc()));
    }

    #[tokio::test]
    async fn detects_expiry() {
        let (_, token) = signed_token("bob");
        let session = Session::from_token(&token).expect("decode");
        let far_future = OffsetDateTime::now_utc() + time::Duration::days(365);
        assert!(session.is_expired(far_future));
    }

    #[test]
    fn rejects_garbage_token() {
        assert!(Session::from_token("definitely-not-a-jwt").is_err());
    }

    #[tokio::test]
    async fn clear_drops_identity() {
        let (_, token) = signed_token("carol");
        let mut session = Session::from_token(&token).expect("decode");
        session.clear();
        assert!(session.identity().is_none());
        assert!(session.is_expired(OffsetDateTime::now_utc()));
    }

    #[test]
    fn empty_session_is_expired() {
        assert!(Session::empty().is_expired(OffsetDateTime::now_utc()));
    }
}

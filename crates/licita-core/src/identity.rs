use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decoded claims of the current user's bearer token.
///
/// Produced by `licita-auth` from the token payload **without signature
/// verification** — display and UX gating only. Server-enforced authorization
/// is re-validated server-side on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Login identifier (`sub` claim, the user's e-mail).
    pub subject: String,
    /// Coarse role tag (`role` claim, e.g. `"admin"` or `"client"`).
    pub role: String,
    /// Stable user id (`user_id` claim).
    pub user_id: String,
    /// Token expiration (`exp` claim). `None` for tokens without expiry.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Check whether the token behind this identity has expired.
    ///
    /// Identities without an `exp` claim never expire.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    /// Whether the decoded role claim matches one of `roles`.
    #[must_use]
    pub fn has_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|r| *r == self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;

    fn identity(expires_at: Option<DateTime<Utc>>) -> Identity {
        Identity {
            subject: "user@example.com".into(),
            role: "client".into(),
            user_id: "usr_1".into(),
            expires_at,
        }
    }

    #[test]
    fn expired_when_exp_in_past() {
        let now = Utc::now();
        assert!(identity(Some(now - TimeDelta::seconds(1))).is_expired(now));
    }

    #[test]
    fn not_expired_when_exp_in_future() {
        let now = Utc::now();
        assert!(!identity(Some(now + TimeDelta::hours(1))).is_expired(now));
    }

    #[test]
    fn never_expires_without_exp_claim() {
        assert!(!identity(None).is_expired(Utc::now()));
    }

    #[test]
    fn role_matching() {
        let id = identity(None);
        assert!(id.has_role(&["admin", "client"]));
        assert!(!id.has_role(&["admin"]));
        assert_eq!(id.role, "client");
    }
}

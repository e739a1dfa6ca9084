//! Route guarding: a pure decision over session state.
//!
//! No internal state — callers re-evaluate on every render (or, in the CLI,
//! before every protected command).

use licita_core::Identity;

/// What the caller should render or do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session state is still unknown; show a placeholder and nothing else.
    Loading,
    /// Not authenticated; go to the entry route, remembering where the user
    /// was headed for an optional post-login return.
    Redirect { to: String, from: String },
    /// Authenticated but the role is not allowed here; show an access-denied
    /// view (no redirect).
    Denied,
    /// Render the protected content.
    Allow,
}

/// Evaluate the guard for an attempted route.
///
/// `allowed_roles = None` means any authenticated identity may pass.
#[must_use]
pub fn evaluate(
    is_loading: bool,
    identity: Option<&Identity>,
    allowed_roles: Option<&[&str]>,
    attempted_route: &str,
    entry_route: &str,
) -> RouteDecision {
    if is_loading {
        return RouteDecision::Loading;
    }
    let Some(identity) = identity else {
        return RouteDecision::Redirect {
            to: entry_route.to_string(),
            from: attempted_route.to_string(),
        };
    };
    if let Some(roles) = allowed_roles {
        if !identity.has_role(roles) {
            return RouteDecision::Denied;
        }
    }
    RouteDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn identity(role: &str) -> Identity {
        Identity {
            subject: "user@example.com".into(),
            role: role.into(),
            user_id: "usr_1".into(),
            expires_at: None,
        }
    }

    #[test]
    fn loading_wins_regardless_of_authentication() {
        let id = identity("admin");
        assert_eq!(
            evaluate(true, Some(&id), None, "/dashboard", "/login"),
            RouteDecision::Loading
        );
        assert_eq!(
            evaluate(true, None, None, "/dashboard", "/login"),
            RouteDecision::Loading
        );
    }

    #[test]
    fn anonymous_redirects_preserving_attempted_route() {
        assert_eq!(
            evaluate(false, None, None, "/documents", "/login"),
            RouteDecision::Redirect {
                to: "/login".into(),
                from: "/documents".into(),
            }
        );
    }

    #[test]
    fn wrong_role_is_denied_not_redirected() {
        let id = identity("client");
        assert_eq!(
            evaluate(false, Some(&id), Some(&["admin"]), "/admin", "/login"),
            RouteDecision::Denied
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        let id = identity("admin");
        assert_eq!(
            evaluate(false, Some(&id), Some(&["admin"]), "/admin", "/login"),
            RouteDecision::Allow
        );
    }

    #[test]
    fn no_role_requirement_allows_any_identity() {
        let id = identity("client");
        assert_eq!(
            evaluate(false, Some(&id), None, "/dashboard", "/login"),
            RouteDecision::Allow
        );
    }
}

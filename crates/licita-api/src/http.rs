//! Uniform response classification.
//!
//! Applied to every authenticated call regardless of which component issued
//! it:
//! - 401 → clear persisted credentials, notify session expiry once, schedule
//!   a redirect to the entry route, reject. The only forced mid-session
//!   sign-out path.
//! - 403 → notify the denial, reject, keep the session intact.
//! - 5xx → notify a server error, reject.
//! - other non-success statuses pass through as [`ApiError::Api`] untouched.

use std::sync::Arc;
use std::time::Duration;

use crate::error::ApiError;
use crate::notify::NotificationKind;
use crate::ApiClient;

/// Delay before the scheduled redirect, so the expiry notification has a
/// moment to render first.
const REDIRECT_DELAY: Duration = Duration::from_millis(400);

impl ApiClient {
    pub(crate) async fn classify(
        &self,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ApiError::SessionExpired);
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            let message = resp.text().await.unwrap_or_default();
            self.notifier.notify(
                NotificationKind::AccessDenied,
                "You do not have permission to perform this action.",
            );
            return Err(ApiError::Forbidden(message));
        }
        if status.is_server_error() {
            let message = resp.text().await.unwrap_or_default();
            self.notifier.notify(
                NotificationKind::ServerError,
                "The server hit an unexpected error. Try again shortly.",
            );
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        Ok(resp)
    }

    /// Tear down the persisted session and schedule the redirect to the
    /// entry route.
    fn expire_session(&self) {
        if let Err(error) = self.store.clear_token() {
            tracing::warn!(%error, "failed to clear token after 401");
        }
        if let Err(error) = self.store.clear_active_company() {
            tracing::warn!(%error, "failed to clear company selection after 401");
        }
        self.notifier.notify(
            NotificationKind::SessionExpired,
            "Your session has expired. Sign in again.",
        );

        let navigator = Arc::clone(&self.navigator);
        let route = self.entry_route.clone();
        tokio::spawn(async move {
            tokio::time::sleep(REDIRECT_DELAY).await;
            navigator.navigate_to(&route);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{harness, mock_response};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success_passes_response_through() {
        let h = harness();
        let resp = h
            .client
            .classify(mock_response(200, r#"{"ok":true}"#))
            .await
            .expect("success passes through");
        assert_eq!(resp.status(), 200);
        assert!(h.notifier.events.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn unauthorized_clears_credentials_notifies_once_and_redirects() {
        let h = harness();
        h.store.store_token("jwt").expect("token");
        h.store.store_active_company("comp-1").expect("company");

        let err = h
            .client
            .classify(mock_response(401, ""))
            .await
            .expect_err("401 rejects");
        assert!(matches!(err, ApiError::SessionExpired));

        assert!(h.store.load_token().is_none(), "token cleared");
        assert!(
            h.store.load_active_company().is_none(),
            "selection cleared"
        );

        let events = h.notifier.events.lock().unwrap().clone();
        assert_eq!(events.len(), 1, "exactly one notification");
        assert_eq!(events[0].0, NotificationKind::SessionExpired);

        // The redirect is scheduled, not immediate.
        assert!(h.navigator.routes.lock().unwrap().is_empty());
        tokio::time::sleep(REDIRECT_DELAY + Duration::from_millis(100)).await;
        assert_eq!(
            h.navigator.routes.lock().unwrap().as_slice(),
            ["/login".to_string()]
        );
    }

    #[tokio::test]
    async fn forbidden_notifies_but_keeps_session() {
        let h = harness();
        h.store.store_token("jwt").expect("token");

        let err = h
            .client
            .classify(mock_response(403, "not allowed"))
            .await
            .expect_err("403 rejects");
        assert!(matches!(err, ApiError::Forbidden(_)));

        assert_eq!(
            h.store.load_token().as_deref(),
            Some("jwt"),
            "403 never clears the token"
        );
        let events = h.notifier.events.lock().unwrap().clone();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, NotificationKind::AccessDenied);
        assert!(h.navigator.routes.lock().unwrap().is_empty(), "no redirect");
    }

    #[tokio::test]
    async fn server_error_notifies_and_rejects() {
        let h = harness();
        let err = h
            .client
            .classify(mock_response(502, "bad gateway"))
            .await
            .expect_err("5xx rejects");
        assert!(matches!(err, ApiError::Server { status: 502, .. }));
        let events = h.notifier.events.lock().unwrap().clone();
        assert_eq!(events[0].0, NotificationKind::ServerError);
    }

    #[tokio::test]
    async fn other_statuses_pass_through_without_notification() {
        let h = harness();
        let err = h
            .client
            .classify(mock_response(422, "validation failed"))
            .await
            .expect_err("non-success rejects");
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "validation failed");
            }
            other => panic!("expected pass-through error, got {other:?}"),
        }
        assert!(h.notifier.events.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_unauthorized_notifies_per_response() {
        let h = harness();
        let _ = h.client.classify(mock_response(401, "")).await;
        let _ = h.client.classify(mock_response(401, "")).await;
        let events = h.notifier.events.lock().unwrap().clone();
        assert_eq!(events.len(), 2, "one notification per classified 401");
    }
}

//! # licita-api
//!
//! HTTP client for the LicitaDoc REST API.
//!
//! [`ApiClient`] is the single choke point for outbound calls: it attaches
//! the persisted bearer token, applies the uniform response classification
//! (connectivity / 401 / 403 / 5xx), and exposes the domain endpoint surface:
//! - authentication and onboarding (`auth`)
//! - current-user profile and memberships (`users`)
//! - company management (`companies`)
//! - document vault and catalog (`documents`)
//! - dashboards (`dashboard`)

pub mod auth;
pub mod companies;
pub mod dashboard;
pub mod documents;
pub mod users;

mod error;
mod http;
mod notify;

pub use error::ApiError;
pub use notify::{LogNavigator, LogNotifier, Navigator, NotificationKind, Notifier};

use std::sync::Arc;

use licita_auth::CredentialStore;
use licita_config::ApiConfig;

/// HTTP client for the LicitaDoc backend.
///
/// Knows the credential store (for bearer attachment and 401 teardown) and
/// the notification/navigation collaborators. It knows nothing about the
/// session aggregate; that relationship is strictly one-directional.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    entry_route: String,
    store: CredentialStore,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Create a client for the configured backend.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(
        config: &ApiConfig,
        store: CredentialStore,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("licitadoc/0.1")
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            entry_route: config.entry_route.clone(),
            store,
            notifier,
            navigator,
        }
    }

    /// Create a client whose notifications and navigations go to the log
    /// stream.
    #[must_use]
    pub fn with_defaults(config: &ApiConfig, store: CredentialStore) -> Self {
        Self::new(
            config,
            store,
            Arc::new(LogNotifier),
            Arc::new(LogNavigator),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach `Authorization: Bearer <token>` iff a token is persisted; the
    /// header is omitted entirely otherwise.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.store.load_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send an authenticated request and classify the outcome.
    pub(crate) async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        match self.authorize(request).send().await {
            Ok(resp) => self.classify(resp).await,
            Err(error) => {
                self.notifier.notify(
                    NotificationKind::Connectivity,
                    "Could not reach the server. Check your connection.",
                );
                Err(ApiError::Connectivity(error.to_string()))
            }
        }
    }
}

pub(crate) async fn parse_json<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ApiError> {
    resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use super::{ApiClient, Navigator, NotificationKind, Notifier};
    use licita_auth::CredentialStore;
    use licita_config::ApiConfig;

    /// Notifier that records every notification for assertions.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub events: Mutex<Vec<(NotificationKind, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NotificationKind, message: &str) {
            self.events
                .lock()
                .expect("notifier lock")
                .push((kind, message.to_string()));
        }
    }

    /// Navigator that records requested routes.
    #[derive(Default)]
    pub struct RecordingNavigator {
        pub routes: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, route: &str) {
            self.routes
                .lock()
                .expect("navigator lock")
                .push(route.to_string());
        }
    }

    pub struct Harness {
        pub client: ApiClient,
        pub store: CredentialStore,
        pub notifier: Arc<RecordingNotifier>,
        pub navigator: Arc<RecordingNavigator>,
        _tmp: tempfile::TempDir,
    }

    /// Client wired to a throwaway credential store and recording
    /// collaborators. The base URL points nowhere; these harnesses are for
    /// classification tests on fabricated responses, not live calls.
    pub fn harness() -> Harness {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = CredentialStore::at(tmp.path());
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let config = ApiConfig::default();
        let client = ApiClient::new(
            &config,
            store.clone(),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
            Arc::clone(&navigator) as Arc<dyn Navigator>,
        );
        Harness {
            client,
            store,
            notifier,
            navigator,
            _tmp: tmp,
        }
    }

    pub fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .expect("response builds"),
        )
    }
}

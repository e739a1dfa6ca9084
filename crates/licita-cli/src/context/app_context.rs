use std::sync::Arc;

use licita_api::{ApiClient, Navigator, NotificationKind, Notifier};
use licita_auth::CredentialStore;
use licita_config::LicitaConfig;
use licita_session::Session;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LicitaConfig,
    pub store: CredentialStore,
    pub api: ApiClient,
    pub session: Session<ApiClient>,
}

impl AppContext {
    /// Wire the credential store, API client, and session together.
    ///
    /// # Errors
    ///
    /// Fails when the credential store location cannot be resolved.
    pub fn init(config: LicitaConfig) -> anyhow::Result<Self> {
        let store = CredentialStore::from_config(
            &config.auth.keyring_service,
            &config.auth.credentials_dir,
        )?;
        let api = ApiClient::new(
            &config.api,
            store.clone(),
            Arc::new(ConsoleNotifier),
            Arc::new(ConsoleNavigator),
        );
        let session = Session::new(api.clone(), store.clone());
        Ok(Self {
            config,
            store,
            api,
            session,
        })
    }

    /// The company id a command should operate on: an explicit flag wins,
    /// otherwise the active company.
    #[must_use]
    pub fn scope_company(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(ToString::to_string)
            .or_else(|| self.session.active_company().map(|c| c.id.clone()))
    }
}

/// Terminal notifier: global conditions go to stderr so they never corrupt
/// the structured output on stdout.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Connectivity | NotificationKind::ServerError => {
                eprintln!("error: {message}");
            }
            NotificationKind::SessionExpired | NotificationKind::AccessDenied => {
                eprintln!("warning: {message}");
            }
        }
    }
}

/// Terminal navigator: a CLI cannot redirect, so it prints the route hint.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate_to(&self, route: &str) {
        eprintln!("continue at {route} (run `licita auth login`)");
    }
}

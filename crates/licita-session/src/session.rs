//! The session aggregate: identity, tenancy, and their lifecycle.
//!
//! One `Session` per running client, constructed explicitly and handed to
//! consumers — lifecycle is ordinary methods (`initialize`, `sign_out`), so
//! tests build as many independent instances as they need.
//!
//! State machine: `Unknown (is_loading)` → `{Authenticated, Anonymous}`;
//! `Authenticated → Anonymous` only via `sign_out` or expiry detection;
//! `Anonymous → Authenticated` only via `sign_in`.

use licita_api::ApiError;
use licita_auth::{AuthError, CredentialStore, SessionClaims};
use licita_core::Identity;
use licita_core::company::CompanyMembership;

use crate::gateway::Gateway;

/// Captures the identity epoch at the start of a company load so the result
/// can be discarded if a sign-out happened while it was in flight.
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    epoch: u64,
}

/// Client-wide session state.
pub struct Session<G> {
    gateway: G,
    store: CredentialStore,
    identity: Option<Identity>,
    companies: Vec<CompanyMembership>,
    active_company_id: Option<String>,
    is_loading: bool,
    epoch: u64,
}

impl<G: Gateway> Session<G> {
    /// New session in the `Unknown` state (`is_loading = true`).
    pub fn new(gateway: G, store: CredentialStore) -> Self {
        Self {
            gateway,
            store,
            identity: None,
            companies: Vec::new(),
            active_company_id: None,
            is_loading: true,
            epoch: 0,
        }
    }

    // --- Derived state ---

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn companies(&self) -> &[CompanyMembership] {
        &self.companies
    }

    /// The active company. Always resolved against the current company list,
    /// so it can never be a stale copy from before a reload.
    #[must_use]
    pub fn active_company(&self) -> Option<&CompanyMembership> {
        let id = self.active_company_id.as_deref()?;
        self.companies.iter().find(|c| c.id == id)
    }

    // --- Lifecycle ---

    /// Startup rehydration. Runs once.
    ///
    /// Reads the persisted token: absent → anonymous; expired or corrupt →
    /// treated as a sign-out (persisted state cleared); valid → identity
    /// restored and the company load attempted as a non-fatal follow-up.
    /// `is_loading` is cleared before the company load resolves — tenancy
    /// data may arrive after first paint, and a transient failure there must
    /// not sign the user out.
    pub async fn initialize(&mut self) {
        let Some(token) = self.store.load_token() else {
            self.is_loading = false;
            return;
        };

        match SessionClaims::decode(&token) {
            Ok(claims) if claims.is_expired() => {
                tracing::warn!("stored token expired — clearing session");
                self.sign_out();
            }
            Ok(claims) => {
                self.identity = Some(claims.to_identity());
                self.is_loading = false;
                self.load_companies().await;
            }
            Err(error) => {
                tracing::warn!(%error, "stored token invalid — clearing session");
                self.sign_out();
            }
        }
        self.is_loading = false;
    }

    /// Authenticate and establish a session.
    ///
    /// Awaits the company load before returning, so the active company is
    /// already resolved when the caller navigates on.
    ///
    /// # Errors
    ///
    /// Propagates the collaborator's [`AuthError`] unchanged (no retry, no
    /// state mutation on failure); `AuthError::Store` if the token cannot be
    /// persisted.
    pub async fn sign_in(&mut self, identifier: &str, secret: &str) -> Result<(), AuthError> {
        let token = self.gateway.authenticate(identifier, secret).await?;
        let claims = SessionClaims::decode(&token)?;
        self.store.store_token(&token)?;

        self.identity = Some(claims.to_identity());
        self.is_loading = false;
        self.epoch += 1;
        self.load_companies().await;
        Ok(())
    }

    /// Clear the session: persisted token and company selection, identity,
    /// tenancy. Synchronous; storage failures are logged, never surfaced.
    pub fn sign_out(&mut self) {
        if let Err(error) = self.store.clear_token() {
            tracing::warn!(%error, "failed to clear persisted token");
        }
        if let Err(error) = self.store.clear_active_company() {
            tracing::warn!(%error, "failed to clear persisted company selection");
        }
        self.identity = None;
        self.companies.clear();
        self.active_company_id = None;
        self.is_loading = false;
        self.epoch += 1;
    }

    // --- Tenancy ---

    /// Fetch the company list and resolve the active selection.
    ///
    /// Failures are logged and leave the previous companies and selection
    /// untouched — this doubles as a background refresh and must not
    /// interrupt a valid session.
    pub async fn load_companies(&mut self) {
        let ticket = self.begin_load();
        let result = self.gateway.companies_for_current_identity().await;
        self.finish_load(ticket, result);
    }

    /// Start of a company load: capture the current identity epoch.
    #[must_use]
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket { epoch: self.epoch }
    }

    /// Completion of a company load. Results from a previous identity epoch
    /// (a sign-out happened mid-flight) are discarded, not applied.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<CompanyMembership>, ApiError>,
    ) {
        if ticket.epoch != self.epoch {
            tracing::debug!("discarding company list from a previous session epoch");
            return;
        }
        match result {
            Ok(companies) => {
                self.companies = companies;
                self.resolve_active_company();
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load companies; keeping previous tenancy state");
            }
        }
    }

    /// Make `id` the active company.
    ///
    /// Returns `false` (and changes nothing) when the id is not in the
    /// current list — stale UI state is expected, not an error.
    pub fn switch_company(&mut self, id: &str) -> bool {
        if !self.companies.iter().any(|c| c.id == id) {
            tracing::debug!(id, "ignoring switch to unknown company");
            return false;
        }
        self.active_company_id = Some(id.to_string());
        if let Err(error) = self.store.store_active_company(id) {
            tracing::warn!(%error, "failed to persist company selection");
        }
        true
    }

    /// Persisted default-selection: keep the persisted id when it survives
    /// the reload, otherwise fall back to the first company in load order
    /// (or none at all), and re-persist whatever was chosen.
    fn resolve_active_company(&mut self) {
        let chosen = self
            .store
            .load_active_company()
            .filter(|id| self.companies.iter().any(|c| &c.id == id))
            .or_else(|| self.companies.first().map(|c| c.id.clone()));

        match &chosen {
            Some(id) => {
                if let Err(error) = self.store.store_active_company(id) {
                    tracing::warn!(%error, "failed to persist company selection");
                }
            }
            None => {
                if let Err(error) = self.store.clear_active_company() {
                    tracing::warn!(%error, "failed to clear persisted company selection");
                }
            }
        }
        self.active_company_id = chosen;
    }
}

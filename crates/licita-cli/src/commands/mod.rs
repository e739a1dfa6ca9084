pub mod auth;
pub mod catalog;
pub mod company;
pub mod dashboard;
pub mod document;
pub mod onboard;

use licita_session::{RouteDecision, guard};

use crate::context::AppContext;

/// Roles allowed into the administration area.
pub(crate) const ADMIN_ROLES: &[&str] = &["admin"];

/// Initialize the session and run the route guard before a protected command.
///
/// The CLI equivalent of the UI's protected region: loading and redirect
/// decisions become actionable errors, access denial keeps the session
/// intact.
pub(crate) async fn require_session(
    ctx: &mut AppContext,
    allowed_roles: Option<&[&str]>,
    attempted_route: &str,
) -> anyhow::Result<()> {
    ctx.session.initialize().await;
    match guard::evaluate(
        ctx.session.is_loading(),
        ctx.session.identity(),
        allowed_roles,
        attempted_route,
        &ctx.config.api.entry_route,
    ) {
        RouteDecision::Allow => Ok(()),
        RouteDecision::Loading => anyhow::bail!("session state is still loading — try again"),
        RouteDecision::Redirect { to, .. } => {
            anyhow::bail!("not authenticated — sign in at {to} (run `licita auth login`)")
        }
        RouteDecision::Denied => {
            anyhow::bail!("access denied — your role does not allow this command")
        }
    }
}

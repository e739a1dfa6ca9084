use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    subject: Option<String>,
    role: Option<String>,
    user_id: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
    active_company: Option<String>,
    note: Option<String>,
}

pub fn handle(flags: &GlobalFlags, ctx: &AppContext) -> anyhow::Result<()> {
    let status = match licita_auth::rehydrate(&ctx.store) {
        Ok(Some(claims)) => AuthStatusResponse {
            authenticated: true,
            subject: Some(claims.subject.clone()),
            role: Some(claims.role.clone()),
            user_id: Some(claims.user_id.clone()),
            expires_at: claims.expires_at.map(|dt| dt.to_rfc3339()),
            token_source: ctx.store.token_source(),
            active_company: ctx.store.load_active_company(),
            note: None,
        },
        Ok(None) => AuthStatusResponse {
            authenticated: false,
            subject: None,
            role: None,
            user_id: None,
            expires_at: None,
            token_source: None,
            active_company: None,
            note: Some("no valid token found".into()),
        },
        Err(error) => AuthStatusResponse {
            authenticated: false,
            subject: None,
            role: None,
            user_id: None,
            expires_at: None,
            token_source: None,
            active_company: None,
            note: Some(error.to_string()),
        },
    };

    output(&status, flags.format)
}

use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    signed_out: bool,
}

pub fn handle(flags: &GlobalFlags, ctx: &mut AppContext) -> anyhow::Result<()> {
    ctx.session.sign_out();
    output(&AuthLogoutResponse { signed_out: true }, flags.format)
}

use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with e-mail and password.
    Login(AuthLoginArgs),
    /// Clear stored credentials and company selection.
    Logout,
    /// Show current auth status (offline — decodes the stored token).
    Status,
    /// Fetch the signed-in user's profile from the server.
    Whoami,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account e-mail.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
}

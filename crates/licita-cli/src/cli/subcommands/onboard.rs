use clap::{Args, Subcommand};

/// Onboarding: account registration, contract acceptance, checkout.
#[derive(Clone, Debug, Subcommand)]
pub enum OnboardCommands {
    /// Create a new account (a provisional company is created with it).
    Register(RegisterArgs),
    /// Accept the service contract for a company (simulated signature).
    SignContract(SignContractArgs),
    /// Run the simulated checkout to activate the account.
    Pay(PayArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RegisterArgs {
    /// Account e-mail.
    #[arg(long)]
    pub email: String,
    /// Account password (minimum 8 characters).
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct SignContractArgs {
    /// Company id (defaults to the active company).
    #[arg(long)]
    pub company: Option<String>,
    /// Accept the service terms.
    #[arg(long)]
    pub accept_terms: bool,
    /// Accept the digital proxy for certificate retrieval.
    #[arg(long)]
    pub accept_proxy: bool,
}

#[derive(Clone, Debug, Args)]
pub struct PayArgs {
    /// Account e-mail to activate.
    #[arg(long)]
    pub email: String,
}

use clap::{Args, Subcommand};

/// Company and team commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CompanyCommands {
    /// List all companies (administrators).
    List,
    /// Show a company (defaults to the active one).
    Show(CompanyShowArgs),
    /// Switch the active company.
    Switch(CompanySwitchArgs),
    /// List the team of a company.
    Team(CompanyScopeArgs),
    /// Invite a user to a company's team.
    Invite(CompanyInviteArgs),
    /// Update company data.
    Update(CompanyUpdateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CompanyShowArgs {
    /// Company id (defaults to the active company).
    pub id: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CompanySwitchArgs {
    /// Company id to make active.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CompanyScopeArgs {
    /// Company id (defaults to the active company).
    #[arg(long)]
    pub company: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CompanyInviteArgs {
    /// E-mail of the user to invite.
    pub email: String,
    /// Membership role: MASTER or VIEWER.
    #[arg(long, default_value = "VIEWER")]
    pub role: String,
    /// Company id (defaults to the active company).
    #[arg(long)]
    pub company: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CompanyUpdateArgs {
    /// Company id (defaults to the active company).
    #[arg(long)]
    pub company: Option<String>,
    /// New legal name.
    #[arg(long)]
    pub legal_name: Option<String>,
    /// New trade name.
    #[arg(long)]
    pub trade_name: Option<String>,
    /// New corporate e-mail.
    #[arg(long)]
    pub email: Option<String>,
    /// New phone number.
    #[arg(long)]
    pub phone: Option<String>,
    /// New responsible contact name.
    #[arg(long)]
    pub contact_name: Option<String>,
    /// New city.
    #[arg(long)]
    pub city: Option<String>,
    /// New state.
    #[arg(long)]
    pub state: Option<String>,
}

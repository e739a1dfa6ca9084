use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("authentication request failed: {0}")]
    Network(String),

    #[error("authentication endpoint returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid bearer token: {0}")]
    InvalidToken(String),

    #[error("token expired — run `licita auth login` again")]
    TokenExpired,

    #[error("credential store error: {0}")]
    Store(String),
}

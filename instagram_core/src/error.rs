pub type IgResult<T, E = IgError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum IgError {
    #[error("instagram session is not authorized")]
    Unauthorized,

    #[error("instagram rate limit reached")]
    RateLimited,

    #[error("instagram user not found: {0}")]
    UserNotFound(String),

    #[error("instagram requires completing a challenge for this session")]
    ChallengeRequired,

    #[error("limit must be between 1 and 200 (got {0})")]
    InvalidLimit(u32),

    #[error("instagram transport error")]
    Http(#[from] reqwest::Error),

    #[error("an internal client error occurred")]
    Anyhow(#[from] anyhow::Error),
}

impl IgError {
    /// Human-readable representation for a tool result.
    ///
    /// Tool callers never see the raw error chain, only this line.
    pub fn to_tool_message(&self) -> String {
        match self {
            Self::Unauthorized => {
                "Error: Instagram rejected the session. Refresh the session cookie and restart the server.".to_string()
            }
            Self::RateLimited => {
                "Error: Rate limited by Instagram. Wait a few minutes before retrying.".to_string()
            }
            Self::UserNotFound(username) => {
                format!("Error: Instagram user not found: {username}")
            }
            Self::ChallengeRequired => {
                "Error: Instagram requires completing a challenge. Log in from a browser to resolve it.".to_string()
            }
            Self::InvalidLimit(got) => {
                format!("Error: limit must be between 1 and 200 (got {got})")
            }
            Self::Http(e) => {
                format!("Error: request to Instagram failed: {e}")
            }
            Self::Anyhow(e) => {
                format!("Error: {e:#}")
            }
        }
    }
}

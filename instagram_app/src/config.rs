use instagram_client::Session;

#[derive(clap::Parser)]
pub struct Config {
    /// `sessionid` cookie of an authenticated Instagram web session.
    #[clap(long, env)]
    pub ig_session_id: String,

    /// `ds_user_id` cookie: the numeric user id of the session owner.
    #[clap(long, env)]
    pub ig_user_id: String,

    /// `csrftoken` cookie, if available.
    #[clap(long, env)]
    pub ig_csrf_token: Option<String>,

    /// User agent presented to Instagram. The private API is only served to
    /// user agents it recognizes.
    #[clap(
        long,
        env,
        default_value = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 Instagram 295.0.0.32.119"
    )]
    pub ig_user_agent: String,

    /// Address of the HTTP transport.
    #[clap(long, env, default_value = "127.0.0.1:8787")]
    pub listen_addr: std::net::SocketAddr,

    /// Serve MCP over stdio instead of HTTP.
    #[clap(long, env)]
    pub stdio: bool,
}

impl Config {
    pub fn session(&self) -> Session {
        Session {
            session_id: self.ig_session_id.clone(),
            user_id: self.ig_user_id.clone(),
            csrf_token: self.ig_csrf_token.clone(),
        }
    }
}

use instagram_core::error::{IgError, IgResult};

use entrait::entrait_export as entrait;

pub mod friendship_api;
pub mod user_api;

pub(crate) const BASE_URL: &str = "https://i.instagram.com/api/v1";

/// App id the Instagram web client sends with every API request.
const IG_APP_ID: &str = "936619743392459";

/// Cookie material of an authenticated Instagram web session.
#[derive(Clone)]
pub struct Session {
    pub session_id: String,
    /// The viewer's own numeric user id (`ds_user_id` cookie).
    pub user_id: String,
    pub csrf_token: Option<String>,
}

impl Session {
    pub fn cookie_header(&self) -> String {
        let mut cookie = format!(
            "sessionid={}; ds_user_id={}",
            self.session_id, self.user_id
        );
        if let Some(csrf_token) = &self.csrf_token {
            cookie.push_str("; csrftoken=");
            cookie.push_str(csrf_token);
        }
        cookie
    }
}

#[derive(Clone)]
pub struct Ig {
    pub http: reqwest::Client,
    pub session: Session,
}

impl Ig {
    pub fn init(session: Session, user_agent: &str) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::HeaderName::from_static("x-ig-app-id"),
            reqwest::header::HeaderValue::from_static(IG_APP_ID),
        );

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Ig { http, session })
    }
}

/// Export an entrait module
pub trait ClientModule:
    friendship_api::GetFollowing
    + friendship_api::GetFollowers
    + user_api::ResolveUserId
    + user_api::FetchProfile
{
}

impl ClientModule for ::implementation::Impl<Ig> {}
impl ClientModule for unimock::Unimock {}

/// Import an "entrait module"
pub trait GetClient {
    type Target: ClientModule + Send + Sync;

    fn get_client(&self) -> &Self::Target;
}

impl GetClient for ::implementation::Impl<Ig> {
    type Target = Self;

    fn get_client(&self) -> &Self {
        self
    }
}

impl GetClient for unimock::Unimock {
    type Target = Self;

    fn get_client(&self) -> &Self {
        self
    }
}

#[entrait(pub GetHttp)]
fn get_http(ig: &Ig) -> &reqwest::Client {
    &ig.http
}

#[entrait(pub GetSession)]
fn get_session(ig: &Ig) -> &Session {
    &ig.session
}

trait IgResultExt<T> {
    fn on_status(
        self,
        status: reqwest::StatusCode,
        map_err: impl FnOnce() -> IgError,
    ) -> Result<T, IgError>;
}

impl<T, E> IgResultExt<T> for Result<T, E>
where
    E: Into<IgError>,
{
    fn on_status(
        self,
        status: reqwest::StatusCode,
        map_err: impl FnOnce() -> IgError,
    ) -> Result<T, IgError> {
        self.map_err(|e| match e.into() {
            IgError::Http(http_error) if http_error.status() == Some(status) => map_err(),
            e => e,
        })
    }
}

/// Instagram reports some failures inside a 200 response body.
fn check_api_status(status: Option<&str>, message: Option<&str>) -> IgResult<()> {
    if status != Some("fail") {
        return Ok(());
    }

    match message {
        Some("login_required") => Err(IgError::Unauthorized),
        Some("challenge_required") => Err(IgError::ChallengeRequired),
        Some(message) => Err(IgError::Anyhow(anyhow::anyhow!(
            "instagram api failure: {message}"
        ))),
        None => Err(IgError::Anyhow(anyhow::anyhow!("instagram api failure"))),
    }
}

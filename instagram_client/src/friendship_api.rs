use crate::IgResultExt;
use crate::{check_api_status, user_api, GetHttp, GetSession, BASE_URL};
use instagram_core::error::{IgError, IgResult};

use entrait::entrait_export as entrait;
use reqwest::header::COOKIE;
use reqwest::StatusCode;

/// Instagram serves friendship lists in pages of at most this many accounts.
const PAGE_SIZE: u32 = 100;

/// One account from a friendship (following/followers) listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FollowedAccount {
    pub user_id: String,
    pub username: String,
    pub full_name: String,
    pub profile_pic_url: String,
    pub is_private: bool,
    pub is_verified: bool,
}

#[derive(serde::Deserialize)]
struct FriendshipPage {
    #[serde(default)]
    users: Vec<FriendshipUser>,
    #[serde(default)]
    next_max_id: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(serde::Deserialize)]
struct FriendshipUser {
    pk: u64,
    username: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    profile_pic_url: String,
    #[serde(default)]
    is_private: bool,
    #[serde(default)]
    is_verified: bool,
}

impl From<FriendshipUser> for FollowedAccount {
    fn from(user: FriendshipUser) -> Self {
        Self {
            user_id: user.pk.to_string(),
            username: user.username,
            full_name: user.full_name,
            profile_pic_url: user.profile_pic_url,
            is_private: user.is_private,
            is_verified: user.is_verified,
        }
    }
}

/// Accounts the given user is following, at most `limit` of them.
#[entrait(pub GetFollowing)]
async fn get_following(
    deps: &(impl GetHttp + GetSession + user_api::ResolveUserId),
    username: Option<String>,
    limit: u32,
) -> IgResult<Vec<FollowedAccount>> {
    let user_id = deps.resolve_user_id(username.as_deref()).await?;
    fetch_friendships(deps, &user_id, "following", limit).await
}

/// Accounts following the given user, at most `limit` of them.
#[entrait(pub GetFollowers)]
async fn get_followers(
    deps: &(impl GetHttp + GetSession + user_api::ResolveUserId),
    username: Option<String>,
    limit: u32,
) -> IgResult<Vec<FollowedAccount>> {
    let user_id = deps.resolve_user_id(username.as_deref()).await?;
    fetch_friendships(deps, &user_id, "followers", limit).await
}

async fn fetch_friendships(
    deps: &(impl GetHttp + GetSession),
    user_id: &str,
    direction: &str,
    limit: u32,
) -> IgResult<Vec<FollowedAccount>> {
    let mut accounts: Vec<FollowedAccount> = Vec::new();
    let mut max_id: Option<String> = None;

    while (accounts.len() as u32) < limit {
        let count = page_size(limit, accounts.len());

        let mut request = deps
            .get_http()
            .get(format!("{BASE_URL}/friendships/{user_id}/{direction}/"))
            .query(&[("count", count.to_string())])
            .header(COOKIE, deps.get_session().cookie_header());
        if let Some(cursor) = &max_id {
            request = request.query(&[("max_id", cursor.as_str())]);
        }

        let response = request
            .send()
            .await?
            .error_for_status()
            .on_status(StatusCode::NOT_FOUND, || {
                IgError::UserNotFound(user_id.to_string())
            })
            .on_status(StatusCode::TOO_MANY_REQUESTS, || IgError::RateLimited)
            .on_status(StatusCode::UNAUTHORIZED, || IgError::Unauthorized)
            .on_status(StatusCode::FORBIDDEN, || IgError::Unauthorized)?;

        let page: FriendshipPage = response.json().await?;
        check_api_status(page.status.as_deref(), page.message.as_deref())?;

        tracing::debug!(
            "fetched {} {direction} accounts for user {user_id}",
            page.users.len()
        );

        if page.users.is_empty() {
            break;
        }
        accounts.extend(page.users.into_iter().map(Into::into));

        match page.next_max_id {
            Some(cursor) => max_id = Some(cursor),
            None => break,
        }
    }

    accounts.truncate(limit as usize);
    Ok(accounts)
}

fn page_size(limit: u32, fetched: usize) -> u32 {
    PAGE_SIZE.min(limit - fetched as u32)
}

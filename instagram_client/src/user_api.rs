use crate::IgResultExt;
use crate::{check_api_status, GetHttp, GetSession, BASE_URL};
use instagram_core::error::{IgError, IgResult};

use entrait::entrait_export as entrait;
use reqwest::header::COOKIE;
use reqwest::StatusCode;

/// Profile of a single Instagram account as returned by the mobile API.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileInfo {
    pub user_id: String,
    pub username: String,
    pub full_name: String,
    pub biography: String,
    pub profile_pic_url: String,
    pub follower_count: u64,
    pub following_count: u64,
    pub is_private: bool,
    pub is_verified: bool,
}

#[derive(serde::Deserialize)]
struct WebProfileEnvelope {
    data: WebProfileData,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(serde::Deserialize)]
struct WebProfileData {
    #[serde(default)]
    user: Option<WebProfileUser>,
}

#[derive(serde::Deserialize)]
struct WebProfileUser {
    id: String,
}

#[derive(serde::Deserialize)]
struct UserInfoEnvelope {
    #[serde(default)]
    user: Option<UserInfo>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(serde::Deserialize)]
struct UserInfo {
    pk: u64,
    username: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    biography: String,
    #[serde(default)]
    profile_pic_url: String,
    #[serde(default)]
    follower_count: u64,
    #[serde(default)]
    following_count: u64,
    #[serde(default)]
    is_private: bool,
    #[serde(default)]
    is_verified: bool,
}

impl From<UserInfo> for ProfileInfo {
    fn from(user: UserInfo) -> Self {
        Self {
            user_id: user.pk.to_string(),
            username: user.username,
            full_name: user.full_name,
            biography: user.biography,
            profile_pic_url: user.profile_pic_url,
            follower_count: user.follower_count,
            following_count: user.following_count,
            is_private: user.is_private,
            is_verified: user.is_verified,
        }
    }
}

/// Resolve a username to Instagram's numeric user id.
///
/// `None` means the viewer itself, whose id is already part of the session.
#[entrait(pub ResolveUserId)]
async fn resolve_user_id(
    deps: &(impl GetHttp + GetSession),
    username: Option<&str>,
) -> IgResult<String> {
    let username = match username {
        None => return Ok(deps.get_session().user_id.clone()),
        Some(username) => username,
    };

    let response = deps
        .get_http()
        .get(format!("{BASE_URL}/users/web_profile_info/"))
        .query(&[("username", username)])
        .header(COOKIE, deps.get_session().cookie_header())
        .send()
        .await?
        .error_for_status()
        .on_status(StatusCode::NOT_FOUND, || {
            IgError::UserNotFound(username.to_string())
        })
        .on_status(StatusCode::TOO_MANY_REQUESTS, || IgError::RateLimited)
        .on_status(StatusCode::UNAUTHORIZED, || IgError::Unauthorized)
        .on_status(StatusCode::FORBIDDEN, || IgError::Unauthorized)?;

    let envelope: WebProfileEnvelope = response.json().await?;
    check_api_status(envelope.status.as_deref(), envelope.message.as_deref())?;

    envelope
        .data
        .user
        .map(|user| user.id)
        .ok_or_else(|| IgError::UserNotFound(username.to_string()))
}

#[entrait(pub FetchProfile)]
async fn fetch_profile(
    deps: &(impl GetHttp + GetSession + ResolveUserId),
    username: Option<String>,
) -> IgResult<ProfileInfo> {
    let user_id = deps.resolve_user_id(username.as_deref()).await?;

    let response = deps
        .get_http()
        .get(format!("{BASE_URL}/users/{user_id}/info/"))
        .header(COOKIE, deps.get_session().cookie_header())
        .send()
        .await?
        .error_for_status()
        .on_status(StatusCode::NOT_FOUND, || {
            IgError::UserNotFound(username.clone().unwrap_or(user_id.clone()))
        })
        .on_status(StatusCode::TOO_MANY_REQUESTS, || IgError::RateLimited)
        .on_status(StatusCode::UNAUTHORIZED, || IgError::Unauthorized)
        .on_status(StatusCode::FORBIDDEN, || IgError::Unauthorized)?;

    let envelope: UserInfoEnvelope = response.json().await?;
    check_api_status(envelope.status.as_deref(), envelope.message.as_deref())?;

    envelope
        .user
        .map(Into::into)
        .ok_or_else(|| IgError::UserNotFound(username.unwrap_or(user_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Session;

    use assert_matches::*;
    use unimock::*;

    fn test_session() -> Session {
        Session {
            session_id: "s3ss10n".to_string(),
            user_id: "4242".to_string(),
            csrf_token: None,
        }
    }

    #[tokio::test]
    async fn no_username_resolves_to_the_viewer_id() {
        let deps = mock(Some(
            crate::get_session::Fn
                .each_call(matching!())
                .returns(test_session())
                .in_any_order(),
        ));

        let user_id = resolve_user_id(&deps, None).await.unwrap();

        assert_eq!("4242", user_id);
    }

    #[test]
    fn web_profile_payload_exposes_the_user_id() {
        let envelope: WebProfileEnvelope = serde_json::from_str(
            r#"{
                "data": {
                    "user": {
                        "id": "17841400000000000",
                        "username": "jane_doe"
                    }
                },
                "status": "ok"
            }"#,
        )
        .unwrap();

        assert_eq!(
            "17841400000000000",
            envelope.data.user.map(|user| user.id).unwrap()
        );
    }

    #[test]
    fn missing_web_profile_user_is_not_found() {
        let envelope: WebProfileEnvelope =
            serde_json::from_str(r#"{ "data": {}, "status": "ok" }"#).unwrap();

        assert_matches!(envelope.data.user, None);
    }

    #[test]
    fn user_info_payload_becomes_a_profile() {
        let envelope: UserInfoEnvelope = serde_json::from_str(
            r#"{
                "user": {
                    "pk": 4242,
                    "username": "jane_doe",
                    "full_name": "Jane Doe",
                    "biography": "hello",
                    "profile_pic_url": "https://cdn.example/jane.jpg",
                    "follower_count": 10,
                    "following_count": 20,
                    "is_private": false,
                    "is_verified": true
                },
                "status": "ok"
            }"#,
        )
        .unwrap();

        let profile = ProfileInfo::from(envelope.user.unwrap());

        assert_eq!("4242", profile.user_id);
        assert_eq!("jane_doe", profile.username);
        assert_eq!(10, profile.follower_count);
        assert!(profile.is_verified);
    }

    #[test]
    fn user_info_defaults_optional_fields() {
        let envelope: UserInfoEnvelope = serde_json::from_str(
            r#"{ "user": { "pk": 7, "username": "minimal" }, "status": "ok" }"#,
        )
        .unwrap();

        let profile = ProfileInfo::from(envelope.user.unwrap());

        assert_eq!("", profile.full_name);
        assert_eq!(0, profile.follower_count);
        assert!(!profile.is_private);
    }
}

use crate::profile_url;
use instagram_client::user_api::FetchProfile;
use instagram_client::user_api::ProfileInfo;
use instagram_client::GetClient;
use instagram_core::error::IgResult;
use instagram_core::tool::{ToolDescriptor, ToolResponse};

use entrait::entrait_export as entrait;

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: "get_user_profile".to_string(),
        description: "Get profile information for an Instagram account."
            .to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "username": {
                    "type": "string",
                    "description": "Instagram username to look up. \
                                    Leave empty to get your own profile."
                }
            }
        }),
    }
}

#[derive(serde::Deserialize, Default, Eq, PartialEq)]
#[serde(default)]
pub struct UserProfileParams {
    pub username: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub user_id: String,
    pub username: String,
    pub full_name: String,
    pub biography: String,
    pub profile_url: String,
    pub profile_pic_url: String,
    pub follower_count: u64,
    pub following_count: u64,
    pub is_private: bool,
    pub is_verified: bool,
}

impl From<ProfileInfo> for ProfileReport {
    fn from(profile: ProfileInfo) -> Self {
        let profile_url = profile_url(&profile.username);
        Self {
            user_id: profile.user_id,
            username: profile.username,
            full_name: profile.full_name,
            biography: profile.biography,
            profile_url,
            profile_pic_url: profile.profile_pic_url,
            follower_count: profile.follower_count,
            following_count: profile.following_count,
            is_private: profile.is_private,
            is_verified: profile.is_verified,
        }
    }
}

#[entrait(pub FetchUserProfile)]
async fn fetch_user_profile(deps: &impl GetClient, params: UserProfileParams) -> ToolResponse {
    match profile_report(deps, params).await {
        Ok(report) => ToolResponse::json(&report),
        Err(error) => ToolResponse::from_error(&error),
    }
}

async fn profile_report(
    deps: &impl GetClient,
    params: UserProfileParams,
) -> IgResult<ProfileReport> {
    let profile = deps.get_client().fetch_profile(params.username).await?;
    Ok(profile.into())
}

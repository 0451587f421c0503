use crate::following::FollowedEntry;
use crate::resolve_limit;
use instagram_client::friendship_api::GetFollowers;
use instagram_client::GetClient;
use instagram_core::error::IgResult;
use instagram_core::tool::{ToolDescriptor, ToolResponse};

use entrait::entrait_export as entrait;

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: "get_followers".to_string(),
        description: "Get a list of Instagram accounts following a user. \
                      Can get the followers list for any public account or your own account."
            .to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "username": {
                    "type": "string",
                    "description": "Instagram username to get the followers list for. \
                                    Leave empty to get your own followers list."
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 200,
                    "default": 50,
                    "description": "Maximum number of accounts to retrieve (1-200). Default is 50."
                }
            }
        }),
    }
}

#[derive(serde::Deserialize, Default, Eq, PartialEq)]
#[serde(default)]
pub struct FollowersParams {
    pub username: Option<String>,
    pub limit: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(test, derive(Debug))]
pub struct FollowersReport {
    pub count: usize,
    pub followers: Vec<FollowedEntry>,
}

#[entrait(pub ListFollowers)]
async fn list_followers(deps: &impl GetClient, params: FollowersParams) -> ToolResponse {
    match followers_report(deps, params).await {
        Ok(report) => ToolResponse::json(&report),
        Err(error) => ToolResponse::from_error(&error),
    }
}

async fn followers_report(
    deps: &impl GetClient,
    params: FollowersParams,
) -> IgResult<FollowersReport> {
    let limit = resolve_limit(params.limit)?;
    let accounts = deps
        .get_client()
        .get_followers(params.username, limit)
        .await?;

    Ok(FollowersReport {
        count: accounts.len(),
        followers: accounts.into_iter().map(Into::into).collect(),
    })
}

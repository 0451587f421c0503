use crate::{profile_url, resolve_limit};
use instagram_client::friendship_api::FollowedAccount;
use instagram_client::friendship_api::GetFollowing;
use instagram_client::GetClient;
use instagram_core::error::IgResult;
use instagram_core::tool::{ToolDescriptor, ToolResponse};

use entrait::entrait_export as entrait;

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: "get_following".to_string(),
        description: "Get a list of Instagram accounts a user is following. \
                      Can get the following list for any public account or your own account."
            .to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "username": {
                    "type": "string",
                    "description": "Instagram username to get the following list for. \
                                    Leave empty to get your own following list."
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
pub struct FollowingParams {
    pub username: Option<String>,
    pub limit: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone)]
#[cfg_attr(test, derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct FollowedEntry {
    pub user_id: String,
    pub username: String,
    pub full_name: String,
    pub profile_pic_url: String,
    pub profile_url: String,
    pub is_private: bool,
    pub is_verified: bool,
}

impl From<FollowedAccount> for FollowedEntry {
    fn from(account: FollowedAccount) -> Self {
        let profile_url = profile_url(&account.username);
        Self {
            user_id: account.user_id,
            username: account.username,
            full_name: account.full_name,
            profile_pic_url: account.profile_pic_url,
            profile_url,
            is_private: account.is_private,
            is_verified: account.is_verified,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(test, derive(Debug))]
pub struct FollowingReport {
    pub count: usize,
    pub following: Vec<FollowedEntry>,
}

#[entrait(pub ListFollowing)]
async fn list_following(deps: &impl GetClient, params: FollowingParams) -> ToolResponse {
    match following_report(deps, params).await {
        Ok(report) => ToolResponse::json(&report),
        Err(error) => ToolResponse::from_error(&error),
    }
}

async fn following_report(
    deps: &impl GetClient,
    params: FollowingParams,
) -> IgResult<FollowingReport> {
    let limit = resolve_limit(params.limit)?;
    let accounts = deps
        .get_client()
        .get_following(params.username, limit)
        .await?;

    Ok(FollowingReport {
        count: accounts.len(),
        following: accounts.into_iter().map(Into::into).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use instagram_client::friendship_api;
    use instagram_core::error::IgError;
    use instagram_core::tool::ToolContent;

    use unimock::*;

    fn test_account(n: u32) -> FollowedAccount {
        FollowedAccount {
            user_id: format!("10{n}"),
            username: format!("user{n}"),
            full_name: format!("User {n}"),
            profile_pic_url: format!("https://cdn.example/user{n}.jpg"),
            is_private: n % 2 == 0,
            is_verified: false,
        }
    }

    fn response_text(response: &ToolResponse) -> &str {
        match response.content.as_slice() {
            [ToolContent::Text { text }] => text,
            _ => panic!("expected exactly one text content item"),
        }
    }

    #[tokio::test]
    async fn omitted_limit_calls_the_client_with_50() {
        let deps = mock(Some(
            friendship_api::get_following::Fn
                .next_call(matching!(None, 50))
                .answers(|_| Ok(vec![]))
                .once()
                .in_order(),
        ));

        let response = list_following(&deps, FollowingParams::default()).await;

        assert_eq!(None, response.is_error);
    }

    #[tokio::test]
    async fn limit_bound_values_are_forwarded_unchanged() {
        let deps = mock([
            friendship_api::get_following::Fn
                .next_call(matching!(None, 1))
                .answers(|_| Ok(vec![]))
                .once()
                .in_order(),
            friendship_api::get_following::Fn
                .next_call(matching!(None, 200))
                .answers(|_| Ok(vec![]))
                .once()
                .in_order(),
        ]);

        for limit in [1, 200] {
            let response = list_following(
                &deps,
                FollowingParams {
                    username: None,
                    limit: Some(limit),
                },
            )
            .await;

            assert_eq!(None, response.is_error);
        }
    }

    #[tokio::test]
    async fn accounts_are_projected_with_derived_profile_urls() {
        let deps = mock(Some(
            friendship_api::get_following::Fn
                .next_call(matching!((Some(username), 2) if username == "jane_doe"))
                .answers(|_| Ok(vec![test_account(1), test_account(2)]))
                .once()
                .in_order(),
        ));

        let response = list_following(
            &deps,
            FollowingParams {
                username: Some("jane_doe".to_string()),
                limit: Some(2),
            },
        )
        .await;

        assert_eq!(None, response.is_error);

        let value: serde_json::Value = serde_json::from_str(response_text(&response)).unwrap();
        assert_eq!(serde_json::json!(2), value["count"]);

        let following = value["following"].as_array().unwrap();
        assert_eq!(2, following.len());
        assert_eq!(
            serde_json::json!("https://www.instagram.com/user1/"),
            following[0]["profileUrl"]
        );
        assert_eq!(serde_json::json!("101"), following[0]["userId"]);
        assert_eq!(serde_json::json!("User 2"), following[1]["fullName"]);
    }

    #[tokio::test]
    async fn report_round_trips_field_for_field() {
        let deps = mock(Some(
            friendship_api::get_following::Fn
                .next_call(matching!(None, 50))
                .answers(|_| Ok(vec![test_account(1)]))
                .once()
                .in_order(),
        ));

        let response = list_following(&deps, FollowingParams::default()).await;
        let report: FollowingReport = serde_json::from_str(response_text(&response)).unwrap();

        assert_eq!(1, report.count);
        let entry = &report.following[0];
        assert_eq!("101", entry.user_id);
        assert_eq!("user1", entry.username);
        assert_eq!("User 1", entry.full_name);
        assert_eq!("https://cdn.example/user1.jpg", entry.profile_pic_url);
        assert_eq!("https://www.instagram.com/user1/", entry.profile_url);
        assert!(!entry.is_private);
        assert!(!entry.is_verified);
    }

    #[tokio::test]
    async fn client_failure_becomes_an_error_envelope() {
        let deps = mock(Some(
            friendship_api::get_following::Fn
                .next_call(matching!(_))
                .answers(|_| Err(IgError::RateLimited))
                .once()
                .in_order(),
        ));

        let response = list_following(&deps, FollowingParams::default()).await;

        assert_eq!(Some(true), response.is_error);
        assert_eq!(1, response.content.len());
        assert!(response_text(&response).contains("Rate limited"));
    }

    #[tokio::test]
    async fn out_of_range_limit_is_rejected_without_calling_the_client() {
        // No clauses registered: any client call would panic the test.
        let deps = mock(None::<Clause>);

        for limit in [0, 201] {
            let response = list_following(
                &deps,
                FollowingParams {
                    username: None,
                    limit: Some(limit),
                },
            )
            .await;

            assert_eq!(Some(true), response.is_error);
            assert!(response_text(&response).contains("limit must be between 1 and 200"));
        }
    }
}

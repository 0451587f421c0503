use instagram_core::error::{IgError, IgResult};
use instagram_core::tool::ToolDescriptor;

pub mod followers;
pub mod following;
pub mod user_profile;

pub const DEFAULT_LIMIT: u32 = 50;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 200;

/// Descriptors of every tool this server exposes, in registration order.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        following::descriptor(),
        followers::descriptor(),
        user_profile::descriptor(),
    ]
}

/// Default and bounds-check an optional caller-provided limit.
fn resolve_limit(limit: Option<u32>) -> IgResult<u32> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(IgError::InvalidLimit(limit));
    }
    Ok(limit)
}

fn profile_url(username: &str) -> String {
    format!("https://www.instagram.com/{username}/")
}

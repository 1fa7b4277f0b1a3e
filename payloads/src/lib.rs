use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use requests::{IdeaSort, ListQuery, Page};

/// Id type wrapper helps ensure we don't mix up ids for different resources.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct IdeaId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct UserId(pub Uuid);

// Ids appear as route path segments, so they parse back from their
// display form.

impl FromStr for IdeaId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(IdeaId(Uuid::from_str(s)?))
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserId(Uuid::from_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_round_trips_through_display() {
        let id = UserId(Uuid::new_v4());
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_idea_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<IdeaId>().is_err());
    }
}

use jiff::Timestamp;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{IdeaId, UserId};

/// One page of a list endpoint's results.
///
/// `count` is the total number of matching items across all pages, not the
/// length of `data`; it exists to derive the page count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageOf<T> {
    pub data: Vec<T>,
    pub count: i64,
}

impl<T> PageOf<T> {
    /// Number of pages needed to show `count` items, `limit` per page.
    pub fn total_pages(&self, limit: i64) -> i64 {
        if limit <= 0 {
            return 0;
        }
        (self.count + limit - 1) / limit
    }
}

pub type IdeasPage = PageOf<Idea>;
pub type UsersPage = PageOf<UserMe>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    pub created_at: Timestamp,
    pub name: String,
    pub description: String,
    pub upvoted_by: Vec<UserId>,
    pub downvoted_by: Vec<UserId>,
    pub creator_id: UserId,
}

impl Idea {
    pub fn upvotes(&self) -> usize {
        self.upvoted_by.len()
    }

    pub fn downvotes(&self) -> usize {
        self.downvoted_by.len()
    }

    pub fn is_upvoted_by(&self, user_id: UserId) -> bool {
        self.upvoted_by.contains(&user_id)
    }

    pub fn is_downvoted_by(&self, user_id: UserId) -> bool {
        self.downvoted_by.contains(&user_id)
    }
}

/// The current user's own account, as returned by the `me` endpoints and by
/// the admin user endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMe {
    pub id: UserId,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    pub username: String,
    pub name: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub upvotes: Vec<IdeaId>,
    pub downvotes: Vec<IdeaId>,
}

/// The public view of a user: just enough to attribute an idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Deserialization helper so generic envelope types read naturally at call
/// sites, e.g. `PageOf::<Idea>::from_json(...)` in tests.
impl<T: DeserializeOwned> PageOf<T> {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(count: i64) -> PageOf<()> {
        PageOf { data: vec![], count }
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(envelope(0).total_pages(10), 0);
        assert_eq!(envelope(1).total_pages(10), 1);
        assert_eq!(envelope(10).total_pages(10), 1);
        assert_eq!(envelope(11).total_pages(10), 2);
        assert_eq!(envelope(95).total_pages(10), 10);
        assert_eq!(envelope(100).total_pages(10), 10);
    }

    #[test]
    fn test_total_pages_ignores_nonpositive_limit() {
        assert_eq!(envelope(50).total_pages(0), 0);
    }

    #[test]
    fn test_empty_envelope_deserializes() {
        let page = PageOf::<Idea>::from_json(r#"{"data": [], "count": 0}"#)
            .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.count, 0);
        assert_eq!(page.total_pages(10), 0);
    }

    #[test]
    fn test_idea_envelope_deserializes() {
        let json = r#"{
            "data": [{
                "id": "7f8aa5c0-41a7-4b5d-9f3f-2f8f3e9b5f10",
                "created_at": "2025-06-01T12:00:00Z",
                "name": "Dark mode",
                "description": "Add a dark theme",
                "upvoted_by": ["44f51c90-13b2-4a49-8c0e-111111111111"],
                "downvoted_by": [],
                "creator_id": "44f51c90-13b2-4a49-8c0e-111111111111"
            }],
            "count": 21
        }"#;
        let page = PageOf::<Idea>::from_json(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].upvotes(), 1);
        assert_eq!(page.data[0].downvotes(), 0);
        assert_eq!(page.total_pages(10), 3);
    }
}

use serde::{Deserialize, Serialize};

pub const IDEA_NAME_MAX_LEN: usize = 255;
pub const USERNAME_MAX_LEN: usize = 255;
pub const DISPLAY_NAME_MAX_LEN: usize = 255;
pub const PASSWORD_MIN_LEN: usize = 8;

/// Position in a paginated collection.
///
/// The API speaks zero-based offsets (`skip = number * limit`) while
/// human-facing URLs use one-based page numbers. Keeping both conversions on
/// one value type avoids off-by-one mistakes between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub const FIRST: Page = Page(0);

    pub fn from_zero_based(number: i64) -> Self {
        Page(number.max(0))
    }

    /// Construct from a one-based page number, e.g. a URL path segment.
    /// Values below 1 clamp to the first page.
    pub fn from_one_based(display_number: i64) -> Self {
        Page((display_number - 1).max(0))
    }

    /// Zero-based index, used for skip math.
    pub fn number(&self) -> i64 {
        self.0
    }

    /// One-based number, used in page URLs and labels.
    pub fn display_number(&self) -> i64 {
        self.0 + 1
    }

    pub fn is_first(&self) -> bool {
        self.0 == 0
    }

    pub fn previous(&self) -> Page {
        Page((self.0 - 1).max(0))
    }

    pub fn next(&self) -> Page {
        Page(self.0 + 1)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

/// Sort orders the idea list endpoints accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaSort {
    Recent,
    Top,
    Trending,
}

impl IdeaSort {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            IdeaSort::Recent => "recent",
            IdeaSort::Top => "top",
            IdeaSort::Trending => "trending",
        }
    }
}

/// Query parameters for one page of a list endpoint.
///
/// Derived deterministically from `(Page, limit, sort)`; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: i64,
    pub sort: Option<IdeaSort>,
    pub skip: i64,
}

impl ListQuery {
    pub fn for_page(page: Page, limit: i64, sort: Option<IdeaSort>) -> Self {
        ListQuery {
            limit,
            sort,
            skip: page.number() * limit,
        }
    }

    /// Render as a URL query string, including the leading `?`.
    /// A zero skip is omitted entirely, matching the backend's default.
    pub fn query_string(&self) -> String {
        let mut query = format!("?limit={}", self.limit);
        if let Some(sort) = self.sort {
            query.push_str(&format!("&sort={}", sort.as_query_value()));
        }
        if self.skip > 0 {
            query.push_str(&format!("&skip={}", self.skip));
        }
        query
    }
}

/// Validation result for usernames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameValidation {
    Valid,
    Empty,
    TooLong,
    ContainsWhitespace,
}

impl UsernameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Username must not be empty"),
            Self::TooLong => Some("Username must be at most 255 characters"),
            Self::ContainsWhitespace => {
                Some("Username must not contain spaces")
            }
        }
    }
}

/// Validate a username: non-empty, at most 255 characters, no whitespace.
pub fn validate_username(username: &str) -> UsernameValidation {
    let username = username.trim();
    if username.is_empty() {
        return UsernameValidation::Empty;
    }
    if username.len() > USERNAME_MAX_LEN {
        return UsernameValidation::TooLong;
    }
    if username.chars().any(char::is_whitespace) {
        return UsernameValidation::ContainsWhitespace;
    }
    UsernameValidation::Valid
}

/// Returns an error message unless the password meets the minimum length.
pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.len() < PASSWORD_MIN_LEN {
        Some("Password must be at least 8 characters")
    } else {
        None
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Register {
    pub username: String,
    pub name: String,
    pub password: String,
}

/// Admin-side account creation; identical to registration except the admin
/// flag can be set up front.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminCreateUser {
    pub username: String,
    pub name: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateIdea {
    pub name: String,
    pub description: String,
}

/// Partial idea update; `None` fields are left unchanged.
#[derive(Debug, Serialize, Deserialize)]
pub struct EditIdea {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoteIdea {
    pub idea_id: crate::IdeaId,
}

/// Self-service profile update. Changing the password requires the old one.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

/// Admin-side user update; may also flip the active/admin flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminEditUser {
    pub name: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub is_admin: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_one_based_round_trip() {
        for n in 1..=50 {
            assert_eq!(Page::from_one_based(n).display_number(), n);
        }
    }

    #[test]
    fn test_page_clamps_bad_one_based_values() {
        assert_eq!(Page::from_one_based(0), Page::FIRST);
        assert_eq!(Page::from_one_based(-3), Page::FIRST);
    }

    #[test]
    fn test_page_number_is_zero_based() {
        assert_eq!(Page::from_one_based(1).number(), 0);
        assert_eq!(Page::from_one_based(3).number(), 2);
        assert_eq!(Page::from_zero_based(2).display_number(), 3);
    }

    #[test]
    fn test_page_previous_saturates_at_first() {
        assert_eq!(Page::FIRST.previous(), Page::FIRST);
        assert_eq!(Page::from_zero_based(2).previous().number(), 1);
        assert_eq!(Page::FIRST.next().number(), 1);
    }

    #[test]
    fn test_list_query_skip_math() {
        for p in 0..20 {
            let query =
                ListQuery::for_page(Page::from_zero_based(p), 10, None);
            assert_eq!(query.skip, p * 10);
        }
    }

    #[test]
    fn test_query_string_omits_zero_skip() {
        let query = ListQuery::for_page(Page::FIRST, 10, None);
        assert_eq!(query.query_string(), "?limit=10");
    }

    #[test]
    fn test_query_string_with_sort_and_skip() {
        let first = ListQuery::for_page(
            Page::FIRST,
            10,
            Some(IdeaSort::Trending),
        );
        assert_eq!(first.query_string(), "?limit=10&sort=trending");

        let third = ListQuery::for_page(
            Page::from_zero_based(2),
            10,
            Some(IdeaSort::Trending),
        );
        assert_eq!(third.query_string(), "?limit=10&sort=trending&skip=20");
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_valid());
        assert_eq!(validate_username(""), UsernameValidation::Empty);
        assert_eq!(validate_username("   "), UsernameValidation::Empty);
        assert_eq!(
            validate_username("two words"),
            UsernameValidation::ContainsWhitespace
        );
        assert_eq!(
            validate_username(&"x".repeat(256)),
            UsernameValidation::TooLong
        );
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("short").is_some());
        assert!(validate_password("longenough").is_none());
    }
}

use crate::{IdeaId, UserId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request =
            self.inner_client.patch(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch one page of ideas.
    pub async fn list_ideas(
        &self,
        query: &requests::ListQuery,
    ) -> Result<responses::IdeasPage, ClientError> {
        let response = self
            .empty_get(&format!("ideas/{}", query.query_string()))
            .await?;
        ok_body(response).await
    }

    pub async fn count_ideas(&self) -> Result<i64, ClientError> {
        let response = self.empty_get("ideas/count").await?;
        ok_body(response).await
    }

    pub async fn get_idea(
        &self,
        idea_id: &IdeaId,
    ) -> Result<responses::Idea, ClientError> {
        let response = self.empty_get(&format!("ideas/{idea_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_idea(
        &self,
        details: &requests::CreateIdea,
    ) -> Result<responses::Idea, ClientError> {
        let response = self.post("ideas/", details).await?;
        ok_body(response).await
    }

    pub async fn update_idea(
        &self,
        idea_id: &IdeaId,
        details: &requests::EditIdea,
    ) -> Result<responses::Idea, ClientError> {
        let response =
            self.patch(&format!("ideas/{idea_id}"), details).await?;
        ok_body(response).await
    }

    /// Delete an idea (admin only).
    pub async fn delete_idea(
        &self,
        idea_id: &IdeaId,
    ) -> Result<responses::Message, ClientError> {
        let response = self.empty_delete(&format!("ideas/{idea_id}")).await?;
        ok_body(response).await
    }

    /// Toggle the current user's upvote; returns the updated idea.
    pub async fn upvote_idea(
        &self,
        idea_id: &IdeaId,
    ) -> Result<responses::Idea, ClientError> {
        let body = requests::VoteIdea { idea_id: *idea_id };
        let response = self
            .put(&format!("ideas/{idea_id}/upvote"), &body)
            .await?;
        ok_body(response).await
    }

    /// Toggle the current user's downvote; returns the updated idea.
    pub async fn downvote_idea(
        &self,
        idea_id: &IdeaId,
    ) -> Result<responses::Idea, ClientError> {
        let body = requests::VoteIdea { idea_id: *idea_id };
        let response = self
            .put(&format!("ideas/{idea_id}/downvote"), &body)
            .await?;
        ok_body(response).await
    }

    pub async fn register(
        &self,
        details: &requests::Register,
    ) -> Result<responses::UserPublic, ClientError> {
        let response = self.post("users/", details).await?;
        ok_body(response).await
    }

    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<(), ClientError> {
        let response = self.post("login", details).await?;
        ok_empty(response).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("logout").await?;
        ok_empty(response).await
    }

    /// Check if the user is logged in.
    pub async fn login_check(&self) -> Result<bool, ClientError> {
        let response = self.empty_post("login_check").await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            status => {
                Err(ClientError::APIError(status, response.text().await?))
            }
        }
    }

    /// Get the current user's account.
    pub async fn me(&self) -> Result<responses::UserMe, ClientError> {
        let response = self.empty_get("me/").await?;
        ok_body(response).await
    }

    /// Update the current user's name and/or password.
    pub async fn update_me(
        &self,
        details: &requests::UpdateProfile,
    ) -> Result<responses::UserMe, ClientError> {
        let response = self.patch("me/", details).await?;
        ok_body(response).await
    }

    /// Fetch one page of the current user's own ideas.
    pub async fn my_ideas(
        &self,
        query: &requests::ListQuery,
    ) -> Result<responses::IdeasPage, ClientError> {
        let response = self
            .empty_get(&format!("me/ideas{}", query.query_string()))
            .await?;
        ok_body(response).await
    }

    /// Fetch one page of all user accounts (admin only).
    pub async fn list_users(
        &self,
        query: &requests::ListQuery,
    ) -> Result<responses::UsersPage, ClientError> {
        let response = self
            .empty_get(&format!("users/{}", query.query_string()))
            .await?;
        ok_body(response).await
    }

    pub async fn get_user(
        &self,
        user_id: &UserId,
    ) -> Result<responses::UserMe, ClientError> {
        let response = self.empty_get(&format!("users/{user_id}")).await?;
        ok_body(response).await
    }

    pub async fn admin_create_user(
        &self,
        details: &requests::AdminCreateUser,
    ) -> Result<responses::UserPublic, ClientError> {
        let response = self.post("users/", details).await?;
        ok_body(response).await
    }

    pub async fn admin_update_user(
        &self,
        user_id: &UserId,
        details: &requests::AdminEditUser,
    ) -> Result<responses::UserMe, ClientError> {
        let response =
            self.patch(&format!("users/{user_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn deactivate_user(
        &self,
        user_id: &UserId,
    ) -> Result<responses::Message, ClientError> {
        let response = self
            .empty_delete(&format!("users/{user_id}/deactivate"))
            .await?;
        ok_body(response).await
    }

    /// Fetch one page of the ideas created by a given user (admin only).
    pub async fn list_user_ideas(
        &self,
        user_id: &UserId,
        query: &requests::ListQuery,
    ) -> Result<responses::IdeasPage, ClientError> {
        let response = self
            .empty_get(&format!(
                "users/{user_id}/ideas{}",
                query.query_string()
            ))
            .await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the message extracted
    /// from the response body.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// The HTTP status of the failed request, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::APIError(status, _) => Some(*status),
            ClientError::Network(e) => e.status(),
        }
    }
}

/// Extract a displayable message from an error response body. The backend
/// sends `{"message": "..."}`; anything else falls back to the raw text or
/// the status code.
fn error_display_text(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<responses::Message>(body)
        && !parsed.message.is_empty()
    {
        return parsed.message;
    }
    if body.trim().is_empty() {
        format!("Request failed with status {status}")
    } else {
        body.to_string()
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::APIError(
            status,
            error_display_text(status, &response.text().await?),
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::APIError(
            status,
            error_display_text(status, &response.text().await?),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_text_prefers_structured_message() {
        let text = error_display_text(
            StatusCode::FORBIDDEN,
            r#"{"message": "Not enough permissions"}"#,
        );
        assert_eq!(text, "Not enough permissions");
    }

    #[test]
    fn test_error_display_text_falls_back_to_raw_body() {
        let text =
            error_display_text(StatusCode::BAD_GATEWAY, "upstream exploded");
        assert_eq!(text, "upstream exploded");
    }

    #[test]
    fn test_error_display_text_empty_body_names_the_status() {
        let text = error_display_text(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert!(text.contains("500"));
    }
}

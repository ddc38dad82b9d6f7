//! HTTP client for the Nova REST API
//!
//! One method per endpoint. Every request carries the caller's bearer token;
//! failures are mapped to [`ServiceError`] and never retried here.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::auth::BearerToken;
use crate::config::ApiConfig;
use crate::error::{Result, ServiceError};
use crate::models::{ApiMessage, ConnectionEdge, FeedPage, User, UsersResponse};

/// REST API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ServiceError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /users`
    pub async fn list_users(&self, token: &BearerToken) -> Result<Vec<User>> {
        let request = self.client.get(self.url("/users"));
        let response: UsersResponse = self.send_json(request, token, "GET /users").await?;

        info!(count = response.users.len(), "Fetched user roster");
        Ok(response.users)
    }

    /// `GET /connections/{userId}`
    ///
    /// The API may include edges that do not touch `user_id`; callers filter.
    pub async fn get_connections(
        &self,
        user_id: &str,
        token: &BearerToken,
    ) -> Result<Vec<ConnectionEdge>> {
        let path = format!("/connections/{}", encode_segment(user_id)?);
        let request = self.client.get(self.url(&path));
        let edges: Vec<ConnectionEdge> = self
            .send_json(request, token, "GET /connections/{userId}")
            .await?;

        info!(user_id = %user_id, count = edges.len(), "Fetched connection edges");
        Ok(edges)
    }

    /// `POST /connection/{targetUserId}`
    pub async fn create_connection(
        &self,
        target_user_id: &str,
        token: &BearerToken,
    ) -> Result<ApiMessage> {
        let path = format!("/connection/{}", encode_segment(target_user_id)?);
        let request = self.client.post(self.url(&path));
        let message = self
            .send_message(request, token, "POST /connection/{targetUserId}")
            .await?;

        info!(target_user_id = %target_user_id, "Connection created");
        Ok(message)
    }

    /// `GET /posts/by/{userId}?page={n}&limit={m}`
    pub async fn get_user_posts(
        &self,
        user_id: &str,
        page: u32,
        limit: u32,
        token: &BearerToken,
    ) -> Result<FeedPage> {
        if page == 0 {
            return Err(ServiceError::InvalidRequest(
                "page numbers start at 1".to_string(),
            ));
        }

        let path = format!("/posts/by/{}", encode_segment(user_id)?);
        let request = self
            .client
            .get(self.url(&path))
            .query(&[("page", page), ("limit", limit)]);
        let feed_page: FeedPage = self
            .send_json(request, token, "GET /posts/by/{userId}")
            .await?;

        info!(
            user_id = %user_id,
            page = feed_page.page_number,
            total_pages = feed_page.total_pages,
            posts = feed_page.posts.len(),
            "Fetched feed page"
        );
        Ok(feed_page)
    }

    /// `DELETE /user/{userId}`
    pub async fn delete_user(&self, user_id: &str, token: &BearerToken) -> Result<ApiMessage> {
        let path = format!("/user/{}", encode_segment(user_id)?);
        let request = self.client.delete(self.url(&path));
        let message = self
            .send_message(request, token, "DELETE /user/{userId}")
            .await?;

        info!(user_id = %user_id, "Account deleted");
        Ok(message)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<T>(
        &self,
        request: RequestBuilder,
        token: &BearerToken,
        endpoint: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(request, token, endpoint).await?;
        serde_json::from_str(&body).map_err(|e| {
            ServiceError::InvalidResponse(format!("{} returned an unexpected body: {}", endpoint, e))
        })
    }

    /// Mutation endpoints may answer with an empty body.
    async fn send_message(
        &self,
        request: RequestBuilder,
        token: &BearerToken,
        endpoint: &str,
    ) -> Result<ApiMessage> {
        let body = self.execute(request, token, endpoint).await?;
        if body.trim().is_empty() {
            return Ok(ApiMessage::default());
        }
        serde_json::from_str(&body).map_err(|e| {
            ServiceError::InvalidResponse(format!("{} returned an unexpected body: {}", endpoint, e))
        })
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        token: &BearerToken,
        endpoint: &str,
    ) -> Result<String> {
        if token.is_empty() {
            return Err(ServiceError::Authentication(
                "missing bearer token".to_string(),
            ));
        }

        debug!(endpoint = %endpoint, "Calling Nova API");

        let response = request
            .bearer_auth(token.expose())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ServiceError::from_response(status.as_u16(), &body);
            debug!(endpoint = %endpoint, status = status.as_u16(), error = %err, "Nova API call failed");
            return Err(err);
        }

        Ok(body)
    }
}

fn encode_segment(segment: &str) -> Result<String> {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidRequest(
            "user id must not be empty".to_string(),
        ));
    }
    Ok(urlencoding::encode(trimmed).into_owned())
}

use async_trait::async_trait;
use nova_common::{ApiClient, ApiMessage, ConnectionEdge, FeedPage, Result, User};

use crate::session::Session;

/// Interface for the remote API operations the screens depend on.
/// [`ApiClient`] is the production implementation; tests substitute mocks.
#[async_trait]
pub trait SocialApi: Send + Sync {
    /// Full user roster
    async fn list_users(&self, session: &Session) -> Result<Vec<User>>;

    /// Connection edges for a user (may include edges not touching them)
    async fn get_connections(&self, user_id: &str, session: &Session)
        -> Result<Vec<ConnectionEdge>>;

    /// Connect the session user with `target_user_id`
    async fn create_connection(&self, target_user_id: &str, session: &Session)
        -> Result<ApiMessage>;

    /// One page of a user's posts
    async fn get_user_posts(
        &self,
        user_id: &str,
        page: u32,
        limit: u32,
        session: &Session,
    ) -> Result<FeedPage>;

    /// Delete a user account
    async fn delete_user(&self, user_id: &str, session: &Session) -> Result<ApiMessage>;
}

#[async_trait]
impl SocialApi for ApiClient {
    async fn list_users(&self, session: &Session) -> Result<Vec<User>> {
        ApiClient::list_users(self, &session.token).await
    }

    async fn get_connections(
        &self,
        user_id: &str,
        session: &Session,
    ) -> Result<Vec<ConnectionEdge>> {
        ApiClient::get_connections(self, user_id, &session.token).await
    }

    async fn create_connection(
        &self,
        target_user_id: &str,
        session: &Session,
    ) -> Result<ApiMessage> {
        ApiClient::create_connection(self, target_user_id, &session.token).await
    }

    async fn get_user_posts(
        &self,
        user_id: &str,
        page: u32,
        limit: u32,
        session: &Session,
    ) -> Result<FeedPage> {
        ApiClient::get_user_posts(self, user_id, page, limit, &session.token).await
    }

    async fn delete_user(&self, user_id: &str, session: &Session) -> Result<ApiMessage> {
        ApiClient::delete_user(self, user_id, &session.token).await
    }
}

//! Shared data models for the Nova REST API
//!
//! Field names follow the API payloads. Aliases accept the legacy
//! document shape (`_id`, `createddate`, populated `user1`/`user2`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// USERS
// ============================================================================

/// Registered user. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(
        rename = "createddate",
        alias = "createdDate",
        alias = "created_date",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            created_date: None,
        }
    }

    pub fn with_created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = Some(created_date);
        self
    }
}

/// `GET /users` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

// ============================================================================
// CONNECTIONS
// ============================================================================

/// Undirected connection between two users.
///
/// Endpoints are optional because the API does not guarantee well-formed
/// records; consumers skip edges missing either side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEdge {
    #[serde(
        rename = "user1Id",
        alias = "user1",
        default,
        deserialize_with = "deserialize_id_ref",
        skip_serializing_if = "Option::is_none"
    )]
    pub user1_id: Option<String>,
    #[serde(
        rename = "user2Id",
        alias = "user2",
        default,
        deserialize_with = "deserialize_id_ref",
        skip_serializing_if = "Option::is_none"
    )]
    pub user2_id: Option<String>,
}

impl ConnectionEdge {
    pub fn new(user1_id: impl Into<String>, user2_id: impl Into<String>) -> Self {
        Self {
            user1_id: Some(user1_id.into()),
            user2_id: Some(user2_id.into()),
        }
    }

    /// Both endpoints, or `None` for a malformed edge
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        match (self.user1_id.as_deref(), self.user2_id.as_deref()) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    pub fn touches(&self, user_id: &str) -> bool {
        self.endpoints()
            .map(|(a, b)| a == user_id || b == user_id)
            .unwrap_or(false)
    }
}

// ============================================================================
// POSTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(
        rename = "ownerId",
        alias = "postedBy",
        default,
        deserialize_with = "deserialize_id_ref",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_id: Option<String>,
}

impl Post {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            owner_id: None,
        }
    }

    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }
}

/// One page of a user's feed (`GET /posts/by/{userId}?page=&limit=`)
///
/// A missing `totalPages` decodes as 0, which marks the page as the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(rename = "pageNumber", alias = "currentPage")]
    pub page_number: u32,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

impl FeedPage {
    pub fn new(posts: Vec<Post>, page_number: u32, total_pages: u32) -> Self {
        Self {
            posts,
            page_number,
            total_pages,
        }
    }

    pub fn is_last(&self) -> bool {
        self.page_number >= self.total_pages
    }
}

// ============================================================================
// GENERIC RESPONSES
// ============================================================================

/// Body of mutation endpoints (`POST /connection/..`, `DELETE /user/..`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// ID REFERENCES
// ============================================================================

/// A user reference as sent by the API: a bare id or a populated document.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRef {
    Id(String),
    Document {
        #[serde(rename = "_id", alias = "id")]
        id: String,
    },
    Other(serde_json::Value),
}

/// Decodes an id reference, mapping anything unusable to `None` instead of
/// failing the surrounding payload.
fn deserialize_id_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let reference = Option::<IdRef>::deserialize(deserializer)?;
    Ok(match reference {
        Some(IdRef::Id(id)) | Some(IdRef::Document { id }) if !id.trim().is_empty() => Some(id),
        _ => None,
    })
}

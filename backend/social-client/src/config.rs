/// Configuration management for the social client
///
/// Loads configuration from environment variables.
use nova_common::ApiConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// REST API endpoint settings
    pub api: ApiConfig,
    /// Feed paging settings
    pub feed: FeedConfig,
    /// "Who to follow" settings
    pub suggestions: SuggestionsConfig,
}

/// Feed paging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Posts requested per page
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    /// Upper bound on pages fetched when counting a user's posts
    #[serde(default = "default_max_count_pages")]
    pub max_count_pages: u32,
}

/// Suggestions panel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    /// Maximum number of suggested users shown
    #[serde(default = "default_suggestion_limit")]
    pub limit: usize,
}

// Default values
fn default_page_limit() -> u32 {
    5
}

fn default_max_count_pages() -> u32 {
    50
}

fn default_suggestion_limit() -> usize {
    5
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_limit: default_page_limit(),
            max_count_pages: default_max_count_pages(),
        }
    }
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            limit: default_suggestion_limit(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api = ApiConfig::from_lookup(&lookup);

        let feed = FeedConfig {
            page_limit: lookup("FEED_PAGE_LIMIT")
                .and_then(|s| s.parse::<u32>().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or_else(default_page_limit),
            max_count_pages: lookup("MAX_COUNT_PAGES")
                .and_then(|s| s.parse::<u32>().ok())
                .filter(|pages| *pages > 0)
                .unwrap_or_else(default_max_count_pages),
        };

        let suggestions = SuggestionsConfig {
            limit: lookup("SUGGESTION_LIMIT")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or_else(default_suggestion_limit),
        };

        Config {
            api,
            feed,
            suggestions,
        }
    }
}

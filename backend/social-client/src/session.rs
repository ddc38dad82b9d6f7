use anyhow::{bail, Context, Result};
use nova_common::BearerToken;

/// The signed-in user, as handed over by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub token: BearerToken,
}

impl Session {
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: BearerToken::new(token),
        }
    }

    /// Load the session from `NOVA_USER_ID` / `NOVA_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user_id = lookup("NOVA_USER_ID").context("NOVA_USER_ID environment variable not set")?;
        let token = lookup("NOVA_TOKEN").context("NOVA_TOKEN environment variable not set")?;

        if user_id.trim().is_empty() {
            bail!("NOVA_USER_ID must not be empty");
        }
        if token.trim().is_empty() {
            bail!("NOVA_TOKEN must not be empty");
        }

        Ok(Self::new(user_id.trim(), token.trim()))
    }
}

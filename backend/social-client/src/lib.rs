//! Nova social client
//!
//! Screen controllers that combine the REST API with connection graph
//! resolution and feed pagination. Presentation is left to the caller; every
//! screen takes the API and the signed-in [`Session`] explicitly.

pub mod api;
pub mod config;
pub mod error;
pub mod screens;
pub mod session;

pub use api::SocialApi;
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use screens::{
    Completion, ConnectionsScreen, ConnectionsView, FeedScreen, LoadState, PageTicket,
    ProfileSidebar, ProfileSummary, SuggestionsPanel,
};
pub use session::Session;

//! Connection graph resolution for the Nova social client.
//!
//! Pure functions over connection edges and the user roster: no I/O, no
//! shared state, safe to call on every re-render.

pub mod resolver;

pub use resolver::{
    connected_users, partition_roster, remove_user_from_candidates, resolve_connection_ids,
    ConnectionSet,
};

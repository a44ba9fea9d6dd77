//! # API Shared
//!
//! Wire types shared by the notebook REST server and its clients.
//!
//! Contains:
//! - JSON request/response bodies for the content routes (`content` module)
//! - The shared `HealthService`
//!
//! Used by `api-rest` to serve these shapes and by `notebook-client` to parse
//! them, so both sides agree on field names by construction.

pub mod content;
pub mod health;

pub use content::{
    ContentPageRes, ContentRes, CreateContentReq, ListContentQuery, ListContentRes, MessageRes,
    TitleQuery, UpdateContentReq,
};
pub use health::{HealthRes, HealthService};

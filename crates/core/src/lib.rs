//! # Notebook Core
//!
//! Core business logic for the notebook content service.
//!
//! This crate contains the data model and pure data operations:
//! - Content records (title, content, output) and their validation
//! - The [`RecordStore`] collection abstraction with in-memory and
//!   file-backed implementations
//! - [`ContentService`]: create, list (optionally paginated), lookup by id or
//!   title, update and delete
//! - Startup configuration
//!
//! **No API concerns**: HTTP servers, JSON wire types and client code belong in
//! `api-rest`, `api-shared` and `notebook-client`.

pub mod config;
pub mod constants;
pub mod error;
pub mod id;
pub mod model;
pub mod pagination;
pub mod service;
pub mod store;
pub mod validation;

pub use config::{CoreConfig, StoreLocation};
pub use error::{ContentError, ContentResult};
pub use id::RecordId;
pub use model::{ContentPatch, ContentRecord, NewContent};
pub use pagination::{Page, PageRequest};
pub use service::{ContentListing, ContentService, CreateContent};
pub use store::{open_store, FileStore, MemoryStore, RecordStore};
pub use validation::RequiredText;

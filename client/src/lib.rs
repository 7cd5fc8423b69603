//! # Taskpad Client
//!
//! REST client for the remote todo service.
//!
//! The remote service exposes a single collection resource speaking JSON:
//!
//! | Operation | Method | Path          | Request body | Success body          |
//! |-----------|--------|---------------|--------------|-----------------------|
//! | list      | GET    | `{base}`      | —            | array of `{id, title}`|
//! | create    | POST   | `{base}`      | `{title}`    | `{id, title}`         |
//! | update    | PUT    | `{base}/{id}` | `{title}`    | `{id, title}`         |
//! | delete    | DELETE | `{base}/{id}` | —            | ignored               |
//!
//! [`TodoServiceClient`] implements those four calls over `reqwest`.
//! Consumers that should stay independent of the concrete transport (the
//! store environment, tests) depend on the [`TodoApi`] trait instead.
//!
//! The service is authoritative: ids are assigned server-side and the
//! decoded response, not the request that produced it, is what callers
//! feed back into application state.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::{ApiFuture, TodoApi};
pub use client::{BASE_URL_ENV, DEFAULT_BASE_URL, TodoServiceClient};
pub use error::ServiceError;
pub use types::{TodoId, TodoRecord};

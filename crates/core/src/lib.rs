//! `microblog-core` — domain building blocks for the blog.
//!
//! This crate contains **pure domain** types (no HTTP, no storage).

pub mod error;
pub mod id;
pub mod post;

pub use error::DomainError;
pub use id::PostId;
pub use post::{NewPost, Post};

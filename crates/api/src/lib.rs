//! HTTP surface: router, session layer, guarded mutations, HTML pages.

pub mod app;
pub mod context;
pub mod gateway;
pub mod middleware;

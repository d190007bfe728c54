//! HTTP API

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::{create_router, with_middleware};

//! Greeter - a minimal HTTP greeting service.
//!
//! Exposes a plain-text greeting at `/` and a JSON health probe at `/health`,
//! built on Axum. The library surface exists so integration tests can drive
//! the router in-process without binding a socket.

pub mod config;
pub mod middleware;
pub mod routes;
pub mod shutdown;

pub use routes::create_router;

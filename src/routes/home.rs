//! Greeting endpoint.

/// The plain-text greeting served at the root path.
pub const GREETING: &str = "Hello from CI/CD pipeline";

/// Root handler, returns the greeting as plain text.
pub async fn index() -> &'static str {
    GREETING
}

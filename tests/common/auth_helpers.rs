//! Authentication test helpers
//!
//! Tokens are minted with the same secret the test apps verify against.

use blogverse::backend::auth::sessions::create_token;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Generate a test JWT token
pub fn generate_test_token(user_id: Uuid, email: &str) -> String {
    create_token(user_id, email, TEST_JWT_SECRET).expect("Failed to generate test token")
}

/// Token for a fresh random user
pub fn any_user_token() -> String {
    generate_test_token(Uuid::new_v4(), "writer@example.com")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

//! Authentication Module
//!
//! Every `/api/ai/*` route requires a bearer JWT. Accounts, signup and login
//! live in the account service; this module only covers the token format.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! └── sessions.rs     - JWT creation and verification
//! ```
//!
//! The request-side check is in `backend::middleware::auth`.

/// JWT token generation and validation
pub mod sessions;

pub use sessions::{create_token, verify_token, Claims};

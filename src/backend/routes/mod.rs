//! Routes Module
//!
//! - **`router`** - Router assembly, middleware layers and fallback
//! - **`api_routes`** - Public and AI route tables

pub mod api_routes;
pub mod router;

pub use router::create_router;

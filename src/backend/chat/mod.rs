//! Chat History Module
//!
//! The AI composer keeps a per-user, append-only log of prompts and
//! generated replies.
//!
//! - **`db`** - PostgreSQL persistence
//! - **`handlers`** - HTTP handlers for appending and listing entries

pub mod db;
pub mod handlers;

pub use handlers::{create_chat_message, list_chat_messages};

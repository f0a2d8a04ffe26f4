//! AI Content Generation Module
//!
//! - **`prompts`** - `(topic, type)` to system/user instruction pair
//! - **`openrouter`** - Chat-completion client with demo fallback
//! - **`demo`** - Deterministic placeholder content
//! - **`handlers`** - HTTP handlers for generation and markdown rendering

pub mod demo;
pub mod handlers;
pub mod openrouter;
pub mod prompts;

pub use demo::demo_content;
pub use handlers::{generate_content, render_markdown};
pub use openrouter::{FallbackReason, Generation, OpenRouterClient, Outcome};
pub use prompts::{professional_prompt, professional_prompt_for, PromptMessage, PromptPair};

/**
 * Prompt Builder
 *
 * Maps a `(topic, type)` pair to the system/user instruction pair sent to
 * the model. The table is fixed; the topic is inserted verbatim into the
 * user message.
 */

use serde::{Deserialize, Serialize};

use crate::shared::GenerationType;

/// One chat-completion message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// System and user instructions for one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

impl PromptPair {
    /// Message list in the order the provider expects
    pub fn into_messages(self) -> Vec<PromptMessage> {
        vec![PromptMessage::system(self.system), PromptMessage::user(self.user)]
    }
}

const WRITER_PERSONA: &str = "You are a professional blog writer and editor at BlogVerse. \
You write clear, engaging, well-structured content in markdown for a general audience.";

/// Build the instruction pair for a topic and generation type
pub fn professional_prompt(topic: &str, kind: GenerationType) -> PromptPair {
    let (system_focus, user) = match kind {
        GenerationType::Section => (
            "Write a single focused article section with a short heading and two to four paragraphs.",
            format!(
                "Write a well-structured blog section about: {topic}\n\n\
                 Start with a level-2 heading, then explain the idea with concrete \
                 examples. Keep it between 200 and 350 words."
            ),
        ),
        GenerationType::Full => (
            "Write complete, publication-ready blog articles with an introduction, \
             several headed sections and a conclusion.",
            format!(
                "Write a complete blog article about: {topic}\n\n\
                 Include a compelling title, an introduction, at least three sections \
                 with level-2 headings, practical tips, and a conclusion with a call \
                 to action. Aim for 900 to 1200 words."
            ),
        ),
        GenerationType::Outline => (
            "Produce detailed, logically ordered article outlines.",
            format!(
                "Create a detailed blog post outline about: {topic}\n\n\
                 Use numbered main sections with two to four bullet points each, \
                 covering introduction, core ideas, examples and conclusion."
            ),
        ),
        GenerationType::Title => (
            "Write catchy, accurate headlines that make readers want to click \
             without resorting to clickbait.",
            format!(
                "Suggest 5 engaging blog post titles about: {topic}\n\n\
                 Return a numbered list. Vary the style: how-to, list, question, \
                 and bold statement."
            ),
        ),
        GenerationType::Tags => (
            "Choose relevant, searchable tags for blog posts.",
            format!(
                "Suggest 8 to 10 SEO-friendly tags for a blog post about: {topic}\n\n\
                 Return them as a single comma-separated line, lowercase, without \
                 hashtags."
            ),
        ),
        GenerationType::Meta => (
            "Write concise meta descriptions optimized for search results.",
            format!(
                "Write an SEO meta description for a blog post about: {topic}\n\n\
                 Keep it under 160 characters, mention the main benefit for the \
                 reader, and return only the description."
            ),
        ),
    };

    PromptPair {
        system: format!("{WRITER_PERSONA} {system_focus}"),
        user,
    }
}

/// Build the instruction pair from a raw type name
///
/// Unrecognized names use the `section` template.
pub fn professional_prompt_for(topic: &str, raw_type: &str) -> PromptPair {
    professional_prompt(topic, GenerationType::parse_lenient(raw_type))
}

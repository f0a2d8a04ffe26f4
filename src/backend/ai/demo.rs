/**
 * Demo Content Generator
 *
 * Static, topic-interpolated placeholder text for each generation type.
 * Used whenever a live completion is unavailable. Output is a pure function
 * of `(topic, type)`.
 */

use crate::shared::GenerationType;

/// Produce placeholder content for a topic
pub fn demo_content(topic: &str, kind: GenerationType) -> String {
    match kind {
        GenerationType::Section => format!(
            "## Understanding {topic}\n\n\
             {topic} is one of those subjects that rewards a closer look. At first glance it \
             can seem simple, but the details are where the real value lies. Readers who take \
             the time to understand the fundamentals tend to make better decisions and avoid \
             the most common mistakes.\n\n\
             A good starting point is to ask what problem {topic} actually solves. Once that \
             is clear, the individual pieces fall into place: the core ideas, the trade-offs, \
             and the situations where a different approach works better.\n\n\
             Finally, remember that practice beats theory. Try the ideas from this section on \
             a small scale, note what works for you, and build from there."
        ),
        GenerationType::Full => format!(
            "# The Complete Guide to {topic}\n\n\
             ## Introduction\n\n\
             Whether you are just getting started or looking to sharpen your skills, {topic} \
             deserves a place on your radar. This guide walks through the essentials, the \
             practical steps, and the habits that lead to lasting results.\n\n\
             ## Why {topic} Matters\n\n\
             Interest in {topic} keeps growing, and for good reason. It helps people save time, \
             make better choices, and approach familiar problems from a fresh angle. Understanding \
             the \"why\" makes the \"how\" much easier to remember.\n\n\
             ## Getting Started\n\n\
             - Define a clear, modest goal for your first week.\n\
             - Gather a few trusted resources instead of dozens.\n\
             - Set aside a regular time to practice.\n\
             - Keep notes on what you learn and what confuses you.\n\n\
             ## Common Mistakes to Avoid\n\n\
             The most frequent pitfall is trying to do everything at once. Another is copying \
             someone else's approach without adapting it to your own situation. Start small, \
             measure your progress, and adjust.\n\n\
             ## Taking It Further\n\n\
             Once the basics feel comfortable, look for a community around {topic}. Sharing your \
             experience and learning from others will accelerate your progress more than any \
             single resource.\n\n\
             ## Conclusion\n\n\
             {topic} is approachable, rewarding, and full of room to grow. Pick one idea from this \
             guide, put it into practice today, and let us know in the comments how it goes!"
        ),
        GenerationType::Outline => format!(
            "# Outline: {topic}\n\n\
             1. Introduction\n\
             - Hook: a surprising fact or question about {topic}\n\
             - Why this topic matters to the reader\n\
             - What the article will cover\n\n\
             2. Background\n\
             - A short history of {topic}\n\
             - Key terms and concepts\n\n\
             3. Core Ideas\n\
             - The most important principle\n\
             - Supporting principles and how they connect\n\
             - Common misconceptions\n\n\
             4. Practical Application\n\
             - Step-by-step example\n\
             - Tools and resources\n\
             - Tips from experienced practitioners\n\n\
             5. Conclusion\n\
             - Summary of key takeaways\n\
             - Call to action for readers"
        ),
        GenerationType::Title => format!(
            "1. The Ultimate Guide to {topic}\n\
             2. {topic}: Everything You Need to Know\n\
             3. 7 Things Nobody Tells You About {topic}\n\
             4. Is {topic} Worth It? An Honest Look\n\
             5. How {topic} Can Change the Way You Work"
        ),
        GenerationType::Tags => {
            let slug = tag_slug(topic);
            format!(
                "{slug}, {slug} guide, {slug} tips, beginners, how to, best practices, \
                 tutorial, productivity"
            )
        }
        GenerationType::Meta => format!(
            "Discover everything you need to know about {topic}: practical tips, common \
             mistakes to avoid, and expert advice to get started today."
        ),
    }
}

fn tag_slug(topic: &str) -> String {
    let words: Vec<String> = topic
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect();

    if words.is_empty() {
        "blogging".to_string()
    } else {
        words.join(" ")
    }
}

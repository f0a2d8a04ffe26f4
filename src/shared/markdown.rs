//! Markdown-to-HTML Rendering
//!
//! Generated drafts come back as markdown. When the writer applies a draft,
//! the editor stores HTML, so the server renders it with this line-oriented
//! transform. It covers the subset the generator produces: headings, bullet
//! and numbered lists, blockquotes, horizontal rules and simple inline
//! formatting. There is no grammar and no round-trip guarantee.
//!
//! Input is HTML-escaped before any tag is emitted, so raw markup in a draft
//! is shown as text.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+?)\s*#*\s*$").unwrap());
static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*+]\s+(.+)$").unwrap());
static ORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[.)]\s+(.+)$").unwrap());
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>\s?(.*)$").unwrap());

static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]\(((?:https?://|mailto:|/)[^)\s]*)\)").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            Self::Unordered => "<ul>",
            Self::Ordered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::Unordered => "</ul>",
            Self::Ordered => "</ol>",
        }
    }
}

/// Render markdown to HTML
pub fn to_html(markdown: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut open_list: Option<ListKind> = None;

    for raw in markdown.lines() {
        let line = raw.trim();

        if line.is_empty() {
            close_list(&mut out, &mut open_list);
            continue;
        }

        if let Some(caps) = BULLET.captures(line) {
            switch_list(&mut out, &mut open_list, ListKind::Unordered);
            out.push(format!("<li>{}</li>", inline(&caps[1])));
            continue;
        }

        if let Some(caps) = ORDERED.captures(line) {
            switch_list(&mut out, &mut open_list, ListKind::Ordered);
            out.push(format!("<li>{}</li>", inline(&caps[1])));
            continue;
        }

        close_list(&mut out, &mut open_list);

        if let Some(caps) = HEADING.captures(line) {
            let level = caps[1].len();
            out.push(format!("<h{level}>{}</h{level}>", inline(&caps[2])));
        } else if RULE.is_match(line) {
            out.push("<hr>".to_string());
        } else if let Some(caps) = QUOTE.captures(line) {
            out.push(format!("<blockquote>{}</blockquote>", inline(&caps[1])));
        } else {
            out.push(format!("<p>{}</p>", inline(line)));
        }
    }

    close_list(&mut out, &mut open_list);
    out.join("\n")
}

fn switch_list(out: &mut Vec<String>, open_list: &mut Option<ListKind>, kind: ListKind) {
    if *open_list == Some(kind) {
        return;
    }
    close_list(out, open_list);
    out.push(kind.open_tag().to_string());
    *open_list = Some(kind);
}

fn close_list(out: &mut Vec<String>, open_list: &mut Option<ListKind>) {
    if let Some(kind) = open_list.take() {
        out.push(kind.close_tag().to_string());
    }
}

/// Inline formatting for one line of raw text
///
/// Code spans are cut out first and link URLs are emitted as-is, so
/// emphasis markers inside either stay literal.
fn inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in CODE.captures_iter(text) {
        let (Some(whole), Some(code)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&links(&text[last..whole.start()]));
        out.push_str("<code>");
        out.push_str(&escape_html(code.as_str()));
        out.push_str("</code>");
        last = whole.end();
    }
    out.push_str(&links(&text[last..]));
    out
}

fn links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in LINK.captures_iter(text) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        out.push_str(&emphasis(&text[last..whole.start()]));
        out.push_str(&format!(
            r#"<a href="{}">{}</a>"#,
            escape_html(url.as_str()),
            emphasis(label.as_str())
        ));
        last = whole.end();
    }
    out.push_str(&emphasis(&text[last..]));
    out
}

fn emphasis(text: &str) -> String {
    let escaped = escape_html(text);
    let with_bold = BOLD.replace_all(&escaped, "<strong>${1}</strong>");
    ITALIC.replace_all(&with_bold, "<em>${1}</em>").into_owned()
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

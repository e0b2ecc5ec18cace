//! Output formats for a rendered container.

use colored::Colorize;

use super::Container;
use crate::models::{Card, CARD_CLASS};

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
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

pub fn card_html(card: &Card) -> String {
    format!(
        r#"<div class="{}"><img src="{}" alt="{}" /><h3>{}</h3></div>"#,
        CARD_CLASS,
        escape_html(&card.image_src),
        escape_html(&card.image_alt),
        escape_html(&card.heading)
    )
}

/// Render the container and its cards as an HTML fragment, one card per line
pub fn container_html(container: &Container) -> String {
    let mut html = format!(r#"<div id="{}">"#, escape_html(container.id()));
    for card in container.children() {
        html.push_str("\n  ");
        html.push_str(&card_html(card));
    }
    if !container.is_empty() {
        html.push('\n');
    }
    html.push_str("</div>");
    html
}

/// Render the cards as numbered terminal lines
pub fn container_text(container: &Container) -> String {
    let mut text = String::new();
    for (i, card) in container.children().iter().enumerate() {
        text.push_str(&format!(
            "{}. {}\n",
            (i + 1).to_string().green(),
            card.heading.bold()
        ));
        text.push_str(&format!("   poster: {}\n", card.image_src.dimmed()));
    }
    text
}

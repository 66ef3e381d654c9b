//! HTML fragments
//!
//! `Markup` is trusted HTML. Anything that comes from the backend or from a
//! user goes through `Markup::text` before being embedded.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::utils::helpers::escape_html;

/// Marker attribute on anchors that are routed client-side
pub const LINK_MARKER: &str = "data-link";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-safe HTML
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escape plain text
    pub fn text(text: &str) -> Self {
        Self(escape_html(text))
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn push_raw(&mut self, html: &str) {
        self.0.push_str(html);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anchor routed client-side
pub fn link(href: &str, label: &str, class: &str) -> Markup {
    Markup::raw(format!(
        r#"<a href="{}" class="{}" {}>{}</a>"#,
        escape_html(href),
        class,
        LINK_MARKER,
        escape_html(label)
    ))
}

/// Button wired to an action
pub fn action_button(action: &str, id: Option<i64>, label: &str, class: &str) -> Markup {
    let id_attr = id.map(|id| format!(r#" data-id="{}""#, id)).unwrap_or_default();
    Markup::raw(format!(
        r#"<button type="button" class="btn {}" data-action="{}"{}>{}</button>"#,
        class,
        action,
        id_attr,
        escape_html(label)
    ))
}

fn anchor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<a\b[^>]*>").expect("anchor pattern is valid"))
}

fn href_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"\bhref="([^"]*)""#).expect("href pattern is valid"))
}

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\sdata-link(?:[\s/>=])").expect("marker pattern is valid"))
}

/// Targets of every client-side routed anchor, in document order
pub fn links_in(html: &str) -> Vec<String> {
    anchor_pattern()
        .find_iter(html)
        .map(|tag| tag.as_str())
        .filter(|tag| marker_pattern().is_match(tag))
        .filter_map(|tag| href_pattern().captures(tag))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().replace("&amp;", "&")))
        .collect()
}

//! Template tag front-end
//!
//! Parses `anchor` and `autosort` tag invocations such as
//! `anchor "year,title" Released` or `autosort media` into validated calls
//! on the core API. Argument-count problems are reported here, before any
//! rendering happens.

use super::{RenderContext, SortIcons, anchor, autosort};
use crate::{
    error::{Result, SortError},
    ordering::Orderable,
};

/// Split tag contents on whitespace, keeping quoted segments (with their
/// quotes) together.
pub fn split_tag_contents(contents: &str) -> Vec<String> {
    let mut bits = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in contents.chars() {
        match quote {
            Some(open) => {
                current.push(ch);
                if ch == open {
                    quote = None;
                }
            }
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                current.push(ch);
            }
            None if ch.is_whitespace() => {
                if !current.is_empty() {
                    bits.push(std::mem::take(&mut current));
                }
            }
            None => current.push(ch),
        }
    }
    if !current.is_empty() {
        bits.push(current);
    }
    bits
}

fn strip_quotes(bit: &str) -> &str {
    bit.trim_matches(&['"', '\''][..])
}

/// `anchor <field> [label]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorTag {
    /// Field or compound key, quotes stripped
    pub field: String,
    /// Label, defaulted from the field when omitted
    pub label: String,
}

impl AnchorTag {
    /// Build from tag bits, the tag name first.
    pub fn parse<S: AsRef<str>>(bits: &[S]) -> Result<Self> {
        let bits: Vec<&str> = bits.iter().map(|b| strip_quotes(b.as_ref())).collect();
        if bits.len() < 2 {
            return Err(SortError::TagArity {
                tag: "anchor",
                expected: "at least 1 argument",
            });
        }

        let label = match bits.get(2) {
            Some(label) => label.to_string(),
            None => anchor::default_label(bits[1]),
        };

        Ok(Self {
            field: bits[1].trim().to_string(),
            label: label.trim().to_string(),
        })
    }

    /// Build from raw tag contents such as `anchor title "Name"`.
    pub fn parse_str(contents: &str) -> Result<Self> {
        Self::parse(&split_tag_contents(contents))
    }

    /// Render the anchor and register its fields.
    pub fn render(&self, ctx: &mut RenderContext, icons: &SortIcons) -> String {
        anchor::render_anchor(&self.field, Some(&self.label), ctx, icons)
    }
}

/// `autosort <collection>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutosortTag {
    /// Name of the collection the host resolves
    pub collection: String,
}

impl AutosortTag {
    /// Build from tag bits, the tag name first.
    pub fn parse<S: AsRef<str>>(bits: &[S]) -> Result<Self> {
        if bits.len() != 2 {
            return Err(SortError::TagArity {
                tag: "autosort",
                expected: "exactly one argument",
            });
        }
        Ok(Self {
            collection: strip_quotes(bits[1].as_ref()).to_string(),
        })
    }

    /// Build from raw tag contents such as `autosort media`.
    pub fn parse_str(contents: &str) -> Result<Self> {
        Self::parse(&split_tag_contents(contents))
    }

    /// Order `collection` through [`autosort::apply_sort`].
    pub fn apply<C: Orderable>(&self, collection: C, ctx: &RenderContext) -> C {
        autosort::apply_sort(collection, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_quoted_segments() {
        assert_eq!(
            split_tag_contents(r#"anchor "year, title" 'Release year'"#),
            vec!["anchor", r#""year, title""#, "'Release year'"]
        );
        assert_eq!(split_tag_contents("  autosort   media "), vec!["autosort", "media"]);
    }

    #[test]
    fn test_anchor_tag_defaults_label() {
        let tag = AnchorTag::parse_str("anchor title").unwrap();

        assert_eq!(tag.field, "title");
        assert_eq!(tag.label, "Title");
    }

    #[test]
    fn test_anchor_tag_strips_quotes() {
        let tag = AnchorTag::parse_str(r#"anchor "year,title" "Released""#).unwrap();

        assert_eq!(tag.field, "year,title");
        assert_eq!(tag.label, "Released");
    }

    #[test]
    fn test_anchor_tag_arity() {
        let err = AnchorTag::parse_str("anchor").unwrap_err();

        assert_eq!(err.to_string(), "anchor tag takes at least 1 argument");
    }

    #[test]
    fn test_autosort_tag_arity() {
        assert_eq!(
            AutosortTag::parse_str("autosort media").unwrap().collection,
            "media"
        );

        for bad in ["autosort", "autosort media extra"] {
            let err = AutosortTag::parse_str(bad).unwrap_err();
            assert_eq!(err.to_string(), "autosort tag takes exactly one argument");
        }
    }

    #[test]
    fn test_anchor_tag_renders_and_registers() {
        let icons = SortIcons::default();
        let mut ctx = RenderContext::from_uri_parts("/media", Some("sort=title"));

        let html = AnchorTag::parse_str("anchor title").unwrap().render(&mut ctx, &icons);

        assert_eq!(
            html,
            r#"<a href="/media?sort=title&amp;dir=asc" title="Title">Title &darr;</a>"#
        );
        assert_eq!(ctx.allow_list(), &["title"]);
    }
}

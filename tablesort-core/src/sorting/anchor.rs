//! Sortable column header links
//!
//! An anchor shows the current direction icon when its field is the active
//! sort key and links to the opposite direction. Inactive anchors link to
//! their field with no direction, letting the request fall back to the
//! unspecified state.
//!
//! Rendering an anchor also registers its fields with the request's
//! allow-list, which is what later permits auto-sort to order by them.

use std::fmt;

use tracing::trace;

use super::{
    RenderContext, SortIcons,
    request::{DIR_PARAM, SORT_PARAM},
};

/// A rendered column header link.
///
/// `title` is always the plain label. The icon, when present, only appears
/// in the visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortAnchor {
    /// Link target, unescaped
    pub href: String,
    /// Plain label
    pub title: String,
    /// Current direction icon, only for the active field
    pub icon: Option<String>,
}

impl SortAnchor {
    /// Visible link text: the label, plus a space and the icon if any.
    pub fn text(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", escape_html(&self.title), icon),
            None => escape_html(&self.title),
        }
    }

    /// `<a href=".." title="..">..</a>` with href and label escaped.
    pub fn to_html(&self) -> String {
        format!(
            r#"<a href="{}" title="{}">{}</a>"#,
            escape_html(&self.href),
            escape_html(&self.title),
            self.text()
        )
    }
}

impl fmt::Display for SortAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Compute the anchor for `field` and register its components in the
/// request's allow-list.
///
/// `label` defaults to [`default_label`] of the field.
pub fn build_anchor(
    field: &str,
    label: Option<&str>,
    ctx: &mut RenderContext,
    icons: &SortIcons,
) -> SortAnchor {
    let request = ctx.sort_request();
    let active = request.is_active(field);

    let mut params = ctx.params().without(&[SORT_PARAM, DIR_PARAM]);
    let icon = if active {
        let current = request.direction;
        params.append(DIR_PARAM, current.inverse().as_param());
        Some(current.icon(icons).to_string())
    } else {
        None
    };

    let mut href = format!("{}?{}={}", ctx.path(), SORT_PARAM, field);
    if !params.is_empty() {
        href.push('&');
        href.push_str(&params.encode());
    }

    let title = match label {
        Some(label) => label.to_string(),
        None => default_label(field),
    };

    ctx.register_fields(field);
    trace!(field, active, href = %href, "rendered sort anchor");

    SortAnchor { href, title, icon }
}

/// Render the anchor for `field` straight to markup.
pub fn render_anchor(
    field: &str,
    label: Option<&str>,
    ctx: &mut RenderContext,
    icons: &SortIcons,
) -> String {
    build_anchor(field, label, ctx, icons).to_html()
}

/// Upper-case the first character and lower-case the rest.
pub fn default_label(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Escape the HTML-special characters of a value placed in markup.
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
    output
}

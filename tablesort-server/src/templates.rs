//! Listing templates
//!
//! Pages are minijinja templates that call two functions:
//!
//! - `anchor(field, label=none)` renders a sortable column header and
//!   registers its fields for the request
//! - `autosort(name)` returns the named collection, ordered by the request
//!   when every requested field was registered by an earlier anchor
//!
//! Both act on the request's [`RenderContext`], which the handler passes in
//! as the `tablesort` variable wrapped in a [`SortScope`]. Templates are
//! compiled once at startup; only the scope is per request.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use minijinja::{Environment, Error, ErrorKind, State, Value, value::Object};
use serde::Serialize;
use tablesort_core::{AnchorTag, AutosortTag, RenderContext, SortError, SortIcons};

use crate::catalog::MediaItem;

/// Name of the media listing template
pub const MEDIA_TEMPLATE: &str = "media.html";

/// Template variable holding the request's [`SortScope`]
pub const SCOPE_VAR: &str = "tablesort";

const CATALOG_COLLECTION: &str = "catalog";

/// Compile the listing templates and register the sorting functions.
pub fn listing_environment() -> Result<Environment<'static>, Error> {
    let mut env = Environment::new();
    env.add_template(MEDIA_TEMPLATE, include_str!("../templates/media.html"))?;
    env.add_function("anchor", anchor);
    env.add_function("autosort", autosort);
    Ok(env)
}

/// Per-request state visible to template functions.
#[derive(Debug)]
pub struct SortScope {
    ctx: Mutex<RenderContext>,
    icons: SortIcons,
    catalog: Arc<Vec<MediaItem>>,
}

impl Object for SortScope {}

impl SortScope {
    pub fn new(ctx: RenderContext, icons: SortIcons, catalog: Arc<Vec<MediaItem>>) -> Self {
        Self {
            ctx: Mutex::new(ctx),
            icons,
            catalog,
        }
    }

    /// Move the render context out, leaving an empty one behind.
    pub fn take_context(&self) -> RenderContext {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, RenderContext> {
        // A poisoned lock still holds a usable context
        self.ctx.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Row as displayed, one string or number per column
#[derive(Debug, Serialize)]
struct MediaRow {
    title: String,
    year: u32,
    rating: String,
    added: String,
}

impl From<&MediaItem> for MediaRow {
    fn from(item: &MediaItem) -> Self {
        Self {
            title: item.title.clone(),
            year: item.year,
            rating: item
                .rating
                .map(|r| format!("{r:.1}"))
                .unwrap_or_else(|| "n/a".to_string()),
            added: item.added.format("%Y-%m-%d").to_string(),
        }
    }
}

fn scope(state: &State) -> Result<Arc<SortScope>, Error> {
    state
        .lookup(SCOPE_VAR)
        .and_then(|value| value.downcast_object::<SortScope>())
        .ok_or_else(|| {
            Error::new(
                ErrorKind::UndefinedError,
                format!("`{SCOPE_VAR}` is not set for this render"),
            )
        })
}

fn tag_error(err: SortError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string()).with_source(err)
}

fn anchor(state: &State, field: String, label: Option<String>) -> Result<Value, Error> {
    let scope = scope(state)?;

    let mut bits = vec!["anchor".to_string(), field];
    bits.extend(label);
    let tag = AnchorTag::parse(bits.as_slice()).map_err(tag_error)?;

    let html = tag.render(&mut scope.lock(), &scope.icons);
    Ok(Value::from_safe_string(html))
}

fn autosort(state: &State, name: String) -> Result<Value, Error> {
    let scope = scope(state)?;
    let tag = AutosortTag::parse(&["autosort", name.as_str()]).map_err(tag_error)?;

    let collection = match tag.collection.as_str() {
        CATALOG_COLLECTION => scope.catalog.as_ref().clone(),
        other => {
            return Err(Error::new(
                ErrorKind::UndefinedError,
                format!("unknown collection {other:?}"),
            ));
        }
    };

    let ordered = tag.apply(collection, &scope.lock());
    let rows: Vec<MediaRow> = ordered.iter().map(MediaRow::from).collect();
    Ok(Value::from_serialize(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;
    use minijinja::context;

    fn render(source: &str, query: &str) -> (Result<String, Error>, RenderContext) {
        let mut env = listing_environment().unwrap();
        env.add_template_owned("inline.html", source.to_string()).unwrap();

        let scope = Value::from_object(SortScope::new(
            RenderContext::from_uri_parts("/media", Some(query)),
            SortIcons::default(),
            Arc::new(demo_catalog()),
        ));
        let result = env
            .get_template("inline.html")
            .and_then(|template| template.render(context! { tablesort => scope.clone() }));
        let ctx = scope
            .downcast_object_ref::<SortScope>()
            .map(SortScope::take_context)
            .unwrap_or_default();
        (result, ctx)
    }

    #[test]
    fn test_anchor_function_renders_unescaped_markup() {
        let (html, ctx) = render(r#"{{ anchor("year", "Released") }}"#, "sort=year&dir=asc");

        assert_eq!(
            html.unwrap(),
            r#"<a href="/media?sort=year&amp;dir=desc" title="Released">Released &uarr;</a>"#
        );
        assert_eq!(ctx.allow_list(), &["year"]);
    }

    #[test]
    fn test_autosort_before_any_anchor_keeps_order() {
        let source = r#"{% for row in autosort("catalog") %}{{ row.title }};{% endfor %}"#;

        let (html, _) = render(source, "sort=title&dir=asc");

        assert_eq!(html.unwrap(), "Stalker;Alien;Paprika;Brazil;Heat;");
    }

    #[test]
    fn test_autosort_after_anchor_orders_rows() {
        let source =
            r#"{{ anchor("title") }}|{% for row in autosort("catalog") %}{{ row.title }};{% endfor %}"#;

        let (html, _) = render(source, "sort=title&dir=asc");

        assert!(html.unwrap().ends_with("|Alien;Brazil;Heat;Paprika;Stalker;"));
    }

    #[test]
    fn test_row_values_are_escaped() {
        let (html, _) = render(r#"{{ "<b>" }}"#, "");

        assert_eq!(html.unwrap(), "&lt;b&gt;");
    }

    #[test]
    fn test_unknown_collection_fails_render() {
        let (html, _) = render(r#"{{ autosort("users") }}"#, "");

        let err = html.unwrap_err();
        assert!(err.to_string().contains("unknown collection \"users\""));
    }

    #[test]
    fn test_missing_scope_fails_render() {
        let env = listing_environment().unwrap();

        let err = env
            .render_str(r#"{{ anchor("title") }}"#, context! {})
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UndefinedError);
    }
}

use axum::{extract::State, response::Html};
use minijinja::{Value, context};
use tablesort_core::RenderContext;

use crate::{
    infra::{app_state::AppState, errors::AppResult, extract::SortContext},
    templates::{MEDIA_TEMPLATE, SortScope},
};

/// Render the media catalog as a sortable HTML table
pub async fn media_listing_handler(
    State(state): State<AppState>,
    SortContext(mut ctx): SortContext,
) -> AppResult<Html<String>> {
    let page = render_media_page(&state, &mut ctx)?;
    Ok(Html(page))
}

/// Render the listing template against `ctx`. The context, including the
/// allow-list the template's anchors built, is handed back afterwards.
pub fn render_media_page(state: &AppState, ctx: &mut RenderContext) -> AppResult<String> {
    let scope = Value::from_object(SortScope::new(
        std::mem::take(ctx),
        state.icons().clone(),
        state.catalog.clone(),
    ));

    let rendered = state
        .templates
        .get_template(MEDIA_TEMPLATE)
        .and_then(|template| template.render(context! { tablesort => scope.clone() }));

    if let Some(scope) = scope.downcast_object_ref::<SortScope>() {
        *ctx = scope.take_context();
    }
    let page = rendered?;

    tracing::debug!(
        field = ctx.field(),
        allow_list = ?ctx.allow_list(),
        "rendered media listing"
    );
    Ok(page)
}

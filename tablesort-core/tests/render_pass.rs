use tablesort_core::{
    FieldOrder, Orderable, SortValue, SortableRecord,
    sorting::{AnchorTag, AutosortTag, RenderContext, SortIcons, apply_sort, build_anchor},
};

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    name: &'static str,
    date: u32,
    size: u32,
}

impl SortableRecord for Entry {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::from(self.name),
            "date" => SortValue::from(self.date),
            "size" => SortValue::from(self.size),
            _ => SortValue::Missing,
        }
    }
}

fn entries() -> Vec<Entry> {
    vec![
        Entry {
            name: "beta",
            date: 3,
            size: 10,
        },
        Entry {
            name: "alpha",
            date: 1,
            size: 30,
        },
        Entry {
            name: "gamma",
            date: 2,
            size: 10,
        },
    ]
}

fn names(entries: &[Entry]) -> Vec<&'static str> {
    entries.iter().map(|e| e.name).collect()
}

/// Render the header anchors a listing page would show before its rows.
fn render_headers(ctx: &mut RenderContext, fields: &[&str]) {
    let icons = SortIcons::default();
    for field in fields {
        build_anchor(field, None, ctx, &icons);
    }
}

#[test]
fn sorts_by_registered_field_in_either_direction() {
    let mut ctx = RenderContext::from_uri_parts("/files", Some("sort=name&dir=asc"));
    render_headers(&mut ctx, &["name", "date"]);
    assert_eq!(names(&apply_sort(entries(), &ctx)), vec!["alpha", "beta", "gamma"]);

    let mut ctx = RenderContext::from_uri_parts("/files", Some("sort=name&dir=desc"));
    render_headers(&mut ctx, &["name", "date"]);
    assert_eq!(names(&apply_sort(entries(), &ctx)), vec!["gamma", "beta", "alpha"]);
}

#[test]
fn unregistered_field_leaves_collection_untouched() {
    let mut ctx = RenderContext::from_uri_parts("/files", Some("sort=other&dir=asc"));
    render_headers(&mut ctx, &["name", "date"]);

    assert_eq!(apply_sort(entries(), &ctx), entries());
}

#[test]
fn autosort_before_any_anchor_is_a_no_op() {
    let mut ctx = RenderContext::from_uri_parts("/files", Some("sort=name&dir=asc"));

    let unsorted = apply_sort(entries(), &ctx);
    render_headers(&mut ctx, &["name"]);

    assert_eq!(unsorted, entries());
    assert_eq!(names(&apply_sort(entries(), &ctx)), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn compound_key_is_all_or_nothing() {
    let mut ctx = RenderContext::from_uri_parts("/files", None);
    render_headers(&mut ctx, &["size", "name"]);

    ctx.set_field("size,name");
    assert_eq!(names(&apply_sort(entries(), &ctx)), vec!["beta", "gamma", "alpha"]);

    ctx.set_field("-size,name");
    assert_eq!(names(&apply_sort(entries(), &ctx)), vec!["alpha", "gamma", "beta"]);

    ctx.set_field("size,owner");
    assert_eq!(apply_sort(entries(), &ctx), entries());
}

#[test]
fn compound_direction_matches_explicit_specs() {
    let mut ctx = RenderContext::from_uri_parts("/files", None);
    render_headers(&mut ctx, &["size,date"]);
    ctx.set_field("-size,date");

    let expected = entries().order_by(&[FieldOrder::desc("size"), FieldOrder::desc("date")]);
    assert_eq!(apply_sort(entries(), &ctx), expected);
    assert_eq!(names(&expected), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn preserved_params_survive_every_anchor() {
    let icons = SortIcons::default();
    let mut ctx =
        RenderContext::from_uri_parts("/files", Some("page=2&sort=date&filter=open&dir=desc"));

    let name = build_anchor("name", None, &mut ctx, &icons);
    let date = build_anchor("date", None, &mut ctx, &icons);

    assert_eq!(name.href, "/files?sort=name&page=2&filter=open");
    assert_eq!(date.href, "/files?sort=date&page=2&filter=open&dir=asc");
    assert_eq!(date.icon.as_deref(), Some("&darr;"));
}

#[test]
fn tag_front_end_drives_a_whole_pass() {
    let icons = SortIcons::default();
    let mut ctx = RenderContext::from_uri_parts("/files", Some("sort=date&dir=asc"));

    let headers: Vec<String> = ["anchor name", r#"anchor date "Modified""#]
        .iter()
        .map(|src| AnchorTag::parse_str(src).map(|tag| tag.render(&mut ctx, &icons)))
        .collect::<Result<_, _>>()
        .unwrap();
    let rows = AutosortTag::parse_str("autosort entries")
        .unwrap()
        .apply(entries(), &ctx);

    assert_eq!(
        headers[1],
        r#"<a href="/files?sort=date&amp;dir=desc" title="Modified">Modified &uarr;</a>"#
    );
    assert_eq!(names(&rows), vec!["alpha", "gamma", "beta"]);
}

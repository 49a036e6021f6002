use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use wave::{
    attributes, children, element, load_document, load_theme, merge_classes, tags, text, Attrs,
    IdGenerator, RenderContext, SequentialIds, Style, Theme, WaveError, WaveResult,
};

fn get_demo_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path.push(filename);
    path
}

/// Replace every `id="..."` value with a placeholder.
fn mask_ids(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find(" id=\"") {
        let value_start = start + " id=\"".len();
        out.push_str(&rest[..value_start]);
        out.push('*');
        let value_len = rest[value_start..].find('"').unwrap_or(0);
        rest = &rest[value_start + value_len..];
    }
    out.push_str(rest);
    out
}

fn collect_ids(html: &str) -> Vec<String> {
    html.split(" id=\"")
        .skip(1)
        .filter_map(|chunk| chunk.split('"').next())
        .map(str::to_string)
        .collect()
}

struct BrokenIds;

impl IdGenerator for BrokenIds {
    fn generate(&self) -> WaveResult<String> {
        Err(WaveError::IdGeneration("clock went backwards".to_string()))
    }
}

// Attribute ordering

#[test]
fn test_attribute_order_ignores_insertion_order() {
    let forward = Attrs::new().with("a", "1").with("b", "2").with("c", "3").with("id", "x");
    let backward = Attrs::new().with("id", "x").with("c", "3").with("b", "2").with("a", "1");

    let first = element("div", forward, children![]).render();
    let second = element("div", backward, children![]).render();

    assert_eq!(first, r#"<div a="1" b="2" c="3" id="x" />"#);
    assert_eq!(first, second);
}

#[test]
fn test_empty_values_are_not_serialized() {
    let attrs = attributes([Attrs::id("x"), Attrs::title(""), Attrs::class("")]);
    assert!(attrs.contains_key("title"));

    let html = element("p", attrs, [text("body")]).render();
    assert_eq!(html, "<p id=\"x\">\n  body\n</p>");
}

// Class merging through a theme

#[test]
fn test_class_merge_properties() {
    assert_eq!(merge_classes("bg-red-500 text-sm", "bg-blue-300"), "bg-blue-300 text-sm");
    assert_eq!(merge_classes("p-2 rounded", "m-4"), "p-2 rounded m-4");
    assert_eq!(merge_classes("", "a b"), "a b");
    assert_eq!(merge_classes("a b", ""), "a b");
}

#[test]
fn test_btn_and_btn_dash_are_different_groups() {
    let theme = Theme::new([("button", Attrs::class("btn"))]);
    let node = tags::button(Attrs::id("b").and(Attrs::class("btn-primary")), [text("Go")]);

    assert_eq!(
        node.render_with_theme(&theme),
        "<button class=\"btn btn-primary\" id=\"b\">\n  Go\n</button>"
    );
}

#[test]
fn test_theme_keys_absent_from_caller_are_kept() {
    let theme = Theme::new([(
        "input",
        Attrs::class("border rounded").and(Attrs::autocomplete("off")),
    )]);
    let node = tags::input(Attrs::id("q").and(Attrs::type_search()), children![]);

    assert_eq!(
        node.render_with_theme(&theme),
        r#"<input autocomplete="off" class="border rounded" id="q" type="search" />"#
    );
}

#[test]
fn test_theme_is_not_mutated_by_render() {
    let theme = Theme::default_theme();
    let before = theme.clone();

    let node = tags::p(Attrs::class("text-lg"), [text("x")]);
    let _ = node.render_with_theme(&theme);

    assert_eq!(theme, before);
}

// Tree rendering

#[test]
fn test_nested_indentation() {
    let node = tags::div(
        Attrs::id("a"),
        [tags::div(
            Attrs::id("b"),
            [tags::div(Attrs::id("c"), [text("deep\ntext")])],
        )],
    );

    let expected = r#"<div id="a">
  <div id="b">
    <div id="c">
      deep
      text
    </div>
  </div>
</div>"#;
    assert_eq!(node.render(), expected);
}

#[test]
fn test_non_void_element_without_children_self_closes() {
    assert_eq!(
        tags::div(Attrs::id("empty"), children![]).render(),
        r#"<div id="empty" />"#
    );
    assert_eq!(
        tags::div(Attrs::id("empty"), children![None, None]).render(),
        r#"<div id="empty" />"#
    );
}

#[test]
fn test_unknown_tags_render() {
    let node = element("my-widget", Attrs::id("w").and(Attrs::from([("x-y", "1")])), children![]);
    assert_eq!(node.render(), r#"<my-widget id="w" x-y="1" />"#);
}

#[test]
fn test_style_attribute_value() {
    let style: Style = [("padding", "30px"), ("height", "90vh")].into_iter().collect();
    let node = tags::section(Attrs::id("s").and(Attrs::style(&style)), children![]);

    assert_eq!(node.render(), r#"<section id="s" style="height:90vh;padding:30px;" />"#);
}

// Identifiers

#[test]
fn test_repeated_renders_differ_only_in_ids() {
    let node = tags::ul(
        Attrs::class("list"),
        [
            tags::li(None, [text("one")]),
            tags::li(None, [text("two")]),
        ],
    );

    let first = node.render();
    let second = node.render();

    assert_ne!(first, second);
    assert_eq!(mask_ids(&first), mask_ids(&second));
    assert_eq!(collect_ids(&first).len(), 3);
}

#[test]
fn test_generated_ids_do_not_collide() {
    let node = tags::div(
        None,
        [
            tags::span(None, children![]),
            tags::span(None, children![]),
        ],
    );

    let mut seen = HashSet::new();
    for _ in 0..2_000 {
        for id in collect_ids(&node.render()) {
            assert!(seen.insert(id), "duplicate generated id");
        }
    }
    assert_eq!(seen.len(), 6_000);
}

#[test]
fn test_failing_id_generator_does_not_abort_render() {
    let ctx = RenderContext::new().with_ids(&BrokenIds);
    let node = tags::p(Attrs::class("note"), [tags::b(None, [text("hi")])]);

    assert_eq!(
        node.render_with(&ctx),
        "<p class=\"note\">\n  <b >\n    hi\n  </b>\n</p>"
    );
}

// Concurrency

#[test]
fn test_concurrent_renders_share_theme() {
    let theme = Arc::new(Theme::default_theme());
    let node = tags::article(
        None,
        [
            tags::h2(Attrs::class("text-xl"), [text("Title")]),
            tags::p(None, [text("Body")]),
        ],
    )
    .themed(Arc::clone(&theme));

    let outputs: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let node = node.clone();
                scope.spawn(move || node.render())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let masked = mask_ids(&outputs[0]);
    assert!(masked.contains("class=\"text-xl font-semibold mb-3 text-gray-900\""));
    for output in &outputs {
        assert_eq!(mask_ids(output), masked);
    }
    assert_eq!(*theme, Theme::default_theme());
}

// YAML documents and themes

#[test]
fn test_demo_page_with_demo_theme() {
    let page = fs::read_to_string(get_demo_path("page.yaml")).unwrap();
    let theme = fs::read_to_string(get_demo_path("theme.yaml")).unwrap();

    let root = load_document(&page).unwrap();
    let theme = load_theme(&theme).unwrap();
    let ids = SequentialIds::new("n");
    let ctx = RenderContext::new().with_theme(&theme).with_ids(&ids);

    let expected = r##"<div class="container bg-blue-200" id="root" style="border:1px solid #eee;height:90vh;padding:30px;">
  <h1 class="text-4xl font-extrabold mb-6 tracking-tight text-gray-900 title" id="n1">
    Hello Wave
  </h1>
  <p class="mb-4 text-base leading-relaxed text-gray-800 para" id="n2">
    This is a paragraph inside Wave.
  </p>
  <div class="child" id="n3">
    <span id="n4">
      Nested span text
    </span>
    <ul id="n5">
      <li class="mb-1" id="n6">
        Item 1
      </li>
      <li class="mb-1" id="n7">
        <a class="text-blue-600 hover:text-blue-700 hover:underline transition-colors" href="#" id="n8">
          Link inside list
        </a>
      </li>
    </ul>
  </div>
  <input autocomplete="off" class="border border-gray-300 px-3 py-2 rounded w-full" id="name" type="text" />
  <button class="inline-flex items-center px-4 py-2 rounded-lg bg-red-600 text-white btn-primary-1" id="n9" type="button">
    Click Me
  </button>
</div>"##;
    assert_eq!(root.render_with(&ctx), expected);
}

#[test]
fn test_demo_page_without_theme_keeps_caller_classes() {
    let page = fs::read_to_string(get_demo_path("page.yaml")).unwrap();
    let html = load_document(&page).unwrap().render();

    assert!(html.contains(r#"<button class="btn-primary-1 bg-red-600" id=""#));
    assert!(!html.contains("text-gray-800"));
}

#[test]
fn test_invalid_document_reports_yaml_error() {
    let result = load_document("tag: [not, a, string]\n");
    assert!(matches!(result, Err(WaveError::YamlError(_))));
}

#[test]
fn test_empty_tag_document_matches_builder() {
    let loaded = load_document("tag: \"\"\nid: x\n").unwrap().render();
    let built = element("", Attrs::id("x"), children![]).render();
    assert_eq!(loaded, built);
}

#[test]
fn test_data_attributes_render_sorted() {
    let node = element(
        "div",
        Attrs::id("panel").and(Attrs::data("role", "panel")).and(Attrs::data("index", "2")),
        children![],
    );
    assert_eq!(node.render(), r#"<div data-index="2" data-role="panel" id="panel" />"#);
}

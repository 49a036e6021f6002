//! Lazily rendered markup nodes.
//!
//! A [`Node`] is a deferred render function. Building a tree with [`text`]
//! and [`element`] does no work; rendering the root walks the tree
//! depth-first, rendering and indenting every child before its parent
//! assembles its own tag.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::attrs::Attrs;
use crate::id::{IdGenerator, UuidV7Ids};
use crate::merge::merge_attrs;
use crate::theme::Theme;

const INDENT: &str = "  ";

/// Ambient state for one render call: the theme and the id source.
///
/// Passed by reference to every node in the tree. Nothing here is
/// mutated by rendering.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    theme: Option<&'a Theme>,
    ids: &'a dyn IdGenerator,
}

impl<'a> RenderContext<'a> {
    /// No theme, UUID v7 ids.
    pub fn new() -> Self {
        Self {
            theme: None,
            ids: &UuidV7Ids,
        }
    }

    pub fn with_theme(self, theme: &'a Theme) -> Self {
        Self {
            theme: Some(theme),
            ..self
        }
    }

    pub fn without_theme(self) -> Self {
        Self {
            theme: None,
            ..self
        }
    }

    pub fn with_ids(self, ids: &'a dyn IdGenerator) -> Self {
        Self { ids, ..self }
    }

    pub fn theme(&self) -> Option<&'a Theme> {
        self.theme
    }

    pub fn ids(&self) -> &'a dyn IdGenerator {
        self.ids
    }
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

type RenderFn = dyn Fn(&RenderContext<'_>) -> String + Send + Sync;

/// A composable, lazily rendered piece of markup.
///
/// Cloning is cheap and clones share the same render function. Rendering
/// the same node twice yields the same markup apart from generated ids.
#[derive(Clone)]
pub struct Node(Arc<RenderFn>);

impl Node {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> String + Send + Sync + 'static,
    {
        Node(Arc::new(render))
    }

    /// Render with no theme and UUID v7 ids.
    pub fn render(&self) -> String {
        self.render_with(&RenderContext::new())
    }

    pub fn render_with(&self, ctx: &RenderContext<'_>) -> String {
        (self.0)(ctx)
    }

    pub fn render_with_theme(&self, theme: &Theme) -> String {
        self.render_with(&RenderContext::new().with_theme(theme))
    }

    /// Pin `theme` to this subtree, replacing whatever theme the
    /// surrounding render carries.
    pub fn themed(self, theme: Arc<Theme>) -> Node {
        Node::new(move |ctx| self.render_with(&ctx.with_theme(&theme)))
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Node(..)")
    }
}

/// A node that renders `content` verbatim. No escaping is performed.
pub fn text(content: impl Into<String>) -> Node {
    let content = content.into();
    Node::new(move |_| content.clone())
}

/// Build an element node.
///
/// `attrs` and individual children may be `None`; both are treated as
/// absent. Children render in the order given.
///
/// ```ignore
/// let page = element("div", Attrs::class("container"), [
///     element("h1", None, [text("Hello")]),
/// ]);
/// println!("{}", page.render());
/// ```
pub fn element<A, I, C>(tag: impl Into<String>, attrs: A, children: I) -> Node
where
    A: Into<Option<Attrs>>,
    I: IntoIterator<Item = C>,
    C: Into<Option<Node>>,
{
    let tag = tag.into();
    let attrs = attrs.into().unwrap_or_default();
    let children: Vec<Node> = children.into_iter().filter_map(Into::into).collect();

    Node::new(move |ctx| render_element(&tag, &attrs, &children, ctx))
}

fn render_element(tag: &str, attrs: &Attrs, children: &[Node], ctx: &RenderContext<'_>) -> String {
    let mut merged = match ctx.theme().and_then(|theme| theme.get(tag)) {
        Some(defaults) => {
            debug!(tag, "merging theme defaults");
            merge_attrs(defaults, attrs)
        }
        None => attrs.clone(),
    };

    if !merged.contains_key("id") {
        match ctx.ids().generate() {
            Ok(id) => {
                merged.insert("id", id);
            }
            Err(err) => warn!(tag, error = %err, "id generation failed, rendering without id"),
        }
    }

    let body = children
        .iter()
        .map(|child| indent_block(&child.render_with(ctx), 1))
        .collect::<Vec<_>>()
        .join("\n");

    let attr_str = serialize_attrs(&merged);

    if body.is_empty() {
        format!("<{tag} {attr_str} />")
    } else {
        format!("<{tag} {attr_str}>\n{body}\n</{tag}>")
    }
}

/// Prefix every line of `content` with `level` indentation steps.
///
/// A single trailing newline is dropped first.
pub fn indent_block(content: &str, level: usize) -> String {
    let prefix = INDENT.repeat(level);
    content
        .strip_suffix('\n')
        .unwrap_or(content)
        .split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `name="value"` tokens, sorted and space-joined. Empty values are skipped.
pub fn serialize_attrs(attrs: &Attrs) -> String {
    let mut parts: Vec<String> = attrs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect();
    parts.sort_unstable();
    parts.join(" ")
}

/// Collect children for [`element`], mixing nodes and `Option<Node>` slots.
///
/// ```ignore
/// element("ul", None, children![
///     element("li", None, [text("always")]),
///     show_extra.then(|| element("li", None, [text("sometimes")])),
/// ]);
/// ```
#[macro_export]
macro_rules! children {
    () => {
        ::std::vec::Vec::<::std::option::Option<$crate::Node>>::new()
    };
    ($($child:expr),+ $(,)?) => {
        ::std::vec![$(::std::convert::Into::<::std::option::Option<$crate::Node>>::into($child)),+]
    };
}

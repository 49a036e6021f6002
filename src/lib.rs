//! # Wave
//!
//! A declarative, function-based HTML markup builder.
//!
//! Trees are composed from lazily rendered [`Node`]s: [`text`] leaves and
//! [`element`]s carrying an [`Attrs`] map and children. Nothing is rendered
//! until the root node is invoked, at which point the tree is rendered
//! depth-first into indented markup.
//!
//! ## Features
//! - One generic [`element`] constructor plus a generated constructor per
//!   HTML tag in [`tags`]
//! - Per-tag default attributes through a [`Theme`], scoped to a render call
//! - Prefix-aware class merging (`bg-red-500` replaces `bg-blue-300`)
//! - Automatic time-ordered element ids (UUID v7) when none is supplied
//! - Trees and themes loadable from YAML
//!
//! No escaping is performed: text and attribute values are emitted
//! verbatim.
//!
//! ## Example
//! ```ignore
//! use wave::{tags, text, Attrs, Style, Theme};
//!
//! let page = tags::div(
//!     Attrs::id("root")
//!         .and(Attrs::class("container bg-blue-200"))
//!         .and(Attrs::style(&Style::new().with("padding", "30px"))),
//!     [
//!         tags::h1(Attrs::class("title"), [text("Hello Wave")]),
//!         tags::p(None, [text("This is a paragraph inside Wave.")]),
//!     ],
//! );
//!
//! println!("{}", page.render_with_theme(&Theme::default_theme()));
//! ```

pub mod attrs;
pub mod document;
pub mod error;
pub mod id;
pub mod merge;
pub mod node;
pub mod style;
pub mod tags;
pub mod theme;

pub use attrs::{attributes, Attrs};
pub use document::NodeSpec;
pub use error::{WaveError, WaveResult};
pub use id::{IdGenerator, SequentialIds, UuidV7Ids};
pub use merge::{merge_attrs, merge_classes};
pub use node::{element, text, Node, RenderContext};
pub use style::Style;
pub use theme::Theme;

/// Parse a YAML node tree (see [`document::NodeSpec`]) into a renderable node.
pub fn load_document(yaml: &str) -> WaveResult<Node> {
    document::load_node(yaml)
}

/// Parse a YAML theme: a map of tag name to default attributes.
pub fn load_theme(yaml: &str) -> WaveResult<Theme> {
    Theme::from_yaml(yaml)
}

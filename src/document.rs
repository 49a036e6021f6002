use serde::{Deserialize, Serialize};

use crate::attrs::Attrs;
use crate::error::{WaveError, WaveResult};
use crate::node::{element, text, Node};
use crate::style::Style;

/// Data description of a node tree, as read from a YAML document.
///
/// A bare string is a text node; a map is an element:
///
/// ```yaml
/// tag: div
/// class: container
/// style:
///   padding: 30px
/// children:
///   - tag: h1
///     children: ["Hello"]
///   - "plain text"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    Text(String),
    Element(ElementSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSpec {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl ElementSpec {
    /// Effective attributes: `attrs`, then the `id`, `class` and `style`
    /// shorthands on top.
    pub fn attributes(&self) -> Attrs {
        let mut attrs = self.attrs.clone();
        if let Some(id) = &self.id {
            attrs.insert("id", id.as_str());
        }
        if let Some(class) = &self.class {
            attrs.insert("class", class.as_str());
        }
        if let Some(style) = &self.style {
            attrs.insert("style", style.inline());
        }
        attrs
    }
}

impl NodeSpec {
    /// Build the lazy node tree this spec describes.
    ///
    /// Tags are passed through as written, empty or unknown ones included.
    pub fn to_node(&self) -> Node {
        match self {
            NodeSpec::Text(content) => text(content.as_str()),
            NodeSpec::Element(spec) => {
                let children: Vec<Node> = spec.children.iter().map(NodeSpec::to_node).collect();
                element(spec.tag.as_str(), spec.attributes(), children)
            }
        }
    }
}

/// Parse a YAML document holding a single root node.
pub fn from_yaml(yaml: &str) -> WaveResult<NodeSpec> {
    if yaml.trim().is_empty() {
        return Err(WaveError::EmptyDocument);
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Parse a YAML document straight into a renderable node.
pub fn load_node(yaml: &str) -> WaveResult<Node> {
    Ok(from_yaml(yaml)?.to_node())
}

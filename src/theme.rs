use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::attrs::Attrs;
use crate::error::WaveResult;

/// Default attributes per tag name.
///
/// Defaults are merged under caller-supplied attributes at render time
/// (see [`crate::merge::merge_attrs`]). A theme is never modified by a
/// render, so one instance can be shared across concurrent renders.
///
/// ```ignore
/// let theme = Theme::new([
///     ("p", Attrs::class("mb-4 text-base text-gray-800")),
///     ("a", Attrs::class("text-blue-600 hover:underline")),
/// ]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    elements: HashMap<String, Attrs>,
}

impl Theme {
    /// Wrap a tag → defaults mapping. No validation is applied.
    pub fn new<I, K>(elements: I) -> Self
    where
        I: IntoIterator<Item = (K, Attrs)>,
        K: Into<String>,
    {
        Self {
            elements: elements
                .into_iter()
                .map(|(tag, attrs)| (tag.into(), attrs))
                .collect(),
        }
    }

    /// Parse a theme from YAML: a map of tag name to attribute map.
    ///
    /// ```yaml
    /// button:
    ///   class: px-4 py-2 rounded
    ///   type: button
    /// ```
    pub fn from_yaml(yaml: &str) -> WaveResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Defaults registered for `tag`, if any.
    pub fn get(&self, tag: &str) -> Option<&Attrs> {
        self.elements.get(tag)
    }

    pub fn insert(&mut self, tag: impl Into<String>, attrs: Attrs) -> Option<Attrs> {
        self.elements.insert(tag.into(), attrs)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Registered tag names, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.elements.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Tailwind-flavoured defaults for the common HTML elements.
    pub fn default_theme() -> Self {
        Self::new([
            // Text
            ("p", Attrs::class("mb-4 text-base leading-relaxed text-gray-800")),
            ("span", Attrs::class("")),
            ("small", Attrs::class("text-sm text-gray-500")),
            ("code", Attrs::class("font-mono text-sm bg-gray-100 px-1 py-0.5 rounded")),
            // Headings
            ("h1", Attrs::class("text-4xl font-bold mb-4 text-gray-900")),
            ("h2", Attrs::class("text-3xl font-semibold mb-3 text-gray-900")),
            ("h3", Attrs::class("text-2xl font-semibold mb-2 text-gray-900")),
            ("h4", Attrs::class("text-xl font-semibold mb-2 text-gray-900")),
            ("h5", Attrs::class("text-lg font-semibold mb-1 text-gray-900")),
            ("h6", Attrs::class("text-base font-semibold text-gray-800")),
            // Links
            ("a", Attrs::class("text-blue-500 hover:underline")),
            // Buttons
            (
                "button",
                Attrs::class(
                    "px-4 py-2 rounded bg-blue-500 text-white hover:bg-blue-600 \
                     disabled:opacity-50 disabled:cursor-not-allowed",
                ),
            ),
            (
                "submit",
                Attrs::class("px-4 py-2 rounded bg-green-500 text-white hover:bg-green-600"),
            ),
            // Forms
            ("form", Attrs::class("space-y-4")),
            ("label", Attrs::class("mb-2 block text-sm font-medium text-gray-700")),
            (
                "input",
                Attrs::class(
                    "border border-gray-300 bg-gray-100 mb-2 px-3 py-2 rounded w-full \
                     focus:outline-none focus:ring-2 focus:ring-blue-500",
                ),
            ),
            (
                "select",
                Attrs::class(
                    "border border-gray-300 mb-2 px-3 py-2 rounded w-full \
                     focus:outline-none focus:ring-2 focus:ring-blue-500",
                ),
            ),
            (
                "textarea",
                Attrs::class(
                    "border border-gray-300 mb-2 px-3 py-2 rounded w-full \
                     focus:outline-none focus:ring-2 focus:ring-blue-500",
                ),
            ),
            // Lists
            ("ul", Attrs::class("list-disc pl-5 mb-4")),
            ("ol", Attrs::class("list-decimal pl-5 mb-4")),
            ("li", Attrs::class("mb-1")),
            // Tables
            ("table", Attrs::class("min-w-full border-collapse border border-gray-200")),
            ("thead", Attrs::class("bg-gray-100")),
            ("tbody", Attrs::class("px-4")),
            ("tr", Attrs::class("border-b border-gray-200")),
            ("th", Attrs::class("px-4 py-2 text-left font-medium text-gray-600")),
            ("td", Attrs::class("px-4 py-2 text-gray-700")),
            // Images & media
            ("img", Attrs::class("max-w-full h-auto rounded")),
            ("video", Attrs::class("max-w-full rounded")),
            // Containers
            ("div", Attrs::class("")),
            ("section", Attrs::class("mb-8")),
            ("article", Attrs::class("mb-8")),
            ("header", Attrs::class("mb-6")),
            ("footer", Attrs::class("mt-6 text-sm text-gray-500")),
            ("main", Attrs::class("flex-1")),
            ("nav", Attrs::class("flex space-x-4")),
        ])
    }
}

impl<K: Into<String>> FromIterator<(K, Attrs)> for Theme {
    fn from_iter<I: IntoIterator<Item = (K, Attrs)>>(iter: I) -> Self {
        Theme::new(iter)
    }
}

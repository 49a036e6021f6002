use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::style::Style;

/// Attribute name → value map for one element.
///
/// Insertion order is irrelevant; the renderer sorts attributes on output.
/// An empty value stays in the map but is dropped when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attrs(HashMap<String, String>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one attribute, returning the map for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Union with `other`; keys in `other` win.
    pub fn and(mut self, other: Attrs) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `data-{name}="value"`.
    pub fn data(name: impl AsRef<str>, value: impl Into<String>) -> Self {
        Attrs::new().with(format!("data-{}", name.as_ref()), value)
    }

    /// `style` attribute holding the inline serialization of `style`.
    pub fn style(style: &Style) -> Self {
        Attrs::new().with("style", style.inline())
    }
}

/// Combine several maps into one. Later maps override earlier ones key for key.
pub fn attributes<I>(maps: I) -> Attrs
where
    I: IntoIterator<Item = Attrs>,
{
    maps.into_iter().fold(Attrs::new(), Attrs::and)
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attrs(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for Attrs {
    fn from(map: HashMap<String, String>) -> Self {
        Attrs(map)
    }
}

impl Extend<(String, String)> for Attrs {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Attrs {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// Single-entry constructors. Each builds a fresh map holding one attribute.

macro_rules! valued_attrs {
    ($($fn_name:ident => $attr:literal,)*) => {
        impl Attrs {
            $(
                #[doc = concat!("`", $attr, "=\"value\"`")]
                pub fn $fn_name(value: impl Into<String>) -> Self {
                    Attrs::new().with($attr, value)
                }
            )*
        }
    };
}

macro_rules! flag_attrs {
    ($($fn_name:ident => $attr:literal,)*) => {
        impl Attrs {
            $(
                #[doc = concat!("`", $attr, "=\"", $attr, "\"`")]
                pub fn $fn_name() -> Self {
                    Attrs::new().with($attr, $attr)
                }
            )*
        }
    };
}

macro_rules! input_types {
    ($($fn_name:ident => $kind:literal,)*) => {
        impl Attrs {
            $(
                #[doc = concat!("`type=\"", $kind, "\"`")]
                pub fn $fn_name() -> Self {
                    Attrs::new().with("type", $kind)
                }
            )*
        }
    };
}

valued_attrs! {
    // forms
    accept => "accept",
    href => "href",
    autocomplete => "autocomplete",
    capture => "capture",
    dirname => "dirname",
    label_for => "for",
    form => "form",
    max => "max",
    max_length => "maxlength",
    min => "min",
    min_length => "minlength",
    pattern => "pattern",
    placeholder => "placeholder",
    rel => "rel",
    size => "size",
    step => "step",
    value => "value",
    src => "src",
    alt => "alt",
    // global
    element_timing => "elementtiming",
    cross_origin => "crossorigin",
    access_key => "accesskey",
    anchor => "anchor",
    auto_capitalize => "autocapitalize",
    auto_correct => "autocorrect",
    class => "class",
    content_editable => "contenteditable",
    dir => "dir",
    draggable => "draggable",
    enter_key_hint => "enterkeyhint",
    export_parts => "exportparts",
    id => "id",
    input_mode => "inputmode",
    is => "is",
    item_id => "itemid",
    item_prop => "itemprop",
    item_ref => "itemref",
    item_type => "itemtype",
    lang => "lang",
    nonce => "nonce",
    part => "part",
    popover => "popover",
    slot => "slot",
    spell_check => "spellcheck",
    tab_index => "tabindex",
    title => "title",
    translate => "translate",
    virtual_keyboard_policy => "virtualkeyboardpolicy",
    writing_suggestions => "writingsuggestions",
    // meta
    import_map => "importmap",
    speculation_rules => "speculationrules",
    name => "name",
    color_scheme => "color-scheme",
    referrer => "referrer",
    robots => "robots",
    theme_color => "theme-color",
    viewport => "viewport",
    http_equiv => "http-equiv",
    content => "content",
    charset => "charset",
}

flag_attrs! {
    disabled => "disabled",
    multiple => "multiple",
    readonly => "readonly",
    required => "required",
    autofocus => "autofocus",
    hidden => "hidden",
    inert => "inert",
    itemscope => "itemscope",
    checked => "checked",
}

input_types! {
    type_text => "text",
    type_email => "email",
    type_password => "password",
    type_checkbox => "checkbox",
    type_radio => "radio",
    type_file => "file",
    type_number => "number",
    type_range => "range",
    type_date => "date",
    type_time => "time",
    type_datetime_local => "datetime-local",
    type_month => "month",
    type_week => "week",
    type_color => "color",
    type_hidden => "hidden",
    type_search => "search",
    type_tel => "tel",
    type_url => "url",
    type_button => "button",
    type_submit => "submit",
    type_reset => "reset",
    type_image => "image",
}

//! Theme/caller attribute merging.
//!
//! Non-class attributes supplied by the caller replace theme defaults.
//! Class lists are merged token by token using a prefix heuristic so a
//! caller's `bg-blue-300` displaces a theme's `bg-red-500` while unrelated
//! theme classes survive.

use std::collections::HashMap;

use crate::attrs::Attrs;

/// Group prefix of a class token.
///
/// The token up to and including its first `-` (`bg-red-500` → `bg-`).
/// Tokens without a dash, or whose only leading character is the dash,
/// are their own prefix (`rounded` → `rounded`).
pub fn class_prefix(class: &str) -> &str {
    match class.find('-') {
        Some(i) if i > 0 => &class[..=i],
        _ => class,
    }
}

/// Merge two whitespace-separated class lists.
///
/// Base tokens keep their positions; a base token is swapped for the
/// supplied token sharing its prefix. Supplied tokens whose prefix matched
/// nothing in `base` are appended in their original order.
pub fn merge_classes(base: &str, supplied: &str) -> String {
    let supplied_tokens: Vec<&str> = supplied.split_whitespace().collect();

    // last supplied token for a prefix owns the slot
    let mut pending: HashMap<&str, &str> = supplied_tokens
        .iter()
        .map(|&token| (class_prefix(token), token))
        .collect();

    let mut merged: Vec<&str> = Vec::new();

    for token in base.split_whitespace() {
        match pending.remove(class_prefix(token)) {
            Some(replacement) => merged.push(replacement),
            None => merged.push(token),
        }
    }

    for &token in &supplied_tokens {
        if pending.remove(class_prefix(token)).is_some() {
            merged.push(token);
        }
    }

    merged.join(" ")
}

/// Merge theme defaults with caller attributes into a new map.
///
/// `base` is only read; the result is always a fresh map.
pub fn merge_attrs(base: &Attrs, supplied: &Attrs) -> Attrs {
    let mut merged = base.clone();

    for (name, value) in supplied.iter() {
        if name == "class" {
            let classes = merge_classes(base.get("class").unwrap_or(""), value);
            merged.insert(name, classes);
        } else {
            merged.insert(name, value);
        }
    }

    merged
}

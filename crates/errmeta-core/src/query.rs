//! Chain queries over decorated errors.
//!
//! All four functions walk the [`Error::source`] chain from a root error,
//! starting at the root itself, and inspect every [`MetaError`] layer they
//! pass. Layers produced by other code are transparent: they contribute no
//! metadata, but their own wrapped error is still visited. A `None` root
//! behaves as an already-exhausted chain.
//!
//! Chains are assumed acyclic; no cycle detection is performed.

use std::collections::BTreeMap;
use std::error::Error;

use crate::types::LabelValue;
use crate::wrapper::MetaError;

/// Returns `true` if any wrapper layer in the chain carries `tag`.
///
/// Tags compare by value, and the first match wins.
pub fn has_tag(root: Option<&(dyn Error + 'static)>, tag: impl AsRef<str>) -> bool {
    let tag = tag.as_ref();
    let mut current = root;
    while let Some(err) = current {
        if let Some(meta) = err.downcast_ref::<MetaError>() {
            if meta.tags().iter().any(|t| t.as_str() == tag) {
                return true;
            }
        }
        current = err.source();
    }
    false
}

/// Returns `true` if any wrapper layer in the chain defines the label `key`,
/// regardless of its value.
pub fn has_label(root: Option<&(dyn Error + 'static)>, key: impl AsRef<str>) -> bool {
    let key = key.as_ref();
    let mut current = root;
    while let Some(err) = current {
        if let Some(meta) = err.downcast_ref::<MetaError>() {
            if meta.labels().contains_key(key) {
                return true;
            }
        }
        current = err.source();
    }
    false
}

/// Returns the value of `key` from the first (closest-to-root) wrapper layer
/// that defines it. Deeper layers are not consulted once a match is found.
pub fn get_label<'a>(
    root: Option<&'a (dyn Error + 'static)>,
    key: impl AsRef<str>,
) -> Option<&'a LabelValue> {
    let key = key.as_ref();
    let mut current = root;
    while let Some(err) = current {
        if let Some(meta) = err.downcast_ref::<MetaError>() {
            if let Some(value) = meta.labels().get(key) {
                return Some(value);
            }
        }
        current = err.source();
    }
    None
}

/// Aggregates the labels of every wrapper layer in the chain into one map.
///
/// The walk runs root→innermost and inserts with overwrite, so when the same
/// key is defined at several layers the deepest layer's value ends up in the
/// result. Returns `None` when no layer defines any label.
pub fn get_labels(root: Option<&(dyn Error + 'static)>) -> Option<BTreeMap<String, LabelValue>> {
    let mut merged: Option<BTreeMap<String, LabelValue>> = None;
    let mut current = root;
    while let Some(err) = current {
        if let Some(meta) = err.downcast_ref::<MetaError>() {
            if !meta.labels().is_empty() {
                merged
                    .get_or_insert_with(BTreeMap::new)
                    .extend(meta.labels().iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        current = err.source();
    }
    merged
}

// ─── Tests ────────────────────────────────────────────────────────────────────

//! Core metadata types: tags, labels, and the attachable [`Meta`] item.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Tag ──────────────────────────────────────────────────────────────────────

/// An opaque categorical marker attachable to an error layer.
///
/// Tags compare by value. The same tag may appear at multiple layers of a
/// chain, or multiple times within one layer's tag set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Create a tag from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// ─── Label value ──────────────────────────────────────────────────────────────

/// The value side of a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum LabelValue {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
        }
    }
}

impl From<&str> for LabelValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for LabelValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i32> for LabelValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for LabelValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for LabelValue {
    fn from(v: u32) -> Self {
        Self::Uint(v.into())
    }
}

impl From<u64> for LabelValue {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f64> for LabelValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for LabelValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<u8>> for LabelValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for LabelValue {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

// ─── Label ────────────────────────────────────────────────────────────────────

/// A named, typed value attachable to an error layer.
///
/// Keys are unique within one wrapper's label mapping; re-attaching a key
/// overwrites its value at that layer only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Label key (e.g. `"tenant"`, `"attempt"`).
    pub key: String,
    /// Label value.
    pub value: LabelValue,
}

impl Label {
    /// Create a label from a key and any convertible value.
    pub fn new(key: impl Into<String>, value: impl Into<LabelValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

// ─── Meta ─────────────────────────────────────────────────────────────────────

/// A single attachable metadata item: a [`Tag`] or a [`Label`].
///
/// The enum is closed on purpose. Anything that is not a tag or a label
/// cannot reach the attach path, so there is no invalid-payload case to
/// reject at run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Meta {
    Tag(Tag),
    Label(Label),
}

impl Meta {
    /// Shorthand for a tag item.
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(Tag::new(name))
    }

    /// Shorthand for a label item.
    pub fn label(key: impl Into<String>, value: impl Into<LabelValue>) -> Self {
        Self::Label(Label::new(key, value))
    }
}

impl From<Tag> for Meta {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

impl From<Label> for Meta {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::Label(label) => write!(f, "{label}"),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

//! The metadata-bearing error wrapper.
//!
//! [`MetaError`] decorates an existing error with a tag set and a label
//! mapping. It leaves the decorated error's message untouched and exposes it
//! through [`Error::source`], so the wrapper is one ordinary layer in a
//! `source()` chain that any error-aware code can walk.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use thiserror::Error as ThisError;

use crate::types::{LabelValue, Meta, Tag};

type BoxedError = Box<dyn Error + Send + Sync + 'static>;

// ─── Base errors ──────────────────────────────────────────────────────────────

/// A plain message error, the base of chains built from text.
#[derive(Debug, ThisError)]
#[error("{0}")]
struct MessageError(String);

/// A message layer with a wrapped child, the base of chains built by
/// [`MetaError::wrap`].
#[derive(Debug, ThisError)]
#[error("{message}")]
struct WrappedError {
    message: String,
    #[source]
    source: BoxedError,
}

// ─── MetaError ────────────────────────────────────────────────────────────────

/// An error decorator carrying tags and labels for one chain layer.
///
/// # Usage
/// ```rust
/// use errmeta_core::{Meta, MetaError};
///
/// let err = MetaError::new("connection refused")
///     .with_meta([Meta::tag("transient"), Meta::label("attempt", 3)]);
///
/// assert_eq!(err.to_string(), "connection refused");
/// assert_eq!(err.tags().len(), 1);
/// ```
#[derive(Debug)]
pub struct MetaError {
    inner: BoxedError,
    tags: Vec<Tag>,
    labels: BTreeMap<String, LabelValue>,
}

impl MetaError {
    /// Create a wrapper around a fresh message error.
    pub fn new(message: impl Into<String>) -> Self {
        Self::decorate(MessageError(message.into()))
    }

    /// Create a wrapper around a fresh message error that itself wraps
    /// `source`, so the chain continues past the new message layer.
    pub fn wrap(message: impl Into<String>, source: impl Into<BoxedError>) -> Self {
        Self::decorate(WrappedError {
            message: message.into(),
            source: source.into(),
        })
    }

    /// Decorate an existing error with an empty tag and label set.
    ///
    /// Accepts any error value, including ones produced by code that has no
    /// knowledge of this crate. The decorated error is stored as-is and
    /// never mutated.
    pub fn decorate(source: impl Into<BoxedError>) -> Self {
        Self {
            inner: source.into(),
            tags: Vec::new(),
            labels: BTreeMap::new(),
        }
    }

    /// Attach metadata items in order, returning the wrapper for chaining.
    ///
    /// `None` items are skipped. A tag appends to this layer's tag set; a
    /// label overwrites any previous value for its key at this layer.
    pub fn with_meta<I, M>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Option<Meta>>,
    {
        for item in items {
            match item.into() {
                Some(Meta::Tag(tag)) => {
                    tracing::trace!(tag = %tag, "tag attached");
                    self.tags.push(tag);
                }
                Some(Meta::Label(label)) => {
                    tracing::trace!(key = %label.key, value = %label.value, "label attached");
                    self.labels.insert(label.key, label.value);
                }
                None => {}
            }
        }
        self
    }

    /// This wrapper's own tags, in attachment order. Not the whole chain.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// This wrapper's own labels. Not the whole chain.
    pub fn labels(&self) -> &BTreeMap<String, LabelValue> {
        &self.labels
    }
}

impl fmt::Display for MetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Error for MetaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let inner: &(dyn Error + 'static) = &*self.inner;
        Some(inner)
    }
}

/// Construct a [`MetaError`] from a format string, like [`format!`].
///
/// ```rust
/// use errmeta_core::errmeta;
///
/// let err = errmeta!("block {} not found", 42);
/// assert_eq!(err.to_string(), "block 42 not found");
/// ```
#[macro_export]
macro_rules! errmeta {
    ($($arg:tt)*) => {
        $crate::MetaError::new(::std::format!($($arg)*))
    };
}

// ─── Tests ────────────────────────────────────────────────────────────────────

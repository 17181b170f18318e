//! errmeta-core — structured, queryable metadata for error chains.
//!
//! This crate defines:
//! - [`Tag`] — an opaque categorical marker, queried by membership
//! - [`Label`] / [`LabelValue`] — a named, typed value, queried by key
//! - [`Meta`] — the closed attachment item (a tag or a label)
//! - [`MetaError`] — the wrapper carrying metadata for one chain layer
//! - [`has_tag`] / [`has_label`] / [`get_label`] / [`get_labels`] — chain queries
//!
//! # Quick Start
//!
//! ```rust
//! use errmeta_core::{get_label, has_tag, LabelValue, Meta, MetaError};
//!
//! let err = MetaError::new("connection refused")
//!     .with_meta([Meta::tag("transient"), Meta::label("attempt", 3)]);
//!
//! assert!(has_tag(Some(&err), "transient"));
//! assert_eq!(get_label(Some(&err), "attempt"), Some(&LabelValue::Int(3)));
//! ```
//!
//! Metadata can be attached at several layers of a chain, including around
//! errors produced by code with no knowledge of this crate; the queries walk
//! the whole [`std::error::Error::source`] chain and skip non-wrapper layers.

pub mod query;
pub mod types;
pub mod wrapper;

pub use query::{get_label, get_labels, has_label, has_tag};
pub use types::{Label, LabelValue, Meta, Tag};
pub use wrapper::MetaError;

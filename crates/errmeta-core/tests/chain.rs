//! Chain-walk integration tests for errmeta-core.
//!
//! Each test builds a multi-layer error chain (wrapper layers, message
//! layers, third-party layers) and asserts what the four queries see from
//! the root.

use std::io;

use errmeta_core::{
    errmeta, get_label, get_labels, has_label, has_tag, LabelValue, Meta, MetaError,
};

// ─── Single-layer scenarios ───────────────────────────────────────────────────

#[test]
fn formatted_constructor_with_mixed_metadata() {
    let err = errmeta!("error with args: {}, {:>5}", 1, "s").with_meta([
        Some(Meta::tag("t1")),
        Some(Meta::label("k1", "v1")),
        Some(Meta::tag("t2")),
        None,
        Some(Meta::label("k2", "v2")),
    ]);

    assert_eq!(err.to_string(), "error with args: 1,     s");

    let tags: Vec<_> = err.tags().iter().map(|t| t.as_str()).collect();
    assert_eq!(tags, ["t1", "t2"]);

    assert_eq!(err.labels().len(), 2);
    assert_eq!(err.labels()["k1"], LabelValue::from("v1"));
    assert_eq!(err.labels()["k2"], LabelValue::from("v2"));
}

#[test]
fn decorated_base_error_tag_membership() {
    let base = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
    let err = MetaError::decorate(base).with_meta([
        Some(Meta::tag("t1")),
        None,
        Some(Meta::tag("t2")),
    ]);

    assert!(!has_tag(Some(&err), "t3"));
    assert!(!has_tag(Some(&err), ""));
    assert!(has_tag(Some(&err), "t1"));
    assert!(has_tag(Some(&err), "t2"));
}

// ─── Precedence across layers ─────────────────────────────────────────────────

#[test]
fn get_label_takes_the_layer_closest_to_the_root() {
    let inner = MetaError::new("inner failure").with_meta([Meta::label("k", "inner")]);
    let outer = MetaError::decorate(inner).with_meta([Meta::label("k", "outer")]);

    assert_eq!(get_label(Some(&outer), "k"), Some(&LabelValue::from("outer")));
}

#[test]
fn get_labels_lets_the_deepest_layer_win() {
    // The aggregate walk runs root→innermost with overwrite-on-conflict, so
    // for a shared key the innermost definition is the one that survives —
    // the opposite of get_label. Both are pinned here on the same chain.
    let inner = MetaError::new("inner failure").with_meta([
        Meta::label("k", "inner"),
        Meta::label("only-inner", 1),
    ]);
    let outer = MetaError::decorate(inner).with_meta([
        Meta::label("k", "outer"),
        Meta::label("only-outer", 2),
    ]);

    assert_eq!(get_label(Some(&outer), "k"), Some(&LabelValue::from("outer")));

    let merged = get_labels(Some(&outer)).unwrap();
    assert_eq!(merged.len(), 3);
    assert_eq!(merged["k"], LabelValue::from("inner"));
    assert_eq!(merged["only-inner"], LabelValue::from(1));
    assert_eq!(merged["only-outer"], LabelValue::from(2));
}

// ─── Transparent third-party layers ───────────────────────────────────────────

#[test]
fn queries_walk_through_foreign_layers() {
    // wrapper → io::Error → wrapper → message
    let deep = MetaError::new("disk full")
        .with_meta([Meta::tag("retryable"), Meta::label("device", "sda1")]);
    let io_layer = io::Error::other(deep);
    let root = MetaError::decorate(io_layer).with_meta([Meta::label("op", "flush")]);

    assert!(has_tag(Some(&root), "retryable"));
    assert!(has_label(Some(&root), "device"));
    assert_eq!(
        get_label(Some(&root), "device"),
        Some(&LabelValue::from("sda1"))
    );

    let merged = get_labels(Some(&root)).unwrap();
    assert_eq!(merged.len(), 2);
    assert_eq!(merged["op"], LabelValue::from("flush"));
    assert_eq!(merged["device"], LabelValue::from("sda1"));
}

#[test]
fn foreign_only_chain_carries_no_metadata() {
    let err = anyhow::anyhow!("db timeout");
    let decorated = MetaError::decorate(err).with_meta([Meta::tag("transient")]);

    assert_eq!(decorated.to_string(), "db timeout");
    assert!(has_tag(Some(&decorated), "transient"));
    assert!(!has_tag(Some(&decorated), "fatal"));
    assert!(!has_label(Some(&decorated), "tenant"));
    assert_eq!(get_labels(Some(&decorated)), None);
}

#[test]
fn wrap_keeps_the_chain_reachable_past_the_message_layer() {
    let base = MetaError::new("root cause").with_meta([Meta::tag("root")]);
    let err = MetaError::wrap("while syncing block 42", base)
        .with_meta([Meta::label("block", 42_u64)]);

    assert_eq!(err.to_string(), "while syncing block 42");
    assert!(has_tag(Some(&err), "root"));
    assert_eq!(get_label(Some(&err), "block"), Some(&LabelValue::Uint(42)));
}

// ─── Absence ──────────────────────────────────────────────────────────────────

#[test]
fn label_free_chain_aggregates_to_none() {
    // Wrapper layers exist, but none defines a label.
    let inner = MetaError::new("inner").with_meta([Meta::tag("t1")]);
    let outer = MetaError::decorate(inner).with_meta([Meta::tag("t2")]);

    assert_eq!(get_labels(Some(&outer)), None);
}

#[test]
fn empty_root_finds_nothing() {
    assert!(!has_tag(None, "t1"));
    assert!(!has_label(None, "k1"));
    assert_eq!(get_label(None, "k1"), None);
    assert_eq!(get_labels(None), None);
}

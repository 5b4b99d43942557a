//! Behavioral properties of the logger hierarchy on isolated registries.

use std::sync::Arc;

use logtree::{Message, Registry, RegistryError, Severity};

mod common;

#[test]
fn test_identity_stability() {
    let registry = Registry::new();
    for name in ["", "svc", "svc.db", "a.b.c.d"] {
        let first = registry.get_or_create(name);
        let second = registry.get_or_create(name);
        assert!(Arc::ptr_eq(&first, &second), "identity lost for {:?}", name);

        first.set_threshold(Severity::Error);
        assert_eq!(second.threshold(), Severity::Error);
    }
}

#[test]
fn test_root_always_resolvable() {
    let registry = Registry::new();
    assert_eq!(registry.root().threshold(), Severity::Information);

    registry.shutdown();
    let root = registry.root();
    assert_eq!(root.name(), "");
    assert_eq!(root.threshold(), Severity::Information);
    assert!(root.channel().is_none());
}

#[test]
fn test_inheritance_at_creation() {
    let registry = Registry::new();
    let (_, chan_a) = common::recording_channel();
    registry.create("svc", Some(chan_a.clone()), Severity::Warning).unwrap();

    let worker = registry.get_or_create("svc.worker");
    assert_eq!(worker.threshold(), Severity::Warning);
    assert!(common::same_channel(&worker.channel().unwrap(), &chan_a));
}

#[test]
fn test_ancestor_skipping() {
    let registry = Registry::new();
    let leaf = registry.get_or_create("a.b.c");

    assert_eq!(leaf.threshold(), Severity::Information);
    assert!(leaf.channel().is_none());
    assert!(registry.find("a").is_none());
    assert!(registry.find("a.b").is_none());
    assert!(registry.find("a.b.c").is_some());
}

#[test]
fn test_duplicate_creation_fails() {
    let registry = Registry::new();
    let (first_mem, first) = common::recording_channel();
    let (_, second) = common::recording_channel();

    registry.create("x", Some(first.clone()), Severity::Information).unwrap();
    let err = registry.create("x", Some(second), Severity::Error).unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyExists { ref name } if name == "x"));
    assert_eq!(err.to_string(), "logger already exists: \"x\"");

    let kept = registry.find("x").unwrap();
    assert_eq!(kept.threshold(), Severity::Information);
    assert!(common::same_channel(&kept.channel().unwrap(), &first));

    // caller falls back to the existing logger
    registry.get_or_create("x").information("fallback");
    assert_eq!(first_mem.texts(), vec!["fallback"]);
}

#[test]
fn test_filtering() {
    let registry = Registry::new();
    let (memory, chan) = common::recording_channel();
    let logger = registry.create("svc", Some(chan), Severity::Warning).unwrap();

    logger.log(&Message::information("info"));
    logger.log(&Message::error("boom"));

    let seen = memory.messages();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].text(), "boom");
    assert_eq!(seen[0].priority(), Severity::Error);
}

#[test]
fn test_shutdown_resets() {
    let registry = Registry::new();
    let (_, chan) = common::recording_channel();
    registry.create("", Some(chan.clone()), Severity::Fatal).unwrap();
    registry.create("svc", Some(chan), Severity::Trace).unwrap();

    registry.shutdown();

    let svc = registry.get_or_create("svc");
    assert_eq!(svc.threshold(), Severity::Information);
    assert!(svc.channel().is_none());
}

#[test]
fn test_orphans_do_not_act_as_ancestors() {
    let registry = Registry::new();
    let (memory, chan) = common::recording_channel();
    let orphan = registry.create("svc", Some(chan), Severity::Debug).unwrap();

    registry.shutdown();

    let child = registry.get_or_create("svc.child");
    assert!(child.channel().is_none());
    assert!(registry.find("svc").is_none());

    orphan.debug("still works");
    assert_eq!(memory.len(), 1);
}

#[test]
fn test_registries_are_independent() {
    let left = Registry::new();
    let right = Registry::new();
    left.create("svc", None, Severity::Fatal).unwrap();

    assert!(right.find("svc").is_none());
    assert_eq!(right.get_or_create("svc").threshold(), Severity::Information);
    assert_eq!(left.get_or_create("svc").threshold(), Severity::Fatal);
}

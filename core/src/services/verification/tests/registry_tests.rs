//! Unit tests for the session registry

use crate::services::verification::SessionRegistry;

#[test]
fn test_get_set_remove() {
    let registry = SessionRegistry::new();
    assert_eq!(registry.get("+15551234567"), None);

    registry.set("+15551234567", "req-1");
    assert_eq!(registry.get("+15551234567").as_deref(), Some("req-1"));

    registry.set("+15551234567", "req-2");
    assert_eq!(registry.get("+15551234567").as_deref(), Some("req-2"));
    assert_eq!(registry.len(), 1);

    registry.remove("+15551234567");
    assert_eq!(registry.get("+15551234567"), None);
    assert!(registry.is_empty());
}

#[test]
fn test_remove_missing_is_noop() {
    let registry = SessionRegistry::new();
    registry.set("+15551234567", "req-1");
    registry.remove("+15559999999");
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_keys_are_verbatim() {
    let registry = SessionRegistry::new();
    registry.set("+15551234567", "req-1");
    assert_eq!(registry.get("15551234567"), None);
    assert_eq!(registry.get("+1 555 123 4567"), None);
}

#[test]
fn test_clones_share_state() {
    let registry = SessionRegistry::new();
    let handle = registry.clone();
    handle.set("+15551234567", "req-1");
    assert_eq!(registry.get("+15551234567").as_deref(), Some("req-1"));
}

#[test]
fn test_separate_registries_are_isolated() {
    let a = SessionRegistry::new();
    let b = SessionRegistry::new();
    a.set("+15551234567", "req-1");
    assert!(b.is_empty());
}

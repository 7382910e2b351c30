#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use imagegate_core::decision::{Decision, ReasonCode};
use imagegate_core::error::ImageGateError;
use imagegate_core::policy::PolicyStore;

fn store(whitelist: &[&str], blacklist: &[&str], default_allow: bool) -> PolicyStore {
    let wl: Vec<String> = whitelist.iter().map(|s| s.to_string()).collect();
    let bl: Vec<String> = blacklist.iter().map(|s| s.to_string()).collect();
    PolicyStore::compile(&wl, &bl, default_allow).expect("must compile")
}

fn scenario_store() -> PolicyStore {
    store(&["^library/nginx:.*$"], &["^.*:latest$"], false)
}

#[test]
fn whitelisted_image_is_allowed() {
    let v = scenario_store().evaluate("library/nginx:1.21");
    assert_eq!(v.decision, Decision::Allow);
    assert_eq!(v.reason, ReasonCode::Whitelisted);
    assert!(v.is_allowed());
}

#[test]
fn latest_tag_is_blacklisted() {
    let v = scenario_store().evaluate("evilcorp/malware:latest");
    assert_eq!(v.decision, Decision::Deny);
    assert_eq!(v.reason, ReasonCode::Blacklisted);
}

#[test]
fn blacklist_wins_over_whitelist() {
    // The reference matches both lists; deny-wins precedence decides.
    let s = store(&["^.*$"], &["^evilcorp/.*$"], false);
    let v = s.evaluate("evilcorp/malware:latest");
    assert_eq!(v.decision, Decision::Deny);
    assert_eq!(v.reason, ReasonCode::Blacklisted);
}

#[test]
fn unmatched_image_falls_back_to_default_deny() {
    let v = scenario_store().evaluate("random/image:1.0");
    assert_eq!(v.decision, Decision::Deny);
    assert_eq!(v.reason, ReasonCode::DefaultDeny);
}

#[test]
fn unmatched_image_falls_back_to_default_allow() {
    let s = store(&["^library/nginx:.*$"], &["^.*:latest$"], true);
    let v = s.evaluate("random/image:1.0");
    assert_eq!(v.decision, Decision::Allow);
    assert_eq!(v.reason, ReasonCode::DefaultAllow);
}

#[test]
fn empty_store_uses_default_only() {
    assert_eq!(
        store(&[], &[], false).evaluate("anything").reason,
        ReasonCode::DefaultDeny
    );
    assert_eq!(
        store(&[], &[], true).evaluate("anything").reason,
        ReasonCode::DefaultAllow
    );
}

#[test]
fn evaluation_is_deterministic() {
    let s = scenario_store();
    for image in ["library/nginx:1.21", "evilcorp/malware:latest", "random/image:1.0", ""] {
        let first = s.evaluate(image);
        for _ in 0..100 {
            assert_eq!(s.evaluate(image), first);
        }
    }
}

#[test]
fn matching_is_unanchored_search() {
    // Patterns without anchors match anywhere in the reference.
    let s = store(&[], &["latest"], true);
    assert_eq!(s.evaluate("nginx:latest").reason, ReasonCode::Blacklisted);
    assert_eq!(
        s.evaluate("repo/latest-builds/tool:1.0").reason,
        ReasonCode::Blacklisted
    );
    assert_eq!(s.evaluate("nginx:1.21").reason, ReasonCode::DefaultAllow);
}

#[test]
fn no_reference_normalization() {
    // "nginx" without a tag is not the same string as "nginx:latest".
    let s = store(&[], &["^nginx:latest$"], true);
    assert_eq!(s.evaluate("nginx").reason, ReasonCode::DefaultAllow);
    assert_eq!(s.evaluate("nginx:latest").reason, ReasonCode::Blacklisted);
}

#[test]
fn invalid_pattern_fails_compile_with_context() {
    let err = PolicyStore::compile(&["(".to_string()], &[], false).expect_err("must fail");
    let msg = err.to_string();
    assert!(msg.contains("whitelist"), "got: {msg}");
    assert!(msg.contains("index 0"), "got: {msg}");
    assert!(msg.contains("(" ), "got: {msg}");
}

#[test]
fn invalid_blacklist_pattern_reports_position() {
    let bl = vec!["^ok$".to_string(), "[".to_string()];
    let err = PolicyStore::compile(&[], &bl, true).expect_err("must fail");
    match err {
        ImageGateError::InvalidPattern {
            list,
            index,
            pattern,
            ..
        } => {
            assert_eq!(list, "blacklist");
            assert_eq!(index, 1);
            assert_eq!(pattern, "[");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn store_reports_entry_counts() {
    let s = scenario_store();
    assert_eq!(s.whitelist_len(), 1);
    assert_eq!(s.blacklist_len(), 1);
    assert!(!s.default_allow());
}

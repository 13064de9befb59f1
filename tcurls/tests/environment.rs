//! Tests for root URL configuration through `TASKCLUSTER_ROOT_URL`.
//!
//! These tests modify process environment variables and are marked with
//! `#[serial]` so they never observe each other's changes.

use serial_test::serial;
use std::env;
use tcurls::{provider_from_env, root_url_from_env, Error, UrlProvider, ROOT_URL_ENV};

/// Runs `f` with the root URL variable set to `value`, restoring it afterwards.
fn with_root_url<F: FnOnce()>(value: Option<&str>, f: F) {
    let saved = env::var(ROOT_URL_ENV).ok();
    match value {
        Some(v) => env::set_var(ROOT_URL_ENV, v),
        None => env::remove_var(ROOT_URL_ENV),
    }

    f();

    match saved {
        Some(v) => env::set_var(ROOT_URL_ENV, v),
        None => env::remove_var(ROOT_URL_ENV),
    }
}

#[test]
#[serial]
fn test_root_url_from_env_set() {
    with_root_url(Some("https://tc.example.com/"), || {
        assert_eq!(root_url_from_env().unwrap(), "https://tc.example.com/");
    });
}

#[test]
#[serial]
fn test_root_url_from_env_unset() {
    with_root_url(None, || {
        let err = root_url_from_env().unwrap_err();
        assert!(matches!(err, Error::MissingRootUrl { .. }));
        assert!(err.to_string().contains(ROOT_URL_ENV));
    });
}

#[test]
#[serial]
fn test_root_url_from_env_empty() {
    with_root_url(Some(""), || {
        assert!(root_url_from_env().is_err());
        assert!(provider_from_env().is_err());
    });
}

#[test]
#[serial]
fn test_provider_from_env_legacy() {
    with_root_url(Some("https://taskcluster.net"), || {
        let provider = provider_from_env().unwrap();
        assert!(provider.is_legacy());
        assert_eq!(
            provider.api("queue", "v1", "task/123"),
            "https://queue.taskcluster.net/v1/task/123"
        );
    });
}

#[test]
#[serial]
fn test_provider_from_env_generic() {
    with_root_url(Some("https://tc.example.com"), || {
        let provider = provider_from_env().unwrap();
        assert!(!provider.is_legacy());
        assert_eq!(
            provider.api_manifest(),
            "https://tc.example.com/references/manifest.json"
        );
    });
}

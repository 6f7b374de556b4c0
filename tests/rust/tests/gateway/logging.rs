//! Tests for tracing initialization.

use dashly_gateway::{init_tracing, init_tracing_with_file};

// Single test so the one-global-subscriber rule stays deterministic
// within this binary.
#[test]
fn tracing_initialization_installs_once() {
    let logs_dir = tempfile::tempdir().unwrap();

    let guard = init_tracing_with_file("info", logs_dir.path(), "dashly").unwrap();
    tracing::info!("gateway logging smoke line");

    // A second global install is rejected, not panicked on.
    assert!(init_tracing("info").is_err());

    drop(guard);
    assert!(logs_dir.path().exists());
}

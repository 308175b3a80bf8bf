#![allow(dead_code)]

//! Shared fixtures for layout integration tests.

use gridkit_host::{ElementHost, ElementId, HeadlessHost};
use gridkit_layout::Rect;

/// Install a tracing subscriber so `RUST_LOG`-filtered layout traces show
/// up in test output. Safe to call from every test.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert an element's current frame with a readable failure message.
#[track_caller]
pub fn assert_frame(host: &HeadlessHost, id: ElementId, expected: Rect) {
    let actual = host.frame(id).expect("element should exist");
    assert_eq!(
        actual, expected,
        "frame mismatch for {:?}: expected {:?}, got {:?}",
        id, expected, actual
    );
}

/// A host with a container surface of the given size already created.
pub fn host_with_surface(width: f32, height: f32) -> (HeadlessHost, ElementId) {
    let mut host = HeadlessHost::new();
    let surface = host.create_element(Rect::new(0.0, 0.0, width, height));
    (host, surface)
}

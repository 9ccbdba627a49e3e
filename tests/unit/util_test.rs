//! Tests for utility helpers

use hostel_allotment::util::clock::now_ms;
use hostel_allotment::util::telemetry::init_tracing;

#[test]
fn test_now_ms_is_monotonic_enough() {
    let a = now_ms();
    let b = now_ms();
    assert!(b >= a);
    // Sanity: after 2020-01-01.
    assert!(a > 1_577_836_800_000);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}

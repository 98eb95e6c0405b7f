//! # Statistics Tests
//!
//! Derived totals over the raw per-direction counters.

use mipsim_core::stats::TlbStats;
use pretty_assertions::assert_eq;

#[test]
fn counters_start_at_zero() {
    let stats = TlbStats::default();
    assert_eq!(stats.accesses(), 0);
    assert_eq!(stats.hits(), 0);
    assert_eq!(stats.misses(), 0);
    assert_eq!(stats.invalids, 0);
}

#[test]
fn derived_totals_sum_both_directions() {
    let stats = TlbStats {
        read_hits: 10,
        read_misses: 2,
        read_accesses: 13,
        write_hits: 4,
        write_misses: 1,
        write_accesses: 6,
        invalids: 2,
    };
    assert_eq!(stats.hits(), 14);
    assert_eq!(stats.misses(), 3);
    assert_eq!(stats.accesses(), 19);
}

//! Tests for pagination module

use super::*;
use crate::limit::INFINITE;

// ============================================================================
// Offset Pagination Tests
// ============================================================================

#[test]
fn test_offset_start_index_is_page_number() {
    let pagination = OffsetPagination;
    assert_eq!(pagination.start_index(0, 0, 10), 0);
    assert_eq!(pagination.start_index(0, 3, 10), 3);
    assert_eq!(pagination.start_index(8, 0, 10), 8);
    assert_eq!(pagination.start_index(8, 7, 10), 15);
}

#[test]
fn test_offset_fetch_count_is_always_batch_size() {
    let pagination = OffsetPagination;
    assert_eq!(pagination.fetch_count(100, 0, 10), 10);
    assert_eq!(pagination.fetch_count(100, 99, 10), 10);
    assert_eq!(pagination.fetch_count(5, 200, 10), 10);
    assert_eq!(pagination.fetch_count(INFINITE, 0, 10), 10);
}

#[test]
fn test_offset_sequence_for_single_worker() {
    // limit 100, batch size 10, parallelism 1: pages 0..=9, each of size 10
    let pagination = OffsetPagination;
    let pairs: Vec<(u64, u64)> = (0..10)
        .map(|batch_index| {
            let start = pagination.start_index(batch_index, 0, 10);
            (start, pagination.fetch_count(100, start, 10))
        })
        .collect();
    let expected: Vec<(u64, u64)> = (0..10).map(|page| (page, 10)).collect();
    assert_eq!(pairs, expected);
}

// ============================================================================
// Cursor Pagination Tests
// ============================================================================

#[test]
fn test_cursor_start_index_is_item_offset() {
    let pagination = CursorPagination;
    assert_eq!(pagination.start_index(0, 0, 10), 0);
    assert_eq!(pagination.start_index(0, 3, 10), 30);
    assert_eq!(pagination.start_index(8, 0, 10), 80);
    assert_eq!(pagination.start_index(8, 7, 12), 180);
}

#[test]
fn test_cursor_fetch_count_shrinks_on_final_page() {
    let pagination = CursorPagination;
    assert_eq!(pagination.fetch_count(100, 0, 10), 10);
    assert_eq!(pagination.fetch_count(101, 100, 10), 1);
    assert_eq!(pagination.fetch_count(97, 92, 23), 5);
}

#[test]
fn test_cursor_fetch_count_clamps_to_zero_past_limit() {
    let pagination = CursorPagination;
    assert_eq!(pagination.fetch_count(100, 100, 10), 0);
    assert_eq!(pagination.fetch_count(2, 10, 10), 0);
    assert_eq!(pagination.fetch_count(0, 0, 10), 0);
}

#[test]
fn test_cursor_sequence_for_single_worker() {
    // limit 100, batch size 10, parallelism 1: (0,10),(10,10),...,(90,10)
    let pagination = CursorPagination;
    let pairs: Vec<(u64, u64)> = (0..10)
        .map(|batch_index| {
            let start = pagination.start_index(batch_index, 0, 10);
            (start, pagination.fetch_count(100, start, 10))
        })
        .collect();
    let expected: Vec<(u64, u64)> = (0..10).map(|i| (i * 10, 10)).collect();
    assert_eq!(pairs, expected);
}

#[test]
fn test_cursor_ranges_tile_limit_without_gaps_or_overlaps() {
    // For a grid of (limit, batch_size, parallelism), the union of
    // [start, start + fetch_count) over all rounds and workers must cover
    // [0, limit) exactly once.
    let pagination = CursorPagination;
    for &(limit, batch_size, parallelism) in &[
        (100u64, 10u64, 1u64),
        (100, 12, 1),
        (101, 10, 1),
        (97, 23, 1),
        (100, 10, 10),
        (100, 12, 8),
        (100, 1, 100),
        (100, 2, 100),
        (1, 10, 4),
    ] {
        let rounds = ((limit as f64 / batch_size as f64) / parallelism as f64).ceil() as u64;
        let mut covered = vec![0u32; limit as usize];
        for batch_index in 0..rounds {
            let batch_start = parallelism * batch_index;
            for worker in 0..parallelism {
                let start = pagination.start_index(batch_start, worker, batch_size);
                let count = pagination.fetch_count(limit, start, batch_size);
                for item in start..start + count {
                    covered[item as usize] += 1;
                }
            }
        }
        assert!(
            covered.iter().all(|&c| c == 1),
            "limit={limit} batch_size={batch_size} parallelism={parallelism} does not tile"
        );
    }
}

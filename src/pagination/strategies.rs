//! Pagination strategy implementations
//!
//! Each strategy handles one addressing scheme.

use super::types::Pagination;

// ============================================================================
// Offset Pagination
// ============================================================================

/// Offset (page-number) addressing
///
/// `start` denotes a page number: each worker advances by whole pages, and
/// the source owns translating a page number into an item range.
/// Common patterns:
/// - `?page=3&per_page=50`
/// - `SELECT ... LIMIT :count OFFSET :page * :count`
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetPagination;

impl Pagination for OffsetPagination {
    fn start_index(&self, batch_start: u64, worker_number: u64, _batch_size: u64) -> u64 {
        batch_start + worker_number
    }

    fn fetch_count(&self, _limit: u64, _start: u64, batch_size: u64) -> u64 {
        batch_size
    }
}

// ============================================================================
// Cursor Pagination
// ============================================================================

/// Cursor (item-offset) addressing
///
/// `start` denotes an absolute item offset: each worker advances by item
/// index, and the final partial page shrinks so that the requested ranges
/// exactly tile `[0, limit)`.
/// Common patterns:
/// - `?start=120&count=10`
/// - `SELECT ... LIMIT :count OFFSET :start`
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorPagination;

impl Pagination for CursorPagination {
    fn start_index(&self, batch_start: u64, worker_number: u64, batch_size: u64) -> u64 {
        (batch_start + worker_number) * batch_size
    }

    fn fetch_count(&self, limit: u64, start: u64, batch_size: u64) -> u64 {
        limit.saturating_sub(start).min(batch_size)
    }
}

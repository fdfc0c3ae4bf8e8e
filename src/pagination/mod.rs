//! Pagination module
//!
//! Supports: Offset (page-number) and Cursor (item-offset) addressing
//!
//! # Overview
//!
//! A pagination strategy maps a worker's slot in a batch round onto the
//! `(start, fetch_count)` pair handed to the source. Strategies are pure and
//! stateless, so one instance is safely shared by every worker of a run.

mod strategies;
mod types;

pub use strategies::{CursorPagination, OffsetPagination};
pub use types::Pagination;

#[cfg(test)]
mod tests;

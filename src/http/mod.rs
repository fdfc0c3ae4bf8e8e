//! API walker adapter
//!
//! Glue, not core: turns a request-building function and a [`reqwest`]
//! client into a [`Source`], so HTTP APIs can be walked without writing a
//! source by hand.

mod client;

pub use client::{api_walker, ApiSource};

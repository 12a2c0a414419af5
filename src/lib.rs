//! Bounded SPSC ring queue shared between a host processor and a
//! co-processor: one handle type over either a locally owned ring or a remote
//! one reached through explicit descriptor load/store operations.

mod queue;
mod ring;

pub mod error;

pub use queue::*;
pub use ring::*;

//! sl-core: stable foundation for springlane.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - lanes (fixed 4-lane vector used for batched spring channels)
//! - error (shared error types)

pub mod error;
pub mod lanes;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SlError, SlResult};
pub use lanes::{LANES, Lanes4};
pub use numeric::*;

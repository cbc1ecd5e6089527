//! Core primitives for the bookgen catalog generator.
//!
//! This crate provides the deterministic building blocks used across the
//! generator:
//!
//! - [`seed`] - Stable sub-seed derivation from (user seed, record index, tag)
//! - [`fractional`] - Probabilistic rounding of a real-valued average to an integer
//! - [`window`] - Page-number to record-index-range mapping
//! - [`record`] - The generated record model
//!
//! # Architecture
//!
//! The bookgen-core crate sits at the foundation of the generator:
//!
//! ```text
//! bookgen-core (this crate)
//!    │
//!    ├─── bookgen-lexicon  (word supply, independent of core)
//!    │
//!    └─── bookgen          (templates, field generators, page orchestration)
//! ```
//!
//! Everything here is a pure function of its inputs: the same arguments
//! produce the same outputs across processes, platforms, and runs. That
//! stability is the contract the rest of the generator depends on.

pub mod error;
pub mod fractional;
pub mod record;
pub mod seed;
pub mod window;

// Re-exports for convenience
pub use error::GenerateError;
pub use fractional::fractional_count;
pub use record::{BookRecord, ReviewRecord};
pub use seed::{field_seed, nested_seed};
pub use window::{page_window, PageWindow, FIRST_PAGE_SIZE, PAGE_SIZE};

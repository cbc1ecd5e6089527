//! Deterministic fake book-catalog generator.
//!
//! Given a numeric seed, a page number, a locale, and two target averages
//! (likes, reviews), the engine reproducibly fabricates a page of book
//! records with nested reviews. Every field of every record draws from its
//! own locally constructed RNG, seeded through a stable derivation chain,
//! so the same inputs produce byte-identical output across processes and
//! platforms, and generation is trivially parallel-safe.
//!
//! # Architecture
//!
//! ```text
//! bookgen-core         seed derivation, fractional counter, windowing, model
//! bookgen-lexicon      locale word supply (names, places, products, dates)
//! bookgen (this crate) templates, field generators, page orchestration, CLI
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookgen::{generate_page, BuiltinLexicon, PageParams};
//!
//! let params = PageParams {
//!     user_seed: 42,
//!     page: 1,
//!     locale: "en".to_string(),
//!     avg_likes: 4.0,
//!     avg_reviews: 3.0,
//! };
//! let supply = BuiltinLexicon::new(&params.locale);
//!
//! let books = generate_page(&params, &supply).unwrap();
//! assert_eq!(books.len(), 20);
//! assert!(books.iter().all(|b| b.likes == 4));
//! ```

pub mod fields;
pub mod page;
pub mod template;

// Re-exports for convenience
pub use bookgen_core::{
    fractional_count, page_window, BookRecord, GenerateError, PageWindow, ReviewRecord,
};
pub use bookgen_lexicon::{BuiltinLexicon, WordSupply};
pub use page::{generate_page, generate_record, PageParams};

//! # Pagemark Testkit
//!
//! Testing utilities for the pagemark reading-list store.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected canonical forms, for
//!   cross-version verification of the digest pipeline
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the canonicalization rules:
//!
//! ```rust
//! use pagemark_testkit::vectors::{all_vectors, digest_from_vector};
//!
//! for vector in all_vectors() {
//!     let id = digest_from_vector(&vector);
//!     println!("{}: {}", vector.name, id.to_hex());
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use pagemark_testkit::generators::ArticleParams;
//! use pagemark::entry_digest;
//!
//! proptest! {
//!     #[test]
//!     fn digest_is_deterministic(params: ArticleParams) {
//!         let a = entry_digest(&params.url, &params.title, &params.excerpt);
//!         let b = entry_digest(&params.url, &params.title, &params.excerpt);
//!         prop_assert_eq!(a, b);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use pagemark_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let entries = fixture.populate(3);
//! assert_eq!(fixture.list.count().unwrap(), 3);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{sample_articles, TestFixture};
pub use generators::ArticleParams;
pub use vectors::{all_vectors, digest_from_vector, verify_all_vectors, GoldenVector};

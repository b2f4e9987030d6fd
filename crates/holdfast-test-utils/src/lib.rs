//! Test fixtures for Holdfast development.
//!
//! Provides [`Ledger`], a shared counter of clones and drops, and a small
//! polymorphic [`Shape`] hierarchy whose concrete types report every copy
//! and destruction to a ledger. Together they make "copied at the runtime
//! type" and "dropped exactly once" directly observable.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{Circle, Ledger, Rect, Shape, Tracked};

//! Single-owner boxes with value semantics for polymorphic data.
//!
//! [`ValueBox<T>`] owns exactly one heap-allocated value whose declared
//! type is `T` and whose runtime type may be any [`Subtype`] of `T`.
//! Copying the box deep-copies the held value with the *runtime* type's
//! `Clone`, so a `ValueBox<dyn Shape>` built from a `Circle` copies into a
//! new `Circle`, never a truncated base. Moving the box transfers
//! ownership without touching the value.
//!
//! # Architecture
//!
//! ```text
//! ValueBox<T: ?Sized>
//! └── Box<T>             (the single owning reference, never null)
//!
//! CloneToBox             (sealed; blanket impl for every T: Clone)
//! └── raw::clone_box     (rebuilds Box<dyn Trait> from a type-erased clone)
//!
//! Subtype<Base>          (reflexive blanket impl + subtype! declarations)
//! ```
//!
//! # Capability gating
//!
//! Every precondition on `T` is a trait bound, so unmet preconditions are
//! compile errors:
//!
//! - default construction needs `T: Default`,
//! - copying needs `T: CloneToBox` (any `Clone` type, or a trait object
//!   whose trait has `CloneToBox` as a supertrait),
//! - copy-assignment needs `T: Clone` and the *same* declared type,
//! - cross-type conversions need `U: Subtype<T>`.
//!
//! `unsafe` code is confined to the private `raw` module, which rebuilds
//! cloned trait objects, and to the raw-pointer constructor
//! [`ValueBox::from_raw`], an `unsafe fn` whose caller upholds the
//! ownership contract.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod clone;
mod raw;
pub mod subtype;
pub mod value_box;

// Public re-exports for the primary API surface.
pub use clone::CloneToBox;
pub use subtype::Subtype;
pub use value_box::ValueBox;

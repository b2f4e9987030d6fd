//! Holdfast: single-owner ownership primitives.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Holdfast sub-crates. For most users, adding `holdfast` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use holdfast::prelude::*;
//!
//! trait Shape: CloneToBox {
//!     fn area(&self) -> f64;
//! }
//!
//! #[derive(Clone)]
//! struct Square(f64);
//! impl Shape for Square {
//!     fn area(&self) -> f64 { self.0 * self.0 }
//! }
//!
//! #[derive(Clone)]
//! struct Disc(f64);
//! impl Shape for Disc {
//!     fn area(&self) -> f64 { 3.0 * self.0 * self.0 }
//! }
//!
//! holdfast::subtype!(Square => dyn Shape, Disc => dyn Shape);
//!
//! // A base-typed box copies at the runtime type.
//! let a: ValueBox<dyn Shape> = ValueBox::adopt(Box::new(Square(2.0)));
//! let b = a.clone();
//! assert_eq!(b.area(), 4.0);
//!
//! // An owning array of trait objects, grown by doubling.
//! let mut shapes: OwningArray<dyn Shape> = OwningArray::new();
//! shapes.push(Box::new(Square(1.0)));
//! shapes.push(Box::new(Disc(1.0)));
//! assert_eq!(shapes.capacity(), 2);
//! assert_eq!(shapes.at(1)?.area(), 3.0);
//! assert!(shapes.at(2).is_err());
//! # Ok::<(), holdfast::array::ArrayError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`value`] | `holdfast-value` | `ValueBox`, `CloneToBox`, `Subtype` |
//! | [`array`] | `holdfast-array` | `OwningArray`, `ArrayConfig`, `ArrayError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Deep-copying single-owner box (`holdfast-value`).
pub mod value {
    pub use holdfast_value::clone::{clone_box, CloneToBox};
    pub use holdfast_value::subtype::Subtype;
    pub use holdfast_value::value_box::ValueBox;
}

/// Owning pointer array (`holdfast-array`).
pub mod array {
    pub use holdfast_array::config::ArrayConfig;
    pub use holdfast_array::error::ArrayError;
    pub use holdfast_array::iter::{IntoIter, Iter, IterMut};
    pub use holdfast_array::OwningArray;
}

pub use holdfast_array::owning_array;
pub use holdfast_value::subtype;

/// Commonly used types, importable with `use holdfast::prelude::*`.
pub mod prelude {
    pub use holdfast_array::{ArrayConfig, ArrayError, OwningArray};
    pub use holdfast_value::{CloneToBox, Subtype, ValueBox};
}

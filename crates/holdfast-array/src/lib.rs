//! Growable arrays of exclusively owned heap objects.
//!
//! [`OwningArray<T>`] stores a contiguous run of owning pointers
//! (`Box<T>`), so `T` may be unsized (`OwningArray<dyn Trait>`). Appends
//! are O(1) amortized with an exact capacity-doubling policy; growth moves
//! the pointer handles bitwise and never clones or drops a pointee.
//!
//! # Architecture
//!
//! ```text
//! OwningArray<T: ?Sized>
//! ├── slots: Vec<Box<T>>   (occupied slots [0, len), backing store)
//! └── capacity             (logical capacity, grows by growth_factor)
//! ```
//!
//! # Access paths
//!
//! | Path | On a bad index |
//! |------|----------------|
//! | [`at`](OwningArray::at) / [`at_mut`](OwningArray::at_mut) | `Err(ArrayError::OutOfRange)` |
//! | [`get`](OwningArray::get) / [`get_mut`](OwningArray::get_mut) | `None` |
//! | `array[i]`, [`front`](OwningArray::front), [`back`](OwningArray::back) | panic |
//! | [`get_unchecked`](OwningArray::get_unchecked) | undefined behaviour |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod iter;

// Public re-exports for the primary API surface.
pub use array::OwningArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use iter::{IntoIter, Iter, IterMut};

/// Build an [`OwningArray`] from a fixed list of boxes, in argument order.
///
/// The array's length and capacity both equal the number of arguments.
///
/// ```
/// use holdfast_array::owning_array;
///
/// let arr = owning_array![Box::new(1), Box::new(2), Box::new(3)];
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.capacity(), 3);
/// assert_eq!(arr[2], 3);
/// ```
///
/// Every argument must be an owning box of the element type:
///
/// ```compile_fail
/// use holdfast_array::owning_array;
///
/// let x = 5;
/// let arr = owning_array![Box::new(1), &x];
/// ```
#[macro_export]
macro_rules! owning_array {
    () => {
        $crate::OwningArray::from_boxes([])
    };
    ($($item:expr),+ $(,)?) => {
        $crate::OwningArray::from_boxes([$($item),+])
    };
}

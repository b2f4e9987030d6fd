//! The copy capability behind polymorphic deep copies.
//!
//! [`CloneToBox`] is what lets a `ValueBox<dyn Trait>` be copied. It is
//! implemented for every `T: Clone` and cannot be implemented by hand.
//! A trait opts its trait objects in by naming it as a supertrait:
//!
//! ```
//! use holdfast_value::{CloneToBox, ValueBox};
//!
//! trait Animal: CloneToBox {
//!     fn noise(&self) -> &'static str;
//! }
//!
//! #[derive(Clone)]
//! struct Cat;
//! impl Animal for Cat {
//!     fn noise(&self) -> &'static str { "meow" }
//! }
//!
//! let a: ValueBox<dyn Animal> = ValueBox::from_box(Box::new(Cat));
//! let b = a.clone();
//! assert_eq!(b.noise(), "meow");
//! ```
//!
//! The vtable entry for the trait object points at the concrete type's
//! `Clone`, so the copy is always made at the runtime type.

mod private {
    pub trait Sealed {}

    impl<T: Clone> Sealed for T {}
}

/// Types whose values can be copied into a fresh heap allocation, including
/// through a trait object.
///
/// Implemented for every `T: Clone` and sealed against other impls. Use it
/// as a supertrait to make `ValueBox<dyn YourTrait>` copyable.
pub trait CloneToBox: private::Sealed {
    /// Clone `self` into a new heap allocation and return the erased data
    /// pointer. Ownership of the allocation passes to the caller.
    #[doc(hidden)]
    fn clone_to_raw(&self) -> *mut ();
}

impl<T: Clone> CloneToBox for T {
    fn clone_to_raw(&self) -> *mut () {
        Box::into_raw(Box::new(self.clone())).cast::<()>()
    }
}

/// Clone a possibly-unsized value into a new `Box` of the same runtime type.
///
/// For a sized `T` this is `Box::new(value.clone())`. For a trait object it
/// dispatches to the concrete type's `Clone` and keeps the original vtable.
pub fn clone_box<T: ?Sized + CloneToBox>(value: &T) -> Box<T> {
    crate::raw::clone_box(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    trait Named: CloneToBox {
        fn name(&self) -> String;
    }

    #[derive(Clone)]
    struct Plain(String);

    impl Named for Plain {
        fn name(&self) -> String {
            self.0.clone()
        }
    }

    struct Counted {
        copies: Rc<Cell<usize>>,
    }

    impl Clone for Counted {
        fn clone(&self) -> Self {
            self.copies.set(self.copies.get() + 1);
            Self {
                copies: Rc::clone(&self.copies),
            }
        }
    }

    impl Named for Counted {
        fn name(&self) -> String {
            "counted".to_string()
        }
    }

    #[test]
    fn sized_clone_box_copies_value() {
        let original = String::from("hello");
        let copy = clone_box(&original);
        assert_eq!(*copy, "hello");
    }

    #[test]
    fn trait_object_clone_keeps_runtime_type() {
        let original: Box<dyn Named> = Box::new(Plain("plain".into()));
        let copy = clone_box(&*original);
        assert_eq!(copy.name(), "plain");
    }

    #[test]
    fn trait_object_clone_runs_concrete_clone() {
        let copies = Rc::new(Cell::new(0));
        let original: Box<dyn Named> = Box::new(Counted {
            copies: Rc::clone(&copies),
        });
        let _a = clone_box(&*original);
        let _b = clone_box(&*original);
        assert_eq!(copies.get(), 2);
    }

    #[test]
    fn clone_of_zero_sized_value() {
        #[derive(Clone, Debug, PartialEq)]
        struct Unit;
        let copy = clone_box(&Unit);
        assert_eq!(*copy, Unit);
    }
}

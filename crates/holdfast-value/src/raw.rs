//! Low-level fat-pointer surgery for [`clone_box`](crate::clone::clone_box).
//!
//! A trait object cannot return `Box<Self>` from a vtable method, so
//! [`CloneToBox`] hands back an erased data pointer instead. This module
//! pairs that pointer with the metadata (vtable) of the source reference to
//! rebuild a `Box<T>` at the runtime type.

#![allow(unsafe_code)]

use crate::clone::CloneToBox;

/// Clone `value` into a new `Box<T>`, preserving its runtime type.
pub(crate) fn clone_box<T: ?Sized + CloneToBox>(value: &T) -> Box<T> {
    let mut fat = value as *const T;
    let data = value.clone_to_raw();
    // SAFETY: relies on the data pointer being the first word of every
    // `*const T`, sized or not. Rust does not specify fat-pointer layout,
    // but every supported target lays out slice and trait-object pointers
    // this way, and the `debug_assert!` below checks it against `value`.
    // `data` was produced by `Box::into_raw` on a clone of the
    // same concrete type that `value` refers to (the call dispatched through
    // `value`'s own vtable), so swapping it in leaves the metadata valid
    // for the new allocation and transfers ownership to the returned box.
    unsafe {
        let data_slot = (&mut fat as *mut *const T).cast::<*mut ()>();
        debug_assert_eq!(*data_slot as *const (), value as *const T as *const ());
        *data_slot = data;
        Box::from_raw(fat as *mut T)
    }
}

//! The single-owner, deep-copying box.
//!
//! See [`ValueBox`] for the ownership contract.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use crate::clone::{clone_box, CloneToBox};
use crate::subtype::Subtype;

/// Owns exactly one heap-allocated value with declared type `T`.
///
/// The runtime type of the held value is `T` itself or any type declared a
/// [`Subtype`] of `T`. The box gives that value *value semantics*:
///
/// - `clone()` deep-copies through the runtime type's `Clone`,
/// - moving the box moves ownership and never touches the value,
/// - dropping the box drops the value exactly once.
///
/// The box is never empty. Operations that give up ownership
/// ([`release`](Self::release), [`into_raw`](Self::into_raw),
/// [`upcast`](Self::upcast)) consume it, so no moved-from or released
/// box can be observed.
///
/// Like [`Box`], every operation on the box itself is an associated
/// function (`ValueBox::swap(&mut a, &mut b)`), so method calls through
/// `Deref` always reach the held value:
///
/// ```
/// use holdfast_value::ValueBox;
///
/// let mut v = ValueBox::new(vec![1, 2, 3]);
/// v.swap(0, 2);
/// assert_eq!(*v, [3, 2, 1]);
/// ```
///
/// # Compile-time gating
///
/// Default construction needs `T: Default`:
///
/// ```compile_fail
/// use holdfast_value::ValueBox;
///
/// struct NoDefault(u32);
///
/// let b: ValueBox<NoDefault> = ValueBox::default();
/// ```
///
/// Copying needs a copyable `T`:
///
/// ```compile_fail
/// use holdfast_value::ValueBox;
///
/// struct NoCopy;
///
/// let a = ValueBox::new(NoCopy);
/// let b: ValueBox<NoCopy> = a.clone();
/// ```
///
/// There is no null box:
///
/// ```compile_fail
/// use holdfast_value::ValueBox;
///
/// let b: ValueBox<u32> = unsafe { ValueBox::from_raw(std::ptr::null_mut()) };
/// ```
///
/// Copy-assignment only accepts the same declared type. Copying a derived
/// value over an existing base allocation would slice it, so it is rejected:
///
/// ```compile_fail
/// use holdfast_value::{subtype, CloneToBox, ValueBox};
///
/// trait Shape: CloneToBox {}
///
/// #[derive(Clone)]
/// struct Circle;
/// impl Shape for Circle {}
/// subtype!(Circle => dyn Shape);
///
/// let mut base: ValueBox<dyn Shape> = ValueBox::adopt(Box::new(Circle));
/// let derived = ValueBox::new(Circle);
/// ValueBox::assign_copy(&mut base, &derived);
/// ```
///
/// Move-assignment across the same relation is fine:
///
/// ```
/// use holdfast_value::{subtype, CloneToBox, ValueBox};
///
/// trait Shape: CloneToBox {
///     fn area(&self) -> f64;
/// }
///
/// #[derive(Clone)]
/// struct Square(f64);
/// impl Shape for Square {
///     fn area(&self) -> f64 { self.0 * self.0 }
/// }
/// subtype!(Square => dyn Shape);
///
/// let mut base: ValueBox<dyn Shape> = ValueBox::adopt(Box::new(Square(1.0)));
/// ValueBox::assign_move(&mut base, ValueBox::new(Square(3.0)));
/// assert_eq!(base.area(), 9.0);
/// ```
pub struct ValueBox<T: ?Sized> {
    inner: Box<T>,
}

impl<T> ValueBox<T> {
    /// Allocate `value` on the heap and take ownership of it.
    pub fn new(value: T) -> Self {
        Self {
            inner: Box::new(value),
        }
    }

    /// Consume the box and return the held value.
    pub fn into_inner(this: Self) -> T {
        *this.inner
    }
}

impl<T: ?Sized> ValueBox<T> {
    /// Take ownership of an existing allocation.
    ///
    /// A `Box<Derived>` coerces here directly when `T` is a trait object
    /// that `Derived` implements.
    pub fn from_box(boxed: Box<T>) -> Self {
        Self { inner: boxed }
    }

    /// Take ownership of an allocation whose type is a declared subtype of
    /// `T`. The declared type becomes `T`; the runtime type stays `U`.
    pub fn adopt<U: ?Sized + Subtype<T>>(boxed: Box<U>) -> Self {
        Self {
            inner: boxed.into_base(),
        }
    }

    /// Take ownership of a raw heap pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`Box::into_raw`] (or [`ValueBox::into_raw`])
    /// for a value of type `T`, and no other owner of that allocation may
    /// remain. Passing the same pointer to two owners is a double free.
    #[allow(unsafe_code)]
    pub unsafe fn from_raw(ptr: NonNull<T>) -> Self {
        Self {
            // SAFETY: upheld by the caller, see above.
            inner: unsafe { Box::from_raw(ptr.as_ptr()) },
        }
    }

    /// Build a new box holding a deep copy of `other`'s value.
    ///
    /// The copy is made with `other`'s runtime type, then viewed as `T`.
    /// Equivalent to `ValueBox::upcast(other.clone())`.
    pub fn copied_from<U>(other: &ValueBox<U>) -> Self
    where
        U: ?Sized + CloneToBox + Subtype<T>,
    {
        Self::adopt(clone_box(&*other.inner))
    }

    /// Transfer ownership into a box of a supertype. Never copies.
    pub fn upcast<B: ?Sized>(this: Self) -> ValueBox<B>
    where
        T: Subtype<B>,
    {
        ValueBox {
            inner: this.inner.into_base(),
        }
    }

    /// Drop `this`'s current value and take ownership of `other`'s.
    ///
    /// `other` may hold any subtype of `T`. Same-type move-assignment is
    /// also available as plain `=`.
    pub fn assign_move<U: ?Sized + Subtype<T>>(this: &mut Self, other: ValueBox<U>) {
        Self::reset(this, other.inner.into_base());
    }

    /// Give up ownership and return the owning reference.
    pub fn release(this: Self) -> Box<T> {
        this.inner
    }

    /// Give up ownership and return the raw heap pointer.
    ///
    /// The caller becomes responsible for freeing it, usually by passing it
    /// back to [`ValueBox::from_raw`] or [`Box::from_raw`].
    pub fn into_raw(this: Self) -> NonNull<T> {
        NonNull::from(Box::leak(this.inner))
    }

    /// Drop the current value and take ownership of `boxed`.
    ///
    /// The new value is installed before the old one is dropped.
    pub fn reset(this: &mut Self, boxed: Box<T>) {
        let old = std::mem::replace(&mut this.inner, boxed);
        drop(old);
    }

    /// Borrow the held value.
    pub fn get(this: &Self) -> &T {
        &this.inner
    }

    /// Mutably borrow the held value.
    pub fn get_mut(this: &mut Self) -> &mut T {
        &mut this.inner
    }

    /// Exchange the held values of two boxes without copying either.
    pub fn swap(this: &mut Self, other: &mut Self) {
        std::mem::swap(&mut this.inner, &mut other.inner);
    }

    /// Address of the held value, for identity comparisons.
    pub fn as_ptr(this: &Self) -> *const T {
        &*this.inner
    }
}

impl<T: Clone> ValueBox<T> {
    /// Copy `other`'s value into `this`'s existing allocation.
    ///
    /// Unlike `clone()`, no new allocation is made: the held value is
    /// overwritten in place with `Clone::clone_from`. Only available for
    /// the same declared type.
    pub fn assign_copy(this: &mut Self, other: &Self) {
        (*this.inner).clone_from(&*other.inner);
    }
}

impl<T: Default> Default for ValueBox<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: ?Sized + CloneToBox> Clone for ValueBox<T> {
    fn clone(&self) -> Self {
        Self {
            inner: clone_box(&*self.inner),
        }
    }
}

impl<T: ?Sized> Deref for ValueBox<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: ?Sized> DerefMut for ValueBox<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: ?Sized> AsRef<T> for ValueBox<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl<T: ?Sized> AsMut<T> for ValueBox<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: ?Sized> Borrow<T> for ValueBox<T> {
    fn borrow(&self) -> &T {
        &self.inner
    }
}

impl<T: ?Sized> BorrowMut<T> for ValueBox<T> {
    fn borrow_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: ?Sized> From<Box<T>> for ValueBox<T> {
    fn from(boxed: Box<T>) -> Self {
        Self::from_box(boxed)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ValueBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for ValueBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl<T: ?Sized + PartialEq> PartialEq for ValueBox<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl<T: ?Sized + Eq> Eq for ValueBox<T> {}

impl<T: ?Sized + PartialOrd> PartialOrd for ValueBox<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (*self.inner).partial_cmp(&*other.inner)
    }
}

impl<T: ?Sized + Ord> Ord for ValueBox<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (*self.inner).cmp(&*other.inner)
    }
}

impl<T: ?Sized + Hash> Hash for ValueBox<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.inner).hash(state);
    }
}

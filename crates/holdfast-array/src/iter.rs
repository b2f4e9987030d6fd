//! Iterators over an [`OwningArray`](crate::OwningArray).
//!
//! Borrowing iterators yield the pointees (`&T`, `&mut T`); the owning
//! iterator yields the boxes themselves so ownership can move on.

use std::iter::FusedIterator;
use std::{slice, vec};

/// Borrowing iterator, created by [`OwningArray::iter`](crate::OwningArray::iter).
pub struct Iter<'a, T: ?Sized> {
    inner: slice::Iter<'a, Box<T>>,
}

impl<'a, T: ?Sized> Iter<'a, T> {
    pub(crate) fn new(inner: slice::Iter<'a, Box<T>>) -> Self {
        Self { inner }
    }
}

impl<'a, T: ?Sized> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|slot| &**slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: ?Sized> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|slot| &**slot)
    }
}

impl<T: ?Sized> ExactSizeIterator for Iter<'_, T> {}
impl<T: ?Sized> FusedIterator for Iter<'_, T> {}

impl<T: ?Sized> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Mutably borrowing iterator, created by
/// [`OwningArray::iter_mut`](crate::OwningArray::iter_mut).
pub struct IterMut<'a, T: ?Sized> {
    inner: slice::IterMut<'a, Box<T>>,
}

impl<'a, T: ?Sized> IterMut<'a, T> {
    pub(crate) fn new(inner: slice::IterMut<'a, Box<T>>) -> Self {
        Self { inner }
    }
}

impl<'a, T: ?Sized> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next().map(|slot| &mut **slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: ?Sized> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|slot| &mut **slot)
    }
}

impl<T: ?Sized> ExactSizeIterator for IterMut<'_, T> {}
impl<T: ?Sized> FusedIterator for IterMut<'_, T> {}

/// Owning iterator yielding the boxes in slot order.
///
/// Boxes not yet yielded are dropped with the iterator.
pub struct IntoIter<T: ?Sized> {
    inner: vec::IntoIter<Box<T>>,
}

impl<T: ?Sized> IntoIter<T> {
    pub(crate) fn new(inner: vec::IntoIter<Box<T>>) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized> Iterator for IntoIter<T> {
    type Item = Box<T>;

    fn next(&mut self) -> Option<Box<T>> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: ?Sized> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Box<T>> {
        self.inner.next_back()
    }
}

impl<T: ?Sized> ExactSizeIterator for IntoIter<T> {}
impl<T: ?Sized> FusedIterator for IntoIter<T> {}

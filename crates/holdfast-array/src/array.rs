//! The owning pointer array and its growth policy.
//!
//! An [`OwningArray`] keeps its occupied slots in a `Vec<Box<T>>` and tracks
//! its own logical capacity so that growth follows [`ArrayConfig`] exactly
//! (capacity 1, 2, 4, 8, ... by default) rather than the standard library's
//! unspecified policy. The backing store is always reserved to at least the
//! logical capacity, so an append within capacity never reallocates.

use std::alloc::{handle_alloc_error, Layout};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::iter::{IntoIter, Iter, IterMut};

/// A growable array of exclusively owned heap objects.
///
/// Each occupied slot holds a `Box<T>`; dropping the array drops every
/// pointee exactly once and then frees the backing store. `T` may be
/// unsized, e.g. `OwningArray<dyn Trait>`.
///
/// The array cannot be copied. Duplicating exclusively owned objects needs
/// a cloning policy the array does not have:
///
/// ```compile_fail
/// use holdfast_array::OwningArray;
///
/// let a: OwningArray<u32> = OwningArray::new();
/// let b: OwningArray<u32> = a.clone();
/// ```
pub struct OwningArray<T: ?Sized> {
    /// Occupied slots `[0, len)`. Never reallocated while `len < capacity`.
    slots: Vec<Box<T>>,
    /// Logical capacity. `slots.len() <= capacity <= slots.capacity()`.
    capacity: usize,
    config: ArrayConfig,
}

impl<T: ?Sized> OwningArray<T> {
    /// Create an empty array with capacity 1.
    pub fn new() -> Self {
        Self::with_capacity(ArrayConfig::DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty array with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the backing store would exceed `isize::MAX` bytes, and
    /// aborts if the allocator fails, as `Vec::with_capacity` does.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            config: ArrayConfig::with_initial_capacity(capacity),
        }
    }

    /// Create an empty array from a validated config, reporting allocation
    /// failure instead of aborting.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let mut array = Self {
            slots: Vec::new(),
            capacity: 0,
            config,
        };
        array.grow_to(array.config.initial_capacity)?;
        Ok(array)
    }

    /// Build an array from a fixed list of boxes, taking ownership of each
    /// in order. Length and capacity both equal `N`.
    ///
    /// See also the [`owning_array!`](crate::owning_array!) macro.
    pub fn from_boxes<const N: usize>(items: [Box<T>; N]) -> Self {
        Self {
            slots: Vec::from(items),
            capacity: N,
            config: ArrayConfig::with_initial_capacity(N),
        }
    }

    /// Build an array from a fixed list of raw owning pointers, taking
    /// ownership of each in order. Length and capacity both equal `N`.
    ///
    /// # Safety
    ///
    /// Every pointer must come from [`Box::into_raw`] for a value of type
    /// `T` and must have no other owner. The same pointer must not appear
    /// twice.
    #[allow(unsafe_code)]
    pub unsafe fn from_raw<const N: usize>(ptrs: [NonNull<T>; N]) -> Self {
        // SAFETY: upheld by the caller, see above.
        Self::from_boxes(ptrs.map(|ptr| unsafe { Box::from_raw(ptr.as_ptr()) }))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots allocated, occupied or not.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an owned element at the end.
    ///
    /// When the array is full the capacity is multiplied by the growth
    /// factor first. Existing boxes are relocated bitwise; no element is
    /// cloned or dropped.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow and aborts on allocation failure. Use
    /// [`try_push`](Self::try_push) to handle both.
    pub fn push(&mut self, item: Box<T>) {
        if let Err(err) = self.try_reserve(1) {
            fail_growth::<T>(err);
        }
        self.slots.push(item);
    }

    /// Append an owned element, reporting growth failure.
    ///
    /// On error the array is unchanged and `item` is dropped. Call
    /// [`try_reserve`](Self::try_reserve) first to keep the item on failure.
    pub fn try_push(&mut self, item: Box<T>) -> Result<(), ArrayError> {
        self.try_reserve(1)?;
        self.slots.push(item);
        Ok(())
    }

    /// Append a raw owning pointer, taking ownership of its pointee.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`Box::into_raw`] for a value of type `T` and
    /// must have no other owner. Passing it to two owners is a double free.
    #[allow(unsafe_code)]
    pub unsafe fn push_raw(&mut self, ptr: NonNull<T>) {
        // SAFETY: upheld by the caller, see above.
        self.push(unsafe { Box::from_raw(ptr.as_ptr()) });
    }

    /// Make room for at least `additional` more elements, growing by whole
    /// growth-factor steps.
    ///
    /// # Panics
    ///
    /// Same as [`push`](Self::push).
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            fail_growth::<T>(err);
        }
    }

    /// Make room for at least `additional` more elements, growing by whole
    /// growth-factor steps. On error the array is unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ArrayError> {
        let needed = self
            .len()
            .checked_add(additional)
            .ok_or(ArrayError::CapacityOverflow {
                capacity: self.capacity,
            })?;
        if needed <= self.capacity {
            return Ok(());
        }
        let mut next = self.capacity;
        while next < needed {
            next = self.config.grown(next)?;
        }
        self.grow_to(next)
    }

    /// Checked access. Fails with [`ArrayError::OutOfRange`] for
    /// `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len();
        self.get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Checked mutable access. Fails with [`ArrayError::OutOfRange`] for
    /// `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len();
        self.get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Borrow the element at `index`, or `None` if the slot is unoccupied.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).map(|slot| &**slot)
    }

    /// Mutably borrow the element at `index`, or `None` if the slot is
    /// unoccupied.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).map(|slot| &mut **slot)
    }

    /// Borrow the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). Anything else is
    /// undefined behaviour. Debug builds assert the bound.
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len(), "index {index} out of range");
        // SAFETY: upheld by the caller, see above.
        unsafe { self.slots.get_unchecked(index) }
    }

    /// Mutably borrow the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). Anything else is
    /// undefined behaviour. Debug builds assert the bound.
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "index {index} out of range");
        // SAFETY: upheld by the caller, see above.
        unsafe { self.slots.get_unchecked_mut(index) }
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front(&self) -> &T {
        self.get(0).expect("front() on an empty OwningArray")
    }

    /// The first element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.get_mut(0).expect("front_mut() on an empty OwningArray")
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back(&self) -> &T {
        self.slots
            .last()
            .map(|slot| &**slot)
            .expect("back() on an empty OwningArray")
    }

    /// The last element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.slots
            .last_mut()
            .map(|slot| &mut **slot)
            .expect("back_mut() on an empty OwningArray")
    }

    /// Put `item` in the occupied slot `index` and hand back the box it
    /// replaces. Nothing is dropped.
    pub fn replace(&mut self, index: usize, item: Box<T>) -> Result<Box<T>, ArrayError> {
        let len = self.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })?;
        Ok(std::mem::replace(slot, item))
    }

    /// Iterate over the elements in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.slots.iter())
    }

    /// Iterate mutably over the elements in slot order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.slots.iter_mut())
    }

    /// Give up the array and return the owned boxes in slot order.
    pub fn into_boxes(self) -> Vec<Box<T>> {
        self.slots
    }

    /// Reserve the backing store for `new_capacity` slots, then commit it.
    ///
    /// Nothing is committed unless the reservation succeeds, so a failure
    /// leaves the array exactly as it was.
    fn grow_to(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        Layout::array::<Box<T>>(new_capacity).map_err(|_| ArrayError::CapacityOverflow {
            capacity: self.capacity,
        })?;
        let additional = new_capacity.saturating_sub(self.slots.len());
        self.slots
            .try_reserve_exact(additional)
            .map_err(|_| ArrayError::AllocationFailed {
                requested: new_capacity,
            })?;
        self.capacity = new_capacity;
        Ok(())
    }
}

/// Turn a growth error from an infallible entry point into the standard
/// library's behaviour: abort on allocator failure, panic otherwise.
fn fail_growth<T: ?Sized>(err: ArrayError) -> ! {
    if let ArrayError::AllocationFailed { requested } = err {
        if let Ok(layout) = Layout::array::<Box<T>>(requested) {
            handle_alloc_error(layout);
        }
    }
    panic!("{err}");
}

impl<T: ?Sized> Default for OwningArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Index<usize> for OwningArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T: ?Sized> IndexMut<usize> for OwningArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

impl<T: ?Sized> Extend<Box<T>> for OwningArray<T> {
    fn extend<I: IntoIterator<Item = Box<T>>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: ?Sized> FromIterator<Box<T>> for OwningArray<T> {
    /// Collect boxes into an array whose capacity equals its length.
    fn from_iter<I: IntoIterator<Item = Box<T>>>(iter: I) -> Self {
        let slots: Vec<Box<T>> = iter.into_iter().collect();
        let capacity = slots.len();
        Self {
            slots,
            capacity,
            config: ArrayConfig::with_initial_capacity(capacity),
        }
    }
}

impl<T: ?Sized> IntoIterator for OwningArray<T> {
    type Item = Box<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.slots.into_iter())
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a OwningArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a mut OwningArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for OwningArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    trait Shape {
        fn sides(&self) -> u32;
    }

    struct Triangle;
    struct Square;

    impl Shape for Triangle {
        fn sides(&self) -> u32 {
            3
        }
    }

    impl Shape for Square {
        fn sides(&self) -> u32 {
            4
        }
    }

    /// Increments a shared counter when dropped.
    struct DropProbe(Rc<Cell<usize>>);

    impl Drop for DropProbe {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn probes(drops: &Rc<Cell<usize>>, n: usize) -> Vec<Box<DropProbe>> {
        (0..n).map(|_| Box::new(DropProbe(Rc::clone(drops)))).collect()
    }

    #[test]
    fn new_is_empty_with_capacity_one() {
        let arr: OwningArray<u32> = OwningArray::new();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 1);
        assert!(arr.is_empty());
    }

    #[test]
    fn with_capacity_has_no_occupied_slots() {
        let arr: OwningArray<u32> = OwningArray::with_capacity(16);
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 16);
        assert!(arr.get(0).is_none());
    }

    #[test]
    fn from_boxes_keeps_argument_order() {
        let arr = OwningArray::from_boxes([Box::new(10), Box::new(20), Box::new(30)]);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.capacity(), 3);
        assert_eq!(arr.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    fn from_boxes_coerces_to_trait_objects() {
        let arr: OwningArray<dyn Shape> =
            OwningArray::from_boxes([Box::new(Triangle), Box::new(Square)]);
        assert_eq!(arr[0].sides(), 3);
        assert_eq!(arr[1].sides(), 4);
    }

    #[test]
    fn from_raw_takes_ownership() {
        let drops = Rc::new(Cell::new(0));
        let a = NonNull::from(Box::leak(Box::new(DropProbe(Rc::clone(&drops)))));
        let b = NonNull::from(Box::leak(Box::new(DropProbe(Rc::clone(&drops)))));
        let arr = unsafe { OwningArray::from_raw([a, b]) };
        assert_eq!(arr.len(), 2);
        drop(arr);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn push_doubles_when_full() {
        let mut arr = OwningArray::new();
        let mut seen = Vec::new();
        for i in 0..9u32 {
            arr.push(Box::new(i));
            seen.push(arr.capacity());
        }
        assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn growth_keeps_pointee_addresses() {
        let mut arr = OwningArray::with_capacity(2);
        arr.push(Box::new(1u64));
        arr.push(Box::new(2u64));
        let before: Vec<*const u64> = arr.iter().map(|v| v as *const u64).collect();
        arr.push(Box::new(3u64));
        assert_eq!(arr.capacity(), 4);
        let after: Vec<*const u64> = arr.iter().take(2).map(|v| v as *const u64).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn growth_does_not_drop_existing_elements() {
        let drops = Rc::new(Cell::new(0));
        let mut arr = OwningArray::with_capacity(1);
        for probe in probes(&drops, 5) {
            arr.push(probe);
        }
        assert_eq!(drops.get(), 0);
        assert_eq!(arr.capacity(), 8);
    }

    #[test]
    fn zero_capacity_grows_to_one() {
        let mut arr = OwningArray::with_capacity(0);
        arr.push(Box::new('a'));
        assert_eq!(arr.capacity(), 1);
        arr.push(Box::new('b'));
        assert_eq!(arr.capacity(), 2);
    }

    #[test]
    fn push_raw_takes_ownership() {
        let drops = Rc::new(Cell::new(0));
        let mut arr = OwningArray::new();
        let raw = NonNull::from(Box::leak(Box::new(DropProbe(Rc::clone(&drops)))));
        unsafe { arr.push_raw(raw) };
        assert_eq!(arr.len(), 1);
        drop(arr);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn at_rejects_index_past_len() {
        let mut arr = OwningArray::with_capacity(8);
        arr.push(Box::new(5));
        assert_eq!(*arr.at(0).unwrap(), 5);
        assert_eq!(arr.at(1), Err(ArrayError::OutOfRange { index: 1, len: 1 }));
        assert!(matches!(
            arr.at_mut(7),
            Err(ArrayError::OutOfRange { index: 7, len: 1 })
        ));
    }

    #[test]
    fn at_returns_stored_pointee() {
        let boxed = Box::new(42);
        let addr = &*boxed as *const i32;
        let mut arr = OwningArray::new();
        arr.push(boxed);
        assert_eq!(arr.at(0).unwrap() as *const i32, addr);
    }

    #[test]
    fn at_mut_writes_through() {
        let mut arr = OwningArray::from_boxes([Box::new(1), Box::new(2)]);
        *arr.at_mut(1).unwrap() = 20;
        assert_eq!(arr[1], 20);
    }

    #[test]
    fn unchecked_access_reads_occupied_slots() {
        let mut arr = OwningArray::from_boxes([Box::new(1), Box::new(2)]);
        unsafe {
            assert_eq!(*arr.get_unchecked(1), 2);
            *arr.get_unchecked_mut(0) = 7;
        }
        assert_eq!(arr[0], 7);
    }

    #[test]
    #[should_panic]
    fn index_past_len_panics() {
        let arr: OwningArray<u8> = OwningArray::with_capacity(4);
        let _value: u8 = arr[0];
    }

    #[test]
    fn front_and_back() {
        let mut arr = OwningArray::from_boxes([Box::new(1), Box::new(2), Box::new(3)]);
        assert_eq!((*arr.front(), *arr.back()), (1, 3));
        *arr.front_mut() = 10;
        *arr.back_mut() = 30;
        assert_eq!(arr.iter().copied().collect::<Vec<_>>(), vec![10, 2, 30]);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn front_on_empty_panics() {
        let arr: OwningArray<u8> = OwningArray::new();
        arr.front();
    }

    #[test]
    fn replace_hands_back_previous_box() {
        let drops = Rc::new(Cell::new(0));
        let mut arr: OwningArray<DropProbe> = probes(&drops, 2).into_iter().collect();
        let old = arr
            .replace(1, Box::new(DropProbe(Rc::clone(&drops))))
            .unwrap();
        assert_eq!(drops.get(), 0);
        drop(old);
        assert_eq!(drops.get(), 1);
        assert!(matches!(
            arr.replace(2, Box::new(DropProbe(Rc::clone(&drops)))),
            Err(ArrayError::OutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn with_config_applies_growth_factor() {
        let config = ArrayConfig {
            initial_capacity: 2,
            growth_factor: 3,
        };
        let mut arr = OwningArray::with_config(config).unwrap();
        assert_eq!(arr.capacity(), 2);
        for i in 0..3 {
            arr.push(Box::new(i));
        }
        assert_eq!(arr.capacity(), 6);
    }

    #[test]
    fn with_config_rejects_invalid() {
        let config = ArrayConfig {
            initial_capacity: 2,
            growth_factor: 0,
        };
        assert!(matches!(
            OwningArray::<u8>::with_config(config),
            Err(ArrayError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn try_reserve_overflow_leaves_array_unchanged() {
        let mut arr = OwningArray::from_boxes([Box::new(1u8), Box::new(2u8)]);
        let err = arr.try_reserve(usize::MAX).unwrap_err();
        assert!(matches!(err, ArrayError::CapacityOverflow { .. }));
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.capacity(), 2);
        assert_eq!(arr[1], 2);
    }

    #[test]
    fn try_push_overflow_leaves_array_unchanged() {
        let drops = Rc::new(Cell::new(0));
        let config = ArrayConfig {
            initial_capacity: 2,
            growth_factor: usize::MAX,
        };
        let mut arr = OwningArray::with_config(config).unwrap();
        for probe in probes(&drops, 2) {
            arr.try_push(probe).unwrap();
        }
        let before: Vec<*const DropProbe> = arr.iter().map(|p| p as *const DropProbe).collect();

        let rejected = Box::new(DropProbe(Rc::clone(&drops)));
        let err = arr.try_push(rejected).unwrap_err();
        assert!(matches!(err, ArrayError::CapacityOverflow { capacity: 2 }));
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.capacity(), 2);
        let after: Vec<*const DropProbe> = arr.iter().map(|p| p as *const DropProbe).collect();
        assert_eq!(before, after);
        // Only the rejected item was dropped.
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn try_push_grows_like_push() {
        let mut arr: OwningArray<u8> = OwningArray::new();
        for i in 0..5 {
            arr.try_push(Box::new(i)).unwrap();
        }
        assert_eq!(arr.len(), 5);
        assert_eq!(arr.capacity(), 8);
        assert_eq!(arr[4], 4);
    }

    #[test]
    fn try_reserve_grows_in_factor_steps() {
        let mut arr: OwningArray<u8> = OwningArray::new();
        arr.try_reserve(5).unwrap();
        assert_eq!(arr.capacity(), 8);
        arr.try_reserve(8).unwrap();
        assert_eq!(arr.capacity(), 8);
    }

    #[test]
    fn extend_and_collect() {
        let mut arr: OwningArray<u32> = (0..3).map(Box::new).collect();
        assert_eq!(arr.capacity(), 3);
        arr.extend((3..5).map(Box::new));
        assert_eq!(arr.len(), 5);
        assert_eq!(arr.capacity(), 6);
        let values: Vec<u32> = arr.into_boxes().into_iter().map(|b| *b).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn debug_lists_elements() {
        let arr = OwningArray::from_boxes([Box::new(1), Box::new(2)]);
        assert_eq!(format!("{arr:?}"), "[1, 2]");
    }

    #[test]
    fn moved_array_stays_usable() {
        let arr = OwningArray::from_boxes([Box::new(1)]);
        let mut moved = arr;
        moved.push(Box::new(2));
        assert_eq!(moved.len(), 2);
    }

    proptest! {
        #[test]
        fn matches_vec_model(values in proptest::collection::vec(any::<i64>(), 0..200), initial in 0usize..8) {
            let mut arr = OwningArray::with_capacity(initial);
            let mut model = Vec::new();
            for v in &values {
                arr.push(Box::new(*v));
                model.push(*v);
                prop_assert!(arr.len() <= arr.capacity());
            }
            prop_assert_eq!(arr.len(), model.len());
            for (i, v) in model.iter().enumerate() {
                prop_assert_eq!(arr.at(i).unwrap(), v);
            }
            let len = model.len();
            prop_assert_eq!(arr.at(len), Err(ArrayError::OutOfRange { index: len, len }));
        }

        #[test]
        fn capacity_is_initial_times_power_of_two(pushes in 0usize..300, initial in 1usize..8) {
            let mut arr = OwningArray::with_capacity(initial);
            for i in 0..pushes {
                arr.push(Box::new(i));
            }
            let ratio = arr.capacity() / initial;
            prop_assert_eq!(arr.capacity() % initial, 0);
            prop_assert!(ratio.is_power_of_two());
            prop_assert!(arr.capacity() < (pushes.max(initial)) * 2 + 1);
        }

        #[test]
        fn every_element_dropped_exactly_once(pushes in 0usize..100, initial in 0usize..4) {
            let drops = Rc::new(Cell::new(0));
            {
                let mut arr = OwningArray::with_capacity(initial);
                for probe in probes(&drops, pushes) {
                    arr.push(probe);
                }
                prop_assert_eq!(drops.get(), 0);
            }
            prop_assert_eq!(drops.get(), pushes);
        }
    }
}

//! Counting fixtures and the `Shape` hierarchy.

use std::cell::Cell;
use std::rc::Rc;

use holdfast_value::{subtype, CloneToBox};

#[derive(Default, Debug)]
struct Counts {
    clones: Cell<usize>,
    drops: Cell<usize>,
}

/// Shared clone/drop counters. Cloning a `Ledger` shares the counters.
#[derive(Clone, Default, Debug)]
pub struct Ledger {
    counts: Rc<Counts>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `Clone` calls recorded so far.
    pub fn clones(&self) -> usize {
        self.counts.clones.get()
    }

    /// Number of drops recorded so far.
    pub fn drops(&self) -> usize {
        self.counts.drops.get()
    }

    fn record_clone(&self) {
        self.counts.clones.set(self.counts.clones.get() + 1);
    }

    fn record_drop(&self) {
        self.counts.drops.set(self.counts.drops.get() + 1);
    }

    /// A fresh [`Tracked`] value reporting to this ledger.
    pub fn tracked(&self, id: u32) -> Tracked {
        Tracked {
            id,
            ledger: self.clone(),
        }
    }

    /// A fresh boxed [`Tracked`] value reporting to this ledger.
    pub fn boxed(&self, id: u32) -> Box<Tracked> {
        Box::new(self.tracked(id))
    }
}

/// A value that reports its clones and drops to a [`Ledger`].
#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    ledger: Ledger,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.ledger.record_clone();
        Self {
            id: self.id,
            ledger: self.ledger.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.record_drop();
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Base of the polymorphic fixture hierarchy.
pub trait Shape: CloneToBox + std::fmt::Debug {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
    fn scale(&mut self, factor: f64);
}

/// A circle. Its `Clone` is recorded on the ledger; `Rect`'s is not, so a
/// ledger count identifies which concrete `Clone` ran.
#[derive(Debug)]
pub struct Circle {
    pub radius: f64,
    ledger: Ledger,
}

impl Circle {
    pub fn new(radius: f64, ledger: &Ledger) -> Self {
        Self {
            radius,
            ledger: ledger.clone(),
        }
    }
}

impl Clone for Circle {
    fn clone(&self) -> Self {
        self.ledger.record_clone();
        Self {
            radius: self.radius,
            ledger: self.ledger.clone(),
        }
    }
}

impl Drop for Circle {
    fn drop(&mut self) {
        self.ledger.record_drop();
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    fn scale(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

/// An axis-aligned rectangle with a plain derived `Clone`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rect {
    fn name(&self) -> &'static str {
        "rect"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn scale(&mut self, factor: f64) {
        self.width *= factor;
        self.height *= factor;
    }
}

subtype!(Circle => dyn Shape, Rect => dyn Shape);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_counts_clones_and_drops() {
        let ledger = Ledger::new();
        let a = ledger.tracked(1);
        let b = a.clone();
        assert_eq!(ledger.clones(), 1);
        drop(a);
        drop(b);
        assert_eq!(ledger.drops(), 2);
    }

    #[test]
    fn rect_clone_is_not_recorded() {
        let ledger = Ledger::new();
        let _circle = Circle::new(1.0, &ledger);
        let rect = Rect::new(2.0, 3.0);
        let copy = rect.clone();
        assert_eq!(copy, rect);
        assert_eq!(ledger.clones(), 0);
    }
}

use std::slice;

use crate::intensity::breakpoint::Breakpoint;
use crate::intensity::scalar::Scalar;

/// Breakpoints kept sorted by strictly increasing position.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointStore<T: Scalar> {
    points: Vec<Breakpoint<T>>
}

impl <T> BreakpointStore<T> where
    T: Scalar {
    pub fn new() -> BreakpointStore<T> {
        BreakpointStore { points: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Breakpoint<T>> {
        self.points.iter()
    }

    /// Index of the breakpoint at `position`.
    ///
    /// A missing breakpoint is inserted carrying the value the function has just
    /// before `position`, so the represented function does not change.
    pub fn locate_or_insert(&mut self, position: T) -> usize {
        let i = self.points.partition_point(|b| b.position() < position);
        if i < self.points.len() && self.points[i].position() == position {
            return i;
        }
        let inherited = if i == 0 {
            T::zero()
        } else {
            self.points[i - 1].intensity()
        };
        self.points.insert(i, Breakpoint::new(position, inherited));
        i
    }

    pub fn value_at(&self, position: T) -> T {
        let i = self.points.partition_point(|b| b.position() <= position);
        if i == 0 {
            T::zero()
        } else {
            self.points[i - 1].intensity()
        }
    }

    pub(crate) fn range_mut(&mut self, start: usize, end: usize) -> &mut [Breakpoint<T>] {
        &mut self.points[start..end]
    }

    /// Drops every breakpoint strictly between indices `start` and `end`.
    pub(crate) fn remove_between(&mut self, start: usize, end: usize) {
        if end > start + 1 {
            self.points.drain((start + 1)..end);
        }
    }

    pub(crate) fn retain<F>(&mut self, keep: F) where
        F: FnMut(&Breakpoint<T>) -> bool {
        self.points.retain(keep);
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }
}

impl <T> Default for BreakpointStore<T> where
    T: Scalar {
    fn default() -> Self {
        Self::new()
    }
}

impl <'a, T> IntoIterator for &'a BreakpointStore<T> where
    T: Scalar {
    type Item = &'a Breakpoint<T>;
    type IntoIter = slice::Iter<'a, Breakpoint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use std::fmt;

use serde::{
    Serialize,
    Serializer
};
use tracing::debug;

use crate::intensity::breakpoint::Breakpoint;
use crate::intensity::breakpointstore::BreakpointStore;
use crate::intensity::canonicalizer::canonicalize;
use crate::intensity::intensityerror::IntensityError;
use crate::intensity::scalar::{
    JsonScalar,
    Scalar
};

/// Piecewise-constant intensity over the number line, zero everywhere at first.
///
/// Updates apply to half-open ranges `[from, to)`. After every call the
/// breakpoints are minimal: no two neighbours share an intensity and none
/// leads with zero.
///
/// ```
/// use intensity_segments::intensity::intensitysegments::IntensitySegments;
///
/// let mut segments = IntensitySegments::new();
/// segments.add(10.0, 30.0, 1.0).unwrap();
/// segments.add(20.0, 40.0, 1.0).unwrap();
/// assert_eq!(segments.serialize(), "[[10,1],[20,2],[30,1],[40,0]]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntensitySegments<T: Scalar = f64> {
    store: BreakpointStore<T>
}

impl <T> IntensitySegments<T> where
    T: Scalar {
    pub fn new() -> IntensitySegments<T> {
        IntensitySegments { store: BreakpointStore::new() }
    }

    /// Adds `amount` to the intensity over `[from, to)`.
    pub fn add(&mut self, from: T, to: T, amount: T) -> Result<(), IntensityError> {
        let (start, end) = self.materialize_bounds(from, to)?;
        for b in self.store.range_mut(start, end) {
            b.set_intensity(b.intensity().accumulate(amount));
        }
        canonicalize(&mut self.store);
        debug!(%from, %to, %amount, breakpoints = self.store.len(), "applied add");
        Ok(())
    }

    /// Overrides the intensity over `[from, to)` with `amount`.
    pub fn set(&mut self, from: T, to: T, amount: T) -> Result<(), IntensityError> {
        let (start, end) = self.materialize_bounds(from, to)?;
        self.store.remove_between(start, end);
        self.store.range_mut(start, start + 1)[0].set_intensity(amount);
        canonicalize(&mut self.store);
        debug!(%from, %to, %amount, breakpoints = self.store.len(), "applied set");
        Ok(())
    }

    /// Makes sure breakpoints exist exactly at `from` and `to`, both carrying
    /// the value the function had there before the update, and returns their
    /// indices.
    fn materialize_bounds(&mut self, from: T, to: T) -> Result<(usize, usize), IntensityError> {
        // also rejects unordered (NaN) bounds
        if !(from < to) {
            debug!(%from, %to, "rejected range");
            return Err(IntensityError::invalid_range(from, to));
        }
        let start = self.store.locate_or_insert(from);
        let end = self.store.locate_or_insert(to);
        Ok((start, end))
    }

    pub fn value_at(&self, position: T) -> T {
        self.store.value_at(position)
    }

    pub fn breakpoints(&self) -> impl Iterator<Item = &Breakpoint<T>> {
        self.store.iter()
    }

    pub fn store(&self) -> &BreakpointStore<T> {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Back to the all-zero function.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Canonical text form, e.g. `[[10,1],[30,0]]`; `[]` when identically zero.
    ///
    /// Shares its name with `serde::Serialize::serialize`, which this type also
    /// implements; a zero-argument call resolves to this method. Both produce
    /// the same JSON text.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl <T> Default for IntensitySegments<T> where
    T: Scalar {
    fn default() -> Self {
        Self::new()
    }
}

impl <T> fmt::Display for IntensitySegments<T> where
    T: Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, b) in self.store.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "[{},{}]", JsonScalar(&b.position()), JsonScalar(&b.intensity()))?;
        }
        f.write_str("]")
    }
}

impl <T> Serialize for IntensitySegments<T> where
    T: Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        serializer.collect_seq(self.store.iter())
    }
}

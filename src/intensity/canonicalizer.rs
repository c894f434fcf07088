use crate::intensity::breakpointstore::BreakpointStore;
use crate::intensity::scalar::Scalar;

/// Collapses the store to its minimal form.
///
/// A breakpoint survives only if its intensity differs from the last retained
/// one. The scan starts from the implicit zero baseline, so a leading
/// zero-valued breakpoint is dropped as well. NaN intensities count as equal
/// to each other. Running this twice is the same as running it once.
pub fn canonicalize<T>(store: &mut BreakpointStore<T>) where
    T: Scalar {
    let mut previous = T::zero();
    store.retain(|b| {
        if b.intensity().same_intensity(&previous) {
            false
        } else {
            previous = b.intensity();
            true
        }
    });
}

/// True when no breakpoint repeats its predecessor's value (or the baseline).
pub fn is_canonical<T>(store: &BreakpointStore<T>) -> bool where
    T: Scalar {
    let mut previous = T::zero();
    store.iter().all(|b| {
        let distinct = !b.intensity().same_intensity(&previous);
        previous = b.intensity();
        distinct
    })
}

use serde::{
    Serialize,
    Serializer,
    ser::SerializeTuple
};

use crate::intensity::scalar::{
    JsonScalar,
    Scalar
};

/// The intensity holds `intensity` from `position` up to the next breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint<T: Scalar> {
    position: T,
    intensity: T
}

impl <T> Breakpoint<T> where
    T: Scalar {
    pub fn new(position: T, intensity: T) -> Breakpoint<T> {
        Breakpoint { position, intensity }
    }

    pub fn position(&self) -> T {
        self.position
    }

    pub fn intensity(&self) -> T {
        self.intensity
    }

    pub(crate) fn set_intensity(&mut self, intensity: T) {
        self.intensity = intensity;
    }
}

impl <T> Serialize for Breakpoint<T> where
    T: Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&JsonScalar(&self.position))?;
        pair.serialize_element(&JsonScalar(&self.intensity))?;
        pair.end()
    }
}

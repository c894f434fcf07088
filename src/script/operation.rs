use std::fmt;

use serde::Deserialize;

use crate::intensity::intensityerror::IntensityError;
use crate::intensity::intensitysegments::IntensitySegments;
use crate::intensity::scalar::JsonScalar;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Add {
        from: f64,
        to: f64,
        amount: f64
    },
    Set {
        from: f64,
        to: f64,
        amount: f64
    }
}

impl Operation {
    pub fn apply(&self, segments: &mut IntensitySegments<f64>) -> Result<(), IntensityError> {
        match *self {
            Operation::Add { from, to, amount } => segments.add(from, to, amount),
            Operation::Set { from, to, amount } => segments.set(from, to, amount)
        }
    }
}

/// Reads like the call it stands for, e.g. `add(10, 30, 1)`.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (verb, from, to, amount) = match self {
            Operation::Add { from, to, amount } => ("add", from, to, amount),
            Operation::Set { from, to, amount } => ("set", from, to, amount)
        };
        write!(f, "{}({}, {}, {})", verb, JsonScalar(from), JsonScalar(to), JsonScalar(amount))
    }
}

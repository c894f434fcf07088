use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntensityError {
    /// `from` is not strictly below `to`; nothing was applied.
    #[error("invalid range [{from}, {to}): \"from\" must be less than \"to\"")]
    InvalidRange {
        from: String,
        to: String
    }
}

impl IntensityError {
    pub fn invalid_range<T: std::fmt::Display>(from: T, to: T) -> IntensityError {
        IntensityError::InvalidRange {
            from: from.to_string(),
            to: to.to_string()
        }
    }
}

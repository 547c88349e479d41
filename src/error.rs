use thiserror::Error;

/// Returned when a [`TaggedUnion`](crate::TaggedUnion) is read as an alternative it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("attempt to access inactive alternative `{requested}` (index {index}, active index {active} of {count})")]
pub struct InactiveAlternative {
    /// Name of the requested type.
    pub requested: &'static str,
    /// Position of the requested type.
    pub index: usize,
    /// Position of the alternative actually held, or `count` when nothing was ever written.
    pub active: usize,
    /// Number of alternatives.
    pub count: usize,
}

impl InactiveAlternative {
    /// Returns `true` if the union never held any alternative.
    pub fn is_uninhabited(&self) -> bool {
        self.active == self.count
    }
}

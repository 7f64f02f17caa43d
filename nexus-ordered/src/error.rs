//! Error types.

/// Error returned when a keyed insert finds its key already present.
///
/// Carries the rejected value so the caller can recover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateKey<T>(pub T);

impl<T> DuplicateKey<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for DuplicateKey<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "key is already present in the queue")
    }
}

impl<T: core::fmt::Debug> std::error::Error for DuplicateKey<T> {}

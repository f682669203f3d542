use std::collections::TryReserveError;

use thiserror::Error;

/// Failures reported by tree operations.
///
/// A missing key is not an error: lookups and removals report it as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Storage for a key copy or a cursor stack could not be reserved. The
    /// tree is left exactly as it was before the call.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_error_from_try_reserve() {
        let mut buf: Vec<u8> = Vec::new();
        let err: Error = buf.try_reserve_exact(usize::MAX).unwrap_err().into();

        assert!(matches!(err, Error::Alloc(_)));
        assert!(err.to_string().starts_with("allocation failed"));
    }
}

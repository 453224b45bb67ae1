//! Terminal outcome of a single dispatch.

use crate::error::DispatchError;

/// How an invocation of a [`Dispatcher`](crate::Dispatcher) ended.
///
/// "Unclaimed" is a normal outcome, not a failure: it covers both an empty
/// roster and a roster where no listener corroborated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A listener corroborated and received the claim payload.
    Claimed,
    /// No listener corroborated (or none was attached).
    Unclaimed,
}

impl Outcome {
    /// Returns `true` if a listener claimed the dispatch.
    pub const fn is_claimed(self) -> bool {
        matches!(self, Outcome::Claimed)
    }

    /// Returns `true` if no listener claimed the dispatch.
    pub const fn is_unclaimed(self) -> bool {
        matches!(self, Outcome::Unclaimed)
    }

    /// Converts an unclaimed dispatch into [`DispatchError::Unclaimed`], for
    /// callers that require a claimant and want to use `?`.
    pub fn into_result(self) -> Result<(), DispatchError> {
        match self {
            Outcome::Claimed => Ok(()),
            Outcome::Unclaimed => Err(DispatchError::Unclaimed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        assert!(Outcome::Claimed.is_claimed());
        assert!(!Outcome::Claimed.is_unclaimed());
        assert!(Outcome::Unclaimed.is_unclaimed());
    }

    #[test]
    fn test_into_result() {
        assert!(Outcome::Claimed.into_result().is_ok());
        assert!(matches!(
            Outcome::Unclaimed.into_result(),
            Err(DispatchError::Unclaimed)
        ));
    }
}

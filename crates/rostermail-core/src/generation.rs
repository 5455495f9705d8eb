//! Request generation stamps.

/// Monotonic stamp attached to every issued fetch.
///
/// A machine remembers the stamp of its latest request; a response
/// carrying any older stamp is discarded. In-flight requests are never
/// cancelled, so this is the only guard against a slow response for a
/// superseded selection overwriting newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub u64);

impl Generation {
    /// The stamp after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_next_is_monotonic() {
        let first = Generation::default();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second, Generation(1));
    }
}

use core::fmt;
use core::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of one trajectory store generation.
///
/// - `NonZero` enables `Option<Generation>` to be pointer-optimized
/// - ordering follows allocation order within one counter
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(NonZeroU64);

impl Generation {
    /// The first generation handed out by a fresh counter.
    pub const FIRST: Generation = Generation(NonZeroU64::MIN);

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation({})", self.0)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic source of generations, shareable across threads.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    issued: AtomicU64,
}

impl GenerationCounter {
    pub const fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }

    /// Allocate the next generation (1, 2, 3, ...).
    pub fn next(&self) -> Generation {
        let raw = self.issued.fetch_add(1, Ordering::Relaxed).saturating_add(1);
        Generation(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MAX))
    }

    /// Most recently issued generation, if any.
    pub fn latest(&self) -> Option<Generation> {
        NonZeroU64::new(self.issued.load(Ordering::Relaxed)).map(Generation)
    }
}

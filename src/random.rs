//! Randomness sources for shuffling.
//!
//! [`crate::shuffle_with`] takes any [`rand::Rng`] and never touches shared
//! state. [`crate::shuffle`] draws from one process-wide [`SharedSource`],
//! seeded from the operating system on first use.

use cuneiform::cuneiform;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{LazyLock, Mutex, PoisonError};

static SHARED: LazyLock<SharedSource> = LazyLock::new(SharedSource::from_os);

/// Process-wide generator behind the parameterless shuffle.
///
/// Initialization happens once, and each draw holds an internal lock, so
/// concurrent default shuffles are safe. They do serialize on that lock;
/// hot multi-threaded callers should pass their own generator to
/// [`crate::shuffle_with`].
// Cache-aligned so the lock word does not share a line with neighbouring statics.
#[cuneiform]
pub struct SharedSource {
    rng: Mutex<StdRng>,
}

impl SharedSource {
    fn from_os() -> Self {
        log::debug!("seeding shared randomness source from the operating system");
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Runs `f` with exclusive access to the generator.
    pub fn with<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic mid-draw cannot leave the generator state torn.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

/// Returns the process-wide source, creating it on first call.
pub fn shared_source() -> &'static SharedSource {
    &SHARED
}

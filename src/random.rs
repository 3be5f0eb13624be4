//! Random sampling service.
//!
//! Randomness is an injected capability: every [`Population`](crate::ga::Population)
//! owns its generator and hands `&mut R` to each operator call. Nothing in
//! the crate touches process-wide random state.
//!
//! When several populations must draw from one stream (e.g. racing solvers
//! on separate threads), wrap a generator in [`SharedRng`]. Each draw locks
//! the inner generator, so concurrent use is serialized.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard};

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `k` distinct indices from `0..n`, in random order.
///
/// # Panics
/// Panics if `k > n`.
pub fn unique_indices<R: Rng + ?Sized>(rng: &mut R, n: usize, k: usize) -> Vec<usize> {
    assert!(k <= n, "cannot draw {k} unique indices from {n}");
    rand::seq::index::sample(rng, n, k).into_vec()
}

/// A cloneable, thread-safe handle to a single random stream.
///
/// Clones share the same underlying generator.
///
/// ```
/// use rand::Rng;
/// use u_genetic::random::SharedRng;
///
/// let shared = SharedRng::seeded(7);
/// let mut a = shared.clone();
/// let mut b = shared;
/// let x: u64 = a.random();
/// let y: u64 = b.random();
/// assert_ne!(x, y);
/// ```
#[derive(Debug, Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<StdRng>>,
}

impl SharedRng {
    /// Wraps an existing generator.
    pub fn new(rng: StdRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Shares a generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(create_rng(seed))
    }

    /// Shares a generator seeded from the operating system.
    pub fn from_os() -> Self {
        Self::new(create_rng(rand::random()))
    }

    // A panic while holding the lock cannot leave StdRng in a broken state.
    fn lock(&self) -> MutexGuard<'_, StdRng> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RngCore for SharedRng {
    fn next_u32(&mut self) -> u32 {
        self.lock().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.lock().next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.lock().fill_bytes(dst)
    }
}

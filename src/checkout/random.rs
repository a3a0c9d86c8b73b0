use std::ops::RangeInclusive;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

/// Confirmation ETA window in minutes, both ends inclusive.
pub const ETA_MINUTES: RangeInclusive<u8> = 5..=24;

/// Source of the two random values a simulated checkout needs.
///
/// Shared across actix workers, hence `Send + Sync`.
pub trait RandomSource: Send + Sync {
    /// A version 4 UUID used as the checkout reference.
    fn reference(&self) -> Uuid;

    /// Minutes until confirmation, always within [`ETA_MINUTES`].
    fn eta_minutes(&self) -> u8;
}

/// Thread-local RNG backed source used by the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn reference(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn eta_minutes(&self) -> u8 {
        rand::thread_rng().gen_range(ETA_MINUTES)
    }
}

/// Reproducible source: the same seed yields the same sequence of references and ETAs.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock only means another thread panicked mid-draw; the RNG is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl RandomSource for SeededRandom {
    fn reference(&self) -> Uuid {
        let bytes: [u8; 16] = self.with_rng(|rng| rng.gen());
        Builder::from_random_bytes(bytes).into_uuid()
    }

    fn eta_minutes(&self) -> u8 {
        self.with_rng(|rng| rng.gen_range(ETA_MINUTES))
    }
}

/// Constant source for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    reference: Uuid,
    eta_minutes: u8,
}

impl FixedRandom {
    /// `eta_minutes` is clamped into [`ETA_MINUTES`].
    pub fn new(reference: Uuid, eta_minutes: u8) -> Self {
        Self {
            reference,
            eta_minutes: eta_minutes.clamp(*ETA_MINUTES.start(), *ETA_MINUTES.end()),
        }
    }
}

impl RandomSource for FixedRandom {
    fn reference(&self) -> Uuid {
        self.reference
    }

    fn eta_minutes(&self) -> u8 {
        self.eta_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Version;

    #[test]
    fn test_thread_random_stays_in_window() {
        let random = ThreadRandom;
        for _ in 0..2_000 {
            assert!(ETA_MINUTES.contains(&random.eta_minutes()));
        }
        assert_eq!(random.reference().get_version(), Some(Version::Random));
    }

    #[test]
    fn test_thread_random_covers_both_bounds() {
        let random = ThreadRandom;
        let draws: Vec<u8> = (0..5_000).map(|_| random.eta_minutes()).collect();
        assert!(draws.contains(&5));
        assert!(draws.contains(&24));
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        for _ in 0..10 {
            assert_eq!(a.reference(), b.reference());
            assert_eq!(a.eta_minutes(), b.eta_minutes());
        }
    }

    #[test]
    fn test_seeded_random_builds_v4_references() {
        let random = SeededRandom::new(7);
        for _ in 0..100 {
            assert_eq!(random.reference().get_version(), Some(Version::Random));
            assert!(ETA_MINUTES.contains(&random.eta_minutes()));
        }
    }

    #[test]
    fn test_fixed_random_clamps_eta() {
        assert_eq!(FixedRandom::new(Uuid::nil(), 0).eta_minutes(), 5);
        assert_eq!(FixedRandom::new(Uuid::nil(), 200).eta_minutes(), 24);
        assert_eq!(FixedRandom::new(Uuid::nil(), 12).eta_minutes(), 12);
    }
}

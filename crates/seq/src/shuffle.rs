use std::env::{self, VarError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{SHUFFLE_SEED_ENV, SeqError};

/// Fisher-Yates shuffle driven by the caller's generator.
///
/// The generator is never reseeded here. Hold one for the life of the
/// process (see [`Shuffler`]) rather than building a fresh one per call.
pub fn shuffle<T, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in (1..len).rev() {
        let j = rng.random_range(0..=i);
        data.swap(i, j);
    }
}

/// Shuffles with the thread-local generator, which is seeded once per thread.
pub fn shuffle_thread_local<T>(data: &mut [T]) {
    let mut rng = rand::rng();
    shuffle(data, &mut rng);
}

/// Long-lived shuffle context owning a single seeded generator.
///
/// Not `Sync`-shared by itself: wrap it in a `Mutex` to use one instance from
/// several threads.
#[derive(Clone, Debug)]
pub struct Shuffler {
    rng: StdRng,
}

impl Shuffler {
    pub fn from_os_rng() -> Self {
        tracing::debug!(source = "os", "seeded shuffler");
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of permutations for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        tracing::debug!(source = "explicit", seed, "seeded shuffler");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from `SEQ_SHUFFLE_SEED` when set, otherwise from the OS.
    pub fn from_env() -> Result<Self, SeqError> {
        match env::var(SHUFFLE_SEED_ENV) {
            Ok(value) => Self::from_seed_value(Some(&value)),
            Err(VarError::NotPresent) => Self::from_seed_value(None),
            Err(VarError::NotUnicode(raw)) => Err(SeqError::InvalidSeed {
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    fn from_seed_value(value: Option<&str>) -> Result<Self, SeqError> {
        match value {
            Some(raw) => parse_seed(raw).map(Self::with_seed),
            None => Ok(Self::from_os_rng()),
        }
    }

    pub fn shuffle<T>(&mut self, data: &mut [T]) {
        shuffle(data, &mut self.rng);
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

fn parse_seed(raw: &str) -> Result<u64, SeqError> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => trimmed.replace('_', "").parse::<u64>(),
    };
    parsed.map_err(|_| SeqError::InvalidSeed {
        value: raw.to_string(),
    })
}

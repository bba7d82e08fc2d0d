use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::foundation::core::FrameIndex;

/// Explicit pseudo-random stream threaded through every effect.
///
/// All draws go through this handle, so a given seed reproduces a given frame as long as the
/// effects keep their draw order.
#[derive(Clone, Debug)]
pub struct GlitchRng {
    rng: Xoshiro256StarStar,
}

impl GlitchRng {
    /// Create a stream from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Reseed in place.
    pub fn seed(&mut self, seed: u64) {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
    }

    /// Uniform integer in `[0, n)`; `0` when `n <= 0`.
    pub fn intn(&mut self, n: i64) -> i64 {
        if n <= 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }

    /// Uniform `f32` in `[0, 1)`.
    pub fn float32(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform `f64` in `[0, 1)`.
    pub fn float64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Standard normal sample (mean 0, deviation 1) via Box-Muller.
    pub fn norm_f64(&mut self) -> f64 {
        // 1 - u keeps the log argument in (0, 1].
        let u1 = 1.0 - self.float64();
        let u2 = self.float64();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

/// Wall-clock nanoseconds, used when the caller does not pin a seed.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Derive the seed of one animation frame from the run seed.
pub fn frame_seed(run_seed: u64, frame: FrameIndex) -> u64 {
    splitmix64(run_seed ^ frame.0.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;

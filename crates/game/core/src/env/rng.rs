//! RNG oracle for deterministic random number generation.
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers. Spell effects draw
//! through [`Dice`], which derives a fresh seed for every roll.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute deterministic seed from game state components.
///
/// * `game_seed` - Base seed set at game start
/// * `nonce` - Cast sequence number (increments each cast)
/// * `actor_id` - Entity performing the cast
/// * `context` - Distinguishes several rolls made by the same cast
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Roguelike dice over an [`RngOracle`].
///
/// Each call consumes the next context value, so successive rolls within one
/// cast are independent yet replay identically for the same
/// `(game_seed, nonce, actor)`.
pub struct Dice<'a> {
    rng: &'a dyn RngOracle,
    game_seed: u64,
    nonce: u64,
    actor: u32,
    context: u32,
}

impl<'a> Dice<'a> {
    pub fn new(rng: &'a dyn RngOracle, game_seed: u64, nonce: u64, actor: u32) -> Self {
        Self {
            rng,
            game_seed,
            nonce,
            actor,
            context: 0,
        }
    }

    fn next_u32(&mut self) -> u32 {
        let seed = compute_seed(self.game_seed, self.nonce, self.actor, self.context);
        self.context = self.context.wrapping_add(1);
        self.rng.next_u32(seed)
    }

    /// Uniform integer in `[0, max)`; zero when `max <= 0`.
    pub fn random2(&mut self, max: i32) -> i32 {
        if max <= 1 {
            return 0;
        }
        (self.next_u32() % max as u32) as i32
    }

    /// Average of `rolls` draws, the first from `[0, max)` and the rest from
    /// `[0, max]`; biased toward the middle of the range.
    pub fn random2avg(&mut self, max: i32, rolls: i32) -> i32 {
        let rolls = rolls.max(1);
        let mut sum = self.random2(max);
        for _ in 1..rolls {
            sum += self.random2(max + 1);
        }
        sum / rolls
    }

    /// Uniform integer in `[low, high]`.
    pub fn random_range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        low + self.random2(high - low + 1)
    }

    /// Sum of `count` dice with `sides` faces each (1-based); zero for a
    /// zero- or negative-sided die.
    pub fn roll_dice(&mut self, count: i32, sides: i32) -> i32 {
        if sides <= 0 {
            return 0;
        }
        let mut total = 0;
        for _ in 0..count.max(0) {
            total += 1 + self.random2(sides);
        }
        total
    }

    /// Number of successes among `trials`, each succeeding with probability
    /// `chance / scale`.
    pub fn binomial(&mut self, trials: i32, chance: i32, scale: i32) -> i32 {
        let mut successes = 0;
        for _ in 0..trials.max(0) {
            if self.random2(scale) < chance {
                successes += 1;
            }
        }
        successes
    }

    /// Uniform real in `[0, 1)`.
    pub fn random_real(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

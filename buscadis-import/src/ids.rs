//! Short numeric identifiers for publication URLs.

use std::collections::HashSet;

use buscadis_catalog::IdSettings;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Widest id we will generate; 10^18 still fits in a `u64`.
const MAX_DIGITS: u32 = 18;

/// Draws random fixed-width numeric ids, never repeating one within a run.
///
/// After `max_attempts` consecutive collisions at the current width the
/// generator widens by one digit for the rest of the run. Uniqueness against
/// already-stored rows is left to the storage layer's constraints.
pub struct ShortIdGenerator {
    rng: StdRng,
    digits: u32,
    max_attempts: u32,
    issued: HashSet<String>,
}

impl ShortIdGenerator {
    pub fn new(settings: &IdSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Deterministic generator for tests and reproducible dry runs.
    pub fn seeded(settings: &IdSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: &IdSettings, rng: StdRng) -> Self {
        Self {
            rng,
            digits: settings.short_id_digits.clamp(1, MAX_DIGITS),
            max_attempts: settings.max_attempts.max(1),
            issued: HashSet::new(),
        }
    }

    /// Current id width in digits.
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Number of ids handed out or reserved so far.
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    /// Mark an id as taken (a caller-supplied id, or one already stored) so it is
    /// never generated.
    pub fn reserve(&mut self, id: &str) {
        self.issued.insert(id.to_string());
    }

    /// Draw the next unused id.
    pub fn next_id(&mut self) -> String {
        loop {
            for _ in 0..self.max_attempts {
                let candidate = self.draw();
                if self.issued.insert(candidate.clone()) {
                    return candidate;
                }
            }
            if self.digits >= MAX_DIGITS {
                // Practically unreachable; accept a repeat rather than spin.
                return self.draw();
            }
            self.digits += 1;
            log::warn!(
                "Short id space exhausted after {} attempts; widening to {} digits",
                self.max_attempts,
                self.digits
            );
        }
    }

    fn draw(&mut self) -> String {
        let low = 10u64.pow(self.digits - 1);
        let high = 10u64.pow(self.digits);
        self.rng.gen_range(low..high).to_string()
    }
}

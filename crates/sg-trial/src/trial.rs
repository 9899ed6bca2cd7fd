//! The `Trial` struct and its relocation loop.

use sg_core::{Lattice, ModelConfig, TrialRng};
use sg_dynamics::{count_distinct, is_converged, relocate_until_happy, unhappy_positions};

use crate::{DriverResult, TrialError, TrialObserver, TrialResult};

// ── Step outcome ──────────────────────────────────────────────────────────────

/// What one call to [`Trial::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Every agent was already happy; nothing moved.
    Converged,
    /// One unhappy agent was relocated.
    Moved { from: usize, to: usize, happy: bool },
}

// ── Trial ─────────────────────────────────────────────────────────────────────

/// One simulation from random initialisation to convergence or abandonment.
///
/// Each loop iteration:
///
/// 1. **Scan**: evaluate every position; if none is unhappy the lattice has
///    converged.
/// 2. **Pick**: choose one unhappy position uniformly at random.
/// 3. **Relocate**: hand it to the relocation engine and count a tick.
/// 4. **Budget**: once more than `500 × size` ticks have elapsed on an
///    unsettled lattice, abandon.
///
/// A `Trial` owns its lattice and RNG exclusively.
pub struct Trial {
    config:  ModelConfig,
    run:     u64,
    lattice: Lattice,
    rng:     TrialRng,
    ticks:   u64,
}

impl Trial {
    /// Randomise a fresh lattice of `config.size()` agents.
    pub fn new(config: ModelConfig, run: u64, mut rng: TrialRng) -> Self {
        let lattice = Lattice::random(config.size(), &mut rng);
        Self { config, run, lattice, rng, ticks: 0 }
    }

    /// Start from a given lattice instead of a random one.
    pub fn from_lattice(
        config:  ModelConfig,
        run:     u64,
        lattice: Lattice,
        rng:     TrialRng,
    ) -> DriverResult<Self> {
        if lattice.len() != config.size() {
            return Err(TrialError::SizeMismatch {
                expected: config.size(),
                got:      lattice.len(),
            });
        }
        Ok(Self { config, run, lattice, rng, ticks: 0 })
    }

    #[inline]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run to convergence or abandonment and produce the trial's result.
    pub fn run<O: TrialObserver>(mut self, observer: &mut O) -> DriverResult<TrialResult> {
        let initial_groups = count_distinct(&self.lattice);
        observer.on_trial_start(self.run, &self.lattice, initial_groups);

        let budget = self.config.tick_budget();
        let mut result = TrialResult {
            run:            self.run,
            size:           self.config.size(),
            vision:         self.config.vision(),
            tolerance:      self.config.tolerance(),
            initial_groups,
            final_groups:   None,
            ticks:          None,
        };

        loop {
            if let Step::Converged = self.step()? {
                let final_groups = count_distinct(&self.lattice);
                observer.on_converged(self.run, final_groups, self.ticks);
                result.final_groups = Some(final_groups);
                result.ticks = Some(self.ticks);
                return Ok(result);
            }
            observer.on_tick(self.ticks, &self.lattice);

            // The tick that broke the budget may itself have settled the
            // lattice; the next step() then reports convergence.
            if self.ticks > budget && !is_converged(&self.lattice, &self.config) {
                observer.on_abandoned(self.run, self.ticks);
                return Ok(result);
            }
        }
    }

    /// Relocate one unhappy agent, or report convergence if there is none.
    pub fn step(&mut self) -> DriverResult<Step> {
        let unhappy = unhappy_positions(&self.lattice, &self.config);
        let Some(&from) = self.rng.choose(&unhappy) else {
            return Ok(Step::Converged);
        };

        let moved = relocate_until_happy(&mut self.lattice, from, &self.config, &mut self.rng)?;
        self.ticks += 1;
        Ok(Step::Moved { from, to: moved.position, happy: moved.happy })
    }
}

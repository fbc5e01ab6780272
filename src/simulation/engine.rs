//! End-to-end library-preparation engine.
//!
//! `LibraryPrep` orchestrates the full protocol over one or more samples:
//! a fresh scaffold is drawn per sample, digested, and ligated with that
//! sample's barcode; the per-sample libraries are pooled, sheared, end
//! repaired, and selectively amplified.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::base::Sequence;
use crate::protocol::{
    amplify, digest, ligate, multiplex, repair_ends, shear, Barcode, Chemistry, Library,
};
use crate::simulation::parameters::PrepConfig;
use crate::simulation::scaffold::generate_scaffold;

/// Library-preparation engine.
#[derive(Debug)]
pub struct LibraryPrep {
    /// Reagent configuration shared by every stage
    chemistry: Chemistry,
    /// One barcode per multiplexed sample
    samples: Vec<Barcode>,
    /// Run configuration
    config: PrepConfig,
    /// Random number generator (Xoshiro256++ for speed and quality)
    rng: Xoshiro256PlusPlus,
}

impl LibraryPrep {
    /// Create a new engine.
    ///
    /// The RNG is seeded from `config.seed` when present, otherwise from
    /// system entropy.
    pub fn new(chemistry: Chemistry, samples: Vec<Barcode>, config: PrepConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };
        Self {
            chemistry,
            samples,
            config,
            rng,
        }
    }

    /// The reagent configuration.
    pub fn chemistry(&self) -> &Chemistry {
        &self.chemistry
    }

    /// The per-sample barcodes.
    pub fn samples(&self) -> &[Barcode] {
        &self.samples
    }

    /// The run configuration.
    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    /// Run the full preparation, drawing one fresh scaffold per sample.
    ///
    /// Returns the amplified library. Consumes entropy from the engine RNG;
    /// two engines built with the same seed and parameters produce
    /// identical libraries.
    pub fn run(&mut self) -> Library {
        let scaffolds: Vec<Sequence> = (0..self.samples.len())
            .map(|_| generate_scaffold(self.config.genome_length, &mut self.rng))
            .collect();
        self.run_on_scaffolds(&scaffolds)
    }

    /// Run the preparation on caller-supplied scaffolds, one per sample
    /// (samples beyond the shorter of the two lists are ignored).
    ///
    /// This is the deterministic core of `run`: no randomness is involved
    /// past this point.
    pub fn run_on_scaffolds(&self, scaffolds: &[Sequence]) -> Library {
        let pooled = multiplex(self.samples.iter().zip(scaffolds).map(|(barcode, scaffold)| {
            let digested = digest(scaffold, self.chemistry.site());
            ligate(&digested, &self.chemistry, barcode)
        }));
        let sheared = shear(&pooled, &self.chemistry, self.config.target_size);
        let repaired = repair_ends(&sheared, &self.chemistry);
        amplify(&repaired, &self.chemistry)
    }
}

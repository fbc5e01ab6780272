//! Builder pattern for creating library preparations.
//!
//! Provides a fluent API for configuring a `LibraryPrep` with sensible
//! defaults and validation collected at `build()`.

use crate::base::Sequence;
pub use crate::errors::BuilderError;
use crate::protocol::reagents::{Adapters, Barcode, Chemistry, RecognitionSite, DEFAULT_SPACER_LEN};
use crate::simulation::engine::LibraryPrep;
use crate::simulation::parameters::PrepConfig;

/// Builder for constructing `LibraryPrep` instances with a fluent API.
///
/// # Examples
///
/// ```
/// use radprep::simulation::PrepBuilder;
///
/// let prep = PrepBuilder::new()
///     .genome_length(1_000_000)
///     .target_size(300)
///     .recognition_site("CTGCAG", 5)
///     .sample("AATTCC")
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PrepBuilder {
    // Required parameters
    genome_length: Option<usize>,
    target_size: Option<usize>,
    site: Option<(String, usize)>,
    barcodes: Vec<String>,

    // Optional parameters (with defaults)
    adapters: Adapters,
    spacer_len: usize,
    seed: Option<u64>,
}

impl Default for PrepBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PrepBuilder {
    /// Create a new builder with default reagents.
    pub fn new() -> Self {
        Self {
            genome_length: None,
            target_size: None,
            site: None,
            barcodes: Vec::new(),
            adapters: Adapters::illumina(),
            spacer_len: DEFAULT_SPACER_LEN,
            seed: None,
        }
    }

    /// Set the synthetic genome length per sample (required).
    pub fn genome_length(mut self, length: usize) -> Self {
        self.genome_length = Some(length);
        self
    }

    /// Set the target shear size (required).
    pub fn target_size(mut self, size: usize) -> Self {
        self.target_size = Some(size);
        self
    }

    /// Set the restriction enzyme recognition motif and cut offset
    /// (required). Validated at `build()`.
    pub fn recognition_site(mut self, motif: &str, cut: usize) -> Self {
        self.site = Some((motif.to_string(), cut));
        self
    }

    /// Add one multiplexed sample identified by `barcode` (at least one
    /// required). Validated at `build()`.
    pub fn sample(mut self, barcode: &str) -> Self {
        self.barcodes.push(barcode.to_string());
        self
    }

    /// Replace the default Illumina adapter pair.
    pub fn adapters(mut self, adapters: Adapters) -> Self {
        self.adapters = adapters;
        self
    }

    /// Override the poly-A spacer length used during end repair.
    pub fn spacer_len(mut self, spacer_len: usize) -> Self {
        self.spacer_len = spacer_len;
        self
    }

    /// Seed the engine RNG for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the accumulated parameters and build the engine.
    pub fn build(self) -> Result<LibraryPrep, BuilderError> {
        let genome_length = self
            .genome_length
            .ok_or(BuilderError::MissingRequired("genome_length"))?;
        let target_size = self
            .target_size
            .ok_or(BuilderError::MissingRequired("target_size"))?;
        if target_size == 0 {
            return Err(BuilderError::InvalidParameter(
                "target_size must be positive".to_string(),
            ));
        }

        let (motif, cut) = self
            .site
            .ok_or(BuilderError::MissingRequired("recognition_site"))?;
        let motif: Sequence = motif
            .parse()
            .map_err(|e| BuilderError::InvalidParameter(format!("recognition motif: {e}")))?;
        let site = RecognitionSite::new(motif, cut)
            .map_err(|e| BuilderError::InvalidParameter(e.to_string()))?;

        if self.barcodes.is_empty() {
            return Err(BuilderError::MissingRequired("sample"));
        }
        let samples: Vec<Barcode> = self
            .barcodes
            .iter()
            .map(|raw| {
                raw.parse()
                    .map_err(|e| BuilderError::InvalidParameter(format!("barcode {raw:?}: {e}")))
            })
            .collect::<Result<_, _>>()?;

        let chemistry = Chemistry::new(site, self.adapters).with_spacer_len(self.spacer_len);
        let config = PrepConfig::new(genome_length, target_size, self.seed);
        Ok(LibraryPrep::new(chemistry, samples, config))
    }
}

//! Enrichment simulator
//!
//! Stands in for cross-platform verification: each candidate independently
//! has a chance to receive a badge from one of a fixed set of platforms.
//! The random source is always supplied by the caller.

use rand::Rng;
use serde::{Deserialize, Serialize};

use trace_core::{Platform, TrustSignal, DEFAULT_BOOST, DEFAULT_PRESENCE_PROBABILITY};

/// Tunables for simulated trust signals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Probability a candidate receives a signal
    pub presence_probability: f64,
    /// Score boost carried by every signal
    pub boost: u32,
    /// Qualifier appended to badge labels
    pub qualifier: String,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            presence_probability: DEFAULT_PRESENCE_PROBABILITY,
            boost: DEFAULT_BOOST,
            qualifier: "Advanced ML".to_string(),
        }
    }
}

/// Draws simulated trust signals
#[derive(Debug, Clone)]
pub struct EnrichmentSimulator {
    config: EnrichmentConfig,
}

impl EnrichmentSimulator {
    pub fn new(config: EnrichmentConfig) -> Self {
        Self { config }
    }

    /// Draw one signal; present when the uniform draw exceeds `1 - presence_probability`
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<TrustSignal> {
        let threshold = 1.0 - self.config.presence_probability;
        let draw: f64 = rng.gen();
        if draw <= threshold {
            return None;
        }

        let platform = Platform::ALL[rng.gen_range(0..Platform::ALL.len())];
        Some(TrustSignal::new(platform, &self.config.qualifier, self.config.boost))
    }
}

impl Default for EnrichmentSimulator {
    fn default() -> Self {
        Self::new(EnrichmentConfig::default())
    }
}

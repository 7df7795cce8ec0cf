//! Random starting colours.
//!
//! Colours are drawn from a lightness/chroma band that tends to look good,
//! mapped into Display P3 and nudged slightly darker and less saturated so
//! they stay clear of the gamut edge.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Oklch;
use crate::convert::{to_oklch, to_p3};

/// Closed interval a component is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        if lo < hi {
            rng.gen_range(lo..=hi)
        } else {
            lo
        }
    }
}

/// Sampling bands and post-mapping nudges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub lightness: Band,
    pub chroma: Band,
    /// Subtracted from lightness after mapping
    pub lightness_nudge: f64,
    /// Subtracted from chroma after mapping, never below zero
    pub chroma_nudge: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            lightness: Band::new(0.51, 0.80),
            chroma: Band::new(0.11, 0.35),
            lightness_nudge: 0.02,
            chroma_nudge: 0.01,
        }
    }
}

impl SamplerConfig {
    /// Draw one colour using `rng`.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Oklch {
        let drawn = Oklch::new(
            self.lightness.draw(rng),
            self.chroma.draw(rng),
            rng.gen_range(0.0..360.0),
        );
        let mapped = to_oklch(to_p3(&drawn));
        let colour = Oklch {
            l: mapped.l - self.lightness_nudge,
            c: (mapped.c - self.chroma_nudge).max(0.0),
            ..mapped
        };
        tracing::debug!(?drawn, ?colour, "sampled random colour");
        colour
    }
}

/// Draw a colour with the default bands using `rng`.
pub fn sample_with<R: Rng + ?Sized>(rng: &mut R) -> Oklch {
    SamplerConfig::default().sample_with(rng)
}

/// Draw a colour with the default bands from the thread-local generator.
pub fn sample_random() -> Oklch {
    sample_with(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamut::{classify, Space};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_samples_stay_in_nudged_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let colour = sample_with(&mut rng);
            // Clipping into P3 may move lightness by up to a JND.
            assert!(colour.l >= 0.51 - 0.02 - 0.025, "{colour:?}");
            assert!(colour.l <= 0.80 - 0.02 + 0.025, "{colour:?}");
            assert!(colour.c >= 0.0 && colour.c <= 0.36, "{colour:?}");
            assert_eq!(colour.alpha, 1.0);
        }
    }

    #[test]
    fn test_unnudged_samples_are_displayable_in_p3() {
        let config = SamplerConfig {
            lightness_nudge: 0.0,
            chroma_nudge: 0.0,
            ..SamplerConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let colour = config.sample_with(&mut rng);
            assert_ne!(classify(&colour), Space::OutOfGamut, "{colour:?}");
        }
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = sample_with(&mut StdRng::seed_from_u64(1));
        let b = sample_with(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_band() {
        let config = SamplerConfig {
            lightness: Band::new(0.6, 0.6),
            chroma: Band::new(0.0, 0.0),
            lightness_nudge: 0.0,
            chroma_nudge: 0.05,
        };
        let colour = config.sample_with(&mut StdRng::seed_from_u64(3));
        assert!((colour.l - 0.6).abs() < 1e-6);
        assert_eq!(colour.c, 0.0);
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: SamplerConfig =
            serde_json::from_str(r#"{"lightness": {"min": 0.3, "max": 0.4}}"#).unwrap();
        assert_eq!(config.lightness, Band::new(0.3, 0.4));
        assert_eq!(config.chroma, SamplerConfig::default().chroma);
    }

    #[test]
    fn test_sample_random_runs() {
        let colour = sample_random();
        assert!(colour.l.is_finite() && colour.c.is_finite());
    }
}

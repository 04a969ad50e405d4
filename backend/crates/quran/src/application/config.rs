//! Application Configuration

use crate::domain::partition::{QuarterBoundaries, SizeBasedBoundaries};
use std::fmt;
use std::sync::Arc;

/// Quran application configuration
#[derive(Clone)]
pub struct QuranConfig {
    /// Quarter boundary source. Size-based approximation by default;
    /// swap in an authoritative table here when one is imported.
    pub boundaries: Arc<dyn QuarterBoundaries>,
    /// Expected distinct juz count for a complete import
    pub expected_juz: u64,
    /// Expected distinct hizb count for a complete import
    pub expected_hizb: u64,
}

impl Default for QuranConfig {
    fn default() -> Self {
        Self {
            boundaries: Arc::new(SizeBasedBoundaries),
            expected_juz: 30,
            expected_hizb: 60,
        }
    }
}

impl QuranConfig {
    /// Config with a custom boundary source
    pub fn with_boundaries(boundaries: Arc<dyn QuarterBoundaries>) -> Self {
        Self {
            boundaries,
            ..Self::default()
        }
    }
}

impl fmt::Debug for QuranConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuranConfig")
            .field("expected_juz", &self.expected_juz)
            .field("expected_hizb", &self.expected_hizb)
            .finish_non_exhaustive()
    }
}

//! Quarter Partitioner
//!
//! Pure domain logic for splitting a hizb's ordered ayahs into quarters
//! (Rubʿ al-Hizb). Boundaries are recomputed on every read; nothing is
//! persisted.

use crate::domain::entities::Ayah;
use crate::domain::value_objects::{HizbNumber, QuarterNumber};
use std::ops::Range;

/// Canonical quarter count per hizb
pub const QUARTERS_PER_HIZB: usize = 4;

/// Source of quarter boundary positions within a hizb.
///
/// The default implementation is a size-based approximation. An
/// authoritative boundary table can replace it without touching any
/// caller: the hizb number is passed so a source may vary per hizb.
pub trait QuarterBoundaries: Send + Sync {
    /// Split positions for a hizb of `len` ayahs.
    ///
    /// Contract: at most [`QUARTERS_PER_HIZB`] contiguous, non-overlapping,
    /// ascending ranges whose union is exactly `[0, len)`. Empty ranges
    /// are permitted and dropped by the partitioner.
    fn split(&self, hizb: HizbNumber, len: usize) -> Vec<Range<usize>>;
}

/// Size-based approximation of the quarter boundaries.
///
/// `per_quarter = ceil(len / 4)`; quarter `i` covers
/// `[i * per_quarter, min((i + 1) * per_quarter, len))`.
///
/// This is an approximation of the religiously defined Rubʿ al-Hizb
/// positions, which are not equal in verse count. It misplaces the
/// boundary near the edges for some hizbs; that is accepted behavior
/// until an authoritative table is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeBasedBoundaries;

impl QuarterBoundaries for SizeBasedBoundaries {
    fn split(&self, _hizb: HizbNumber, len: usize) -> Vec<Range<usize>> {
        if len == 0 {
            return Vec::new();
        }
        let per_quarter = len.div_ceil(QUARTERS_PER_HIZB);
        (0..QUARTERS_PER_HIZB)
            .map(|i| {
                let start = (i * per_quarter).min(len);
                let end = ((i + 1) * per_quarter).min(len);
                start..end
            })
            .collect()
    }
}

/// One quarter of a hizb: a contiguous slice of its sorted ayahs
#[derive(Debug, Clone)]
pub struct QuarterSlice<'a> {
    pub number: QuarterNumber,
    pub ayahs: &'a [Ayah],
}

/// Partition a hizb's ayahs (sorted ascending by `(surah, ayah)`) into
/// at most four contiguous quarters.
///
/// Quarters are numbered consecutively from 1; empty buckets are not
/// emitted, so fewer than four results are possible when the hizb holds
/// fewer than four ayahs. The concatenation of the returned slices, in
/// order, reproduces the input exactly.
pub fn partition_hizb<'a>(
    ayahs: &'a [Ayah],
    hizb: HizbNumber,
    boundaries: &dyn QuarterBoundaries,
) -> Vec<QuarterSlice<'a>> {
    boundaries
        .split(hizb, ayahs.len())
        .into_iter()
        .filter(|range| !range.is_empty() && range.end <= ayahs.len())
        .take(QUARTERS_PER_HIZB)
        .enumerate()
        .filter_map(|(i, range)| {
            let number = QuarterNumber::new(i as u8 + 1)?;
            Some(QuarterSlice {
                number,
                ayahs: &ayahs[range],
            })
        })
        .collect()
}

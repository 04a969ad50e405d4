//! Aggregation Read Models
//!
//! Raw results of store-side grouping. Computed per request, never
//! persisted.

use crate::domain::value_objects::HizbNumber;

/// A surah touched by a hizb or quarter (number + Arabic name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurahRef {
    pub number: u16,
    pub name_arabic: String,
}

/// Global counts over the whole ayah store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureCounts {
    pub total_ayahs: u64,
    pub distinct_juz: u64,
    pub distinct_hizb: u64,
    /// Distinct (juz, hizb) combinations present in the store
    pub juz_hizb_pairs: u64,
}

/// Per-hizb aggregate within one juz
#[derive(Debug, Clone)]
pub struct HizbRollup {
    pub hizb_number: HizbNumber,
    pub ayah_count: u64,
    /// Distinct legacy `quarter_segment` tags. Informational only, not
    /// authoritative.
    pub quarter_tag_count: u64,
    /// Distinct surahs touched, ascending by surah number
    pub surahs: Vec<SurahRef>,
}

/// Per-surah aggregate over the whole store
#[derive(Debug, Clone)]
pub struct SurahRollup {
    pub number: u16,
    pub name_arabic: String,
    pub name_english: Option<String>,
    pub ayah_count: u64,
}

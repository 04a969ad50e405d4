//! Repository Traits
//!
//! Interfaces for the ayah store. Implementations live in the
//! infrastructure layer. Every method is a single snapshot-consistent
//! read; nothing here mutates state.

use crate::domain::aggregates::{HizbRollup, StructureCounts, SurahRollup};
use crate::domain::entities::Ayah;
use crate::domain::value_objects::{HizbNumber, JuzNumber};
use crate::error::QuranResult;

/// Ayah store read interface
#[trait_variant::make(AyahRepository: Send)]
pub trait LocalAyahRepository {
    /// Global counts for the structure overview
    async fn structure_counts(&self) -> QuranResult<StructureCounts>;

    /// Per-hizb aggregates within one juz, ascending by hizb number
    async fn hizb_rollups(&self, juz: JuzNumber) -> QuranResult<Vec<HizbRollup>>;

    /// All ayahs of one hizb, sorted ascending by `(surah, ayah)`.
    /// This ordering is the sole input to quarter partitioning.
    async fn hizb_ayahs(&self, juz: JuzNumber, hizb: HizbNumber) -> QuranResult<Vec<Ayah>>;

    /// Per-surah aggregates over the whole store, ascending by surah number
    async fn surah_rollups(&self) -> QuranResult<Vec<SurahRollup>>;
}

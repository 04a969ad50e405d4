//! In-Memory Repository Implementation
//!
//! Holds the full ayah set in memory and aggregates on the fly. Used by
//! unit tests and useful for local development with a fixture import.

use crate::domain::aggregates::{HizbRollup, StructureCounts, SurahRef, SurahRollup};
use crate::domain::entities::Ayah;
use crate::domain::repository::AyahRepository;
use crate::domain::value_objects::{HizbNumber, JuzNumber};
use crate::error::QuranResult;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// In-memory ayah store
#[derive(Clone)]
pub struct InMemoryAyahRepository {
    ayahs: Arc<Vec<Ayah>>,
}

impl InMemoryAyahRepository {
    pub fn new(mut ayahs: Vec<Ayah>) -> Self {
        ayahs.sort_by_key(Ayah::sort_key);
        Self {
            ayahs: Arc::new(ayahs),
        }
    }
}

impl AyahRepository for InMemoryAyahRepository {
    async fn structure_counts(&self) -> QuranResult<StructureCounts> {
        let juz: BTreeSet<_> = self.ayahs.iter().map(|a| a.juz_number).collect();
        let hizb: BTreeSet<_> = self.ayahs.iter().map(|a| a.hizb_number).collect();
        let pairs: BTreeSet<_> = self
            .ayahs
            .iter()
            .map(|a| (a.juz_number, a.hizb_number))
            .collect();

        Ok(StructureCounts {
            total_ayahs: self.ayahs.len() as u64,
            distinct_juz: juz.len() as u64,
            distinct_hizb: hizb.len() as u64,
            juz_hizb_pairs: pairs.len() as u64,
        })
    }

    async fn hizb_rollups(&self, juz: JuzNumber) -> QuranResult<Vec<HizbRollup>> {
        let mut rollups: BTreeMap<HizbNumber, (u64, BTreeSet<String>, BTreeMap<u16, String>)> =
            BTreeMap::new();

        for ayah in self.ayahs.iter().filter(|a| a.juz_number == juz) {
            let (count, tags, surahs) = rollups.entry(ayah.hizb_number).or_default();
            *count += 1;
            if let Some(tag) = &ayah.quarter_segment {
                tags.insert(tag.clone());
            }
            surahs
                .entry(ayah.surah_number)
                .or_insert_with(|| ayah.surah_name_arabic.clone());
        }

        Ok(rollups
            .into_iter()
            .map(|(hizb_number, (ayah_count, tags, surahs))| HizbRollup {
                hizb_number,
                ayah_count,
                quarter_tag_count: tags.len() as u64,
                surahs: surahs
                    .into_iter()
                    .map(|(number, name_arabic)| SurahRef {
                        number,
                        name_arabic,
                    })
                    .collect(),
            })
            .collect())
    }

    async fn hizb_ayahs(&self, juz: JuzNumber, hizb: HizbNumber) -> QuranResult<Vec<Ayah>> {
        // `ayahs` is kept sorted by (surah, ayah), so the filtered view is too
        Ok(self
            .ayahs
            .iter()
            .filter(|a| a.juz_number == juz && a.hizb_number == hizb)
            .cloned()
            .collect())
    }

    async fn surah_rollups(&self) -> QuranResult<Vec<SurahRollup>> {
        let mut rollups: BTreeMap<u16, SurahRollup> = BTreeMap::new();

        for ayah in self.ayahs.iter() {
            rollups
                .entry(ayah.surah_number)
                .or_insert_with(|| SurahRollup {
                    number: ayah.surah_number,
                    name_arabic: ayah.surah_name_arabic.clone(),
                    name_english: ayah.surah_name_english.clone(),
                    ayah_count: 0,
                })
                .ayah_count += 1;
        }

        Ok(rollups.into_values().collect())
    }
}

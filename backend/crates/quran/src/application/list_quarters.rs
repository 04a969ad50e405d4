//! List Quarters Use Case

use crate::application::config::QuranConfig;
use crate::domain::aggregates::SurahRef;
use crate::domain::entities::Ayah;
use crate::domain::partition::{QuarterSlice, partition_hizb};
use crate::domain::repository::AyahRepository;
use crate::domain::value_objects::{HizbNumber, JuzNumber};
use crate::error::{QuranError, QuranResult};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Location of a single ayah, for quarter range endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AyahRef {
    pub surah: u16,
    pub surah_name: String,
    pub ayah_number: u16,
}

impl AyahRef {
    fn of(ayah: &Ayah) -> Self {
        Self {
            surah: ayah.surah_number,
            surah_name: ayah.surah_name_arabic.clone(),
            ayah_number: ayah.ayah_number,
        }
    }
}

/// Computed view of one quarter within a hizb
#[derive(Debug, Clone)]
pub struct QuarterSummary {
    pub quarter_number: u8,
    pub ayah_count: u64,
    pub surahs: Vec<SurahRef>,
    /// First and last ayah of the quarter
    pub range: (AyahRef, AyahRef),
}

/// Output DTO for the quarter listing
#[derive(Debug, Clone)]
pub struct ListQuartersOutput {
    pub juz: u8,
    pub hizb: u8,
    pub quarters: Vec<QuarterSummary>,
}

/// List Quarters Use Case
pub struct ListQuartersUseCase<R>
where
    R: AyahRepository,
{
    repo: Arc<R>,
    config: Arc<QuranConfig>,
}

impl<R> ListQuartersUseCase<R>
where
    R: AyahRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<QuranConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, juz: JuzNumber, hizb: HizbNumber) -> QuranResult<ListQuartersOutput> {
        let ayahs = self.repo.hizb_ayahs(juz, hizb).await?;

        if ayahs.is_empty() {
            tracing::debug!(juz = %juz, hizb = %hizb, "No ayahs imported for hizb");
            return Err(QuranError::LocationEmpty);
        }

        let quarters = partition_hizb(&ayahs, hizb, self.config.boundaries.as_ref())
            .iter()
            .filter_map(summarize)
            .collect::<Vec<_>>();

        tracing::debug!(
            juz = %juz,
            hizb = %hizb,
            ayah_count = ayahs.len(),
            quarter_count = quarters.len(),
            "Quarter listing computed"
        );

        Ok(ListQuartersOutput {
            juz: juz.get(),
            hizb: hizb.get(),
            quarters,
        })
    }
}

fn summarize(slice: &QuarterSlice<'_>) -> Option<QuarterSummary> {
    // Slices from the partitioner are never empty
    let start = AyahRef::of(slice.ayahs.first()?);
    let end = AyahRef::of(slice.ayahs.last()?);

    // Distinct surahs, ascending by surah number
    let surahs: Vec<SurahRef> = slice
        .ayahs
        .iter()
        .map(|a| (a.surah_number, a.surah_name_arabic.clone()))
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .map(|(number, name_arabic)| SurahRef {
            number,
            name_arabic,
        })
        .collect();

    Some(QuarterSummary {
        quarter_number: slice.number.get(),
        ayah_count: slice.ayahs.len() as u64,
        surahs,
        range: (start, end),
    })
}

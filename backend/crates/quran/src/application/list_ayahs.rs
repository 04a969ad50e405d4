//! List Quarter Ayahs Use Case

use crate::application::config::QuranConfig;
use crate::domain::entities::Ayah;
use crate::domain::partition::partition_hizb;
use crate::domain::repository::AyahRepository;
use crate::domain::value_objects::{HizbNumber, JuzNumber, QuarterNumber};
use crate::error::{QuranError, QuranResult};
use kernel::id::AyahId;
use std::sync::Arc;

/// One ayah formatted for display within a quarter
#[derive(Debug, Clone)]
pub struct QuarterAyah {
    pub id: AyahId,
    pub surah: u16,
    pub surah_name: String,
    pub ayah_number: u16,
    pub text_arabic: String,
    pub text_english: Option<String>,
    pub juz: u8,
    pub hizb: u8,
    /// The requested quarter number, not recomputed per ayah
    pub quarter: u8,
    pub page: u16,
    pub ruku: Option<u16>,
    /// Whether the ayah carries a sajda (either kind)
    pub sajda: bool,
}

/// Output DTO for the quarter ayah listing
#[derive(Debug, Clone)]
pub struct ListQuarterAyahsOutput {
    pub juz: u8,
    pub hizb: u8,
    pub quarter: u8,
    pub ayahs: Vec<QuarterAyah>,
}

/// List Quarter Ayahs Use Case
pub struct ListQuarterAyahsUseCase<R>
where
    R: AyahRepository,
{
    repo: Arc<R>,
    config: Arc<QuranConfig>,
}

impl<R> ListQuarterAyahsUseCase<R>
where
    R: AyahRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<QuranConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        juz: JuzNumber,
        hizb: HizbNumber,
        quarter: QuarterNumber,
    ) -> QuranResult<ListQuarterAyahsOutput> {
        let ayahs = self.repo.hizb_ayahs(juz, hizb).await?;

        if ayahs.is_empty() {
            tracing::debug!(juz = %juz, hizb = %hizb, "No ayahs imported for hizb");
            return Err(QuranError::LocationEmpty);
        }

        // A hizb with fewer than four ayahs emits fewer than four
        // quarters; asking for a dropped bucket is a miss, not an error
        // in the request shape.
        let slices = partition_hizb(&ayahs, hizb, self.config.boundaries.as_ref());
        let slice = slices
            .iter()
            .find(|s| s.number == quarter)
            .ok_or(QuranError::LocationEmpty)?;

        let formatted = slice
            .ayahs
            .iter()
            .map(|a| format_ayah(a, quarter))
            .collect::<Vec<_>>();

        tracing::debug!(
            juz = %juz,
            hizb = %hizb,
            quarter = %quarter,
            ayah_count = formatted.len(),
            "Quarter ayah listing computed"
        );

        Ok(ListQuarterAyahsOutput {
            juz: juz.get(),
            hizb: hizb.get(),
            quarter: quarter.get(),
            ayahs: formatted,
        })
    }
}

fn format_ayah(ayah: &Ayah, quarter: QuarterNumber) -> QuarterAyah {
    QuarterAyah {
        id: ayah.id,
        surah: ayah.surah_number,
        surah_name: ayah.surah_name_arabic.clone(),
        ayah_number: ayah.ayah_number,
        text_arabic: ayah.text_arabic.clone(),
        text_english: ayah.text_english.clone(),
        juz: ayah.juz_number.get(),
        hizb: ayah.hizb_number.get(),
        quarter: quarter.get(),
        page: ayah.page_number,
        ruku: ayah.ruku_number,
        sajda: ayah.sajda_type.prostrates(),
    }
}

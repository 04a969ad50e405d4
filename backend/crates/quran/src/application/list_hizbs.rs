//! List Hizbs Use Case

use crate::domain::aggregates::SurahRef;
use crate::domain::repository::AyahRepository;
use crate::domain::value_objects::JuzNumber;
use crate::error::{QuranError, QuranResult};
use std::sync::Arc;

/// Aggregated view of one hizb within a juz
#[derive(Debug, Clone)]
pub struct HizbSummary {
    pub hizb_number: u8,
    /// Distinct legacy quarter tags, informational only
    pub quarter_count: u64,
    pub ayah_count: u64,
    pub surahs: Vec<SurahRef>,
}

/// Output DTO for the hizb listing
#[derive(Debug, Clone)]
pub struct ListHizbsOutput {
    pub juz: u8,
    pub hizbs: Vec<HizbSummary>,
}

/// List Hizbs Use Case
pub struct ListHizbsUseCase<R>
where
    R: AyahRepository,
{
    repo: Arc<R>,
}

impl<R> ListHizbsUseCase<R>
where
    R: AyahRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, juz: JuzNumber) -> QuranResult<ListHizbsOutput> {
        let rollups = self.repo.hizb_rollups(juz).await?;

        if rollups.is_empty() {
            tracing::debug!(juz = %juz, "No ayahs imported for juz");
            return Err(QuranError::LocationEmpty);
        }

        let hizbs = rollups
            .into_iter()
            .map(|r| HizbSummary {
                hizb_number: r.hizb_number.get(),
                quarter_count: r.quarter_tag_count,
                ayah_count: r.ayah_count,
                surahs: r.surahs,
            })
            .collect::<Vec<_>>();

        tracing::debug!(juz = %juz, hizb_count = hizbs.len(), "Hizb listing computed");

        Ok(ListHizbsOutput {
            juz: juz.get(),
            hizbs,
        })
    }
}

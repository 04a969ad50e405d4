//! List Surahs Use Case

use crate::domain::repository::AyahRepository;
use crate::error::QuranResult;
use std::sync::Arc;

/// One surah with its imported ayah count
#[derive(Debug, Clone)]
pub struct SurahSummary {
    pub number: u16,
    pub name_arabic: String,
    pub name_english: Option<String>,
    pub ayah_count: u64,
}

/// Output DTO for the surah listing
#[derive(Debug, Clone)]
pub struct ListSurahsOutput {
    pub surahs: Vec<SurahSummary>,
}

/// List Surahs Use Case
pub struct ListSurahsUseCase<R>
where
    R: AyahRepository,
{
    repo: Arc<R>,
}

impl<R> ListSurahsUseCase<R>
where
    R: AyahRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> QuranResult<ListSurahsOutput> {
        let surahs = self
            .repo
            .surah_rollups()
            .await?
            .into_iter()
            .map(|r| SurahSummary {
                number: r.number,
                name_arabic: r.name_arabic,
                name_english: r.name_english,
                ayah_count: r.ayah_count,
            })
            .collect::<Vec<_>>();

        tracing::debug!(surah_count = surahs.len(), "Surah listing computed");

        Ok(ListSurahsOutput { surahs })
    }
}

//! Application Layer - Use Cases
//!
//! One use case per drill-down view of the hierarchy, plus the surah
//! listing. Each orchestrates the repository and the partitioner.

pub mod config;
pub mod list_ayahs;
pub mod list_hizbs;
pub mod list_quarters;
pub mod list_surahs;
pub mod overview;

// Re-exports
pub use config::QuranConfig;
pub use list_ayahs::{ListQuarterAyahsOutput, ListQuarterAyahsUseCase, QuarterAyah};
pub use list_hizbs::{HizbSummary, ListHizbsOutput, ListHizbsUseCase};
pub use list_quarters::{AyahRef, ListQuartersOutput, ListQuartersUseCase, QuarterSummary};
pub use list_surahs::{ListSurahsOutput, ListSurahsUseCase, SurahSummary};
pub use overview::{StructureOverviewOutput, StructureOverviewUseCase};

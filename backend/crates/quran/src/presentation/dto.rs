//! API DTOs (Data Transfer Objects)
//!
//! Raw query parameters are parsed here into a validated request enum
//! before anything touches the store; non-numeric or out-of-range values
//! are rejected explicitly instead of being coerced.

use crate::application::{
    HizbSummary, ListHizbsOutput, ListQuarterAyahsOutput, ListQuartersOutput, ListSurahsOutput,
    QuarterAyah, QuarterSummary, StructureOverviewOutput, SurahSummary,
};
use crate::domain::aggregates::SurahRef;
use crate::domain::value_objects::{HizbNumber, JuzNumber, QuarterNumber};
use crate::error::{QuranError, QuranResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Request side
// ============================================================================

/// Raw query string of GET /api/quran/structure
///
/// Values stay strings so that parsing failures are ours to report, not
/// a framework rejection with a different body shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructureQuery {
    pub juz: Option<String>,
    pub hizb: Option<String>,
    pub quarter: Option<String>,
}

/// Validated drill-down request - exactly one of the four recognized
/// parameter combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureRequest {
    Overview,
    Hizbs {
        juz: JuzNumber,
    },
    Quarters {
        juz: JuzNumber,
        hizb: HizbNumber,
    },
    Ayahs {
        juz: JuzNumber,
        hizb: HizbNumber,
        quarter: QuarterNumber,
    },
}

impl StructureRequest {
    /// Parse and validate the raw query.
    ///
    /// Rejections: non-integer values (400), unrecognized parameter
    /// combinations such as `quarter` without `hizb` (400), out-of-range
    /// values (422), and a hizb outside the given juz (422).
    pub fn from_query(query: &StructureQuery) -> QuranResult<Self> {
        let juz = parse_param("juz", query.juz.as_deref(), JuzNumber::MAX, JuzNumber::new)?;
        let hizb = parse_param("hizb", query.hizb.as_deref(), HizbNumber::MAX, HizbNumber::new)?;
        let quarter = parse_param(
            "quarter",
            query.quarter.as_deref(),
            QuarterNumber::MAX,
            QuarterNumber::new,
        )?;

        let request = match (juz, hizb, quarter) {
            (None, None, None) => StructureRequest::Overview,
            (Some(juz), None, None) => StructureRequest::Hizbs { juz },
            (Some(juz), Some(hizb), None) => StructureRequest::Quarters { juz, hizb },
            (Some(juz), Some(hizb), Some(quarter)) => {
                StructureRequest::Ayahs { juz, hizb, quarter }
            }
            _ => {
                return Err(QuranError::InvalidParameters(describe_combination(
                    juz.is_some(),
                    hizb.is_some(),
                    quarter.is_some(),
                )));
            }
        };

        // Canonical 30x2 mapping check
        match request {
            StructureRequest::Quarters { juz, hizb, .. }
            | StructureRequest::Ayahs { juz, hizb, .. }
                if !hizb.is_in_juz(juz) =>
            {
                Err(QuranError::JuzHizbMismatch {
                    juz: juz.get(),
                    hizb: hizb.get(),
                })
            }
            _ => Ok(request),
        }
    }
}

/// Parse one optional integer parameter into its value object,
/// distinguishing "not an integer" from "out of range"
fn parse_param<T>(
    name: &'static str,
    raw: Option<&str>,
    max: u8,
    make: impl FnOnce(u8) -> Option<T>,
) -> QuranResult<Option<T>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| QuranError::NonNumericParameter { name })?;

    u8::try_from(value)
        .ok()
        .and_then(make)
        .map(Some)
        .ok_or(QuranError::OutOfRange { name, min: 1, max })
}

fn describe_combination(juz: bool, hizb: bool, quarter: bool) -> String {
    let mut present = Vec::new();
    let mut missing = Vec::new();
    for (name, given) in [("juz", juz), ("hizb", hizb), ("quarter", quarter)] {
        if given {
            present.push(name);
        } else {
            missing.push(name);
        }
    }
    format!(
        "'{}' given without '{}'",
        present.join("', '"),
        missing.join("', '")
    )
}

// ============================================================================
// Response side
// ============================================================================

/// API-wide response envelope: `{success, data?, message?}`
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

/// Response for the overview view
#[derive(Debug, Clone, Serialize)]
pub struct OverviewData {
    pub structure: StructureDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureDto {
    pub total_ayahs: u64,
    pub total_juz: u64,
    pub total_hizb: u64,
    pub total_quarters: u64,
}

impl From<StructureOverviewOutput> for OverviewData {
    fn from(output: StructureOverviewOutput) -> Self {
        Self {
            structure: StructureDto {
                total_ayahs: output.total_ayahs,
                total_juz: output.total_juz,
                total_hizb: output.total_hizb,
                total_quarters: output.total_quarters,
            },
        }
    }
}

/// Response for the hizb listing view
#[derive(Debug, Clone, Serialize)]
pub struct HizbListData {
    pub juz: u8,
    pub hizbs: Vec<HizbSummaryDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HizbSummaryDto {
    pub hizb_number: u8,
    pub quarter_count: u64,
    pub ayah_count: u64,
    pub surahs: Vec<SurahRefDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurahRefDto {
    pub number: u16,
    pub name: String,
}

impl From<SurahRef> for SurahRefDto {
    fn from(surah: SurahRef) -> Self {
        Self {
            number: surah.number,
            name: surah.name_arabic,
        }
    }
}

impl From<ListHizbsOutput> for HizbListData {
    fn from(output: ListHizbsOutput) -> Self {
        Self {
            juz: output.juz,
            hizbs: output.hizbs.into_iter().map(HizbSummaryDto::from).collect(),
        }
    }
}

impl From<HizbSummary> for HizbSummaryDto {
    fn from(summary: HizbSummary) -> Self {
        Self {
            hizb_number: summary.hizb_number,
            quarter_count: summary.quarter_count,
            ayah_count: summary.ayah_count,
            surahs: summary.surahs.into_iter().map(SurahRefDto::from).collect(),
        }
    }
}

/// Response for the quarter listing view
#[derive(Debug, Clone, Serialize)]
pub struct QuarterListData {
    pub juz: u8,
    pub hizb: u8,
    pub quarters: Vec<QuarterSummaryDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterSummaryDto {
    pub quarter_number: u8,
    pub ayah_count: u64,
    pub surahs: Vec<SurahRefDto>,
    pub range: QuarterRangeDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuarterRangeDto {
    pub start: AyahRefDto,
    pub end: AyahRefDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AyahRefDto {
    pub surah: u16,
    pub surah_name: String,
    pub ayah_number: u16,
}

impl From<ListQuartersOutput> for QuarterListData {
    fn from(output: ListQuartersOutput) -> Self {
        Self {
            juz: output.juz,
            hizb: output.hizb,
            quarters: output
                .quarters
                .into_iter()
                .map(QuarterSummaryDto::from)
                .collect(),
        }
    }
}

impl From<QuarterSummary> for QuarterSummaryDto {
    fn from(summary: QuarterSummary) -> Self {
        let (start, end) = summary.range;
        Self {
            quarter_number: summary.quarter_number,
            ayah_count: summary.ayah_count,
            surahs: summary.surahs.into_iter().map(SurahRefDto::from).collect(),
            range: QuarterRangeDto {
                start: AyahRefDto {
                    surah: start.surah,
                    surah_name: start.surah_name,
                    ayah_number: start.ayah_number,
                },
                end: AyahRefDto {
                    surah: end.surah,
                    surah_name: end.surah_name,
                    ayah_number: end.ayah_number,
                },
            },
        }
    }
}

/// Response for the quarter ayah listing view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterAyahsData {
    pub juz: u8,
    pub hizb: u8,
    pub quarter: u8,
    pub ayah_count: u64,
    pub ayahs: Vec<AyahDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AyahDto {
    pub id: Uuid,
    pub surah: u16,
    pub surah_name: String,
    pub ayah_number: u16,
    pub text_arabic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_english: Option<String>,
    pub juz: u8,
    pub hizb: u8,
    pub quarter: u8,
    pub page: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruku: Option<u16>,
    pub sajda: bool,
}

impl From<ListQuarterAyahsOutput> for QuarterAyahsData {
    fn from(output: ListQuarterAyahsOutput) -> Self {
        Self {
            juz: output.juz,
            hizb: output.hizb,
            quarter: output.quarter,
            ayah_count: output.ayahs.len() as u64,
            ayahs: output.ayahs.into_iter().map(AyahDto::from).collect(),
        }
    }
}

impl From<QuarterAyah> for AyahDto {
    fn from(ayah: QuarterAyah) -> Self {
        Self {
            id: ayah.id.into_uuid(),
            surah: ayah.surah,
            surah_name: ayah.surah_name,
            ayah_number: ayah.ayah_number,
            text_arabic: ayah.text_arabic,
            text_english: ayah.text_english,
            juz: ayah.juz,
            hizb: ayah.hizb,
            quarter: ayah.quarter,
            page: ayah.page,
            ruku: ayah.ruku,
            sajda: ayah.sajda,
        }
    }
}

/// Response for GET /api/quran/surahs
#[derive(Debug, Clone, Serialize)]
pub struct SurahListData {
    pub surahs: Vec<SurahSummaryDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahSummaryDto {
    pub number: u16,
    pub name_arabic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_english: Option<String>,
    pub ayah_count: u64,
}

impl From<ListSurahsOutput> for SurahListData {
    fn from(output: ListSurahsOutput) -> Self {
        Self {
            surahs: output.surahs.into_iter().map(SurahSummaryDto::from).collect(),
        }
    }
}

impl From<SurahSummary> for SurahSummaryDto {
    fn from(summary: SurahSummary) -> Self {
        Self {
            number: summary.number,
            name_arabic: summary.name_arabic,
            name_english: summary.name_english,
            ayah_count: summary.ayah_count,
        }
    }
}

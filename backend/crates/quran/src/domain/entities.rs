//! Domain Entities
//!
//! The Ayah is the only persisted entity. It is immutable reference data,
//! written once by the offline importer.

use crate::domain::aggregates::SurahRef;
use crate::domain::value_objects::{HizbNumber, JuzNumber};
use chrono::{DateTime, Utc};
use kernel::id::AyahId;

/// Prostration marker attached to certain ayahs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SajdaType {
    #[default]
    None,
    Obligatory,
    Recommended,
}

impl SajdaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SajdaType::None => "none",
            SajdaType::Obligatory => "obligatory",
            SajdaType::Recommended => "recommended",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(SajdaType::None),
            "obligatory" => Some(SajdaType::Obligatory),
            "recommended" => Some(SajdaType::Recommended),
            _ => None,
        }
    }

    /// Whether the reader prostrates at this ayah (either sajda kind)
    pub fn prostrates(&self) -> bool {
        matches!(self, SajdaType::Obligatory | SajdaType::Recommended)
    }
}

/// Ayah entity - one verse of the imported text
#[derive(Debug, Clone)]
pub struct Ayah {
    pub id: AyahId,
    pub surah_number: u16,
    pub surah_name_arabic: String,
    pub surah_name_english: Option<String>,
    pub ayah_number: u16,
    pub text_arabic: String,
    pub text_english: Option<String>,
    pub juz_number: JuzNumber,
    pub hizb_number: HizbNumber,
    /// Legacy importer tag. Informational only; never consulted by the
    /// partitioner.
    pub quarter_segment: Option<String>,
    pub page_number: u16,
    pub ruku_number: Option<u16>,
    pub sajda_type: SajdaType,
    pub created_at: DateTime<Utc>,
}

impl Ayah {
    /// Canonical ordering within a hizb: (surah, ayah) ascending
    pub fn sort_key(&self) -> (u16, u16) {
        (self.surah_number, self.ayah_number)
    }

    pub fn surah_ref(&self) -> SurahRef {
        SurahRef {
            number: self.surah_number,
            name_arabic: self.surah_name_arabic.clone(),
        }
    }
}

//! PostgreSQL Repository Implementation
//!
//! All reads run against the `ayahs` reference table written by the
//! offline importer. Aggregation happens store-side; row types are
//! converted into domain types defensively.

use crate::domain::aggregates::{HizbRollup, StructureCounts, SurahRef, SurahRollup};
use crate::domain::entities::{Ayah, SajdaType};
use crate::domain::repository::AyahRepository;
use crate::domain::value_objects::{HizbNumber, JuzNumber};
use crate::error::{QuranError, QuranResult};
use sqlx::PgPool;
use std::collections::BTreeMap;
use uuid::Uuid;

/// PostgreSQL-backed ayah store
#[derive(Clone)]
pub struct PgQuranRepository {
    pool: PgPool,
}

impl PgQuranRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Total imported ayah count, for the startup import check
    pub async fn import_stats(&self) -> QuranResult<u64> {
        let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM ayahs")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }
}

impl AyahRepository for PgQuranRepository {
    async fn structure_counts(&self) -> QuranResult<StructureCounts> {
        let (total, juz, hizb, pairs) = sqlx::query_as::<_, (i64, i64, i64, i64)>(
            r#"
            SELECT
                COUNT(*),
                COUNT(DISTINCT juz_number),
                COUNT(DISTINCT hizb_number),
                COUNT(DISTINCT (juz_number, hizb_number))
            FROM ayahs
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(StructureCounts {
            total_ayahs: total as u64,
            distinct_juz: juz as u64,
            distinct_hizb: hizb as u64,
            juz_hizb_pairs: pairs as u64,
        })
    }

    async fn hizb_rollups(&self, juz: JuzNumber) -> QuranResult<Vec<HizbRollup>> {
        // Per-(hizb, surah) ayah counts; surahs arrive pre-sorted
        let surah_rows = sqlx::query_as::<_, (i16, i16, String, i64)>(
            r#"
            SELECT hizb_number, surah_number, surah_name_arabic, COUNT(*)
            FROM ayahs
            WHERE juz_number = $1
            GROUP BY hizb_number, surah_number, surah_name_arabic
            ORDER BY hizb_number, surah_number
            "#,
        )
        .bind(juz.get() as i16)
        .fetch_all(&self.pool)
        .await?;

        // Distinct legacy quarter tags per hizb (NULLs ignored)
        let tag_rows = sqlx::query_as::<_, (i16, i64)>(
            r#"
            SELECT hizb_number, COUNT(DISTINCT quarter_segment)
            FROM ayahs
            WHERE juz_number = $1
            GROUP BY hizb_number
            "#,
        )
        .bind(juz.get() as i16)
        .fetch_all(&self.pool)
        .await?;

        let tags: BTreeMap<i16, i64> = tag_rows.into_iter().collect();

        let mut rollups: BTreeMap<i16, HizbRollup> = BTreeMap::new();
        for (hizb, surah, surah_name, ayah_count) in surah_rows {
            let entry = match rollups.entry(hizb) {
                std::collections::btree_map::Entry::Occupied(e) => e.into_mut(),
                std::collections::btree_map::Entry::Vacant(e) => e.insert(HizbRollup {
                    hizb_number: hizb_number_from_row(hizb)?,
                    ayah_count: 0,
                    quarter_tag_count: tags.get(&hizb).copied().unwrap_or(0) as u64,
                    surahs: Vec::new(),
                }),
            };
            entry.ayah_count += ayah_count as u64;
            entry.surahs.push(SurahRef {
                number: surah as u16,
                name_arabic: surah_name,
            });
        }

        Ok(rollups.into_values().collect())
    }

    async fn hizb_ayahs(&self, juz: JuzNumber, hizb: HizbNumber) -> QuranResult<Vec<Ayah>> {
        let rows = sqlx::query_as::<_, AyahRow>(
            r#"
            SELECT
                ayah_id,
                surah_number,
                surah_name_arabic,
                surah_name_english,
                ayah_number,
                text_arabic,
                text_english,
                juz_number,
                hizb_number,
                quarter_segment,
                page_number,
                ruku_number,
                sajda_type,
                created_at
            FROM ayahs
            WHERE juz_number = $1 AND hizb_number = $2
            ORDER BY surah_number, ayah_number
            "#,
        )
        .bind(juz.get() as i16)
        .bind(hizb.get() as i16)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AyahRow::into_ayah).collect()
    }

    async fn surah_rollups(&self) -> QuranResult<Vec<SurahRollup>> {
        let rows = sqlx::query_as::<_, (i16, String, Option<String>, i64)>(
            r#"
            SELECT surah_number, surah_name_arabic, surah_name_english, COUNT(*)
            FROM ayahs
            GROUP BY surah_number, surah_name_arabic, surah_name_english
            ORDER BY surah_number
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(number, name_arabic, name_english, count)| SurahRollup {
                number: number as u16,
                name_arabic,
                name_english,
                ayah_count: count as u64,
            })
            .collect())
    }
}

fn hizb_number_from_row(raw: i16) -> QuranResult<HizbNumber> {
    u8::try_from(raw)
        .ok()
        .and_then(HizbNumber::new)
        .ok_or_else(|| QuranError::Internal(format!("hizb_number {raw} out of range in store")))
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct AyahRow {
    ayah_id: Uuid,
    surah_number: i16,
    surah_name_arabic: String,
    surah_name_english: Option<String>,
    ayah_number: i32,
    text_arabic: String,
    text_english: Option<String>,
    juz_number: i16,
    hizb_number: i16,
    quarter_segment: Option<String>,
    page_number: i16,
    ruku_number: Option<i16>,
    sajda_type: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl AyahRow {
    fn into_ayah(self) -> QuranResult<Ayah> {
        let juz_number = u8::try_from(self.juz_number)
            .ok()
            .and_then(JuzNumber::new)
            .ok_or_else(|| {
                QuranError::Internal(format!("juz_number {} out of range in store", self.juz_number))
            })?;
        let hizb_number = hizb_number_from_row(self.hizb_number)?;
        let sajda_type = SajdaType::parse(&self.sajda_type).ok_or_else(|| {
            QuranError::Internal(format!("unknown sajda_type '{}' in store", self.sajda_type))
        })?;
        let ruku_number = self
            .ruku_number
            .map(|r| {
                u16::try_from(r).map_err(|_| {
                    QuranError::Internal(format!("ruku_number {r} out of range in store"))
                })
            })
            .transpose()?;

        Ok(Ayah {
            id: self.ayah_id.into(),
            surah_number: self.surah_number as u16,
            surah_name_arabic: self.surah_name_arabic,
            surah_name_english: self.surah_name_english,
            ayah_number: self.ayah_number as u16,
            text_arabic: self.text_arabic,
            text_english: self.text_english,
            juz_number,
            hizb_number,
            quarter_segment: self.quarter_segment,
            page_number: self.page_number as u16,
            ruku_number,
            sajda_type,
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> AyahRow {
        AyahRow {
            ayah_id: Uuid::new_v4(),
            surah_number: 2,
            surah_name_arabic: "البقرة".to_string(),
            surah_name_english: Some("Al-Baqarah".to_string()),
            ayah_number: 255,
            text_arabic: "…".to_string(),
            text_english: None,
            juz_number: 3,
            hizb_number: 5,
            quarter_segment: None,
            page_number: 42,
            ruku_number: Some(34),
            sajda_type: "none".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_row_conversion() {
        let ayah = row().into_ayah().unwrap();
        assert_eq!(ayah.juz_number.get(), 3);
        assert_eq!(ayah.hizb_number.get(), 5);
        assert_eq!(ayah.ruku_number, Some(34));
    }

    #[test]
    fn test_row_rejects_negative_ruku() {
        let mut row = row();
        row.ruku_number = Some(-1);
        assert!(matches!(
            row.into_ayah(),
            Err(QuranError::Internal(msg)) if msg.contains("ruku_number")
        ));
    }

    #[test]
    fn test_row_rejects_out_of_range_hizb() {
        let mut row = row();
        row.hizb_number = 61;
        assert!(matches!(row.into_ayah(), Err(QuranError::Internal(_))));
    }

    #[test]
    fn test_row_rejects_unknown_sajda() {
        let mut row = row();
        row.sajda_type = "optional".to_string();
        assert!(matches!(row.into_ayah(), Err(QuranError::Internal(_))));
    }
}

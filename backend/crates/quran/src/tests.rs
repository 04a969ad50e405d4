//! Unit tests for the quran crate

use crate::domain::entities::{Ayah, SajdaType};
use crate::domain::value_objects::{HizbNumber, JuzNumber};
use chrono::Utc;
use kernel::id::Id;

/// Fixture ayah. `juz`/`hizb` must agree with the canonical mapping,
/// as they would after a valid import.
fn ayah(juz: u8, hizb: u8, surah: u16, number: u16, tag: Option<&str>) -> Ayah {
    Ayah {
        id: Id::new(),
        surah_number: surah,
        surah_name_arabic: format!("سورة {surah}"),
        surah_name_english: Some(format!("Surah {surah}")),
        ayah_number: number,
        text_arabic: "بِسْمِ اللَّهِ".to_string(),
        text_english: Some("In the name of God".to_string()),
        juz_number: JuzNumber::new(juz).unwrap(),
        hizb_number: HizbNumber::new(hizb).unwrap(),
        quarter_segment: tag.map(str::to_string),
        page_number: 1,
        ruku_number: Some(1),
        sajda_type: SajdaType::None,
        created_at: Utc::now(),
    }
}

/// Fixture store:
/// - juz 1 / hizb 1: 40 ayahs (7 in surah 1, 33 in surah 2), 4 legacy tags
/// - juz 1 / hizb 2: 7 ayahs in surah 2
/// - juz 2 / hizb 3: 3 ayahs in surah 2
fn fixture_ayahs() -> Vec<Ayah> {
    let mut ayahs = Vec::new();
    for n in 1..=7u16 {
        ayahs.push(ayah(1, 1, 1, n, Some("1.1")));
    }
    for n in 1..=33u16 {
        let tag = match n {
            1..=8 => "1.1",
            9..=16 => "1.2",
            17..=24 => "1.3",
            _ => "1.4",
        };
        ayahs.push(ayah(1, 1, 2, n, Some(tag)));
    }
    for n in 34..=40u16 {
        ayahs.push(ayah(1, 2, 2, n, Some("2.1")));
    }
    for n in 41..=43u16 {
        ayahs.push(ayah(2, 3, 2, n, None));
    }
    ayahs
}

mod partition_tests {
    use super::*;
    use crate::domain::partition::{
        QUARTERS_PER_HIZB, QuarterBoundaries, SizeBasedBoundaries, partition_hizb,
    };

    fn hizb_of(n: u16) -> Vec<Ayah> {
        (1..=n).map(|i| ayah(1, 1, 2, i, None)).collect()
    }

    #[test]
    fn test_seven_ayahs_split_two_two_two_one() {
        let ayahs = hizb_of(7);
        let quarters = partition_hizb(&ayahs, HizbNumber::new(1).unwrap(), &SizeBasedBoundaries);

        let sizes: Vec<usize> = quarters.iter().map(|q| q.ayahs.len()).collect();
        assert_eq!(sizes, vec![2, 2, 2, 1]);
    }

    #[test]
    fn test_three_ayahs_emit_three_quarters() {
        let ayahs = hizb_of(3);
        let quarters = partition_hizb(&ayahs, HizbNumber::new(1).unwrap(), &SizeBasedBoundaries);

        assert_eq!(quarters.len(), 3);
        let numbers: Vec<u8> = quarters.iter().map(|q| q.number.get()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_forty_ayahs_first_quarter_is_first_ten() {
        let ayahs = hizb_of(40);
        let quarters = partition_hizb(&ayahs, HizbNumber::new(1).unwrap(), &SizeBasedBoundaries);

        assert_eq!(quarters.len(), 4);
        assert_eq!(quarters[0].ayahs.len(), 10);
        assert_eq!(quarters[0].ayahs[0].ayah_number, 1);
        assert_eq!(quarters[0].ayahs[9].ayah_number, 10);
    }

    #[test]
    fn test_zero_ayahs_emit_nothing() {
        let quarters = partition_hizb(&[], HizbNumber::new(1).unwrap(), &SizeBasedBoundaries);
        assert!(quarters.is_empty());
    }

    #[test]
    fn test_emitted_quarter_count_formula() {
        // emitted = min(4, ceil(n / ceil(n/4))) for n > 0
        for n in 1..=100usize {
            let ayahs = hizb_of(n as u16);
            let quarters =
                partition_hizb(&ayahs, HizbNumber::new(1).unwrap(), &SizeBasedBoundaries);

            let per_quarter = n.div_ceil(QUARTERS_PER_HIZB);
            let expected = QUARTERS_PER_HIZB.min(n.div_ceil(per_quarter));
            assert_eq!(quarters.len(), expected, "n = {n}");
        }
    }

    #[test]
    fn test_quarter_numbers_are_consecutive_from_one() {
        for n in [1usize, 2, 3, 4, 5, 7, 11, 40] {
            let ayahs = hizb_of(n as u16);
            let quarters =
                partition_hizb(&ayahs, HizbNumber::new(1).unwrap(), &SizeBasedBoundaries);
            for (i, q) in quarters.iter().enumerate() {
                assert_eq!(q.number.get() as usize, i + 1);
            }
        }
    }

    #[test]
    fn test_boundary_source_receives_hizb() {
        struct Recorder(std::sync::Mutex<Vec<u8>>);
        impl QuarterBoundaries for Recorder {
            fn split(&self, hizb: HizbNumber, len: usize) -> Vec<std::ops::Range<usize>> {
                self.0.lock().unwrap().push(hizb.get());
                SizeBasedBoundaries.split(hizb, len)
            }
        }

        let source = Recorder(std::sync::Mutex::new(Vec::new()));
        let ayahs = hizb_of(8);
        partition_hizb(&ayahs, HizbNumber::new(17).unwrap(), &source);
        assert_eq!(*source.0.lock().unwrap(), vec![17]);
    }
}

mod params_tests {
    use crate::error::QuranError;
    use crate::presentation::dto::{StructureQuery, StructureRequest};

    fn query(juz: Option<&str>, hizb: Option<&str>, quarter: Option<&str>) -> StructureQuery {
        StructureQuery {
            juz: juz.map(str::to_string),
            hizb: hizb.map(str::to_string),
            quarter: quarter.map(str::to_string),
        }
    }

    #[test]
    fn test_no_params_is_overview() {
        let request = StructureRequest::from_query(&query(None, None, None)).unwrap();
        assert_eq!(request, StructureRequest::Overview);
    }

    #[test]
    fn test_juz_only_is_hizb_listing() {
        let request = StructureRequest::from_query(&query(Some("3"), None, None)).unwrap();
        assert!(matches!(request, StructureRequest::Hizbs { juz } if juz.get() == 3));
    }

    #[test]
    fn test_full_drill_down() {
        let request =
            StructureRequest::from_query(&query(Some("1"), Some("2"), Some("4"))).unwrap();
        assert!(matches!(
            request,
            StructureRequest::Ayahs { juz, hizb, quarter }
                if juz.get() == 1 && hizb.get() == 2 && quarter.get() == 4
        ));
    }

    #[test]
    fn test_quarter_without_hizb_rejected() {
        let err = StructureRequest::from_query(&query(Some("3"), None, Some("2"))).unwrap_err();
        assert!(matches!(err, QuranError::InvalidParameters(_)));
        assert!(err.to_string().contains("quarter"));
    }

    #[test]
    fn test_hizb_without_juz_rejected() {
        let err = StructureRequest::from_query(&query(None, Some("5"), None)).unwrap_err();
        assert!(matches!(err, QuranError::InvalidParameters(_)));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = StructureRequest::from_query(&query(Some("abc"), None, None)).unwrap_err();
        assert!(matches!(
            err,
            QuranError::NonNumericParameter { name: "juz" }
        ));

        let err =
            StructureRequest::from_query(&query(Some("1"), Some("1"), Some("1.5"))).unwrap_err();
        assert!(matches!(
            err,
            QuranError::NonNumericParameter { name: "quarter" }
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = StructureRequest::from_query(&query(Some("31"), None, None)).unwrap_err();
        assert!(matches!(err, QuranError::OutOfRange { name: "juz", .. }));

        let err = StructureRequest::from_query(&query(Some("1"), Some("0"), None)).unwrap_err();
        assert!(matches!(err, QuranError::OutOfRange { name: "hizb", .. }));

        let err = StructureRequest::from_query(&query(Some("-1"), None, None)).unwrap_err();
        assert!(matches!(err, QuranError::OutOfRange { name: "juz", .. }));
    }

    #[test]
    fn test_juz_hizb_mismatch_rejected() {
        // hizb 5 belongs to juz 3, not juz 1
        let err = StructureRequest::from_query(&query(Some("1"), Some("5"), None)).unwrap_err();
        assert!(matches!(
            err,
            QuranError::JuzHizbMismatch { juz: 1, hizb: 5 }
        ));
    }

    #[test]
    fn test_whitespace_tolerated() {
        let request = StructureRequest::from_query(&query(Some(" 2 "), None, None)).unwrap();
        assert!(matches!(request, StructureRequest::Hizbs { juz } if juz.get() == 2));
    }
}

mod usecase_tests {
    use super::*;
    use crate::application::config::QuranConfig;
    use crate::application::list_ayahs::ListQuarterAyahsUseCase;
    use crate::application::list_hizbs::ListHizbsUseCase;
    use crate::application::list_quarters::ListQuartersUseCase;
    use crate::application::list_surahs::ListSurahsUseCase;
    use crate::application::overview::StructureOverviewUseCase;
    use crate::domain::value_objects::QuarterNumber;
    use crate::error::QuranError;
    use crate::infra::memory::InMemoryAyahRepository;
    use std::sync::Arc;

    fn setup() -> (Arc<InMemoryAyahRepository>, Arc<QuranConfig>) {
        (
            Arc::new(InMemoryAyahRepository::new(fixture_ayahs())),
            Arc::new(QuranConfig::default()),
        )
    }

    fn juz(n: u8) -> JuzNumber {
        JuzNumber::new(n).unwrap()
    }

    fn hizb(n: u8) -> HizbNumber {
        HizbNumber::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_overview_counts() {
        let (repo, config) = setup();
        let output = StructureOverviewUseCase::new(repo, config)
            .execute()
            .await
            .unwrap();

        assert_eq!(output.total_ayahs, 50);
        assert_eq!(output.total_juz, 2);
        assert_eq!(output.total_hizb, 3);
        // 3 distinct (juz, hizb) pairs x 4
        assert_eq!(output.total_quarters, 12);
    }

    #[tokio::test]
    async fn test_list_hizbs_in_juz() {
        let (repo, _) = setup();
        let output = ListHizbsUseCase::new(repo).execute(juz(1)).await.unwrap();

        assert_eq!(output.juz, 1);
        assert_eq!(output.hizbs.len(), 2);

        let first = &output.hizbs[0];
        assert_eq!(first.hizb_number, 1);
        assert_eq!(first.ayah_count, 40);
        assert_eq!(first.quarter_count, 4);
        let surah_numbers: Vec<u16> = first.surahs.iter().map(|s| s.number).collect();
        assert_eq!(surah_numbers, vec![1, 2]);

        let second = &output.hizbs[1];
        assert_eq!(second.hizb_number, 2);
        assert_eq!(second.ayah_count, 7);
        assert_eq!(second.quarter_count, 1);
    }

    #[tokio::test]
    async fn test_list_hizbs_empty_juz() {
        let (repo, _) = setup();
        let err = ListHizbsUseCase::new(repo).execute(juz(3)).await.unwrap_err();
        assert!(matches!(err, QuranError::LocationEmpty));
    }

    #[tokio::test]
    async fn test_list_quarters_forty_ayah_hizb() {
        let (repo, config) = setup();
        let output = ListQuartersUseCase::new(repo, config)
            .execute(juz(1), hizb(1))
            .await
            .unwrap();

        assert_eq!(output.quarters.len(), 4);
        for q in &output.quarters {
            assert_eq!(q.ayah_count, 10);
        }

        // First quarter spans surah 1 into surah 2
        let q1 = &output.quarters[0];
        let surah_numbers: Vec<u16> = q1.surahs.iter().map(|s| s.number).collect();
        assert_eq!(surah_numbers, vec![1, 2]);
        assert_eq!((q1.range.0.surah, q1.range.0.ayah_number), (1, 1));
        assert_eq!((q1.range.1.surah, q1.range.1.ayah_number), (2, 3));
    }

    #[tokio::test]
    async fn test_list_quarters_three_ayah_hizb() {
        let (repo, config) = setup();
        let output = ListQuartersUseCase::new(repo, config)
            .execute(juz(2), hizb(3))
            .await
            .unwrap();

        assert_eq!(output.quarters.len(), 3);
        for q in &output.quarters {
            assert_eq!(q.ayah_count, 1);
        }
    }

    #[tokio::test]
    async fn test_list_quarters_empty_hizb() {
        let (repo, config) = setup();
        let err = ListQuartersUseCase::new(repo, config)
            .execute(juz(2), hizb(4))
            .await
            .unwrap_err();
        assert!(matches!(err, QuranError::LocationEmpty));
    }

    #[tokio::test]
    async fn test_list_ayahs_first_quarter() {
        let (repo, config) = setup();
        let output = ListQuarterAyahsUseCase::new(repo, config)
            .execute(juz(1), hizb(1), QuarterNumber::new(1).unwrap())
            .await
            .unwrap();

        assert_eq!(output.ayahs.len(), 10);
        assert_eq!(output.quarter, 1);
        // Quarter field is the requested number on every ayah
        assert!(output.ayahs.iter().all(|a| a.quarter == 1));
        assert_eq!(output.ayahs[0].surah, 1);
        assert_eq!(output.ayahs[0].ayah_number, 1);
        assert_eq!(output.ayahs[9].surah, 2);
        assert_eq!(output.ayahs[9].ayah_number, 3);
    }

    #[tokio::test]
    async fn test_list_ayahs_dropped_quarter() {
        // 3-ayah hizb emits quarters 1..=3; quarter 4 does not exist
        let (repo, config) = setup();
        let err = ListQuarterAyahsUseCase::new(repo, config)
            .execute(juz(2), hizb(3), QuarterNumber::new(4).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, QuranError::LocationEmpty));
    }

    #[tokio::test]
    async fn test_list_ayahs_sajda_flag() {
        let mut ayahs = fixture_ayahs();
        ayahs[0].sajda_type = SajdaType::Recommended;
        let repo = Arc::new(InMemoryAyahRepository::new(ayahs));
        let config = Arc::new(QuranConfig::default());

        let output = ListQuarterAyahsUseCase::new(repo, config)
            .execute(juz(1), hizb(1), QuarterNumber::new(1).unwrap())
            .await
            .unwrap();

        assert!(output.ayahs[0].sajda);
        assert!(!output.ayahs[1].sajda);
    }

    #[tokio::test]
    async fn test_list_surahs() {
        let (repo, _) = setup();
        let output = ListSurahsUseCase::new(repo).execute().await.unwrap();

        assert_eq!(output.surahs.len(), 2);
        assert_eq!(output.surahs[0].number, 1);
        assert_eq!(output.surahs[0].ayah_count, 7);
        assert_eq!(output.surahs[1].number, 2);
        assert_eq!(output.surahs[1].ayah_count, 43);
    }
}

mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_envelope_omits_absent_fields() {
        let envelope = Envelope::ok(StructureDto {
            total_ayahs: 6236,
            total_juz: 30,
            total_hizb: 60,
            total_quarters: 240,
        });

        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains(r#""totalAyahs":6236"#));
        assert!(json.contains(r#""totalQuarters":240"#));
        assert!(!json.contains("message"));
    }

    #[test]
    fn test_hizb_summary_camel_case() {
        let dto = HizbSummaryDto {
            hizb_number: 2,
            quarter_count: 4,
            ayah_count: 111,
            surahs: vec![SurahRefDto {
                number: 2,
                name: "البقرة".to_string(),
            }],
        };

        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains(r#""hizbNumber":2"#));
        assert!(json.contains(r#""quarterCount":4"#));
        assert!(json.contains(r#""ayahCount":111"#));
        assert!(json.contains(r#""name":"البقرة""#));
    }

    #[test]
    fn test_ayah_dto_shape() {
        let dto = AyahDto {
            id: uuid::Uuid::nil(),
            surah: 2,
            surah_name: "البقرة".to_string(),
            ayah_number: 255,
            text_arabic: "…".to_string(),
            text_english: None,
            juz: 3,
            hizb: 5,
            quarter: 1,
            page: 42,
            ruku: None,
            sajda: false,
        };

        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains(r#""surahName":"البقرة""#));
        assert!(json.contains(r#""ayahNumber":255"#));
        assert!(json.contains(r#""sajda":false"#));
        // Absent optionals are omitted, not null
        assert!(!json.contains("textEnglish"));
        assert!(!json.contains("ruku"));
    }

    #[test]
    fn test_query_deserialization() {
        let query: StructureQuery = serde_json::from_str(r#"{"juz":"3","quarter":"2"}"#).unwrap();
        assert_eq!(query.juz.as_deref(), Some("3"));
        assert!(query.hizb.is_none());
        assert_eq!(query.quarter.as_deref(), Some("2"));
    }
}

mod error_tests {
    use crate::error::QuranError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_status_codes() {
        let cases: Vec<(QuranError, StatusCode)> = vec![
            (
                QuranError::InvalidParameters("'quarter' given without 'hizb'".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                QuranError::NonNumericParameter { name: "juz" },
                StatusCode::BAD_REQUEST,
            ),
            (
                QuranError::OutOfRange {
                    name: "juz",
                    min: 1,
                    max: 30,
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                QuranError::JuzHizbMismatch { juz: 1, hizb: 5 },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (QuranError::LocationEmpty, StatusCode::NOT_FOUND),
            (
                QuranError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected);
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = QuranError::JuzHizbMismatch { juz: 1, hizb: 5 };
        let app_err = crate::AppError::from(err);
        assert!(app_err.message().contains("juz 1"));
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = QuranError::Internal("connection pool poisoned".into());
        let app_err = crate::AppError::from(err);
        assert_eq!(app_err.message(), "Internal server error");
    }
}

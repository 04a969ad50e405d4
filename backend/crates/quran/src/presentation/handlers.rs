//! HTTP Handlers

use crate::application::config::QuranConfig;
use crate::application::list_ayahs::ListQuarterAyahsUseCase;
use crate::application::list_hizbs::ListHizbsUseCase;
use crate::application::list_quarters::ListQuartersUseCase;
use crate::application::list_surahs::ListSurahsUseCase;
use crate::application::overview::StructureOverviewUseCase;
use crate::domain::repository::AyahRepository;
use crate::error::QuranResult;
use crate::presentation::dto::{
    Envelope, HizbListData, OverviewData, QuarterAyahsData, QuarterListData, StructureQuery,
    StructureRequest, SurahListData,
};
use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// Shared state for quran handlers
#[derive(Clone)]
pub struct QuranAppState<R>
where
    R: AyahRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<QuranConfig>,
}

/// GET /api/quran/structure
///
/// One endpoint, four mutually exclusive views selected by which of
/// `juz`/`hizb`/`quarter` are present.
pub async fn structure<R>(
    State(state): State<QuranAppState<R>>,
    Query(query): Query<StructureQuery>,
) -> QuranResult<Response>
where
    R: AyahRepository + Clone + Send + Sync + 'static,
{
    let request = StructureRequest::from_query(&query)?;

    let response = match request {
        StructureRequest::Overview => {
            let use_case = StructureOverviewUseCase::new(state.repo.clone(), state.config.clone());
            let output = use_case.execute().await?;
            Json(Envelope::ok(OverviewData::from(output))).into_response()
        }
        StructureRequest::Hizbs { juz } => {
            let use_case = ListHizbsUseCase::new(state.repo.clone());
            let output = use_case.execute(juz).await?;
            Json(Envelope::ok(HizbListData::from(output))).into_response()
        }
        StructureRequest::Quarters { juz, hizb } => {
            let use_case = ListQuartersUseCase::new(state.repo.clone(), state.config.clone());
            let output = use_case.execute(juz, hizb).await?;
            Json(Envelope::ok(QuarterListData::from(output))).into_response()
        }
        StructureRequest::Ayahs { juz, hizb, quarter } => {
            let use_case = ListQuarterAyahsUseCase::new(state.repo.clone(), state.config.clone());
            let output = use_case.execute(juz, hizb, quarter).await?;
            Json(Envelope::ok(QuarterAyahsData::from(output))).into_response()
        }
    };

    Ok(response)
}

/// GET /api/quran/surahs
pub async fn surahs<R>(
    State(state): State<QuranAppState<R>>,
) -> QuranResult<Json<Envelope<SurahListData>>>
where
    R: AyahRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListSurahsUseCase::new(state.repo.clone());
    let output = use_case.execute().await?;

    Ok(Json(Envelope::ok(SurahListData::from(output))))
}
